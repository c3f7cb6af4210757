// ---------------------------------------------------------------------------
// TF-IDF Vectorizer
// ---------------------------------------------------------------------------
//
// Builds one sparse TF-IDF vector per catalog volume from its
// recommendation document. Term frequency is plain relative frequency;
// inverse document frequency is ln(total / (df + 1)), which goes
// negative for near-universal terms instead of clamping at zero.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::document::build_text;
use crate::tokenize::tokenize;
use crate::types::{RecommendFilter, TermWeights, Volume, VolumeVector};

/// Build TF-IDF vectors for the whole candidate catalog.
///
/// `authors` maps volume id to the resolved primary author name; volumes
/// missing from the map are treated as authorless. Volumes whose
/// document produces no tokens still get a vector, with an empty weight
/// map, and do not grow the vocabulary.
pub fn build_vectors(
	volumes: &[Volume],
	authors: &HashMap<String, String>,
	filter: &RecommendFilter,
) -> Vec<VolumeVector> {
	if volumes.is_empty() {
		return Vec::new();
	}

	// Relative term frequency per volume.
	let mut frequencies: Vec<TermWeights> = Vec::with_capacity(volumes.len());
	for volume in volumes {
		let author = authors.get(&volume.id).map(String::as_str).unwrap_or("");
		let text = build_text(volume, author, filter);
		frequencies.push(term_frequencies(&tokenize(&text)));
	}

	// Document frequency over the whole corpus, after all per-volume
	// frequencies are known.
	let mut document_frequency: HashMap<String, usize> = HashMap::new();
	for terms in &frequencies {
		for term in terms.keys() {
			*document_frequency.entry(term.clone()).or_insert(0) += 1;
		}
	}

	let total = volumes.len() as f64;
	volumes
		.iter()
		.zip(frequencies)
		.map(|(volume, frequency)| {
			let weights = frequency
				.into_iter()
				.map(|(term, tf)| {
					let df = document_frequency.get(&term).copied().unwrap_or(0) as f64;
					let idf = (total / (df + 1.0)).ln();
					(term, tf * idf)
				})
				.collect();
			VolumeVector {
				volume_id: volume.id.clone(),
				weights,
			}
		})
		.collect()
}

/// Relative frequency of each term in one token list.
fn term_frequencies(tokens: &[String]) -> TermWeights {
	if tokens.is_empty() {
		return TermWeights::new();
	}
	let total = tokens.len() as f64;
	let mut counts: HashMap<&String, usize> = HashMap::new();
	for token in tokens {
		*counts.entry(token).or_insert(0) += 1;
	}
	counts
		.into_iter()
		.map(|(term, count)| (term.clone(), count as f64 / total))
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
