// ---------------------------------------------------------------------------
// Scoring & Ranking
// ---------------------------------------------------------------------------
//
// Cosine similarity between sparse term-weight maps, the patron's
// classification range, and the ranking pass that turns catalog vectors
// plus a profile vector into an ordered candidate list.
// ---------------------------------------------------------------------------

use std::collections::{HashMap, HashSet};

use crate::types::{ScoredVolume, TermWeights, VolumeVector};

/// Fixed multiplier for volumes classified outside the patron's range.
pub const CLASSIFICATION_PENALTY: f64 = 0.5;

// ---------------------------------------------------------------------------
// Cosine similarity
// ---------------------------------------------------------------------------

/// Cosine similarity between two sparse term-weight maps.
///
/// The dot product iterates `a`'s keys only; terms missing from `b`
/// contribute 0. Returns 0.0 when either vector has zero norm or the
/// result is not finite. Clamped to [-1, 1].
pub fn cosine_similarity(a: &TermWeights, b: &TermWeights) -> f64 {
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}

	let mut dot = 0.0;
	for (term, weight_a) in a {
		if let Some(weight_b) = b.get(term) {
			dot += weight_a * weight_b;
		}
	}

	let denom = norm(a) * norm(b);
	if denom == 0.0 {
		return 0.0;
	}

	let result = dot / denom;
	if !result.is_finite() {
		return 0.0;
	}
	result.clamp(-1.0, 1.0)
}

/// L2 norm of a sparse term-weight map.
pub fn norm(weights: &TermWeights) -> f64 {
	weights.values().map(|w| w * w).sum::<f64>().sqrt()
}

// ---------------------------------------------------------------------------
// Classification range
// ---------------------------------------------------------------------------

/// Numeric value of a classification code.
///
/// Tries the full decimal form first ("821.112"), then the leading
/// integer portion for multi-segment codes ("821.112.2").
pub fn classification_value(code: &str) -> Option<f64> {
	let trimmed = code.trim();
	if trimmed.is_empty() {
		return None;
	}
	if let Ok(value) = trimmed.parse::<f64>() {
		if value.is_finite() {
			return Some(value);
		}
	}
	let integer = match trimmed.find('.') {
		Some(idx) => &trimmed[..idx],
		None => trimmed,
	};
	integer.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Range spanned by the classification codes of a patron's interacted
/// volumes. `None` when no code parses.
pub fn classification_range(codes: &[Option<String>]) -> Option<(f64, f64)> {
	let mut range: Option<(f64, f64)> = None;
	for code in codes.iter().flatten() {
		if let Some(value) = classification_value(code) {
			range = Some(match range {
				Some((lo, hi)) => (lo.min(value), hi.max(value)),
				None => (value, value),
			});
		}
	}
	range
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Score every candidate vector against the patron profile and rank.
///
/// Volumes the patron already interacted with are excluded outright, as
/// are volumes whose similarity is not positive. A volume classified
/// outside the patron's range keeps `penalty` times its score. The sort
/// is stable, so equal scores stay in catalog encounter order.
pub fn score_and_rank(
	vectors: &[VolumeVector],
	profile: &TermWeights,
	interacted: &HashSet<String>,
	classifications: &HashMap<String, String>,
	patron_range: Option<(f64, f64)>,
	penalty: f64,
) -> Vec<ScoredVolume> {
	let mut ranked: Vec<ScoredVolume> = Vec::new();

	for vector in vectors {
		if interacted.contains(&vector.volume_id) {
			continue;
		}
		let mut score = cosine_similarity(&vector.weights, profile);
		if score <= 0.0 {
			continue;
		}
		if let Some((lo, hi)) = patron_range {
			let value = classifications
				.get(&vector.volume_id)
				.and_then(|code| classification_value(code));
			if let Some(value) = value {
				if value < lo || value > hi {
					score *= penalty;
				}
			}
		}
		ranked.push(ScoredVolume {
			volume_id: vector.volume_id.clone(),
			score,
		});
	}

	ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
	ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
