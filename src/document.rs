// ---------------------------------------------------------------------------
// Recommendation Document Builder
// ---------------------------------------------------------------------------
//
// Assembles the free-text "recommendation document" for one volume from
// its metadata fields. Which fields participate is governed by the
// request filter and the volume category; periodicals only ever
// contribute their title. The result feeds the vectorizer.
// ---------------------------------------------------------------------------

use crate::types::{RecommendFilter, Volume, VolumeCategory};

/// Title with ASCII digits removed, so series numbering does not become
/// vocabulary.
pub fn clean_title(title: &str) -> String {
	title.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Leading integer portion of a classification code: the text before
/// the first decimal point ("821.112" -> "821").
pub fn classification_integer(code: &str) -> &str {
	match code.find('.') {
		Some(idx) => &code[..idx],
		None => code,
	}
}

/// Build the recommendation text for `volume`.
///
/// `author` is the collaborator-resolved primary author name; pass an
/// empty string when the volume has none. When the filter toggles leave
/// the document empty, the author name (or failing that the cleaned
/// title) stands in, so every titled volume contributes to the corpus.
pub fn build_text(volume: &Volume, author: &str, filter: &RecommendFilter) -> String {
	let cleaned = clean_title(&volume.title);
	let title = cleaned.trim();

	let text = match volume.category {
		VolumeCategory::Book | VolumeCategory::BookSeries | VolumeCategory::ReferenceBook => {
			book_text(volume, title, author, filter)
		}
		VolumeCategory::Newspaper | VolumeCategory::Magazine => {
			if filter.include_title {
				title.to_string()
			} else {
				String::new()
			}
		}
		VolumeCategory::DigitalItem | VolumeCategory::Other => String::new(),
	};

	let text = text.trim().to_string();
	if !text.is_empty() {
		return text;
	}
	if !author.is_empty() {
		author.to_string()
	} else {
		title.to_string()
	}
}

/// Document blocks for book-like volumes, in fixed order: cleaned title,
/// cutter + author, classification integer + genres, topical terms.
fn book_text(volume: &Volume, title: &str, author: &str, filter: &RecommendFilter) -> String {
	let mut blocks: Vec<String> = Vec::new();

	if filter.include_title && !title.is_empty() {
		blocks.push(title.to_string());
	}
	if filter.include_author {
		let cutter = volume.cutter.as_deref().unwrap_or("");
		let block = join_fragments(&[cutter, author]);
		if !block.is_empty() {
			blocks.push(block);
		}
	}
	if filter.include_genres {
		let class_int = volume
			.classification
			.as_deref()
			.map(classification_integer)
			.unwrap_or("");
		let genres = volume.genres.as_deref().unwrap_or("");
		let block = join_fragments(&[class_int, genres]);
		if !block.is_empty() {
			blocks.push(block);
		}
	}
	if filter.include_topical_terms {
		if let Some(terms) = volume.topical_terms.as_deref() {
			if !terms.is_empty() {
				blocks.push(terms.to_string());
			}
		}
	}

	blocks.join(" ")
}

fn join_fragments(fragments: &[&str]) -> String {
	fragments
		.iter()
		.copied()
		.filter(|f| !f.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
