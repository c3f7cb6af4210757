// ---------------------------------------------------------------------------
// Diversifier & Paginator
// ---------------------------------------------------------------------------
//
// Caps how many volumes a single primary author contributes to the
// ranked list and slices the final page. The cap keeps the overall rank
// order; it never regroups by author.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::types::{Page, ScoredVolume};

/// Default cap on works per primary author.
pub const MAX_WORKS_PER_AUTHOR: usize = 5;

/// Keep at most `max_per_author` volumes per primary author, preserving
/// rank order. Volumes without a resolvable author share one bucket.
pub fn cap_by_author(
	ranked: Vec<ScoredVolume>,
	authors: &HashMap<String, String>,
	max_per_author: usize,
) -> Vec<ScoredVolume> {
	let mut seen: HashMap<String, usize> = HashMap::new();
	let mut kept = Vec::with_capacity(ranked.len());

	for scored in ranked {
		let author = authors.get(&scored.volume_id).cloned().unwrap_or_default();
		let count = seen.entry(author).or_insert(0);
		if *count < max_per_author {
			*count += 1;
			kept.push(scored);
		}
	}

	kept
}

/// Slice one page out of `items`.
///
/// `total_pages` is the ceiling of total over page size; a page index
/// outside `[1, total_pages]` behaves as page 1. A page size of 0 is
/// treated as 1 so the division stays defined.
pub fn paginate<T>(items: Vec<T>, page_index: usize, page_size: usize) -> Page<T> {
	let page_size = page_size.max(1);
	let total_items = items.len();
	let total_pages = total_items.div_ceil(page_size);

	let page_index = if page_index < 1 || page_index > total_pages {
		1
	} else {
		page_index
	};

	let start = (page_index - 1) * page_size;
	let page_items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

	Page {
		items: page_items,
		page_index,
		page_size,
		total_items,
		total_pages,
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn scored(volume_id: &str, score: f64) -> ScoredVolume {
		ScoredVolume {
			volume_id: volume_id.to_string(),
			score,
		}
	}

	fn authors(entries: &[(&str, &str)]) -> HashMap<String, String> {
		entries
			.iter()
			.map(|(id, author)| (id.to_string(), author.to_string()))
			.collect()
	}

	fn ids<T: AsRef<[ScoredVolume]>>(list: T) -> Vec<String> {
		list.as_ref().iter().map(|s| s.volume_id.clone()).collect()
	}

	// -- cap_by_author --------------------------------------------------------

	#[test]
	fn caps_a_prolific_author_at_the_limit() {
		let ranked: Vec<ScoredVolume> = (0..7)
			.map(|i| scored(&format!("r{i}"), 1.0 - i as f64 * 0.1))
			.collect();
		let authors = authors(&[
			("r0", "Rowling"),
			("r1", "Rowling"),
			("r2", "Rowling"),
			("r3", "Rowling"),
			("r4", "Rowling"),
			("r5", "Rowling"),
			("r6", "Rowling"),
		]);
		let kept = cap_by_author(ranked, &authors, MAX_WORKS_PER_AUTHOR);
		assert_eq!(ids(kept), vec!["r0", "r1", "r2", "r3", "r4"]);
	}

	#[test]
	fn keeps_overall_rank_order_across_authors() {
		let ranked = vec![
			scored("a1", 0.9),
			scored("b1", 0.8),
			scored("a2", 0.7),
			scored("b2", 0.6),
		];
		let authors = authors(&[("a1", "Adams"), ("a2", "Adams"), ("b1", "Brown"), ("b2", "Brown")]);
		let kept = cap_by_author(ranked, &authors, 1);
		assert_eq!(ids(kept), vec!["a1", "b1"]);
	}

	#[test]
	fn authorless_volumes_share_one_bucket() {
		let ranked = vec![scored("x", 0.9), scored("y", 0.8), scored("z", 0.7)];
		let kept = cap_by_author(ranked, &HashMap::new(), 2);
		assert_eq!(ids(kept), vec!["x", "y"]);
	}

	#[test]
	fn cap_is_a_no_op_below_the_limit() {
		let ranked = vec![scored("a", 0.9), scored("b", 0.8)];
		let authors = authors(&[("a", "Adams"), ("b", "Brown")]);
		let kept = cap_by_author(ranked.clone(), &authors, MAX_WORKS_PER_AUTHOR);
		assert_eq!(ids(kept), ids(ranked));
	}

	// -- paginate -------------------------------------------------------------

	#[test]
	fn slices_full_and_partial_pages() {
		let items: Vec<usize> = (0..7).collect();
		let page = paginate(items.clone(), 1, 3);
		assert_eq!(page.items, vec![0, 1, 2]);
		assert_eq!(page.total_items, 7);
		assert_eq!(page.total_pages, 3);

		let page = paginate(items.clone(), 3, 3);
		assert_eq!(page.items, vec![6]);

		let page = paginate(items, 2, 3);
		assert_eq!(page.items, vec![3, 4, 5]);
	}

	#[test]
	fn out_of_range_page_index_behaves_as_page_one() {
		let items: Vec<usize> = (0..7).collect();
		let page = paginate(items.clone(), 99, 3);
		assert_eq!(page.page_index, 1);
		assert_eq!(page.items, vec![0, 1, 2]);

		let page = paginate(items, 0, 3);
		assert_eq!(page.page_index, 1);
		assert_eq!(page.items, vec![0, 1, 2]);
	}

	#[test]
	fn empty_input_yields_an_empty_first_page() {
		let page = paginate(Vec::<usize>::new(), 4, 10);
		assert!(page.items.is_empty());
		assert_eq!(page.page_index, 1);
		assert_eq!(page.total_items, 0);
		assert_eq!(page.total_pages, 0);
	}

	#[test]
	fn zero_page_size_is_clamped() {
		let page = paginate(vec![1, 2, 3], 1, 0);
		assert_eq!(page.page_size, 1);
		assert_eq!(page.items, vec![1]);
		assert_eq!(page.total_pages, 3);
	}
}
