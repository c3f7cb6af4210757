use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sparse term-weight map. Terms absent from the map carry weight 0.
pub type TermWeights = HashMap<String, f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
	pub id: String,
	pub title: String,
	pub category: VolumeCategory,
	/// Hierarchical decimal classification code (MDT/UDC style).
	pub classification: Option<String>,
	pub cutter: Option<String>,
	pub genres: Option<String>,
	#[serde(rename = "topicalTerms")]
	pub topical_terms: Option<String>,
}

/// Catalog record categories. `Other` is the explicit arm for anything
/// the engine does not know, so new categories fail closed into the
/// default text rule instead of silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VolumeCategory {
	Book,
	BookSeries,
	ReferenceBook,
	Newspaper,
	Magazine,
	DigitalItem,
	Other,
}

/// One patron's engagement with one volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatronActivity {
	#[serde(rename = "volumeId")]
	pub volume_id: String,
	pub borrowed: bool,
	#[serde(rename = "borrowCount")]
	pub borrow_count: u32,
	pub reserved: bool,
	#[serde(rename = "reserveCount")]
	pub reserve_count: u32,
	pub favorite: bool,
	/// 0-5 scale where 0 means unrated.
	pub rating: u8,
}

/// Request-scoped recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendFilter {
	#[serde(rename = "includeTitle")]
	pub include_title: bool,
	#[serde(rename = "includeAuthor")]
	pub include_author: bool,
	#[serde(rename = "includeGenres")]
	pub include_genres: bool,
	#[serde(rename = "includeTopicalTerms")]
	pub include_topical_terms: bool,
	#[serde(rename = "limitWorksPerAuthor")]
	pub limit_works_per_author: bool,
	/// 1-based page index.
	#[serde(rename = "pageIndex")]
	pub page_index: usize,
	#[serde(rename = "pageSize")]
	pub page_size: usize,
}

impl Default for RecommendFilter {
	fn default() -> Self {
		Self {
			include_title: true,
			include_author: true,
			include_genres: true,
			include_topical_terms: true,
			limit_works_per_author: true,
			page_index: 1,
			page_size: 10,
		}
	}
}

/// Sparse TF-IDF vector of one volume, rebuilt per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeVector {
	#[serde(rename = "volumeId")]
	pub volume_id: String,
	pub weights: TermWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredVolume {
	#[serde(rename = "volumeId")]
	pub volume_id: String,
	pub score: f64,
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
	pub items: Vec<T>,
	#[serde(rename = "pageIndex")]
	pub page_index: usize,
	#[serde(rename = "pageSize")]
	pub page_size: usize,
	#[serde(rename = "totalItems")]
	pub total_items: usize,
	#[serde(rename = "totalPages")]
	pub total_pages: usize,
}

impl<T> Page<T> {
	/// An empty page that still reports the requested paging parameters.
	pub fn empty(page_index: usize, page_size: usize) -> Self {
		Self {
			items: Vec::new(),
			page_index,
			page_size,
			total_items: 0,
			total_pages: 0,
		}
	}
}
