// ---------------------------------------------------------------------------
// Recommendation Engine
// ---------------------------------------------------------------------------
//
// The orchestration layer: collaborator I/O first, then the pure
// pipeline (vectors -> profile -> ranking -> diversification ->
// pagination). Stateless across requests; every invocation rebuilds the
// vocabulary from the current catalog snapshot, so concurrent requests
// share nothing mutable.
// ---------------------------------------------------------------------------

use std::collections::{HashMap, HashSet};

use crate::diversify::{cap_by_author, paginate, MAX_WORKS_PER_AUTHOR};
use crate::error::RecommendError;
use crate::profile::{build_patron_profile, ActivityWeights};
use crate::scoring::{classification_range, score_and_rank, CLASSIFICATION_PENALTY};
use crate::sources::{ActivitySource, CatalogSource, PopularitySource};
use crate::types::{Page, RecommendFilter, Volume};
use crate::vectorize::build_vectors;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Engine tuning. The defaults are the product-tuned values; callers
/// may override them per engine instance, never per request.
#[derive(Debug, Clone)]
pub struct EngineOptions {
	pub activity: ActivityWeights,
	/// Multiplier for volumes classified outside the patron's range.
	pub classification_penalty: f64,
	/// Cap applied when the filter asks to limit works per author.
	pub max_works_per_author: usize,
	/// Page size substituted for a malformed (zero) request value.
	pub default_page_size: usize,
}

impl Default for EngineOptions {
	fn default() -> Self {
		Self {
			activity: ActivityWeights::default(),
			classification_penalty: CLASSIFICATION_PENALTY,
			max_works_per_author: MAX_WORKS_PER_AUTHOR,
			default_page_size: 10,
		}
	}
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct RecommendEngine<C, A, P> {
	catalog: C,
	activity: A,
	popularity: P,
	options: EngineOptions,
}

impl<C, A, P> RecommendEngine<C, A, P>
where
	C: CatalogSource,
	A: ActivitySource,
	P: PopularitySource,
{
	pub fn new(catalog: C, activity: A, popularity: P) -> Self {
		Self::with_options(catalog, activity, popularity, EngineOptions::default())
	}

	pub fn with_options(catalog: C, activity: A, popularity: P, options: EngineOptions) -> Self {
		Self {
			catalog,
			activity,
			popularity,
			options,
		}
	}

	/// Recommend a page of volumes for one patron.
	///
	/// Falls back to the popularity provider when the patron is unknown,
	/// has no qualifying activity, or the candidate catalog is empty.
	/// Collaborator failures propagate; a personalized run that finds
	/// nothing returns an empty page.
	pub fn recommend(
		&self,
		patron_id: &str,
		filter: &RecommendFilter,
	) -> Result<Page<Volume>, RecommendError> {
		let filter = normalize_filter(filter, self.options.default_page_size);

		if !self.activity.patron_exists(patron_id)? {
			tracing::info!(patron_id, "unknown patron, serving popularity fallback");
			return self.popularity.popular_volumes(filter.page_index, filter.page_size);
		}

		let activity = self.activity.patron_activity(patron_id)?;
		if activity.is_empty() {
			tracing::info!(patron_id, "no activity on record, serving popularity fallback");
			return self.popularity.popular_volumes(filter.page_index, filter.page_size);
		}

		let volumes = self.catalog.candidate_volumes()?;
		if volumes.is_empty() {
			tracing::info!("empty candidate catalog, serving popularity fallback");
			return self.popularity.popular_volumes(filter.page_index, filter.page_size);
		}

		// One author map feeds both the document builder and the
		// per-author cap.
		let mut authors: HashMap<String, String> = HashMap::new();
		for volume in &volumes {
			if let Some(author) = self.catalog.primary_author(&volume.id)? {
				if !author.is_empty() {
					authors.insert(volume.id.clone(), author);
				}
			}
		}

		let vectors = build_vectors(&volumes, &authors, &filter);
		let profile = build_patron_profile(&vectors, &activity, &self.options.activity);
		if profile.is_empty() {
			tracing::info!(patron_id, "no qualifying activity, serving popularity fallback");
			return self.popularity.popular_volumes(filter.page_index, filter.page_size);
		}

		let interacted_ids: Vec<String> = activity
			.iter()
			.map(|record| record.volume_id.clone())
			.collect();
		let interacted: HashSet<String> = interacted_ids.iter().cloned().collect();

		let codes = self.catalog.classification_codes(&interacted_ids)?;
		let patron_range = classification_range(&codes);

		let classifications: HashMap<String, String> = volumes
			.iter()
			.filter_map(|volume| {
				volume
					.classification
					.clone()
					.map(|code| (volume.id.clone(), code))
			})
			.collect();

		let ranked = score_and_rank(
			&vectors,
			&profile,
			&interacted,
			&classifications,
			patron_range,
			self.options.classification_penalty,
		);

		tracing::debug!(
			corpus = volumes.len(),
			profile_terms = profile.len(),
			ranked = ranked.len(),
			"personalized ranking complete"
		);

		let ranked = if filter.limit_works_per_author {
			cap_by_author(ranked, &authors, self.options.max_works_per_author)
		} else {
			ranked
		};

		let by_id: HashMap<&str, &Volume> = volumes
			.iter()
			.map(|volume| (volume.id.as_str(), volume))
			.collect();
		let page = paginate(ranked, filter.page_index, filter.page_size);
		let items: Vec<Volume> = page
			.items
			.iter()
			.filter_map(|scored| by_id.get(scored.volume_id.as_str()).map(|v| (*v).clone()))
			.collect();

		Ok(Page {
			items,
			page_index: page.page_index,
			page_size: page.page_size,
			total_items: page.total_items,
			total_pages: page.total_pages,
		})
	}
}

/// Substitute sane defaults for malformed paging values.
fn normalize_filter(filter: &RecommendFilter, default_page_size: usize) -> RecommendFilter {
	let mut filter = filter.clone();
	if filter.page_size == 0 {
		filter.page_size = default_page_size;
	}
	if filter.page_index == 0 {
		filter.page_index = 1;
	}
	filter
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
