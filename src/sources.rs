// ---------------------------------------------------------------------------
// Collaborator Contracts
// ---------------------------------------------------------------------------
//
// The engine reads everything through these three traits: the catalog
// store (candidate volumes, authors, classification codes), the
// activity store (per-patron history), and the popularity provider that
// serves patrons the engine cannot personalize for. Implementations own
// the persistence technology; the engine treats every call as fallible
// I/O and propagates failures instead of scoring on partial data.
// ---------------------------------------------------------------------------

use crate::error::RecommendError;
use crate::types::{Page, PatronActivity, Volume};

/// Read access to the catalog. `candidate_volumes` must already exclude
/// withdrawn or deleted records.
pub trait CatalogSource {
	fn candidate_volumes(&self) -> Result<Vec<Volume>, RecommendError>;

	/// Primary author of a volume, when one is on record.
	fn primary_author(&self, volume_id: &str) -> Result<Option<String>, RecommendError>;

	/// Classification codes for a batch of volumes, in input order.
	fn classification_codes(
		&self,
		volume_ids: &[String],
	) -> Result<Vec<Option<String>>, RecommendError>;

	/// Classification code of a single volume.
	fn classification_code(&self, volume_id: &str) -> Result<Option<String>, RecommendError> {
		let codes = self.classification_codes(&[volume_id.to_string()])?;
		Ok(codes.into_iter().next().flatten())
	}
}

/// Read access to patron activity.
pub trait ActivitySource {
	fn patron_activity(&self, patron_id: &str) -> Result<Vec<PatronActivity>, RecommendError>;

	fn patron_exists(&self, patron_id: &str) -> Result<bool, RecommendError>;
}

/// Popularity ranking used when personalization is impossible.
pub trait PopularitySource {
	fn popular_volumes(
		&self,
		page_index: usize,
		page_size: usize,
	) -> Result<Page<Volume>, RecommendError>;
}
