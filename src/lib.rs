// ---------------------------------------------------------------------------
// stacks-recommend — content-based volume recommendation engine
// ---------------------------------------------------------------------------
//
// Builds TF-IDF vectors over a catalog snapshot, folds a patron's
// borrowing history into a weighted profile vector, and ranks unseen
// volumes by cosine similarity with a classification-range adjustment,
// author diversification, and pagination.
//
// The crate is a library component: the catalog, activity, and
// popularity stores sit behind the traits in `sources`, and
// `RecommendEngine::recommend` is the only operation the surrounding
// application calls. The engine is stateless across requests; every
// invocation rebuilds its vocabulary from the current catalog snapshot.
// ---------------------------------------------------------------------------

pub mod diversify;
pub mod document;
pub mod engine;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod sources;
pub mod tokenize;
pub mod types;
pub mod vectorize;

pub use engine::{EngineOptions, RecommendEngine};
pub use error::RecommendError;
pub use profile::ActivityWeights;
pub use sources::{ActivitySource, CatalogSource, PopularitySource};
pub use types::{
	Page, PatronActivity, RecommendFilter, ScoredVolume, TermWeights, Volume, VolumeCategory,
	VolumeVector,
};
