use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
	#[error("Catalog lookup failed: {0}")]
	Catalog(String),
	#[error("Activity lookup failed: {0}")]
	Activity(String),
	#[error("Popularity lookup failed: {0}")]
	Popularity(String),
}
