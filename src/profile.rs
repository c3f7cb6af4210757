// ---------------------------------------------------------------------------
// Patron Profile Builder
// ---------------------------------------------------------------------------
//
// Folds the TF-IDF vectors of a patron's interacted volumes into one
// profile vector. Each record contributes with a weight derived from how
// the patron engaged with the volume; the accumulated sum is normalized
// by total weight into a weighted average.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{PatronActivity, TermWeights, VolumeVector};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Ratings at or below this baseline count as unrated.
pub const RATING_BASELINE: u8 = 2;

/// Product-tuned per-signal weights for one activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityWeights {
	pub borrow: f64,
	pub reserve: f64,
	pub favorite: f64,
	/// Multiplier applied to the rating signal once a loan is returned.
	#[serde(rename = "consumedPenalty")]
	pub consumed_penalty: f64,
}

impl Default for ActivityWeights {
	fn default() -> Self {
		Self {
			borrow: 1.5,
			reserve: 1.0,
			favorite: 2.0,
			consumed_penalty: 0.8,
		}
	}
}

// ---------------------------------------------------------------------------
// Weighting
// ---------------------------------------------------------------------------

/// Weight of one activity record.
///
/// A rating above the baseline dominates the consumption signals; an
/// unrated record earns the borrow and reserve weights independently.
/// Favoriting compounds with either branch. A record where nothing
/// applies weighs 0 and contributes nothing to the profile.
pub fn activity_weight(activity: &PatronActivity, weights: &ActivityWeights) -> f64 {
	let mut weight = 0.0;

	if activity.rating > RATING_BASELINE {
		let mut rating_weight = f64::from(activity.rating - RATING_BASELINE);
		if activity.borrow_count > 0 && !activity.borrowed {
			rating_weight *= weights.consumed_penalty;
		}
		weight += rating_weight;
	} else {
		if activity.borrowed && activity.borrow_count > 0 {
			weight += weights.borrow;
		}
		if activity.reserved && activity.reserve_count > 0 {
			weight += weights.reserve;
		}
	}

	if activity.favorite {
		weight += weights.favorite;
	}

	weight
}

// ---------------------------------------------------------------------------
// Profile accumulation
// ---------------------------------------------------------------------------

/// Aggregate the vectors of interacted volumes into one profile vector.
///
/// Records whose volume has no vector (removed from the catalog, or
/// outside the candidate set) are skipped silently. Returns the empty
/// map when no record carries positive weight.
pub fn build_patron_profile(
	vectors: &[VolumeVector],
	activity: &[PatronActivity],
	weights: &ActivityWeights,
) -> TermWeights {
	let by_id: HashMap<&str, &VolumeVector> = vectors
		.iter()
		.map(|vector| (vector.volume_id.as_str(), vector))
		.collect();

	let mut profile = TermWeights::new();
	let mut total_weight = 0.0;

	for record in activity {
		let vector = match by_id.get(record.volume_id.as_str()) {
			Some(vector) => vector,
			None => continue,
		};
		let weight = activity_weight(record, weights);
		if weight == 0.0 {
			continue;
		}
		for (term, term_weight) in &vector.weights {
			*profile.entry(term.clone()).or_insert(0.0) += term_weight * weight;
		}
		total_weight += weight;
	}

	if total_weight > 0.0 {
		for value in profile.values_mut() {
			*value /= total_weight;
		}
		profile
	} else {
		TermWeights::new()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn record(volume_id: &str) -> PatronActivity {
		PatronActivity {
			volume_id: volume_id.to_string(),
			borrowed: false,
			borrow_count: 0,
			reserved: false,
			reserve_count: 0,
			favorite: false,
			rating: 0,
		}
	}

	fn vector(volume_id: &str, entries: &[(&str, f64)]) -> VolumeVector {
		VolumeVector {
			volume_id: volume_id.to_string(),
			weights: entries
				.iter()
				.map(|(term, weight)| (term.to_string(), *weight))
				.collect(),
		}
	}

	// -- activity_weight ------------------------------------------------------

	#[test]
	fn ratings_above_baseline_map_to_offsets() {
		let weights = ActivityWeights::default();
		for (rating, expected) in [(3u8, 1.0), (4, 2.0), (5, 3.0)] {
			let mut r = record("a");
			r.rating = rating;
			assert_eq!(activity_weight(&r, &weights), expected);
		}
	}

	#[test]
	fn returned_loan_discounts_the_rating() {
		let weights = ActivityWeights::default();
		let mut r = record("a");
		r.rating = 3;
		r.borrow_count = 1;
		r.borrowed = false;
		assert!((activity_weight(&r, &weights) - 0.8).abs() < 1e-10);

		// Still on loan: no discount.
		r.borrowed = true;
		assert!((activity_weight(&r, &weights) - 1.0).abs() < 1e-10);
	}

	#[test]
	fn unrated_consumption_signals_are_additive() {
		let weights = ActivityWeights::default();
		let mut r = record("a");
		r.borrowed = true;
		r.borrow_count = 2;
		assert!((activity_weight(&r, &weights) - 1.5).abs() < 1e-10);

		r.reserved = true;
		r.reserve_count = 1;
		assert!((activity_weight(&r, &weights) - 2.5).abs() < 1e-10);
	}

	#[test]
	fn low_rating_counts_as_unrated() {
		let weights = ActivityWeights::default();
		let mut r = record("a");
		r.rating = 2;
		r.reserved = true;
		r.reserve_count = 1;
		assert!((activity_weight(&r, &weights) - 1.0).abs() < 1e-10);
	}

	#[test]
	fn favorite_compounds_with_either_branch() {
		let weights = ActivityWeights::default();
		let mut r = record("a");
		r.favorite = true;
		assert!((activity_weight(&r, &weights) - 2.0).abs() < 1e-10);

		r.rating = 5;
		assert!((activity_weight(&r, &weights) - 5.0).abs() < 1e-10);

		r.rating = 0;
		r.borrowed = true;
		r.borrow_count = 1;
		assert!((activity_weight(&r, &weights) - 3.5).abs() < 1e-10);
	}

	#[test]
	fn flags_without_counts_carry_no_weight() {
		let weights = ActivityWeights::default();
		let mut r = record("a");
		r.borrowed = true; // borrow_count stays 0
		r.reserved = true; // reserve_count stays 0
		assert_eq!(activity_weight(&r, &weights), 0.0);
	}

	// -- build_patron_profile -------------------------------------------------

	#[test]
	fn single_rated_volume_reproduces_its_vector() {
		let vectors = vec![vector("a", &[("dragon", 0.4), ("saga", 0.2)])];
		let mut r = record("a");
		r.rating = 5; // weight 3.0, normalized away
		let profile = build_patron_profile(&vectors, &[r], &ActivityWeights::default());
		assert!((profile["dragon"] - 0.4).abs() < 1e-10);
		assert!((profile["saga"] - 0.2).abs() < 1e-10);
	}

	#[test]
	fn profile_is_a_weighted_average() {
		let vectors = vec![
			vector("a", &[("dragon", 1.0)]),
			vector("b", &[("dragon", 0.0), ("garden", 1.0)]),
		];
		let mut rated = record("a");
		rated.rating = 5; // weight 3.0
		let mut borrowed = record("b");
		borrowed.borrowed = true;
		borrowed.borrow_count = 1; // weight 1.5
		let profile =
			build_patron_profile(&vectors, &[rated, borrowed], &ActivityWeights::default());
		// dragon: (1.0 * 3.0 + 0.0 * 1.5) / 4.5
		assert!((profile["dragon"] - 3.0 / 4.5).abs() < 1e-10);
		// garden: (1.0 * 1.5) / 4.5
		assert!((profile["garden"] - 1.5 / 4.5).abs() < 1e-10);
	}

	#[test]
	fn records_without_a_vector_are_skipped() {
		let vectors = vec![vector("a", &[("dragon", 1.0)])];
		let mut known = record("a");
		known.rating = 5;
		let mut unknown = record("withdrawn");
		unknown.rating = 5;
		let profile =
			build_patron_profile(&vectors, &[known, unknown], &ActivityWeights::default());
		// Only the known record contributes, so its weight normalizes away.
		assert!((profile["dragon"] - 1.0).abs() < 1e-10);
	}

	#[test]
	fn zero_total_weight_yields_empty_profile() {
		let vectors = vec![vector("a", &[("dragon", 1.0)])];
		let profile = build_patron_profile(&vectors, &[record("a")], &ActivityWeights::default());
		assert!(profile.is_empty());
	}

	#[test]
	fn empty_activity_yields_empty_profile() {
		let vectors = vec![vector("a", &[("dragon", 1.0)])];
		let profile = build_patron_profile(&vectors, &[], &ActivityWeights::default());
		assert!(profile.is_empty());
	}
}
