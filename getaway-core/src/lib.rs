//! Core domain types and ranking for the weekend getaway engine.
//!
//! A [`PlaceRecord`] describes one attraction: its city, state, zone, rating
//! and review volume. [`Ranker`] turns a slice of records and a source city
//! into an ordered list of [`RankedResult`] values, blending rating,
//! popularity and a categorical [`DistanceTier`].
//!
//! Constructors validate their input and return `Result` so malformed data
//! surfaces before it reaches the scoring code.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod place;
mod ranker;
mod weights;

pub use distance::DistanceTier;
pub use place::{CityKey, MAX_RATING, PlaceRecord, PlaceRecordError, RankedResult};
pub use ranker::{RankError, Ranker, ScoredPlace, rank};
pub use weights::{PopularityPolicy, ScoreWeights, ScoreWeightsError};

/// Distinct city names in `records`, sorted alphabetically.
///
/// Names are trimmed before duplicates are removed.
///
/// # Examples
///
/// ```
/// use getaway_core::{PlaceRecord, distinct_cities};
///
/// # fn main() -> Result<(), getaway_core::PlaceRecordError> {
/// let places = [
///     PlaceRecord::new("Qutub Minar", "Delhi", "Delhi", "Northern", 4.5, 1.2)?,
///     PlaceRecord::new("Lotus Temple", "Delhi", "Delhi", "Northern", 4.6, 0.9)?,
///     PlaceRecord::new("Taj Mahal", "Agra", "Uttar Pradesh", "Northern", 4.6, 2.1)?,
/// ];
/// assert_eq!(distinct_cities(&places), ["Agra", "Delhi"]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn distinct_cities(records: &[PlaceRecord]) -> Vec<String> {
    let mut cities: Vec<String> = records
        .iter()
        .map(|record| record.city.trim().to_owned())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}
