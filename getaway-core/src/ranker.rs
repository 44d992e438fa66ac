//! Rank destinations for a weekend trip from a source city.
//!
//! Every record receives three signals:
//! - rating, scaled linearly from `0..=5` into `0.0..=1.0`;
//! - popularity, the review volume divided by the dataset-wide maximum;
//! - a [`DistanceTier`] relative to the first record found for the source city.
//!
//! The weighted sum is rescaled by the highest sum in the table (source rows
//! included), source rows are then dropped, and the remainder is sorted by
//! descending score. Equal scores keep their dataset order.

use std::num::NonZeroUsize;

use log::{debug, warn};
use thiserror::Error;

use crate::{
    CityKey, DistanceTier, PlaceRecord, PopularityPolicy, RankedResult, ScoreWeights,
    ScoreWeightsError, place::MAX_RATING,
};

/// Errors raised while ranking destinations.
#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// No record belongs to the requested source city.
    #[error("Source city '{city}' not found in dataset.")]
    SourceCityNotFound {
        /// Normalised (trimmed, lowercased) city name that was requested.
        city: String,
    },
    /// Every record has zero review volume and the policy forbids a fallback.
    #[error("popularity is undefined because no place has any reviews")]
    PopularityUndefined,
    /// The configured weights were rejected.
    #[error(transparent)]
    InvalidWeights(#[from] ScoreWeightsError),
}

/// Per-record score breakdown before the source city is excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPlace {
    /// Position of the record in the input slice.
    pub index: usize,
    /// Rating divided by five.
    pub rating_score: f64,
    /// Review volume divided by the dataset maximum.
    pub popularity_score: f64,
    /// Proximity bucket relative to the source city.
    pub distance: DistanceTier,
    /// Weighted sum of the three signals.
    pub raw_score: f64,
    /// Raw score divided by the highest raw score in the table.
    pub final_score: f64,
}

impl ScoredPlace {
    /// Report whether the row belongs to the source city.
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.distance == DistanceTier::Source
    }
}

/// Configurable ranking engine.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use getaway_core::{PlaceRecord, Ranker};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let places = vec![
///     PlaceRecord::new("India Gate", "Delhi", "Delhi", "North", 4.5, 2.0)?,
///     PlaceRecord::new("Taj Mahal", "Agra", "UP", "North", 4.8, 3.0)?,
///     PlaceRecord::new("Marina Beach", "Chennai", "TN", "South", 4.2, 1.0)?,
/// ];
/// let top = NonZeroUsize::new(2).ok_or("non-zero")?;
/// let ranked = Ranker::default().rank(&places, "delhi", top)?;
/// let cities: Vec<_> = ranked.iter().map(|r| r.city.as_str()).collect();
/// assert_eq!(cities, ["Agra", "Chennai"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ranker {
    weights: ScoreWeights,
    popularity_policy: PopularityPolicy,
}

impl Ranker {
    /// Build a ranker from validated weights.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidWeights`] when `weights` fail
    /// [`ScoreWeights::validate`].
    pub fn new(
        weights: ScoreWeights,
        popularity_policy: PopularityPolicy,
    ) -> Result<Self, RankError> {
        Ok(Self {
            weights: weights.validate()?,
            popularity_policy,
        })
    }

    /// Weights applied to each signal.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Fallback used when popularity cannot be scaled.
    #[must_use]
    pub const fn popularity_policy(&self) -> PopularityPolicy {
        self.popularity_policy
    }

    /// Score every record relative to `source_city`, in input order.
    ///
    /// Source rows are kept so callers can inspect the whole table.
    ///
    /// # Errors
    /// Returns [`RankError::SourceCityNotFound`] before any scoring when no
    /// record matches `source_city`, and [`RankError::PopularityUndefined`]
    /// when every review volume is zero under [`PopularityPolicy::Reject`].
    pub fn score_table(
        &self,
        records: &[PlaceRecord],
        source_city: &str,
    ) -> Result<Vec<ScoredPlace>, RankError> {
        let source = CityKey::new(source_city);
        let origin = records
            .iter()
            .find(|record| record.is_in(&source))
            .ok_or_else(|| RankError::SourceCityNotFound {
                city: source.to_string(),
            })?;

        let max_volume = max_of(records.iter().map(|record| record.review_volume_lakhs));
        if max_volume <= 0.0 {
            match self.popularity_policy {
                PopularityPolicy::Reject => return Err(RankError::PopularityUndefined),
                PopularityPolicy::ZeroFill => {
                    warn!("every place has zero reviews; popularity scored as 0");
                }
            }
        }

        let mut table: Vec<ScoredPlace> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let rating_score = scale(record.rating, MAX_RATING);
                let popularity_score = scale(record.review_volume_lakhs, max_volume);
                let distance = DistanceTier::classify(record, &source, origin);
                let raw_score =
                    self.weights
                        .combine(rating_score, popularity_score, distance.score());
                ScoredPlace {
                    index,
                    rating_score,
                    popularity_score,
                    distance,
                    raw_score,
                    final_score: 0.0,
                }
            })
            .collect();

        let max_raw = max_of(table.iter().map(|row| row.raw_score));
        for row in &mut table {
            row.final_score = scale(row.raw_score, max_raw);
        }
        Ok(table)
    }

    /// Return the best `top_n` destinations from `source_city`.
    ///
    /// Records in the source city never appear in the output. Fewer than
    /// `top_n` rows are returned when the dataset has fewer candidates.
    ///
    /// # Errors
    /// Propagates the errors of [`Ranker::score_table`].
    pub fn rank(
        &self,
        records: &[PlaceRecord],
        source_city: &str,
        top_n: NonZeroUsize,
    ) -> Result<Vec<RankedResult>, RankError> {
        let table = self.score_table(records, source_city)?;
        let mut candidates: Vec<(&PlaceRecord, f64)> = records
            .iter()
            .zip(&table)
            .filter(|(_, row)| !row.is_source())
            .map(|(record, row)| (record, row.final_score))
            .collect();
        candidates.sort_by(|(_, left), (_, right)| right.total_cmp(left));

        debug!(
            "ranked {} candidates from '{}', returning at most {top_n}",
            candidates.len(),
            source_city.trim()
        );
        Ok(candidates
            .into_iter()
            .take(top_n.get())
            .map(|(record, score)| RankedResult::from_record(record, score))
            .collect())
    }
}

/// Rank destinations with the default weights and popularity fallback.
///
/// # Errors
/// See [`Ranker::rank`].
pub fn rank(
    records: &[PlaceRecord],
    source_city: &str,
    top_n: NonZeroUsize,
) -> Result<Vec<RankedResult>, RankError> {
    Ranker::default().rank(records, source_city, top_n)
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0_f64, f64::max)
}

#[expect(
    clippy::float_arithmetic,
    reason = "scaling divides by the maximum observed value"
)]
fn scale(value: f64, max: f64) -> f64 {
    if max > 0.0 && max.is_finite() {
        value / max
    } else {
        0.0
    }
}
