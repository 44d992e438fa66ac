//! Signal weights and the fallback applied when popularity cannot be scaled.

use thiserror::Error;

/// Relative weighting of the three ranking signals.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the rating score.
    pub rating: f64,
    /// Multiplier applied to the popularity score.
    pub popularity: f64,
    /// Multiplier applied to the distance-proxy score.
    pub distance: f64,
}

/// Errors raised by [`ScoreWeights::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreWeightsError {
    /// A weight was negative or not finite.
    #[error("score weights must be finite and non-negative")]
    InvalidWeight,
    /// Every weight was zero.
    #[error("score weights must not all be zero")]
    ZeroTotal,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError::InvalidWeight`] when a value is negative or
    /// not finite, and [`ScoreWeightsError::ZeroTotal`] when all are zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        let values = [self.rating, self.popularity, self.distance];
        if values.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ScoreWeightsError::InvalidWeight);
        }
        if values.iter().all(|w| *w == 0.0) {
            return Err(ScoreWeightsError::ZeroTotal);
        }
        Ok(self)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    pub(crate) fn combine(self, rating: f64, popularity: f64, distance: f64) -> f64 {
        self.rating * rating + self.popularity * popularity + self.distance * distance
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating: 0.30,
            popularity: 0.30,
            distance: 0.40,
        }
    }
}

/// Behaviour when every record reports zero review volume.
///
/// Popularity is scaled by the dataset-wide maximum, which is undefined when
/// that maximum is zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PopularityPolicy {
    /// Score popularity as `0.0` for every record.
    #[default]
    ZeroFill,
    /// Fail the request with [`RankError::PopularityUndefined`](crate::RankError::PopularityUndefined).
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_are_valid() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[rstest]
    #[case(-0.1, 0.3, 0.4)]
    #[case(0.3, f64::NAN, 0.4)]
    #[case(0.3, 0.3, f64::INFINITY)]
    fn rejects_invalid_weights(#[case] rating: f64, #[case] popularity: f64, #[case] distance: f64) {
        let weights = ScoreWeights {
            rating,
            popularity,
            distance,
        };
        assert_eq!(weights.validate(), Err(ScoreWeightsError::InvalidWeight));
    }

    #[rstest]
    fn rejects_all_zero_weights() {
        let weights = ScoreWeights {
            rating: 0.0,
            popularity: 0.0,
            distance: 0.0,
        };
        assert_eq!(weights.validate(), Err(ScoreWeightsError::ZeroTotal));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating-point sums"
    )]
    fn combine_applies_each_weight() {
        let combined = ScoreWeights::default().combine(1.0, 0.5, 1.5);
        assert!((combined - (0.30 + 0.15 + 0.60)).abs() < 1e-12);
    }
}
