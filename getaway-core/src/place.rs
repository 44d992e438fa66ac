//! Place records loaded from the dataset and the rows produced by ranking.

use std::fmt;

use thiserror::Error;

/// Highest rating a place can carry.
pub const MAX_RATING: f64 = 5.0;

/// A single destination row from the places dataset.
///
/// Records are immutable once loaded. Several records may share a city; each
/// is ranked as an independent candidate.
///
/// # Examples
///
/// ```
/// use getaway_core::PlaceRecord;
///
/// # fn main() -> Result<(), getaway_core::PlaceRecordError> {
/// let fort = PlaceRecord::new("Red Fort", "Delhi", "Delhi", "Northern", 4.5, 0.85)?;
/// assert_eq!(fort.city, "Delhi");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PlaceRecordFields"))]
pub struct PlaceRecord {
    /// Display name of the attraction.
    pub name: String,
    /// City the attraction belongs to.
    pub city: String,
    /// State or union territory of the city.
    pub state: String,
    /// Coarse multi-state region label.
    pub zone: String,
    /// Average review rating in `0.0..=5.0`.
    pub rating: f64,
    /// Review count in units of 100,000.
    pub review_volume_lakhs: f64,
}

/// Unvalidated field set that deserialisation passes through
/// [`PlaceRecord::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlaceRecordFields {
    name: String,
    city: String,
    state: String,
    zone: String,
    rating: f64,
    review_volume_lakhs: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PlaceRecordFields> for PlaceRecord {
    type Error = PlaceRecordError;

    fn try_from(fields: PlaceRecordFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.name,
            fields.city,
            fields.state,
            fields.zone,
            fields.rating,
            fields.review_volume_lakhs,
        )
    }
}

/// Errors returned by [`PlaceRecord::new`].
#[derive(Debug, Error, PartialEq)]
pub enum PlaceRecordError {
    /// A required text field was empty after trimming.
    #[error("place {field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The rating was outside `0.0..=5.0` or not finite.
    #[error("rating {rating} must be between 0 and 5")]
    RatingOutOfRange {
        /// Rejected rating.
        rating: f64,
    },
    /// The review volume was negative or not finite.
    #[error("review volume {volume} must be a non-negative number")]
    InvalidReviewVolume {
        /// Rejected review volume in lakhs.
        volume: f64,
    },
}

impl PlaceRecord {
    /// Validates and constructs a [`PlaceRecord`].
    ///
    /// # Errors
    /// Returns [`PlaceRecordError`] when `city`, `state` or `zone` are blank,
    /// when `rating` falls outside `0.0..=5.0`, or when `review_volume_lakhs`
    /// is negative. Non-finite numbers are rejected as well.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zone: impl Into<String>,
        rating: f64,
        review_volume_lakhs: f64,
    ) -> Result<Self, PlaceRecordError> {
        let record = Self {
            name: name.into(),
            city: city.into(),
            state: state.into(),
            zone: zone.into(),
            rating,
            review_volume_lakhs,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the record invariants without consuming it.
    ///
    /// # Errors
    /// See [`PlaceRecord::new`].
    pub fn validate(&self) -> Result<(), PlaceRecordError> {
        for (field, value) in [
            ("city", &self.city),
            ("state", &self.state),
            ("zone", &self.zone),
        ] {
            if value.trim().is_empty() {
                return Err(PlaceRecordError::EmptyField { field });
            }
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(PlaceRecordError::RatingOutOfRange {
                rating: self.rating,
            });
        }
        if !self.review_volume_lakhs.is_finite() || self.review_volume_lakhs < 0.0 {
            return Err(PlaceRecordError::InvalidReviewVolume {
                volume: self.review_volume_lakhs,
            });
        }
        Ok(())
    }

    /// Report whether the record belongs to `city`.
    #[must_use]
    pub fn is_in(&self, city: &CityKey) -> bool {
        city.matches(&self.city)
    }
}

/// One recommendation returned by the ranker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// Display name of the attraction.
    pub name: String,
    /// City of the attraction.
    pub city: String,
    /// State of the attraction.
    pub state: String,
    /// Composite score scaled into `0.0..=1.0`.
    pub final_score: f64,
}

impl RankedResult {
    pub(crate) fn from_record(record: &PlaceRecord, final_score: f64) -> Self {
        Self {
            name: record.name.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            final_score,
        }
    }
}

/// Normalised city name used for every city comparison.
///
/// Surrounding whitespace is trimmed and the remainder lowercased, so
/// `" Delhi "` and `"delhi"` produce the same key.
///
/// # Examples
///
/// ```
/// use getaway_core::CityKey;
///
/// let key = CityKey::new("  New Delhi ");
/// assert_eq!(key.as_str(), "new delhi");
/// assert!(key.matches("NEW DELHI"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey(String);

impl CityKey {
    /// Normalise a raw city name.
    #[must_use]
    pub fn new(city: &str) -> Self {
        Self(city.trim().to_lowercase())
    }

    /// Borrow the normalised name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare a raw city name against this key.
    #[must_use]
    pub fn matches(&self, city: &str) -> bool {
        city.trim().to_lowercase() == self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(rating: f64, volume: f64) -> Result<PlaceRecord, PlaceRecordError> {
        PlaceRecord::new("Taj Mahal", "Agra", "Uttar Pradesh", "Northern", rating, volume)
    }

    #[rstest]
    #[case(0.0)]
    #[case(5.0)]
    fn accepts_boundary_ratings(#[case] rating: f64) {
        assert!(record(rating, 1.0).is_ok());
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    #[case(f64::NAN)]
    fn rejects_out_of_range_ratings(#[case] rating: f64) {
        assert!(matches!(
            record(rating, 1.0),
            Err(PlaceRecordError::RatingOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_review_volume(#[case] volume: f64) {
        assert!(matches!(
            record(4.0, volume),
            Err(PlaceRecordError::InvalidReviewVolume { .. })
        ));
    }

    #[rstest]
    #[case("", "Uttar Pradesh", "Northern", "city")]
    #[case("Agra", "  ", "Northern", "state")]
    #[case("Agra", "Uttar Pradesh", "", "zone")]
    fn rejects_blank_location_fields(
        #[case] city: &str,
        #[case] state: &str,
        #[case] zone: &str,
        #[case] expected: &'static str,
    ) {
        let result = PlaceRecord::new("Somewhere", city, state, zone, 4.0, 1.0);
        assert_eq!(result, Err(PlaceRecordError::EmptyField { field: expected }));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_the_record() {
        let valid = serde_json::json!({
            "name": "Taj Mahal",
            "city": "Agra",
            "state": "Uttar Pradesh",
            "zone": "Northern",
            "rating": 4.6,
            "review_volume_lakhs": 2.3,
        });
        let record: PlaceRecord = serde_json::from_value(valid).expect("valid record");
        assert_eq!(record, valid_record(4.6, 2.3));

        let out_of_range = serde_json::json!({
            "name": "Taj Mahal",
            "city": "Agra",
            "state": "Uttar Pradesh",
            "zone": "Northern",
            "rating": 7.0,
            "review_volume_lakhs": 2.3,
        });
        let err = serde_json::from_value::<PlaceRecord>(out_of_range)
            .expect_err("rating above 5 should be rejected");
        assert!(err.to_string().contains("rating 7 must be between 0 and 5"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn ranked_results_serialise_with_field_names() {
        let ranked = RankedResult::from_record(&valid_record(4.6, 2.3), 0.5);
        let value = serde_json::to_value(&ranked).expect("serialise result");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Taj Mahal",
                "city": "Agra",
                "state": "Uttar Pradesh",
                "final_score": 0.5,
            })
        );
    }

    fn valid_record(rating: f64, volume: f64) -> PlaceRecord {
        record(rating, volume).expect("valid record")
    }

    #[rstest]
    #[case("Delhi", "delhi")]
    #[case("  Mumbai\t", "mumbai")]
    #[case("NEW DELHI", "new delhi")]
    fn city_key_trims_and_lowercases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(CityKey::new(raw).as_str(), expected);
    }

    #[rstest]
    fn city_key_matches_regardless_of_case_and_padding() {
        let key = CityKey::new("Delhi");
        assert!(key.matches(" DELHI "));
        assert!(!key.matches("New Delhi"));
    }
}
