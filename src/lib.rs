//! Facade crate for the weekend getaway engine.
//!
//! This crate re-exports the core ranking types and, behind the `data`
//! feature, the dataset loader and cache.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use getaway_engine::{PlaceRecord, rank};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let places = [
//!     PlaceRecord::new("India Gate", "Delhi", "Delhi", "Northern", 4.6, 2.6)?,
//!     PlaceRecord::new("Taj Mahal", "Agra", "Uttar Pradesh", "Northern", 4.6, 2.3)?,
//!     PlaceRecord::new("Marina Beach", "Chennai", "Tamil Nadu", "Southern", 4.4, 1.5)?,
//! ];
//! let top = NonZeroUsize::new(2).ok_or("top-n must be non-zero")?;
//! let ranked = rank(&places, "delhi", top)?;
//! assert_eq!(ranked[0].city, "Agra");
//! assert_eq!(ranked.len(), 2);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use getaway_core::{
    CityKey, DistanceTier, PlaceRecord, PlaceRecordError, PopularityPolicy, RankError,
    RankedResult, Ranker, ScoreWeights, ScoreWeightsError, ScoredPlace, distinct_cities, rank,
};

#[cfg(feature = "data")]
pub use getaway_data::{DEFAULT_DATASET_PATH, DatasetCache, DatasetError, load_places};
