//! Dataset access for the weekend getaway engine.
//!
//! The places table is a comma-separated file whose header names at least
//! the columns in [`REQUIRED_COLUMNS`]. [`load_places`] validates the header
//! and every row before returning records in file order, and
//! [`DatasetCache`] keeps loaded tables for the rest of the process.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use getaway_data::load_places;
//!
//! let places = load_places(Utf8Path::new("data/Top Indian Places to Visit.csv"))
//!     .expect("load places");
//! assert!(!places.is_empty());
//! ```

#![forbid(unsafe_code)]

mod cache;
mod error;
pub mod fs;
mod loader;

pub use cache::DatasetCache;
pub use error::DatasetError;
pub use loader::{
    COLUMN_CITY, COLUMN_NAME, COLUMN_RATING, COLUMN_REVIEW_VOLUME, COLUMN_STATE, COLUMN_ZONE,
    REQUIRED_COLUMNS, load_places, read_places,
};

/// Dataset location used when no other path is configured.
pub const DEFAULT_DATASET_PATH: &str = "data/Top Indian Places to Visit.csv";
