//! Read the places dataset from a comma-separated file.

use std::io::Read;

use camino::Utf8Path;
use getaway_core::PlaceRecord;
use log::debug;
use serde::Deserialize;

use crate::{DatasetError, fs};

/// Header of the attraction name column.
pub const COLUMN_NAME: &str = "Name";
/// Header of the city column.
pub const COLUMN_CITY: &str = "City";
/// Header of the state column.
pub const COLUMN_STATE: &str = "State";
/// Header of the zone column.
pub const COLUMN_ZONE: &str = "Zone";
/// Header of the rating column.
pub const COLUMN_RATING: &str = "Google review rating";
/// Header of the review volume column, measured in lakhs.
pub const COLUMN_REVIEW_VOLUME: &str = "Number of google review in lakhs";

/// Columns that must be present in the header row. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COLUMN_NAME,
    COLUMN_CITY,
    COLUMN_STATE,
    COLUMN_ZONE,
    COLUMN_RATING,
    COLUMN_REVIEW_VOLUME,
];

#[derive(Debug, Deserialize)]
struct PlaceRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Zone")]
    zone: String,
    #[serde(rename = "Google review rating")]
    rating: f64,
    #[serde(rename = "Number of google review in lakhs")]
    review_volume_lakhs: f64,
}

impl PlaceRow {
    fn into_record(self) -> Result<PlaceRecord, getaway_core::PlaceRecordError> {
        PlaceRecord::new(
            self.name,
            self.city,
            self.state,
            self.zone,
            self.rating,
            self.review_volume_lakhs,
        )
    }
}

/// Load every place from the dataset at `path`, in file order.
///
/// # Errors
/// Returns [`DatasetError::NotFound`] when `path` is not a readable file and
/// the malformed-data variants when the header or any row is unusable.
pub fn load_places(path: &Utf8Path) -> Result<Vec<PlaceRecord>, DatasetError> {
    match fs::is_file(path) {
        Ok(true) => {}
        Ok(false) => {
            return Err(DatasetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(DatasetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(DatasetError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    }
    let file = fs::open_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let places = read_places(file, path)?;
    debug!("loaded {} places from {path}", places.len());
    Ok(places)
}

/// Decode places from any CSV reader. `path` is only used in error reports.
///
/// Header names and cell values are trimmed before use.
///
/// # Errors
/// See [`load_places`].
pub fn read_places<R: Read>(reader: R, path: &Utf8Path) -> Result<Vec<PlaceRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::ReadHeader {
            path: path.to_path_buf(),
            source,
        })?;
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut places = Vec::new();
    for (offset, row) in csv_reader.deserialize::<PlaceRow>().enumerate() {
        let row_number = offset + 1;
        let decoded = row.map_err(|source| DatasetError::DecodeRow {
            path: path.to_path_buf(),
            row: row_number,
            source,
        })?;
        let record = decoded
            .into_record()
            .map_err(|source| DatasetError::InvalidRow {
                path: path.to_path_buf(),
                row: row_number,
                source,
            })?;
        places.push(record);
    }

    if places.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(places)
}
