//! Error types raised while loading the places dataset.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use getaway_core::PlaceRecordError;
use thiserror::Error;

/// Errors raised while loading the places dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The path does not name a readable file.
    #[error("Dataset file not found. Check the path.")]
    NotFound {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
    /// The file exists but could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read the header row of {path}")]
    ReadHeader {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Required columns are absent from the header row.
    #[error("dataset {path} is missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Every required column that was not found.
        missing: Vec<&'static str>,
    },
    /// A data row could not be decoded into the expected fields.
    #[error("row {row} of {path} could not be decoded: {source}")]
    DecodeRow {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// 1-based data row number, excluding the header.
        row: usize,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A data row decoded but violates the place invariants.
    #[error("row {row} of {path} is invalid: {source}")]
    InvalidRow {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// 1-based data row number, excluding the header.
        row: usize,
        /// Validation failure for the row.
        #[source]
        source: PlaceRecordError,
    },
    /// The file has a header but no data rows.
    #[error("dataset {path} contains no places")]
    Empty {
        /// Requested dataset path.
        path: Utf8PathBuf,
    },
}

impl DatasetError {
    /// Report whether the file was found but its contents are unusable.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::ReadHeader { .. }
                | Self::MissingColumns { .. }
                | Self::DecodeRow { .. }
                | Self::InvalidRow { .. }
                | Self::Empty { .. }
        )
    }
}
