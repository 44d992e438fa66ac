//! Error types emitted by the getaway CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use getaway_core::RankError;
use getaway_data::DatasetError;
use thiserror::Error;

/// Errors emitted by the getaway CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested number of recommendations is outside `3..=10`.
    #[error("top-n must be between 3 and 10, got {value}")]
    TopNOutOfRange {
        /// Rejected value.
        value: u8,
    },
    /// The batch city list did not contain exactly three names.
    #[error("Please enter exactly 3 cities.")]
    InvalidCityCount {
        /// Number of names found in the input.
        found: usize,
    },
    /// Loading the dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// Ranking destinations failed.
    #[error(transparent)]
    Rank(#[from] RankError),
    /// Reading the city list from standard input failed.
    #[error("failed to read cities from standard input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Creating the batch report file failed.
    #[error("failed to create report at {path}: {source}")]
    CreateReport {
        /// Report path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing to the batch report file failed.
    #[error("failed to write report at {path}: {source}")]
    WriteReport {
        /// Report path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising recommendations to JSON failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseRanking(#[source] serde_json::Error),
}
