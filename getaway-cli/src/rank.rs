//! `rank` command: recommend destinations from a single source city.

use std::io::Write;
use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::Parser;
use getaway_core::{RankedResult, rank};
use getaway_data::{DEFAULT_DATASET_PATH, DatasetCache};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATASET, ARG_JSON, ARG_RANK_CITY, ARG_TOP_N, CliError, ENV_RANK_CITY, report, write_output,
};

/// Smallest number of recommendations the command offers.
pub(crate) const MIN_TOP_N: u8 = 3;
/// Largest number of recommendations the command offers.
pub(crate) const MAX_TOP_N: u8 = 10;
/// Number of recommendations when none is configured.
pub(crate) const DEFAULT_TOP_N: u8 = 5;

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Recommend weekend getaways from a source city. Candidates \
                 are scored on rating, review volume and whether they share \
                 the source city's state or zone.",
    about = "Recommend destinations from a source city"
)]
#[ortho_config(prefix = "GETAWAY")]
pub(crate) struct RankArgs {
    /// Source city, matched case-insensitively.
    #[arg(value_name = ARG_RANK_CITY)]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Path to the places CSV file.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of recommendations to show (3 to 10).
    #[arg(
        long = ARG_TOP_N,
        value_name = "count",
        value_parser = clap::value_parser!(u8).range(3..=10)
    )]
    #[serde(default)]
    pub(crate) top_n: Option<u8>,
    /// Print recommendations as JSON instead of a table.
    #[arg(long = ARG_JSON)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) json: bool,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// How recommendations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) city: String,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) top_n: NonZeroUsize,
    pub(crate) format: OutputFormat,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_RANK_CITY,
            env: ENV_RANK_CITY,
        })?;
        let requested = args.top_n.unwrap_or(DEFAULT_TOP_N);
        let top_n = validate_top_n(requested)?;
        let dataset = args
            .dataset
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH));
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        };
        Ok(Self {
            city,
            dataset,
            top_n,
            format,
        })
    }
}

/// Accept only `MIN_TOP_N..=MAX_TOP_N`, whichever layer supplied the value.
pub(crate) fn validate_top_n(value: u8) -> Result<NonZeroUsize, CliError> {
    if !(MIN_TOP_N..=MAX_TOP_N).contains(&value) {
        return Err(CliError::TopNOutOfRange { value });
    }
    NonZeroUsize::new(usize::from(value)).ok_or(CliError::TopNOutOfRange { value })
}

pub(crate) fn run_rank(
    args: RankArgs,
    cache: &mut DatasetCache,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_rank_with(&config, cache, output)
}

pub(crate) fn run_rank_with(
    config: &RankConfig,
    cache: &mut DatasetCache,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let places = cache.load(&config.dataset)?;
    let ranked = rank(&places, &config.city, config.top_n)?;
    debug!(
        "rank from '{}' produced {} recommendations",
        config.city,
        ranked.len()
    );
    let rendered = render(&ranked, config.format)?;
    write_output(output, &rendered)
}

fn render(ranked: &[RankedResult], format: OutputFormat) -> Result<String, CliError> {
    let mut rendered = match format {
        OutputFormat::Table => report::render_table(ranked),
        OutputFormat::Json => {
            serde_json::to_string_pretty(ranked).map_err(CliError::SerialiseRanking)?
        }
    };
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
pub(crate) fn rank_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
