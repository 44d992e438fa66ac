//! `batch` command: rank three source cities into a report file.
//!
//! The report is truncated on every run. Each city's heading is flushed
//! before ranking starts, so a failure leaves the blocks of earlier cities
//! (and the failing city's heading) on disk.

use std::io::{BufRead, BufWriter, Write};
use std::num::NonZeroUsize;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use getaway_core::{PlaceRecord, distinct_cities, rank};
use getaway_data::{DEFAULT_DATASET_PATH, DatasetCache, fs};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BATCH_CITIES, ARG_BATCH_OUTPUT, ARG_DATASET, CliError, DEFAULT_OUTPUT_PATH, report,
    write_output,
};

/// Number of source cities a batch run expects.
pub(crate) const BATCH_CITY_COUNT: usize = 3;

/// Recommendations written per city.
pub(crate) const BATCH_TOP_N: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(value) => value,
    None => NonZeroUsize::MIN,
};

const PROMPT: &str = "\nEnter 3 source cities (comma separated)\nExample: Delhi, Mumbai, Kolkata\n> ";
const LISTING_RULE_WIDTH: usize = 60;

/// CLI arguments for the `batch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "batch",
    long_about = "Rank three source cities and write the recommendations to a \
                 report file. Cities are read from --cities or prompted for \
                 on standard input.",
    about = "Rank three source cities into a report file"
)]
#[ortho_config(prefix = "GETAWAY")]
pub(crate) struct BatchArgs {
    /// Comma-separated list of exactly three source cities.
    #[arg(long = ARG_BATCH_CITIES, value_name = "list")]
    #[serde(default)]
    pub(crate) cities: Option<String>,
    /// Path to the places CSV file.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Report file to (over)write.
    #[arg(long = ARG_BATCH_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl BatchArgs {
    fn into_config(self) -> Result<BatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(BatchConfig::from(merged))
    }
}

/// Resolved `batch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchConfig {
    pub(crate) cities: Option<String>,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl From<BatchArgs> for BatchConfig {
    fn from(args: BatchArgs) -> Self {
        Self {
            cities: args.cities,
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH)),
            output: args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_PATH)),
        }
    }
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchOutcome {
    pub(crate) report: Utf8PathBuf,
    pub(crate) cities: Vec<String>,
}

/// Split a comma-separated list into exactly [`BATCH_CITY_COUNT`] trimmed names.
pub(crate) fn parse_city_list(raw: &str) -> Result<Vec<String>, CliError> {
    let cities: Vec<String> = raw.split(',').map(|city| city.trim().to_owned()).collect();
    if cities.len() != BATCH_CITY_COUNT {
        return Err(CliError::InvalidCityCount {
            found: cities.len(),
        });
    }
    Ok(cities)
}

pub(crate) fn run_batch(
    args: BatchArgs,
    cache: &mut DatasetCache,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<BatchOutcome, CliError> {
    let config = args.into_config()?;
    run_batch_with(&config, cache, input, output)
}

pub(crate) fn run_batch_with(
    config: &BatchConfig,
    cache: &mut DatasetCache,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<BatchOutcome, CliError> {
    let places = cache.load(&config.dataset)?;
    write_output(
        output,
        &format!(
            "\nAvailable Cities:\n{}\n{}\n",
            distinct_cities(&places).join(", "),
            "-".repeat(LISTING_RULE_WIDTH)
        ),
    )?;

    let raw = match &config.cities {
        Some(cities) => cities.clone(),
        None => prompt_for_cities(input, output)?,
    };
    let cities = parse_city_list(&raw)?;

    write_report(&config.output, &places, &cities)?;
    write_output(
        output,
        &format!("\nRecommendation results saved to {}\n", config.output),
    )?;
    Ok(BatchOutcome {
        report: config.output.clone(),
        cities,
    })
}

fn prompt_for_cities(input: &mut dyn BufRead, output: &mut dyn Write) -> Result<String, CliError> {
    write_output(output, PROMPT)?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(CliError::ReadInput)?;
    Ok(line)
}

fn write_report(path: &Utf8Path, places: &[PlaceRecord], cities: &[String]) -> Result<(), CliError> {
    let file = fs::create_file(path).map_err(|source| CliError::CreateReport {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    for city in cities {
        append(&mut writer, path, &report::batch_heading(city))?;
        let ranked = rank(places, city, BATCH_TOP_N)?;
        debug!("batch wrote {} recommendations for '{city}'", ranked.len());
        let mut block = report::render_table(&ranked);
        block.push_str("\n\n");
        append(&mut writer, path, &block)?;
    }
    Ok(())
}

fn append(writer: &mut impl Write, path: &Utf8Path, text: &str) -> Result<(), CliError> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn batch_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<BatchConfig, CliError> {
    let merged = BatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(BatchConfig::from(merged))
}
