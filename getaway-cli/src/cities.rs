//! `cities` command: list the source cities present in the dataset.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use getaway_core::distinct_cities;
use getaway_data::{DEFAULT_DATASET_PATH, DatasetCache};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATASET, CliError, write_output};

/// CLI arguments for the `cities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "cities", about = "List the cities that can be used as a source")]
#[ortho_config(prefix = "GETAWAY")]
pub(crate) struct CitiesArgs {
    /// Path to the places CSV file.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl CitiesArgs {
    fn into_config(self) -> Result<CitiesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CitiesConfig::from(merged))
    }
}

/// Resolved `cities` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CitiesConfig {
    pub(crate) dataset: Utf8PathBuf,
}

impl From<CitiesArgs> for CitiesConfig {
    fn from(args: CitiesArgs) -> Self {
        Self {
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET_PATH)),
        }
    }
}

pub(crate) fn run_cities(
    args: CitiesArgs,
    cache: &mut DatasetCache,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_cities_with(&config, cache, output)
}

pub(crate) fn run_cities_with(
    config: &CitiesConfig,
    cache: &mut DatasetCache,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let places = cache.load(&config.dataset)?;
    let mut listing = distinct_cities(&places).join("\n");
    listing.push('\n');
    write_output(output, &listing)
}

#[cfg(test)]
pub(crate) fn cities_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CitiesConfig, CliError> {
    let merged = CitiesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(CitiesConfig::from(merged))
}
