//! Command-line interface for ranking weekend getaways.
//!
//! Three subcommands sit on top of the ranking engine:
//! - `cities` lists the source cities available in the dataset;
//! - `rank` prints the best destinations from one city;
//! - `batch` ranks three cities and appends the tables to a report file.
//!
//! Options layer CLI flags over `GETAWAY_*` environment variables and
//! configuration files through `ortho_config`.
#![forbid(unsafe_code)]

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use getaway_data::DatasetCache;

mod batch;
mod cities;
mod error;
mod rank;
mod report;

pub use error::CliError;

use batch::BatchArgs;
use cities::CitiesArgs;
use rank::RankArgs;

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_RANK_CITY: &str = "city";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_JSON: &str = "json";
pub(crate) const ARG_BATCH_CITIES: &str = "cities";
pub(crate) const ARG_BATCH_OUTPUT: &str = "output";
pub(crate) const ENV_RANK_CITY: &str = "GETAWAY_CMDS_RANK_CITY";

/// Report written by `batch` when no other path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "output/sample_output.txt";

/// Run the CLI with the current process arguments, standard input and
/// standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the dataset, ranking
/// or output fail. Help and version requests surface as
/// [`CliError::ArgumentParsing`].
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut cache = DatasetCache::new();
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    dispatch(cli.command, &mut cache, &mut input, &mut output)
}

fn dispatch(
    command: Command,
    cache: &mut DatasetCache,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Cities(args) => cities::run_cities(args, cache, output),
        Command::Rank(args) => rank::run_rank(args, cache, output),
        Command::Batch(args) => batch::run_batch(args, cache, input, output).map(|_| ()),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "getaway",
    about = "Rank weekend getaway destinations from a source city",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the source cities available in the dataset.
    Cities(CitiesArgs),
    /// Recommend destinations from one source city.
    Rank(RankArgs),
    /// Rank three source cities and write the results to a report file.
    Batch(BatchArgs),
}

pub(crate) fn write_output(output: &mut dyn Write, text: &str) -> Result<(), CliError> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .map_err(CliError::WriteOutput)
}

#[cfg(test)]
mod tests;
