//! Focused unit tests covering command configuration.

use crate::rank::{DEFAULT_TOP_N, OutputFormat, RankArgs, RankConfig, validate_top_n};
use super::*;
use crate::batch::BatchConfig;
use crate::cities::CitiesConfig;
use camino::Utf8PathBuf;
use getaway_data::DEFAULT_DATASET_PATH;
use rstest::rstest;

#[rstest]
fn rank_config_requires_a_city() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing city should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_CITY);
            assert_eq!(env, ENV_RANK_CITY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_applies_defaults() {
    let args = RankArgs {
        city: Some("Delhi".to_owned()),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.city, "Delhi");
    assert_eq!(config.dataset, Utf8PathBuf::from(DEFAULT_DATASET_PATH));
    assert_eq!(config.top_n.get(), usize::from(DEFAULT_TOP_N));
    assert_eq!(config.format, OutputFormat::Table);
}

#[rstest]
fn rank_config_keeps_explicit_values() {
    let args = RankArgs {
        city: Some("Mumbai".to_owned()),
        dataset: Some(Utf8PathBuf::from("places.csv")),
        top_n: Some(8),
        json: true,
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.dataset, Utf8PathBuf::from("places.csv"));
    assert_eq!(config.top_n.get(), 8);
    assert_eq!(config.format, OutputFormat::Json);
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(10)]
fn top_n_accepts_the_offered_range(#[case] value: u8) {
    let top_n = validate_top_n(value).expect("value in range");
    assert_eq!(top_n.get(), usize::from(value));
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(11)]
fn top_n_rejects_values_outside_the_range(#[case] value: u8) {
    match validate_top_n(value) {
        Err(CliError::TopNOutOfRange { value: rejected }) => assert_eq!(rejected, value),
        other => panic!("expected TopNOutOfRange, found {other:?}"),
    }
}

#[rstest]
#[case("2")]
#[case("11")]
#[case("five")]
fn clap_rejects_invalid_top_n_flags(#[case] raw: &str) {
    let err = Cli::try_parse_from(["getaway", "rank", "Delhi", "--top-n", raw])
        .expect_err("invalid top-n should be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn clap_parses_the_rank_subcommand() {
    let cli = Cli::try_parse_from(["getaway", "rank", "Agra", "--top-n", "4", "--json"])
        .expect("arguments should parse");
    match cli.command {
        Command::Rank(args) => {
            assert_eq!(args.city.as_deref(), Some("Agra"));
            assert_eq!(args.top_n, Some(4));
            assert!(args.json);
        }
        other => panic!("expected rank command, found {other:?}"),
    }
}

#[rstest]
fn clap_parses_the_batch_subcommand() {
    let cli = Cli::try_parse_from([
        "getaway",
        "batch",
        "--cities",
        "Delhi, Mumbai, Kolkata",
        "--output",
        "report.txt",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Batch(args) => {
            assert_eq!(args.cities.as_deref(), Some("Delhi, Mumbai, Kolkata"));
            assert_eq!(args.output, Some(Utf8PathBuf::from("report.txt")));
            assert_eq!(args.dataset, None);
        }
        other => panic!("expected batch command, found {other:?}"),
    }
}

#[rstest]
fn cities_and_batch_configs_fall_back_to_default_paths() {
    let cities = CitiesConfig::from(crate::cities::CitiesArgs::default());
    assert_eq!(cities.dataset, Utf8PathBuf::from(DEFAULT_DATASET_PATH));

    let batch = BatchConfig::from(crate::batch::BatchArgs::default());
    assert_eq!(batch.dataset, Utf8PathBuf::from(DEFAULT_DATASET_PATH));
    assert_eq!(batch.output, Utf8PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(batch.cities, None);
}
