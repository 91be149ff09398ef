//! Command implementations for the WRM CLI.
//!
//! Each subcommand runs one of the dashboard's generators and prints the
//! result as JSON or CSV. `--seed` and `--date` pin the random source and
//! "today" so a run can be reproduced.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use log::{debug, info};
use wrm_data::clock::{Clock, FixedClock, SystemClock};
use wrm_data::generator::MockGenerator;
use wrm_data::models::ParameterKind;
use wrm_data::random::{self, RandomSource};
use wrm_data::thresholds::Thresholds;
use wrm_utils::dates;

pub mod report;

pub use report::{OutputFormat, Report};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Actual vs predicted water level for the last 15 days
    WaterLevel,

    /// Headline metrics with their statuses
    Metrics,

    /// Current readings for the six water quality parameters
    Quality,

    /// 7-day water level, quality index and demand forecasts
    Predictions,

    /// 31-day history for one quality parameter
    History {
        /// Parameter id: ph, dissolved-oxygen, turbidity,
        /// total-dissolved-solids, temperature or e-coli
        #[arg(short, long, value_parser = report::parse_parameter)]
        parameter: ParameterKind,
    },
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = dates::parse_date)]
    pub date: Option<NaiveDate>,

    /// JSON file overriding the status thresholds
    #[arg(long, global = true)]
    pub thresholds: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Build a generator from the command line flags.
pub fn build_generator(
    options: &GeneratorOptions,
) -> anyhow::Result<MockGenerator<impl RandomSource, FixedClock>> {
    let rng = match options.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            random::seeded(seed)
        }
        None => random::from_entropy(),
    };
    let today = options.date.unwrap_or_else(|| SystemClock.today());
    info!("Generating data as of {}", dates::format_date(&today));
    let thresholds = match &options.thresholds {
        Some(path) => Thresholds::load(path)?,
        None => Thresholds::default(),
    };
    Ok(MockGenerator::new(rng, FixedClock(today)).with_thresholds(thresholds))
}

/// Run a command and write its report to `out`.
pub fn run_to<W: Write>(options: &GeneratorOptions, command: &Command, out: W) -> anyhow::Result<()> {
    let mut generator = build_generator(options)?;
    debug!("Status thresholds: {:?}", generator.thresholds());
    info!("Generating {:?} as {:?}", command, options.format);
    let report = Report::generate(command, &mut generator);
    report.write(options.format, out)
}

pub fn run(options: &GeneratorOptions, command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    run_to(options, &command, stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        options: GeneratorOptions,
        #[command(subcommand)]
        command: Command,
    }

    fn render(options: &GeneratorOptions, command: &Command) -> String {
        let mut out = Vec::new();
        run_to(options, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = TestCli::try_parse_from([
            "wrm-cli", "history", "--parameter", "dissolved-oxygen", "--seed", "7", "--date",
            "2024-06-02", "--format", "csv",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::History { parameter: ParameterKind::DissolvedOxygen }
        );
        assert_eq!(cli.options.seed, Some(7));
        assert_eq!(cli.options.date, NaiveDate::from_ymd_opt(2024, 6, 2));
        assert_eq!(cli.options.format, OutputFormat::Csv);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(TestCli::try_parse_from(["wrm-cli", "history", "--parameter", "lead"]).is_err());
        assert!(TestCli::try_parse_from(["wrm-cli", "metrics", "--date", "06/02/2024"]).is_err());
        assert!(TestCli::try_parse_from(["wrm-cli", "metrics", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_defaults_to_json() {
        let cli = TestCli::try_parse_from(["wrm-cli", "quality"]).unwrap();
        assert_eq!(cli.options.format, OutputFormat::Json);
        assert!(cli.options.seed.is_none());
    }

    #[test]
    fn test_seed_and_date_make_output_reproducible() {
        let options = GeneratorOptions {
            seed: Some(42),
            date: NaiveDate::from_ymd_opt(2024, 6, 2),
            ..Default::default()
        };
        let first = render(&options, &Command::Predictions);
        let second = render(&options, &Command::Predictions);
        assert_eq!(first, second);
        assert!(first.contains("\"2024-06-02\""));
    }

    #[test]
    fn test_thresholds_file_changes_statuses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"water_level_warning_below": 5.0, "water_level_critical_above": 6.0}}"#
        )
        .unwrap();

        let options = GeneratorOptions {
            seed: Some(1),
            thresholds: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let json = render(&options, &Command::Metrics);
        let metrics: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics["water_level_status"], "critical");
    }

    #[test]
    fn test_build_generator_applies_thresholds_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"quality_warning_below": 90}}"#).unwrap();

        let options = GeneratorOptions {
            thresholds: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let generator = build_generator(&options).unwrap();
        assert_eq!(generator.thresholds().quality_warning_below, 90);
        assert_eq!(
            generator.thresholds().water_level_warning_below,
            Thresholds::default().water_level_warning_below
        );

        let defaults = build_generator(&GeneratorOptions::default()).unwrap();
        assert_eq!(defaults.thresholds(), &Thresholds::default());
    }

    #[test]
    fn test_missing_thresholds_file_is_an_error() {
        let options = GeneratorOptions {
            thresholds: Some(PathBuf::from("/nonexistent/thresholds.json")),
            ..Default::default()
        };
        let err = run_to(&options, &Command::Metrics, Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("thresholds"));
    }
}
