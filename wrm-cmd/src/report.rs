//! Generated data and how it is written to the terminal.

use std::io::Write;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use wrm_data::clock::Clock;
use wrm_data::generator::MockGenerator;
use wrm_data::models::{
    HistoryPoint, MetricsSnapshot, ParameterKind, PredictionBundle, QualityParameter,
    WaterLevelPoint,
};
use wrm_data::random::RandomSource;

use crate::Command;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// CSV with a header row
    Csv,
}

/// Parse a `--parameter` value.
pub fn parse_parameter(slug: &str) -> Result<ParameterKind, String> {
    ParameterKind::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = ParameterKind::ALL.iter().map(|kind| kind.slug()).collect();
        format!("unknown parameter '{}', expected one of: {}", slug, known.join(", "))
    })
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    WaterLevel(Vec<WaterLevelPoint>),
    Metrics(MetricsSnapshot),
    Quality(Vec<QualityParameter>),
    Predictions(PredictionBundle),
    History(Vec<HistoryPoint>),
}

/// The three forecasts joined by day. Insights and the summary scalars have
/// no column and only appear in JSON output.
#[derive(Debug, Serialize)]
struct PredictionRow<'a> {
    label: &'a str,
    date: NaiveDate,
    water_level: f64,
    quality_index: f64,
    demand: f64,
}

fn prediction_rows(bundle: &PredictionBundle) -> impl Iterator<Item = PredictionRow<'_>> {
    bundle
        .water_level
        .iter()
        .zip(&bundle.quality)
        .zip(&bundle.demand)
        .map(|((level, quality), demand)| PredictionRow {
            label: &level.label,
            date: level.date,
            water_level: level.value,
            quality_index: quality.value,
            demand: demand.value,
        })
}

impl Report {
    pub fn generate<R: RandomSource, C: Clock>(
        command: &Command,
        generator: &mut MockGenerator<R, C>,
    ) -> Report {
        match command {
            Command::WaterLevel => Report::WaterLevel(generator.water_level_series()),
            Command::Metrics => Report::Metrics(generator.metrics_snapshot()),
            Command::Quality => Report::Quality(generator.quality_parameters()),
            Command::Predictions => Report::Predictions(generator.prediction_bundle()),
            Command::History { parameter } => {
                Report::History(generator.parameter_history(*parameter))
            }
        }
    }

    pub fn write<W: Write>(&self, format: OutputFormat, out: W) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn write_json<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        match self {
            Report::WaterLevel(points) => serialize_rows(&mut writer, points)?,
            Report::Metrics(snapshot) => writer.serialize(snapshot)?,
            Report::Quality(parameters) => serialize_rows(&mut writer, parameters)?,
            Report::Predictions(bundle) => {
                for row in prediction_rows(bundle) {
                    writer.serialize(row)?;
                }
            }
            Report::History(points) => serialize_rows(&mut writer, points)?,
        }
        writer.flush()?;
        Ok(())
    }
}

fn serialize_rows<W: Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    rows: &[T],
) -> csv::Result<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrm_data::clock::FixedClock;
    use wrm_data::random::ConstantSource;

    fn midpoint_generator() -> MockGenerator<ConstantSource, FixedClock> {
        // 2024-06-02 is a Sunday
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        MockGenerator::new(ConstantSource(0.5), FixedClock(today))
    }

    fn render(command: Command, format: OutputFormat) -> String {
        let report = Report::generate(&command, &mut midpoint_generator());
        let mut out = Vec::new();
        report.write(format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metrics_csv() {
        let csv = render(Command::Metrics, OutputFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "water_level,water_level_status,quality_index,quality_status,supply_risk,supply_risk_status,prediction_accuracy,prediction_accuracy_status"
        );
        assert_eq!(lines[1], "8.5,normal,82,normal,22,warning,94,normal");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_quality_csv_uses_slugs() {
        let csv = render(Command::Quality, OutputFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("kind,name,value,unit,status,ideal_range"));
        assert!(lines[1].starts_with("ph,pH Level,"));
        assert!(lines[6].starts_with("e-coli,E. coli,"));
    }

    #[test]
    fn test_predictions_csv_joins_series_by_day() {
        let csv = render(Command::Predictions, OutputFormat::Csv);
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            ["label", "date", "water_level", "quality_index", "demand"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(&rows[0][0], "Jun 02");
        assert_eq!(&rows[0][1], "2024-06-02");
        assert_eq!(rows[0][2].parse::<f64>().unwrap(), 8.5);
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), 85.0);
        // Sunday and Monday carry the weekend factor
        assert_eq!(rows[0][4].parse::<f64>().unwrap(), 1200.0);
        assert_eq!(&rows[6][1], "2024-06-08");
    }

    #[test]
    fn test_predictions_json_keeps_summary() {
        let json = render(Command::Predictions, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["water_level"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["insights"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["anomaly_risk"], 10);
        assert_eq!(parsed["confidence"], 90);
    }

    #[test]
    fn test_history_json_is_a_plain_array() {
        let json = render(
            Command::History { parameter: ParameterKind::Temperature },
            OutputFormat::Json,
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let points = parsed.as_array().unwrap();
        assert_eq!(points.len(), 31);
        assert_eq!(points[0]["label"], "Day 0");
        assert_eq!(points[30]["label"], "Day 30");
    }

    #[test]
    fn test_parse_parameter() {
        assert_eq!(parse_parameter("e-coli"), Ok(ParameterKind::EColi));
        let err = parse_parameter("lead").unwrap_err();
        assert!(err.contains("lead"));
        assert!(err.contains("total-dissolved-solids"));
    }
}
