//! Generated value records.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::status::Status;

/// One day of the water level trend chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WaterLevelPoint {
    /// Axis label, e.g. "Oct 03".
    pub label: String,
    pub date: NaiveDate,
    /// Recorded level in metres.
    pub actual_level: f64,
    /// Model prediction for the same day in metres.
    pub predicted_level: f64,
}

/// Headline numbers for the dashboard's metric cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    /// Metres, one decimal.
    pub water_level: f64,
    pub water_level_status: Status,
    /// 0-100 score.
    pub quality_index: u32,
    pub quality_status: Status,
    /// Percent.
    pub supply_risk: u32,
    pub supply_risk_status: Status,
    /// Percent.
    pub prediction_accuracy: u32,
    pub prediction_accuracy_status: Status,
}

/// The six monitored water quality parameters, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterKind {
    Ph,
    DissolvedOxygen,
    Turbidity,
    TotalDissolvedSolids,
    Temperature,
    EColi,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 6] = [
        ParameterKind::Ph,
        ParameterKind::DissolvedOxygen,
        ParameterKind::Turbidity,
        ParameterKind::TotalDissolvedSolids,
        ParameterKind::Temperature,
        ParameterKind::EColi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Ph => "pH Level",
            ParameterKind::DissolvedOxygen => "Dissolved Oxygen",
            ParameterKind::Turbidity => "Turbidity",
            ParameterKind::TotalDissolvedSolids => "Total Dissolved Solids",
            ParameterKind::Temperature => "Temperature",
            ParameterKind::EColi => "E. coli",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParameterKind::Ph => "pH",
            ParameterKind::DissolvedOxygen => "mg/L",
            ParameterKind::Turbidity => "NTU",
            ParameterKind::TotalDissolvedSolids => "mg/L",
            ParameterKind::Temperature => "°C",
            ParameterKind::EColi => "CFU/100mL",
        }
    }

    pub fn ideal_range(&self) -> &'static str {
        match self {
            ParameterKind::Ph => "6.5 - 8.5",
            ParameterKind::DissolvedOxygen => "> 5.0",
            ParameterKind::Turbidity => "< 5.0",
            ParameterKind::TotalDissolvedSolids => "< 500",
            ParameterKind::Temperature => "20 - 30",
            ParameterKind::EColi => "0",
        }
    }

    /// Whether readings are whole numbers rather than one-decimal values.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            ParameterKind::TotalDissolvedSolids | ParameterKind::EColi
        )
    }

    /// Parse the kebab-case identifier used on the command line.
    pub fn from_slug(slug: &str) -> Option<ParameterKind> {
        ParameterKind::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ParameterKind::Ph => "ph",
            ParameterKind::DissolvedOxygen => "dissolved-oxygen",
            ParameterKind::Turbidity => "turbidity",
            ParameterKind::TotalDissolvedSolids => "total-dissolved-solids",
            ParameterKind::Temperature => "temperature",
            ParameterKind::EColi => "e-coli",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single quality parameter reading.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityParameter {
    pub kind: ParameterKind,
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub status: Status,
    pub ideal_range: &'static str,
}

impl QualityParameter {
    /// Value formatted the way the cards show it.
    pub fn display_value(&self) -> String {
        if self.kind.is_integral() {
            format!("{}", self.value as i64)
        } else {
            format!("{:.1}", self.value)
        }
    }
}

/// One day of a 7-day forecast series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForecastPoint {
    pub label: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// Everything the predictions page shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionBundle {
    /// Metres, one decimal.
    pub water_level: Vec<ForecastPoint>,
    /// Quality index, whole numbers.
    pub quality: Vec<ForecastPoint>,
    /// Cubic metres, whole numbers.
    pub demand: Vec<ForecastPoint>,
    pub insights: [&'static str; 4],
    /// Percent, 0-19.
    pub anomaly_risk: u32,
    /// Percent, 85-94.
    pub confidence: u32,
}

/// One day of a parameter's 31-day history sparkline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryPoint {
    /// "Day 0" through "Day 30".
    pub label: String,
    pub value: f64,
}
