//! JSON payloads for the D3.js chart functions.
//!
//! Data arrays use `label` for the x-axis; configs are camelCase to match the
//! JS side in `assets/js/`.

use serde::Serialize;
use serde_json::json;
use wrm_data::models::{ForecastPoint, HistoryPoint, WaterLevelPoint};

use crate::theme;

/// A labelled slice of the water quality composition donut.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// Share of each component in the overall quality score.
pub const QUALITY_COMPOSITION: [Slice; 6] = [
    Slice { name: "Dissolved Oxygen", value: 24, color: "#0F52BA" },
    Slice { name: "pH Level", value: 22, color: "#2E8B57" },
    Slice { name: "Turbidity", value: 18, color: "#F59E0B" },
    Slice { name: "TDS", value: 16, color: "#10B981" },
    Slice { name: "Temperature", value: 14, color: "#6366F1" },
    Slice { name: "Other", value: 6, color: "#9CA3AF" },
];

/// `[{label, actual, predicted}]` for the dashboard's area chart.
pub fn water_level_data(points: &[WaterLevelPoint]) -> String {
    let rows: Vec<serde_json::Value> = points
        .iter()
        .map(|p| {
            json!({
                "label": p.label,
                "actual": p.actual_level,
                "predicted": p.predicted_level,
            })
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

pub fn water_level_config() -> String {
    json!({
        "height": 300,
        "series": [
            { "key": "actual", "label": "Actual", "stroke": theme::PRIMARY, "fill": theme::PRIMARY_LIGHT, "fillOpacity": 0.3 },
            { "key": "predicted", "label": "Predicted", "stroke": theme::SECONDARY, "fill": theme::SECONDARY_LIGHT, "fillOpacity": 0.2 },
        ],
    })
    .to_string()
}

/// `[{label, value}]` for a 7-day forecast.
pub fn forecast_data(points: &[ForecastPoint]) -> String {
    let rows: Vec<serde_json::Value> = points
        .iter()
        .map(|p| json!({ "label": p.label, "value": p.value }))
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

/// `[{label, value}]` for a history sparkline, with the "Day " prefix dropped
/// so ticks stay short.
pub fn history_data(points: &[HistoryPoint]) -> String {
    let rows: Vec<serde_json::Value> = points
        .iter()
        .map(|p| {
            let tick = p.label.strip_prefix("Day ").unwrap_or(&p.label);
            json!({ "label": tick, "value": p.value })
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

pub fn composition_data() -> String {
    serde_json::to_string(&QUALITY_COMPOSITION).unwrap_or_default()
}

/// Config for single-series line and bar charts.
pub fn series_config(color: &str, y_domain: Option<(f64, f64)>, height: u32, show_dots: bool) -> String {
    json!({
        "color": color,
        "yDomain": y_domain.map(|(lo, hi)| [lo, hi]),
        "height": height,
        "showDots": show_dots,
    })
    .to_string()
}

pub fn donut_config() -> String {
    json!({ "size": 128, "innerRadius": 40, "outerRadius": 60, "padAngle": 0.03 }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_water_level_rows_keep_both_series() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let points = vec![WaterLevelPoint {
            label: "Jun 02".to_string(),
            date,
            actual_level: 8.51,
            predicted_level: 8.47,
        }];
        let parsed: serde_json::Value = serde_json::from_str(&water_level_data(&points)).unwrap();
        assert_eq!(parsed[0]["label"], "Jun 02");
        assert_eq!(parsed[0]["actual"], 8.51);
        assert_eq!(parsed[0]["predicted"], 8.47);
    }

    #[test]
    fn test_history_ticks_drop_day_prefix() {
        let points = vec![
            HistoryPoint { label: "Day 0".to_string(), value: 7.1 },
            HistoryPoint { label: "Day 30".to_string(), value: 7.3 },
        ];
        let parsed: serde_json::Value = serde_json::from_str(&history_data(&points)).unwrap();
        assert_eq!(parsed[0]["label"], "0");
        assert_eq!(parsed[1]["label"], "30");
    }

    #[test]
    fn test_composition_sums_to_one_hundred() {
        let total: u32 = QUALITY_COMPOSITION.iter().map(|s| s.value).sum();
        assert_eq!(total, 100);
        let parsed: serde_json::Value = serde_json::from_str(&composition_data()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_series_config_omits_missing_domain() {
        let parsed: serde_json::Value =
            serde_json::from_str(&series_config("#000", None, 128, false)).unwrap();
        assert!(parsed["yDomain"].is_null());

        let parsed: serde_json::Value =
            serde_json::from_str(&series_config("#000", Some((8.0, 9.0)), 192, true)).unwrap();
        assert_eq!(parsed["yDomain"][1], 9.0);
        assert_eq!(parsed["showDots"], true);
    }
}
