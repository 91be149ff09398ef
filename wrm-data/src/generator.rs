//! Sine-plus-noise generators behind every chart and card.
//!
//! The formulas only aim to look plausible on screen: a slow sine trend,
//! uniform jitter around it, and cosmetic rounding. They are not a
//! forecasting model.

use log::debug;
use rand::rngs::StdRng;

use crate::clock::{Clock, SystemClock};
use crate::models::{
    ForecastPoint, HistoryPoint, MetricsSnapshot, ParameterKind, PredictionBundle,
    QualityParameter, WaterLevelPoint,
};
use crate::random::{self, RandomSource};
use crate::status::Status;
use crate::thresholds::Thresholds;
use wrm_utils::dates;

/// Days before today covered by the water level trend (today included, 15 points).
pub const WATER_LEVEL_LOOKBACK_DAYS: i64 = 14;
/// Length of every forecast series, starting today.
pub const FORECAST_DAYS: i64 = 7;
/// Days covered by a parameter history (31 points).
pub const HISTORY_DAYS: i64 = 30;

const BASE_WATER_LEVEL: f64 = 8.5;
const BASE_DEMAND: f64 = 1000.0;
const WEEKEND_DEMAND_FACTOR: f64 = 1.2;

pub const PREDICTION_INSIGHTS: [&str; 4] = [
    "Based on current rainfall patterns, water levels will remain stable for the next 5 days.",
    "Water quality is predicted to improve due to reduced industrial activity in the upcoming week.",
    "Weekend demand peaks are expected to be 20% higher than weekdays.",
    "Risk of water shortages is minimal (< 5%) for the foreseeable future.",
];

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn floor_u32(value: f64) -> u32 {
    value.floor().max(0.0) as u32
}

/// Base value and spread used for a parameter's history sparkline.
fn history_profile(kind: ParameterKind) -> (f64, f64) {
    match kind {
        ParameterKind::Ph => (7.2, 0.4),
        ParameterKind::DissolvedOxygen => (6.8, 1.2),
        ParameterKind::Turbidity => (2.5, 1.5),
        ParameterKind::TotalDissolvedSolids => (250.0, 80.0),
        ParameterKind::Temperature => (22.0, 3.0),
        ParameterKind::EColi => (5.0, 2.0),
    }
}

/// Produces synthetic series from an injected random source and clock.
#[derive(Debug, Clone)]
pub struct MockGenerator<R, C> {
    rng: R,
    clock: C,
    thresholds: Thresholds,
}

impl MockGenerator<StdRng, SystemClock> {
    /// Entropy-seeded generator reading the system clock.
    pub fn from_entropy() -> Self {
        Self::new(random::from_entropy(), SystemClock)
    }
}

impl<R: RandomSource, C: Clock> MockGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self {
            rng,
            clock,
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// 15 daily points from 14 days ago through today, oldest first.
    pub fn water_level_series(&mut self) -> Vec<WaterLevelPoint> {
        let today = self.clock.today();
        let series: Vec<WaterLevelPoint> = (0..=WATER_LEVEL_LOOKBACK_DAYS)
            .rev()
            .map(|days_ago| {
                let date = dates::offset_days(&today, -days_ago);
                let trend = (days_ago as f64 / 3.0).sin() * 0.5;
                let actual = round_to(BASE_WATER_LEVEL + trend + self.rng.jitter(0.3), 2);
                let predicted = round_to(actual + self.rng.jitter(0.2), 2);
                WaterLevelPoint {
                    label: dates::format_chart_label(&date),
                    date,
                    actual_level: actual,
                    predicted_level: predicted,
                }
            })
            .collect();
        debug!("Generated water level series of {} points", series.len());
        series
    }

    pub fn metrics_snapshot(&mut self) -> MetricsSnapshot {
        let water_level = round_to(BASE_WATER_LEVEL + self.rng.jitter(0.3), 1);
        let quality_index = floor_u32(75.0 + self.rng.next_unit() * 15.0);
        let supply_risk = floor_u32(10.0 + self.rng.next_unit() * 25.0);
        let prediction_accuracy = floor_u32(90.0 + self.rng.next_unit() * 8.0);

        let snapshot = MetricsSnapshot {
            water_level,
            water_level_status: self.thresholds.water_level_status(water_level),
            quality_index,
            quality_status: self.thresholds.quality_status(quality_index),
            supply_risk,
            supply_risk_status: self.thresholds.supply_risk_status(supply_risk),
            prediction_accuracy,
            prediction_accuracy_status: self.thresholds.accuracy_status(prediction_accuracy),
        };
        debug!("Generated metrics snapshot: {:?}", snapshot);
        snapshot
    }

    /// One reading per parameter in [`ParameterKind::ALL`] order.
    pub fn quality_parameters(&mut self) -> Vec<QualityParameter> {
        ParameterKind::ALL
            .into_iter()
            .map(|kind| QualityParameter {
                kind,
                name: kind.name(),
                value: self.draw_parameter(kind),
                unit: kind.unit(),
                status: Status::Normal,
                ideal_range: kind.ideal_range(),
            })
            .collect()
    }

    fn draw_parameter(&mut self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Ph => round_to(7.2 + self.rng.jitter(0.4), 1),
            ParameterKind::DissolvedOxygen => round_to(6.8 + self.rng.jitter(1.5), 1),
            ParameterKind::Turbidity => round_to(2.5 + self.rng.jitter(1.8), 1),
            ParameterKind::TotalDissolvedSolids => (250.0 + self.rng.next_unit() * 100.0).floor(),
            ParameterKind::Temperature => round_to(22.0 + self.rng.jitter(4.0), 1),
            ParameterKind::EColi => (self.rng.next_unit() * 10.0).floor(),
        }
    }

    /// Three 7-day forecasts starting today, plus insight text and summary scalars.
    pub fn prediction_bundle(&mut self) -> PredictionBundle {
        let today = self.clock.today();
        let weekday = dates::weekday_index(&today) as i64;

        let mut water_level = Vec::with_capacity(FORECAST_DAYS as usize);
        let mut quality = Vec::with_capacity(FORECAST_DAYS as usize);
        let mut demand = Vec::with_capacity(FORECAST_DAYS as usize);

        for day in 0..FORECAST_DAYS {
            let date = dates::offset_days(&today, day);
            let label = dates::format_chart_label(&date);
            let t = day as f64;

            let level = round_to(
                BASE_WATER_LEVEL + (t / 2.0).sin() * 0.3 + self.rng.jitter(0.2),
                1,
            );
            let index = (85.0 + (t / 3.0).sin() * 8.0 + self.rng.jitter(3.0)).floor();
            let weekend_factor = if (day + weekday) % 7 < 2 {
                WEEKEND_DEMAND_FACTOR
            } else {
                1.0
            };
            let volume = ((BASE_DEMAND + (t / 2.0).sin() * 100.0) * weekend_factor
                + self.rng.jitter(50.0))
            .floor();

            water_level.push(ForecastPoint { label: label.clone(), date, value: level });
            quality.push(ForecastPoint { label: label.clone(), date, value: index });
            demand.push(ForecastPoint { label, date, value: volume });
        }

        let anomaly_risk = floor_u32(self.rng.next_unit() * 20.0);
        let confidence = floor_u32(85.0 + self.rng.next_unit() * 10.0);
        debug!(
            "Generated prediction bundle (anomaly risk {}%, confidence {}%)",
            anomaly_risk, confidence
        );

        PredictionBundle {
            water_level,
            quality,
            demand,
            insights: PREDICTION_INSIGHTS,
            anomaly_risk,
            confidence,
        }
    }

    /// 31-point history for one parameter, labelled "Day 0" through "Day 30".
    pub fn parameter_history(&mut self, kind: ParameterKind) -> Vec<HistoryPoint> {
        let (base, variation) = history_profile(kind);
        (0..=HISTORY_DAYS)
            .rev()
            .map(|days_ago| {
                let raw = base
                    + (days_ago as f64 / 5.0).sin() * (variation / 2.0)
                    + self.rng.jitter(variation);
                let value = if base > 100.0 { raw.floor() } else { round_to(raw, 1) };
                HistoryPoint {
                    label: format!("Day {}", HISTORY_DAYS - days_ago),
                    value,
                }
            })
            .collect()
    }
}

pub fn generate_water_level_series() -> Vec<WaterLevelPoint> {
    MockGenerator::from_entropy().water_level_series()
}

pub fn generate_metrics_snapshot() -> MetricsSnapshot {
    MockGenerator::from_entropy().metrics_snapshot()
}

pub fn generate_quality_parameters() -> Vec<QualityParameter> {
    MockGenerator::from_entropy().quality_parameters()
}

pub fn generate_prediction_bundle() -> PredictionBundle {
    MockGenerator::from_entropy().prediction_bundle()
}

pub fn generate_parameter_history(kind: ParameterKind) -> Vec<HistoryPoint> {
    MockGenerator::from_entropy().parameter_history(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::random::{seeded, ConstantSource, SequenceSource};
    use chrono::NaiveDate;

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
    }

    fn midpoint_generator(today: NaiveDate) -> MockGenerator<ConstantSource, FixedClock> {
        MockGenerator::new(ConstantSource(0.5), FixedClock(today))
    }

    #[test]
    fn test_water_level_series_shape_and_bounds() {
        for seed in 0..50 {
            let mut generator = MockGenerator::new(seeded(seed), FixedClock(sunday()));
            let series = generator.water_level_series();
            assert_eq!(series.len(), 15);
            for point in &series {
                assert!(point.actual_level > 7.5 && point.actual_level < 9.5);
                assert!(point.predicted_level > 7.5 && point.predicted_level < 9.5);
                assert_eq!(point.label, dates::format_chart_label(&point.date));
            }
        }
    }

    #[test]
    fn test_water_level_series_dates_run_oldest_to_today() {
        let series = midpoint_generator(sunday()).water_level_series();
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());
        assert_eq!(series[0].label, "May 19");
        assert_eq!(series[14].date, sunday());
        assert_eq!(series[14].label, "Jun 02");
        for pair in series.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn test_water_level_series_without_jitter_follows_sine() {
        let series = midpoint_generator(sunday()).water_level_series();
        // Today has no trend offset
        assert_eq!(series[14].actual_level, 8.5);
        assert_eq!(series[14].predicted_level, 8.5);
        // 3 days ago: 8.5 + sin(1) * 0.5 = 8.9207...
        assert_eq!(series[11].actual_level, 8.92);
    }

    #[test]
    fn test_metrics_snapshot_midpoint_scenario() {
        let metrics = midpoint_generator(sunday()).metrics_snapshot();
        assert_eq!(metrics.water_level, 8.5);
        assert_eq!(metrics.water_level_status, Status::Normal);
        assert_eq!(metrics.quality_index, 82);
        assert_eq!(metrics.quality_status, Status::Normal);
        assert_eq!(metrics.supply_risk, 22);
        assert_eq!(metrics.supply_risk_status, Status::Warning);
        assert_eq!(metrics.prediction_accuracy, 94);
        assert_eq!(metrics.prediction_accuracy_status, Status::Normal);
    }

    #[test]
    fn test_metrics_status_matches_thresholds() {
        let thresholds = Thresholds::default();
        for seed in 0..100 {
            let metrics = MockGenerator::new(seeded(seed), FixedClock(sunday())).metrics_snapshot();
            assert_eq!(
                metrics.water_level_status,
                thresholds.water_level_status(metrics.water_level)
            );
            assert_eq!(metrics.quality_status, thresholds.quality_status(metrics.quality_index));
            assert_eq!(
                metrics.supply_risk_status,
                thresholds.supply_risk_status(metrics.supply_risk)
            );
            assert!((8.3..=8.7).contains(&metrics.water_level));
            assert!((75..=89).contains(&metrics.quality_index));
            assert!((10..=34).contains(&metrics.supply_risk));
            assert!((90..=97).contains(&metrics.prediction_accuracy));
        }
    }

    #[test]
    fn test_metrics_low_draws_give_warnings() {
        let mut generator = MockGenerator::new(ConstantSource(0.0), FixedClock(sunday()));
        let metrics = generator.metrics_snapshot();
        assert!(metrics.water_level < 8.5);
        assert_eq!(metrics.water_level_status, Status::Normal);
        assert_eq!(metrics.quality_index, 75);
        assert_eq!(metrics.quality_status, Status::Warning);
        assert_eq!(metrics.supply_risk, 10);
        assert_eq!(metrics.supply_risk_status, Status::Normal);
    }

    #[test]
    fn test_custom_thresholds_apply() {
        let thresholds = Thresholds {
            water_level_critical_above: 8.4,
            ..Thresholds::default()
        };
        let metrics = midpoint_generator(sunday())
            .with_thresholds(thresholds)
            .metrics_snapshot();
        assert_eq!(metrics.water_level_status, Status::Critical);
    }

    #[test]
    fn test_quality_parameters_fixed_order_and_bounds() {
        for seed in 0..50 {
            let params = MockGenerator::new(seeded(seed), FixedClock(sunday())).quality_parameters();
            let names: Vec<&str> = params.iter().map(|p| p.name).collect();
            assert_eq!(
                names,
                vec![
                    "pH Level",
                    "Dissolved Oxygen",
                    "Turbidity",
                    "Total Dissolved Solids",
                    "Temperature",
                    "E. coli",
                ]
            );
            let bounds = [
                (7.0, 7.4),
                (6.0, 7.6),
                (1.6, 3.4),
                (250.0, 349.0),
                (20.0, 24.0),
                (0.0, 9.0),
            ];
            for (param, (lo, hi)) in params.iter().zip(bounds) {
                assert!(
                    param.value >= lo && param.value <= hi,
                    "{} = {} outside [{}, {}]",
                    param.name,
                    param.value,
                    lo,
                    hi
                );
                assert_eq!(param.status, Status::Normal);
            }
            assert_eq!(params[3].value.fract(), 0.0);
            assert_eq!(params[5].value.fract(), 0.0);
        }
    }

    #[test]
    fn test_quality_parameters_units_and_ranges() {
        let params = midpoint_generator(sunday()).quality_parameters();
        assert_eq!(params[0].unit, "pH");
        assert_eq!(params[0].ideal_range, "6.5 - 8.5");
        assert_eq!(params[4].unit, "°C");
        assert_eq!(params[5].ideal_range, "0");
        assert_eq!(params[0].value, 7.2);
        assert_eq!(params[3].value, 300.0);
        assert_eq!(params[5].value, 5.0);
    }

    #[test]
    fn test_prediction_bundle_shape() {
        for seed in 0..50 {
            let bundle = MockGenerator::new(seeded(seed), FixedClock(sunday())).prediction_bundle();
            assert_eq!(bundle.water_level.len(), 7);
            assert_eq!(bundle.quality.len(), 7);
            assert_eq!(bundle.demand.len(), 7);
            assert_eq!(bundle.insights, PREDICTION_INSIGHTS);
            assert!(bundle.anomaly_risk <= 19);
            assert!((85..=94).contains(&bundle.confidence));
        }
    }

    #[test]
    fn test_prediction_bundle_dates_start_today() {
        let bundle = midpoint_generator(sunday()).prediction_bundle();
        assert_eq!(bundle.water_level[0].date, sunday());
        assert_eq!(bundle.demand[6].date, NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
        assert_eq!(bundle.quality[1].label, "Jun 03");
        assert_eq!(bundle.water_level[0].value, 8.5);
        assert_eq!(bundle.quality[0].value, 85.0);
        assert_eq!(bundle.anomaly_risk, 10);
        assert_eq!(bundle.confidence, 90);
    }

    #[test]
    fn test_weekend_multiplier_from_sunday() {
        // Sunday: offsets 0 and 1 land on (i + 0) % 7 < 2
        let bundle = midpoint_generator(sunday()).prediction_bundle();
        let demand: Vec<f64> = bundle.demand.iter().map(|p| p.value).collect();
        assert_eq!(demand[0], 1200.0);
        assert_eq!(demand[1], 1257.0);
        assert_eq!(demand[2], 1084.0);
    }

    #[test]
    fn test_weekend_multiplier_from_saturday() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let bundle = midpoint_generator(saturday).prediction_bundle();
        let demand: Vec<f64> = bundle.demand.iter().map(|p| p.value).collect();
        assert_eq!(demand[0], 1000.0);
        assert_eq!(demand[1], 1257.0);
        // (2 + 6) % 7 == 1, still boosted
        assert_eq!(demand[2], 1300.0);
        assert_eq!(demand[3], 1099.0);
    }

    #[test]
    fn test_parameter_history_shape() {
        for kind in ParameterKind::ALL {
            let (base, variation) = history_profile(kind);
            let history = MockGenerator::new(seeded(3), FixedClock(sunday())).parameter_history(kind);
            assert_eq!(history.len(), 31);
            assert_eq!(history[0].label, "Day 0");
            assert_eq!(history[30].label, "Day 30");
            for point in &history {
                assert!(point.value >= base - variation - 0.1);
                assert!(point.value <= base + variation + 0.1);
            }
        }
    }

    #[test]
    fn test_parameter_history_integral_for_large_bases() {
        let history = MockGenerator::new(seeded(11), FixedClock(sunday()))
            .parameter_history(ParameterKind::TotalDissolvedSolids);
        assert!(history.iter().all(|p| p.value.fract() == 0.0));

        let history = midpoint_generator(sunday()).parameter_history(ParameterKind::Ph);
        assert_eq!(history[30].value, 7.2);
    }

    #[test]
    fn test_consecutive_calls_vary_but_keep_shape() {
        let mut generator = MockGenerator::new(
            SequenceSource::new(vec![0.1, 0.9, 0.3, 0.7]),
            FixedClock(sunday()),
        );
        let first = generator.water_level_series();
        let second = generator.water_level_series();
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn test_entropy_generators_are_total() {
        assert_eq!(generate_water_level_series().len(), 15);
        assert_eq!(generate_quality_parameters().len(), 6);
        assert_eq!(generate_prediction_bundle().demand.len(), 7);
        assert_eq!(generate_parameter_history(ParameterKind::EColi).len(), 31);
        let metrics = generate_metrics_snapshot();
        assert!(metrics.quality_index >= 75);
    }
}
