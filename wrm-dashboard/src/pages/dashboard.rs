//! Overview: headline metrics, water level trend, quality composition and
//! the monitoring station map.

use dioxus::prelude::*;
use wrm_chart_ui::chart_data;
use wrm_chart_ui::components::{
    ChartContainer, ChartHeader, LocationsMap, MetricCard, WaterQualityCard,
};
use wrm_chart_ui::js_bridge;
use wrm_chart_ui::loader::use_simulated_load;
use wrm_chart_ui::theme;
use wrm_data::models::{MetricsSnapshot, WaterLevelPoint};
use wrm_data::status::Status;
use wrm_data::MockGenerator;

use super::PageHeader;

const WATER_LEVEL_CHART_ID: &str = "water-level-chart";

#[derive(Debug, Clone, PartialEq)]
struct DashboardData {
    series: Vec<WaterLevelPoint>,
    metrics: MetricsSnapshot,
}

fn load_dashboard() -> DashboardData {
    let mut generator = MockGenerator::from_entropy();
    DashboardData {
        series: generator.water_level_series(),
        metrics: generator.metrics_snapshot(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let load = use_simulated_load(load_dashboard);

    // Re-render the area chart each time a load completes
    use_effect(move || {
        if load.is_loading() {
            return;
        }
        if let Some(data) = load.data() {
            js_bridge::render_area_chart(
                WATER_LEVEL_CHART_ID,
                &chart_data::water_level_data(&data.series),
                &chart_data::water_level_config(),
            );
        }
    });

    let loading = load.is_loading();
    let metrics = load.data().map(|data| data.metrics);
    let value = |f: fn(&MetricsSnapshot) -> String| {
        metrics.as_ref().map(f).unwrap_or_else(|| "0".to_string())
    };
    let status = |f: fn(&MetricsSnapshot) -> Status| metrics.as_ref().map(f).unwrap_or_default();

    rsx! {
        div {
            class: "wrm-fade-in",
            PageHeader {
                title: "Water Management Dashboard".to_string(),
                loading,
                on_refresh: move |_| load.refresh(),
            }

            div {
                class: "wrm-grid",
                style: "margin-bottom: 24px;",
                MetricCard {
                    title: "Water Level".to_string(),
                    value: value(|m| format!("{:.1}", m.water_level)),
                    unit: "m".to_string(),
                    status: status(|m| m.water_level_status),
                    icon: "💧".to_string(),
                    loading,
                }
                MetricCard {
                    title: "Water Quality Index".to_string(),
                    value: value(|m| m.quality_index.to_string()),
                    unit: "/100".to_string(),
                    status: status(|m| m.quality_status),
                    icon: "💧".to_string(),
                    loading,
                }
                MetricCard {
                    title: "Supply Risk".to_string(),
                    value: value(|m| m.supply_risk.to_string()),
                    unit: "%".to_string(),
                    status: status(|m| m.supply_risk_status),
                    icon: "⚠".to_string(),
                    loading,
                }
                MetricCard {
                    title: "Prediction Accuracy".to_string(),
                    value: value(|m| m.prediction_accuracy.to_string()),
                    unit: "%".to_string(),
                    status: status(|m| m.prediction_accuracy_status),
                    icon: "📈".to_string(),
                    loading,
                }
            }

            div {
                class: "wrm-grid-3",
                style: "margin-bottom: 24px;",
                div {
                    class: "wrm-card wrm-span-2",
                    ChartHeader { title: "Water Level Trends".to_string() }
                    ChartContainer { id: WATER_LEVEL_CHART_ID.to_string(), loading, height: 300 }
                    div {
                        style: "display: flex; gap: 24px; margin-top: 8px; font-size: 14px; color: {theme::NEUTRAL_TEXT};",
                        span {
                            style: "display: flex; align-items: center;",
                            span { style: "width: 12px; height: 12px; margin-right: 8px; border-radius: 2px; background: {theme::PRIMARY};" }
                            "Actual"
                        }
                        span {
                            style: "display: flex; align-items: center;",
                            span { style: "width: 12px; height: 12px; margin-right: 8px; border-radius: 2px; background: {theme::SECONDARY};" }
                            "Predicted"
                        }
                    }
                }
                WaterQualityCard { loading }
            }

            div {
                class: "wrm-card",
                ChartHeader { title: "Monitoring Locations".to_string() }
                LocationsMap { loading }
            }
        }
    }
}
