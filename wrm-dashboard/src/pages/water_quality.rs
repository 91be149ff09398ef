//! Parameter cards with 31-day histories and the AI insights panel.

use dioxus::prelude::*;
use wrm_chart_ui::chart_data;
use wrm_chart_ui::components::{ChartContainer, SkeletonCard, StatusBadge, StatusDot};
use wrm_chart_ui::js_bridge;
use wrm_chart_ui::loader::use_simulated_load;
use wrm_chart_ui::theme;
use wrm_data::models::{HistoryPoint, ParameterKind, QualityParameter};
use wrm_data::status::Status;
use wrm_data::MockGenerator;

use super::PageHeader;

const HISTORY_CHART_HEIGHT: u32 = 128;

const CURRENT_ANALYSIS: [(Status, &str); 3] = [
    (Status::Normal, "All parameters are within acceptable limits for safe consumption."),
    (Status::Normal, "Turbidity is slightly higher than average but within normal range."),
    (Status::Warning, "pH levels show a slight downward trend over the past week."),
];

const RECOMMENDATIONS: [&str; 3] = [
    "Continue regular monitoring of pH levels to track the downward trend.",
    "Increase sampling frequency during expected rainfall to monitor turbidity changes.",
    "Schedule maintenance for filtration systems within the next two weeks.",
];

#[derive(Debug, Clone, PartialEq)]
struct ParameterReading {
    parameter: QualityParameter,
    history: Vec<HistoryPoint>,
}

fn history_chart_id(kind: ParameterKind) -> String {
    format!("history-{}", kind.slug())
}

fn load_readings() -> Vec<ParameterReading> {
    let mut generator = MockGenerator::from_entropy();
    generator
        .quality_parameters()
        .into_iter()
        .map(|parameter| {
            let history = generator.parameter_history(parameter.kind);
            ParameterReading { parameter, history }
        })
        .collect()
}

#[component]
pub fn WaterQuality() -> Element {
    let load = use_simulated_load(load_readings);

    use_effect(move || {
        if load.is_loading() {
            return;
        }
        let config = chart_data::series_config(theme::PRIMARY, None, HISTORY_CHART_HEIGHT, false);
        for reading in load.data().unwrap_or_default() {
            js_bridge::render_line_chart(
                &history_chart_id(reading.parameter.kind),
                &chart_data::history_data(&reading.history),
                &config,
            );
        }
    });

    let loading = load.is_loading();
    let readings = load.data().unwrap_or_default();

    rsx! {
        div {
            class: "wrm-fade-in",
            PageHeader {
                title: "Water Quality Monitoring".to_string(),
                subtitle: "Real-time analysis of water quality parameters".to_string(),
                loading,
                on_refresh: move |_| load.refresh(),
            }

            div {
                class: "wrm-grid-wide",
                style: "margin-bottom: 24px;",
                if loading {
                    for i in 0..ParameterKind::ALL.len() {
                        SkeletonCard { key: "{i}", chart_height: HISTORY_CHART_HEIGHT }
                    }
                } else {
                    for reading in readings {
                        ParameterCard { key: "{reading.parameter.kind.slug()}", reading: reading.clone() }
                    }
                }
            }

            InsightsPanel {}
        }
    }
}

#[component]
fn ParameterCard(reading: ParameterReading) -> Element {
    let parameter = &reading.parameter;
    let chart_id = history_chart_id(parameter.kind);

    rsx! {
        div {
            class: "wrm-card wrm-fade-in",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                h3 { style: "margin: 0; font-size: 16px; font-weight: 600;", "{parameter.name}" }
                StatusBadge { status: parameter.status }
            }
            div {
                style: "display: flex; align-items: baseline; margin-bottom: 8px;",
                span { style: "font-size: 24px; font-weight: 700;", "{parameter.display_value()}" }
                span { style: "margin-left: 4px; color: {theme::NEUTRAL_TEXT};", "{parameter.unit}" }
            }
            div {
                style: "font-size: 12px; color: {theme::NEUTRAL_TEXT}; margin-bottom: 16px;",
                "Ideal range: {parameter.ideal_range}"
            }
            ChartContainer { id: chart_id, height: HISTORY_CHART_HEIGHT }
        }
    }
}

#[component]
fn InsightsPanel() -> Element {
    rsx! {
        div {
            class: "wrm-card",
            style: "background: rgba(15, 82, 186, 0.05); border-color: rgba(15, 82, 186, 0.1);",
            div {
                style: "display: flex; align-items: flex-start; gap: 16px;",
                span {
                    style: "padding: 12px; border-radius: 8px; background: rgba(15, 82, 186, 0.1); color: {theme::PRIMARY}; font-size: 20px;",
                    "⚠"
                }
                div {
                    h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "AI Insights" }
                    p {
                        style: "margin: 0 0 16px 0;",
                        "Our AI analysis provides valuable insights into water quality trends and potential issues based on current and historical data."
                    }
                    div {
                        class: "wrm-grid-wide",
                        div {
                            class: "wrm-card",
                            style: "padding: 16px;",
                            h4 { style: "margin: 0 0 8px 0; font-weight: 500;", "Current Analysis" }
                            ul {
                                style: "list-style: none; margin: 0; padding: 0; font-size: 14px;",
                                for (i, (status, text)) in CURRENT_ANALYSIS.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        style: "display: flex; align-items: baseline; margin-bottom: 8px;",
                                        StatusDot { status: *status }
                                        "{text}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "wrm-card",
                            style: "padding: 16px;",
                            h4 { style: "margin: 0 0 8px 0; font-weight: 500;", "Recommendations" }
                            ul {
                                style: "list-style: none; margin: 0; padding: 0; font-size: 14px;",
                                for (i, text) in RECOMMENDATIONS.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        style: "display: flex; align-items: baseline; margin-bottom: 8px;",
                                        span { style: "display: inline-block; flex-shrink: 0; width: 8px; height: 8px; border-radius: 9999px; margin-right: 8px; background: {theme::PRIMARY};" }
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
