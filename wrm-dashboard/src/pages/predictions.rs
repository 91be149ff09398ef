//! 7-day forecasts, model information and anomaly risk.

use dioxus::prelude::*;
use wrm_chart_ui::chart_data;
use wrm_chart_ui::components::{ChartContainer, ChartHeader, Skeleton};
use wrm_chart_ui::js_bridge;
use wrm_chart_ui::loader::use_simulated_load;
use wrm_chart_ui::theme;
use wrm_data::generate_prediction_bundle;
use wrm_data::status::Status;
use wrm_data::thresholds::Thresholds;

use super::PageHeader;

const WATER_LEVEL_FORECAST_ID: &str = "water-level-forecast";
const QUALITY_FORECAST_ID: &str = "quality-forecast";
const DEMAND_FORECAST_ID: &str = "demand-forecast";
const FORECAST_CHART_HEIGHT: u32 = 192;

const TRAINING_DATA: [&str; 4] = [
    "5 years of historical water quality data",
    "Weather patterns from 12 regional stations",
    "Consumption patterns from urban areas",
    "Seasonal variation factors",
];

const ALGORITHMS: [&str; 4] = [
    "LSTM Neural Networks for time series",
    "Gradient Boosting for classification",
    "Ensemble methods for final predictions",
    "Physics-informed neural networks",
];

const NEXT_STEPS: [&str; 3] = [
    "Continue monitoring key parameters",
    "Refine model with new data points",
    "Prepare contingency plans for demand peaks",
];

#[component]
pub fn Predictions() -> Element {
    let load = use_simulated_load(generate_prediction_bundle);

    use_effect(move || {
        if load.is_loading() {
            return;
        }
        let Some(bundle) = load.data() else {
            return;
        };
        js_bridge::render_line_chart(
            WATER_LEVEL_FORECAST_ID,
            &chart_data::forecast_data(&bundle.water_level),
            &chart_data::series_config(theme::PRIMARY, Some((8.0, 9.0)), FORECAST_CHART_HEIGHT, true),
        );
        js_bridge::render_line_chart(
            QUALITY_FORECAST_ID,
            &chart_data::forecast_data(&bundle.quality),
            &chart_data::series_config(theme::SECONDARY, Some((70.0, 100.0)), FORECAST_CHART_HEIGHT, true),
        );
        js_bridge::render_bar_chart(
            DEMAND_FORECAST_ID,
            &chart_data::forecast_data(&bundle.demand),
            &chart_data::series_config(theme::ACCENT, Some((800.0, 1300.0)), FORECAST_CHART_HEIGHT, false),
        );
    });

    let loading = load.is_loading();
    let bundle = load.data();
    let insight = |i: usize| match &bundle {
        Some(bundle) if !loading => bundle.insights[i].to_string(),
        _ => "Loading...".to_string(),
    };
    let anomaly_risk = bundle.as_ref().map(|b| b.anomaly_risk).unwrap_or(0);
    let confidence = bundle.as_ref().map(|b| b.confidence).unwrap_or(0);
    let anomaly_color = Thresholds::default().anomaly_status(anomaly_risk).color();
    let warning_color = Status::Warning.color();

    rsx! {
        div {
            class: "wrm-fade-in",
            PageHeader {
                title: "Predictive Analysis".to_string(),
                subtitle: "AI-powered predictions and insights for water resource management".to_string(),
                refresh_label: "Refresh Predictions".to_string(),
                loading,
                on_refresh: move |_| load.refresh(),
            }

            div {
                class: "wrm-grid-3",
                style: "margin-bottom: 24px;",
                ForecastCard {
                    title: "Water Level Forecast".to_string(),
                    subtitle: "7-day prediction".to_string(),
                    chart_id: WATER_LEVEL_FORECAST_ID.to_string(),
                    color: theme::PRIMARY.to_string(),
                    insight: insight(0),
                    loading,
                }
                ForecastCard {
                    title: "Quality Index Forecast".to_string(),
                    subtitle: "7-day prediction".to_string(),
                    chart_id: QUALITY_FORECAST_ID.to_string(),
                    color: theme::SECONDARY.to_string(),
                    insight: insight(1),
                    loading,
                }
                ForecastCard {
                    title: "Demand Forecast".to_string(),
                    subtitle: "7-day prediction (m³)".to_string(),
                    chart_id: DEMAND_FORECAST_ID.to_string(),
                    color: theme::ACCENT.to_string(),
                    insight: insight(2),
                    loading,
                }
            }

            div {
                class: "wrm-grid-3",
                div {
                    class: "wrm-card wrm-span-2",
                    h3 { style: "margin: 0 0 16px 0; font-size: 18px; font-weight: 600;", "📈 AI Model Information" }
                    if loading {
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px;",
                            Skeleton {}
                            Skeleton { width: "83%".to_string() }
                            Skeleton { width: "66%".to_string() }
                        }
                    } else {
                        p {
                            "Our predictive model uses a hybrid approach combining machine learning with physical hydrological models to accurately forecast water conditions."
                        }
                        div {
                            class: "wrm-grid-wide",
                            BulletList { title: "Training Data".to_string(), items: TRAINING_DATA.to_vec() }
                            BulletList { title: "Algorithms Used".to_string(), items: ALGORITHMS.to_vec() }
                        }
                        p {
                            style: "font-size: 14px; color: {theme::NEUTRAL_TEXT};",
                            "Model confidence score: "
                            span { style: "font-weight: 500; color: #1F2937;", "{confidence}%" }
                        }
                    }
                }
                div {
                    class: "wrm-card",
                    h3 { style: "margin: 0 0 16px 0; font-size: 18px; font-weight: 600;", "⚡ Prediction Insights" }
                    if loading {
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px;",
                            Skeleton {}
                            Skeleton { height: "8px".to_string() }
                            Skeleton { width: "75%".to_string() }
                        }
                    } else {
                        div {
                            style: "margin-bottom: 16px;",
                            div {
                                style: "display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 14px;",
                                span { style: "color: #4B5563;", "Anomaly Risk" }
                                span { style: "font-weight: 500;", "{anomaly_risk}%" }
                            }
                            div {
                                style: "height: 8px; border-radius: 9999px; background: #E5E7EB; overflow: hidden;",
                                div { style: "height: 100%; width: {anomaly_risk}%; background: {anomaly_color};" }
                            }
                        }
                        div {
                            style: "padding: 12px; border-radius: 6px; margin-bottom: 16px; background: {warning_color}1A;",
                            p { style: "margin: 0; font-size: 14px; font-weight: 500; color: {warning_color};", "⚠ Potential Anomalies" }
                            p { style: "margin: 4px 0 0 0; font-size: 12px;", "Monitoring for unusual patterns in water quality data." }
                        }
                        div {
                            style: "font-size: 14px;",
                            p { style: "margin: 0 0 8px 0; font-weight: 500;", "Next Steps:" }
                            ol {
                                style: "margin: 0; padding-left: 20px;",
                                for step in NEXT_STEPS {
                                    li { key: "{step}", style: "margin-bottom: 8px;", "{step}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ForecastCard(
    title: String,
    subtitle: String,
    chart_id: String,
    color: String,
    insight: String,
    loading: bool,
) -> Element {
    rsx! {
        div {
            class: "wrm-card",
            ChartHeader { title, subtitle }
            ChartContainer { id: chart_id, loading, height: FORECAST_CHART_HEIGHT }
            div {
                style: "margin-top: 16px; padding: 12px; border-radius: 6px; font-size: 14px; background: {color}0D;",
                span { style: "font-weight: 500; color: {color};", "Insight: " }
                "{insight}"
            }
        }
    }
}

#[component]
fn BulletList(title: String, items: Vec<&'static str>) -> Element {
    rsx! {
        div {
            style: "background: #F9FAFB; padding: 16px; border-radius: 6px;",
            h4 { style: "margin: 0 0 8px 0; font-weight: 500;", "{title}" }
            ul {
                style: "margin: 0; padding-left: 18px; font-size: 14px;",
                for item in items {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}
