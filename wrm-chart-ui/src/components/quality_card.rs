//! Water quality composition donut with the overall score.

use dioxus::prelude::*;

use super::Skeleton;
use crate::chart_data;
use crate::js_bridge;

const DONUT_ID: &str = "quality-composition-donut";

/// Overall score printed in the middle of the donut.
pub const WATER_QUALITY_SCORE: u32 = 87;

#[component]
pub fn WaterQualityCard(loading: bool) -> Element {
    rsx! {
        div {
            class: "wrm-card",
            style: "height: 100%; display: flex; flex-direction: column; box-sizing: border-box;",
            h3 { style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 600;", "Water Quality Analysis" }
            p { style: "margin: 0 0 16px 0; font-size: 14px; color: #6B7280;", "Current composition and quality score" }

            if loading {
                div {
                    style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px;",
                    Skeleton { width: "128px".to_string(), height: "128px".to_string(), round: true }
                    Skeleton { width: "112px".to_string(), height: "16px".to_string() }
                }
            } else {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; gap: 16px; margin-bottom: 16px;",
                    div {
                        style: "position: relative; width: 128px; height: 128px;",
                        div {
                            id: DONUT_ID,
                            onmounted: move |_| {
                                js_bridge::render_donut_chart(
                                    DONUT_ID,
                                    &chart_data::composition_data(),
                                    &chart_data::donut_config(),
                                );
                            },
                        }
                        div {
                            class: "wrm-fade-in",
                            style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; pointer-events: none;",
                            span { style: "font-size: 28px; font-weight: 700;", "{WATER_QUALITY_SCORE}" }
                            span { style: "font-size: 12px; color: #6B7280;", "/100" }
                        }
                    }
                    ul {
                        style: "list-style: none; margin: 0; padding: 0; font-size: 12px;",
                        for slice in chart_data::QUALITY_COMPOSITION.iter() {
                            li {
                                key: "{slice.name}",
                                style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                                span { style: "width: 8px; height: 8px; border-radius: 9999px; background: {slice.color};" }
                                "{slice.name}"
                            }
                        }
                    }
                }
                div {
                    style: "background: #F0FDF4; color: #166534; padding: 12px; border-radius: 6px; font-size: 14px;",
                    strong { "Good water quality" }
                    ": All parameters are within the acceptable range for human consumption."
                }
            }
        }
    }
}
