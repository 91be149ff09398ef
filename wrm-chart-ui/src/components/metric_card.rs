//! Headline metric card.

use dioxus::prelude::*;
use wrm_data::status::Status;

use super::{Skeleton, StatusDot};

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub title: String,
    /// Pre-formatted value
    pub value: String,
    pub unit: String,
    pub status: Status,
    /// Glyph shown in the top-right corner
    #[props(default = String::new())]
    pub icon: String,
    pub loading: bool,
}

/// Card with title, big value + unit and a status line.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            class: "wrm-card",
            if props.loading {
                div {
                    style: "display: flex; flex-direction: column; gap: 10px;",
                    Skeleton { width: "96px".to_string(), height: "16px".to_string() }
                    Skeleton { width: "64px".to_string(), height: "32px".to_string() }
                    Skeleton { width: "128px".to_string(), height: "16px".to_string() }
                }
            } else {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h3 { style: "margin: 0; font-size: 14px; font-weight: 400; color: #6B7280;", "{props.title}" }
                    span { style: "color: #9CA3AF;", "{props.icon}" }
                }
                div {
                    style: "display: flex; align-items: baseline;",
                    // keyed on the value so a new reading re-triggers the fade
                    span {
                        key: "{props.value}",
                        class: "wrm-fade-in",
                        style: "font-size: 24px; font-weight: 700;",
                        "{props.value}"
                    }
                    span { style: "margin-left: 4px; color: #6B7280;", "{props.unit}" }
                }
                div {
                    style: "display: flex; align-items: center; margin-top: 12px; font-size: 14px;",
                    StatusDot { status: props.status }
                    "{props.status.label()}"
                }
            }
        }
    }
}
