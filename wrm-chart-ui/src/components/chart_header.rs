//! Chart header component with title and optional subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Secondary line under the title (e.g., "7-day prediction (m³)")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for chart cards showing title and optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 600;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #6B7280;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
