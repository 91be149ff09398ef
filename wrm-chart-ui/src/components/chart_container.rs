//! Chart container component with loading state.

use dioxus::prelude::*;

use super::Skeleton;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether the chart data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Height in pixels
    #[props(default = 300)]
    pub height: u32,
}

/// A fixed-height div for D3.js charts. While loading, a pulsing bar is shown
/// instead and the chart div is not mounted.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "height: 100%; display: flex; align-items: center; justify-content: center;",
                    Skeleton { width: "128px".to_string(), height: "16px".to_string() }
                }
            } else {
                div {
                    id: "{props.id}",
                    style: "width: 100%; height: 100%;",
                }
            }
        }
    }
}
