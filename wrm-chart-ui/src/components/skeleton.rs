//! Pulsing placeholders shown while data loads.

use dioxus::prelude::*;

use crate::theme;

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonProps {
    #[props(default = "100%".to_string())]
    pub width: String,
    #[props(default = "16px".to_string())]
    pub height: String,
    /// Draw a circle instead of a rounded bar
    #[props(default = false)]
    pub round: bool,
}

/// A single grey placeholder bar.
#[component]
pub fn Skeleton(props: SkeletonProps) -> Element {
    let radius = if props.round { "9999px" } else { "4px" };
    let style = format!(
        "width: {}; height: {}; background: {}; border-radius: {};",
        props.width,
        props.height,
        theme::NEUTRAL_SKELETON,
        radius
    );

    rsx! {
        div { class: "wrm-pulse", style: "{style}" }
    }
}

/// Card-shaped placeholder: title bar, value bar, caption bar and an optional
/// chart block.
#[component]
pub fn SkeletonCard(#[props(default = 0)] chart_height: u32) -> Element {
    rsx! {
        div {
            class: "wrm-card",
            div {
                style: "display: flex; flex-direction: column; gap: 10px;",
                Skeleton { width: "128px".to_string(), height: "20px".to_string() }
                Skeleton { width: "80px".to_string(), height: "32px".to_string() }
                Skeleton { height: "16px".to_string() }
                if chart_height > 0 {
                    Skeleton { height: format!("{}px", chart_height) }
                }
            }
        }
    }
}
