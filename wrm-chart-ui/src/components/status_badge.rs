//! Status indicators.

use dioxus::prelude::*;
use wrm_data::status::Status;

/// Small coloured circle.
#[component]
pub fn StatusDot(status: Status) -> Element {
    let style = format!(
        "display: inline-block; width: 8px; height: 8px; border-radius: 9999px; margin-right: 8px; background: {};",
        status.color()
    );
    rsx! {
        span { style: "{style}" }
    }
}

/// Pill with a tinted background and the status label.
#[component]
pub fn StatusBadge(status: Status) -> Element {
    let style = format!(
        "font-size: 12px; padding: 2px 8px; border-radius: 9999px; color: {0}; background: {0}1A;",
        status.color()
    );
    rsx! {
        span { class: "wrm-status-{status.as_str()}", style: "{style}", "{status.label()}" }
    }
}
