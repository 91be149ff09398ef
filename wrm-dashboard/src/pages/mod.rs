//! Routed views. Each data page owns its own simulated load.

mod about;
mod dashboard;
mod not_found;
mod predictions;
mod water_quality;

pub use about::About;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use predictions::Predictions;
pub use water_quality::WaterQuality;

use dioxus::prelude::*;
use wrm_chart_ui::components::RefreshButton;

/// Page title, optional tagline and the refresh control.
#[component]
fn PageHeader(
    title: String,
    #[props(default = String::new())] subtitle: String,
    #[props(default = "Refresh Data".to_string())] refresh_label: String,
    loading: bool,
    on_refresh: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 16px; margin-bottom: 24px;",
            div {
                h2 { style: "margin: 0; font-size: 24px; font-weight: 700;", "{title}" }
                if !subtitle.is_empty() {
                    p { style: "margin: 4px 0 0 0; color: #6B7280;", "{subtitle}" }
                }
            }
            RefreshButton {
                label: refresh_label,
                loading,
                onclick: move |evt| on_refresh.call(evt),
            }
        }
    }
}
