//! Placeholder map of monitoring stations.

use dioxus::prelude::*;
use wrm_data::status::Status;

/// Station markers as (top %, left %, status).
const STATIONS: [(u32, u32, Status); 6] = [
    (20, 30, Status::Normal),
    (35, 45, Status::Normal),
    (55, 25, Status::Warning),
    (40, 70, Status::Normal),
    (70, 55, Status::Normal),
    (60, 80, Status::Critical),
];

/// Number of stations quoted in the caption.
pub const ACTIVE_STATIONS: u32 = 12;

#[component]
pub fn LocationsMap(loading: bool) -> Element {
    rsx! {
        div {
            style: "height: 400px; border-radius: 8px; overflow: hidden; position: relative; background: linear-gradient(135deg, #DBEAFE 0%, #D1FAE5 55%, #FEF3C7 100%);",
            if loading {
                div {
                    class: "wrm-pulse",
                    style: "height: 100%; display: flex; align-items: center; justify-content: center; color: #9CA3AF;",
                    "Loading map data..."
                }
            } else {
                for (i, (top, left, status)) in STATIONS.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "wrm-pulse",
                        title: "{status.label()}",
                        style: "position: absolute; top: {top}%; left: {left}%; width: 12px; height: 12px; border-radius: 9999px; background: {status.color()};",
                    }
                }
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: flex-end; background: linear-gradient(to bottom, transparent, rgba(17, 24, 39, 0.7));",
                    div {
                        style: "padding: 16px; color: #FFFFFF;",
                        h4 { style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 500;", "{ACTIVE_STATIONS} Active Monitoring Stations" }
                        p {
                            style: "margin: 0; font-size: 14px; color: #E5E7EB;",
                            "Real-time data from sensors across the region providing continuous water quality metrics"
                        }
                    }
                }
            }
        }
    }
}
