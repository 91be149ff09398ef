//! Water Resource Management AI dashboard
//!
//! A single-page Dioxus app showing simulated water level, quality and
//! forecast data. Nothing is fetched: each page calls the `wrm-data`
//! generators after a short simulated delay and renders D3.js charts through
//! the `wrm-chart-ui` bridge.
//!
//! Routes:
//! - `/` dashboard overview
//! - `/water-quality` parameter cards with 31-day histories
//! - `/predictions` 7-day forecasts
//! - `/about` project description
//! - anything else: not found

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

mod layout;
mod pages;

use layout::Layout;
use pages::{About, Dashboard, NotFound, Predictions, WaterQuality};
use wrm_utils::nav::Page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},
        #[route("/water-quality")]
        WaterQuality {},
        #[route("/predictions")]
        Predictions {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Router target for a sidebar entry.
    fn for_page(page: Page) -> Route {
        match page {
            Page::Dashboard => Route::Dashboard {},
            Page::WaterQuality => Route::WaterQuality {},
            Page::Predictions => Route::Predictions {},
            Page::About => Route::About {},
            Page::NotFound => Route::NotFound { segments: Vec::new() },
        }
    }
}

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting WRM dashboard");
    launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
