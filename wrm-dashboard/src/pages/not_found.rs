use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use wrm_data::status::Status;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_hook(|| warn!("No route for /{}", segments.join("/")));
    let error_color = Status::Critical.color();

    rsx! {
        div {
            class: "wrm-fade-in",
            style: "min-height: 80vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 0 16px;",
            div {
                style: "margin-bottom: 24px; padding: 24px; border-radius: 9999px; font-size: 48px; color: {error_color}; background: {error_color}1A;",
                "!"
            }
            h1 { style: "margin: 0 0 8px 0; font-size: 32px; font-weight: 700;", "Page Not Found" }
            p {
                style: "max-width: 28rem; margin: 0 0 24px 0; color: #4B5563;",
                "The page you are looking for doesn't exist or has been moved to another location."
            }
            Link {
                to: Route::Dashboard {},
                class: "wrm-btn wrm-btn-primary".to_string(),
                "⌂ Back to Dashboard"
            }
        }
    }
}
