//! Shell around every page: sidebar navigation, header bar and the outlet.

use dioxus::prelude::*;
use wrm_chart_ui::js_bridge;
use wrm_chart_ui::state::AppState;
use wrm_chart_ui::theme;
use wrm_utils::nav::Page;

use crate::Route;

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "⌂",
        Page::WaterQuality => "💧",
        Page::Predictions => "📈",
        Page::About => "ℹ",
        Page::NotFound => "?",
    }
}

#[component]
pub fn Layout() -> Element {
    use_context_provider(AppState::new);
    // Chart scripts are loaded once for the whole session
    use_hook(js_bridge::init_charts);

    rsx! {
        style { {theme::STYLESHEET} }
        div {
            style: "display: flex; min-height: 100vh;",
            Sidebar {}
            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",
                Navbar {}
                main {
                    style: "flex: 1; padding: 24px; overflow-y: auto;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let path = use_route::<Route>().to_string();
    let open = state.sidebar_open();
    let aside_class = if open { "wrm-sidebar open" } else { "wrm-sidebar" };

    rsx! {
        if open {
            div {
                class: "wrm-backdrop",
                onclick: move |_| state.close_sidebar(),
            }
        }
        aside {
            class: aside_class,
            div {
                style: "display: flex; align-items: center; justify-content: space-between; height: 64px; padding: 0 24px; border-bottom: 1px solid {theme::NEUTRAL_BORDER};",
                Link {
                    to: Route::Dashboard {},
                    onclick: move |_| state.close_sidebar(),
                    style: "display: flex; align-items: center; gap: 8px; text-decoration: none;",
                    span {
                        style: "width: 32px; height: 32px; border-radius: 6px; display: flex; align-items: center; justify-content: center; color: #FFFFFF; background: linear-gradient(135deg, {theme::PRIMARY}, #0A3A85);",
                        "💧"
                    }
                    span { style: "font-weight: 600; font-size: 18px; color: {theme::PRIMARY};", "WaterAI" }
                }
                button {
                    class: "wrm-mobile-only",
                    style: "border: none; background: none; font-size: 20px; color: {theme::NEUTRAL_TEXT}; cursor: pointer;",
                    onclick: move |_| state.close_sidebar(),
                    "✕"
                }
            }
            nav {
                style: "padding: 16px 12px;",
                ul {
                    style: "list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 4px;",
                    for page in Page::NAV_ITEMS {
                        li {
                            key: "{page.nav_label()}",
                            Link {
                                to: Route::for_page(page),
                                class: if page.is_active(&path) { "wrm-nav-link active".to_string() } else { "wrm-nav-link".to_string() },
                                onclick: move |_| state.close_sidebar(),
                                span { "{page_icon(page)}" }
                                span { "{page.nav_label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let mut state = use_context::<AppState>();
    let path = use_route::<Route>().to_string();
    let title = Page::from_path(&path).title();

    rsx! {
        header {
            style: "background: #FFFFFF; border-bottom: 1px solid {theme::NEUTRAL_BORDER}; padding: 16px 24px; display: flex; align-items: center; justify-content: space-between;",
            div {
                style: "display: flex; align-items: center;",
                button {
                    class: "wrm-mobile-only",
                    style: "margin-right: 16px; border: none; background: none; font-size: 24px; color: {theme::NEUTRAL_TEXT}; cursor: pointer;",
                    onclick: move |_| state.toggle_sidebar(),
                    "☰"
                }
                h1 {
                    key: "{path}",
                    class: "wrm-fade-in",
                    style: "margin: 0; font-size: 20px; font-weight: 600; color: #1F2937;",
                    "{title}"
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                span {
                    style: "position: relative; font-size: 20px; color: {theme::NEUTRAL_TEXT};",
                    "🔔"
                    span { style: "position: absolute; top: 0; right: 0; width: 8px; height: 8px; border-radius: 9999px; background: {theme::ACCENT};" }
                }
                span {
                    style: "width: 32px; height: 32px; border-radius: 9999px; background: {theme::PRIMARY}; color: #FFFFFF; display: flex; align-items: center; justify-content: center;",
                    "👤"
                }
            }
        }
    }
}
