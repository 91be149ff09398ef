//! Shared Dioxus components and D3.js bridge for the WRM dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chart_data`: JSON payload builders for those chart functions
//! - `loader`: the simulated delayed data load used by every data page
//! - `state`: Reactive AppState with Dioxus Signals
//! - `theme`: palette and the embedded stylesheet
//! - `components`: Reusable RSX components (cards, skeletons, containers, etc.)

pub mod chart_data;
pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod state;
pub mod theme;
