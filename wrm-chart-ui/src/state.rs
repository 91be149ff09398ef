//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by the layout with `use_context_provider`.
//! Child components retrieve it with `use_context::<AppState>()`. Page data is
//! not kept here: every page owns its own generated copy.

use dioxus::prelude::*;
use wrm_utils::nav::SidebarState;

/// Shared UI state for the dashboard shell.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Sidebar open/closed on narrow viewports
    pub sidebar: Signal<SidebarState>,
}

impl AppState {
    /// Create a new AppState with the sidebar closed.
    pub fn new() -> Self {
        Self {
            sidebar: Signal::new(SidebarState::default()),
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.write().toggle();
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar.write().close();
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.read().is_open()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
