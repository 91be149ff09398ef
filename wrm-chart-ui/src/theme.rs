//! Palette shared by components and chart configs.

pub const PRIMARY: &str = "#0F52BA";
pub const PRIMARY_LIGHT: &str = "#4D7BD6";
pub const SECONDARY: &str = "#2E8B57";
pub const SECONDARY_LIGHT: &str = "#5BAD7D";
pub const ACCENT: &str = "#F59E0B";
pub const NEUTRAL_BORDER: &str = "#E5E7EB";
pub const NEUTRAL_TEXT: &str = "#6B7280";
pub const NEUTRAL_SKELETON: &str = "#E5E7EB";

/// Layout classes (sidebar breakpoints, card, skeleton pulse, fade-in).
pub static STYLESHEET: &str = include_str!("../assets/css/dashboard.css");
