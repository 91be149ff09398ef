//! Reusable Dioxus RSX components for the WRM dashboard.

mod chart_container;
mod chart_header;
mod locations_map;
mod metric_card;
mod quality_card;
mod refresh_button;
mod skeleton;
mod status_badge;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use locations_map::LocationsMap;
pub use metric_card::MetricCard;
pub use quality_card::WaterQualityCard;
pub use refresh_button::RefreshButton;
pub use skeleton::{Skeleton, SkeletonCard};
pub use status_badge::{StatusBadge, StatusDot};
