//! Shared utility functions for WRM crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Duration, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a date as a short chart axis label, e.g. "Oct 07".
    pub fn format_chart_label(date: &NaiveDate) -> String {
        date.format("%b %d").to_string()
    }

    /// Shift a date by a signed number of days.
    pub fn offset_days(date: &NaiveDate, days: i64) -> NaiveDate {
        *date + Duration::days(days)
    }

    /// Day of the week counted from Sunday = 0 through Saturday = 6.
    pub fn weekday_index(date: &NaiveDate) -> u32 {
        date.weekday().num_days_from_sunday()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_chart_label() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            assert_eq!(format_chart_label(&date), "Mar 05");

            let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
            assert_eq!(format_chart_label(&date), "Dec 25");
        }

        #[test]
        fn test_offset_days_crosses_month() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
            assert_eq!(
                offset_days(&date, -1),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
            );
            assert_eq!(
                offset_days(&date, 31),
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
            );
        }

        #[test]
        fn test_weekday_index() {
            // 2024-06-02 was a Sunday
            let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
            assert_eq!(weekday_index(&sunday), 0);
            assert_eq!(weekday_index(&offset_days(&sunday, 1)), 1);
            assert_eq!(weekday_index(&offset_days(&sunday, 6)), 6);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_date("15/06/2023").is_err());
        }
    }
}

/// Route table and sidebar bookkeeping shared by the layout components.
pub mod nav {
    /// Top-level views of the dashboard.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Page {
        Dashboard,
        WaterQuality,
        Predictions,
        About,
        NotFound,
    }

    impl Page {
        /// Pages listed in the sidebar, in display order.
        pub const NAV_ITEMS: [Page; 4] = [
            Page::Dashboard,
            Page::WaterQuality,
            Page::Predictions,
            Page::About,
        ];

        /// Map a location path to a page. Unknown paths map to `NotFound`.
        /// A single trailing slash is ignored, and so is any query or fragment.
        pub fn from_path(path: &str) -> Page {
            let path = path.split(['?', '#']).next().unwrap_or("");
            let trimmed = if path.len() > 1 {
                path.strip_suffix('/').unwrap_or(path)
            } else {
                path
            };
            match trimmed {
                "/" | "" => Page::Dashboard,
                "/water-quality" => Page::WaterQuality,
                "/predictions" => Page::Predictions,
                "/about" => Page::About,
                _ => Page::NotFound,
            }
        }

        /// Canonical path for routable pages.
        pub fn path(&self) -> Option<&'static str> {
            match self {
                Page::Dashboard => Some("/"),
                Page::WaterQuality => Some("/water-quality"),
                Page::Predictions => Some("/predictions"),
                Page::About => Some("/about"),
                Page::NotFound => None,
            }
        }

        /// Label shown in the sidebar.
        pub fn nav_label(&self) -> &'static str {
            match self {
                Page::Dashboard => "Dashboard",
                Page::WaterQuality => "Water Quality",
                Page::Predictions => "Predictions",
                Page::About => "About",
                Page::NotFound => "Not Found",
            }
        }

        /// Title shown in the navbar header.
        pub fn title(&self) -> &'static str {
            match self {
                Page::Dashboard => "Dashboard",
                Page::WaterQuality => "Water Quality Monitoring",
                Page::Predictions => "Predictive Analysis",
                Page::About => "About the Project",
                Page::NotFound => "Water Resource Management AI",
            }
        }

        /// Whether this page's nav link should be highlighted for `current_path`.
        pub fn is_active(&self, current_path: &str) -> bool {
            self.path().is_some() && Page::from_path(current_path) == *self
        }
    }

    /// Open/closed state of the sidebar on narrow viewports.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SidebarState {
        open: bool,
    }

    impl SidebarState {
        pub fn is_open(&self) -> bool {
            self.open
        }

        pub fn toggle(&mut self) {
            self.open = !self.open;
        }

        pub fn close(&mut self) {
            self.open = false;
        }
    }

}

/// Error types
pub mod error {
    use std::fmt;

    /// Raised when a status threshold configuration is inconsistent.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ThresholdError(pub String);

    impl fmt::Display for ThresholdError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Threshold error: {}", self.0)
        }
    }

    impl std::error::Error for ThresholdError {}
}
