use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour-coding level attached to a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Status {
    /// Human readable label ("Normal", "Warning", "Critical").
    pub fn label(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Warning => "Warning",
            Status::Critical => "Critical",
        }
    }

    /// Lowercase identifier, also used as the CSS modifier class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }

    /// Indicator colour used by cards, badges and bars.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Normal => "#10B981",
            Status::Warning => "#F59E0B",
            Status::Critical => "#EF4444",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Status::Normal.to_string(), "Normal");
        assert_eq!(Status::Warning.as_str(), "warning");
        assert_eq!(Status::Critical.label(), "Critical");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Critical).unwrap(), "\"critical\"");
        let parsed: Status = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Status::Warning);
    }
}
