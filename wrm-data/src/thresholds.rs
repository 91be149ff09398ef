//! Status cut-offs applied at generation time.
//!
//! The defaults are demo values chosen for colour coding, not validated
//! hydrological limits. They can be overridden from a JSON file; omitted
//! fields keep their default.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wrm_utils::error::ThresholdError;

use crate::status::Status;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Water level (m) strictly below this is a warning.
    pub water_level_warning_below: f64,
    /// Water level (m) strictly above this is critical.
    pub water_level_critical_above: f64,
    /// Quality index strictly below this is a warning.
    pub quality_warning_below: u32,
    /// Supply risk (%) strictly above this is a warning.
    pub supply_risk_warning_above: u32,
    /// Supply risk (%) strictly above this is critical.
    pub supply_risk_critical_above: u32,
    /// Anomaly risk (%) at or above this is a warning.
    pub anomaly_warning_from: u32,
    /// Anomaly risk (%) at or above this is critical.
    pub anomaly_critical_from: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            water_level_warning_below: 8.2,
            water_level_critical_above: 9.0,
            quality_warning_below: 80,
            supply_risk_warning_above: 15,
            supply_risk_critical_above: 25,
            anomaly_warning_from: 10,
            anomaly_critical_from: 20,
        }
    }
}

impl Thresholds {
    pub fn water_level_status(&self, level: f64) -> Status {
        if level < self.water_level_warning_below {
            Status::Warning
        } else if level > self.water_level_critical_above {
            Status::Critical
        } else {
            Status::Normal
        }
    }

    pub fn quality_status(&self, index: u32) -> Status {
        if index < self.quality_warning_below {
            Status::Warning
        } else {
            Status::Normal
        }
    }

    pub fn supply_risk_status(&self, risk: u32) -> Status {
        if risk > self.supply_risk_critical_above {
            Status::Critical
        } else if risk > self.supply_risk_warning_above {
            Status::Warning
        } else {
            Status::Normal
        }
    }

    /// Prediction accuracy has no cut-offs and always reads as normal.
    pub fn accuracy_status(&self, _accuracy: u32) -> Status {
        Status::Normal
    }

    pub fn anomaly_status(&self, risk: u32) -> Status {
        if risk >= self.anomaly_critical_from {
            Status::Critical
        } else if risk >= self.anomaly_warning_from {
            Status::Warning
        } else {
            Status::Normal
        }
    }

    /// Check that every warning band sits inside its critical band.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !self.water_level_warning_below.is_finite() || !self.water_level_critical_above.is_finite() {
            return Err(ThresholdError("water level thresholds must be finite".to_string()));
        }
        if self.water_level_warning_below >= self.water_level_critical_above {
            return Err(ThresholdError(format!(
                "water level warning ({}) must be below critical ({})",
                self.water_level_warning_below, self.water_level_critical_above
            )));
        }
        if self.supply_risk_warning_above >= self.supply_risk_critical_above {
            return Err(ThresholdError(format!(
                "supply risk warning ({}) must be below critical ({})",
                self.supply_risk_warning_above, self.supply_risk_critical_above
            )));
        }
        if self.anomaly_warning_from >= self.anomaly_critical_from {
            return Err(ThresholdError(format!(
                "anomaly warning ({}) must be below critical ({})",
                self.anomaly_warning_from, self.anomaly_critical_from
            )));
        }
        Ok(())
    }

    /// Parse and validate thresholds from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let thresholds: Thresholds =
            serde_json::from_str(json).context("invalid thresholds JSON")?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load thresholds from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read thresholds file {}", path.display()))?;
        let thresholds = Self::from_json(&json)
            .with_context(|| format!("unable to load thresholds from {}", path.display()))?;
        log::info!("Loaded status thresholds from {}", path.display());
        Ok(thresholds)
    }
}
