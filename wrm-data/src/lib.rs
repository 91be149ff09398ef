//! Synthetic data for the water resource management dashboard.
//!
//! Every series shown by the dashboard is generated in-process from a sine
//! wave plus uniform jitter. Nothing here does I/O and every generation call
//! is independent of the previous one.
//!
//! Randomness and "today" are injected through [`random::RandomSource`] and
//! [`clock::Clock`] so tests can pin outputs:
//!
//! ```rust
//! use wrm_data::clock::FixedClock;
//! use wrm_data::generator::MockGenerator;
//! use wrm_data::random::ConstantSource;
//! use wrm_data::status::Status;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
//! let mut generator = MockGenerator::new(ConstantSource(0.5), FixedClock(today));
//! let metrics = generator.metrics_snapshot();
//! assert_eq!(metrics.quality_index, 82);
//! assert_eq!(metrics.supply_risk_status, Status::Warning);
//! ```

pub mod clock;
pub mod generator;
pub mod models;
pub mod random;
pub mod status;
pub mod thresholds;

pub use generator::{
    generate_metrics_snapshot, generate_parameter_history, generate_prediction_bundle,
    generate_quality_parameters, generate_water_level_series, MockGenerator,
};
