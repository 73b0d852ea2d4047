//! Shared application service layer for hortiload.
//!
//! Loads scenarios and weather files, runs the heating and cooling load models, and
//! reduces their hourly series to design percentiles and a storage size. The CLI is a
//! thin shell around this crate.

pub mod error;
pub mod run_service;
pub mod scenario_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use run_service::{
    COOLING_LABEL, HEATING_LABEL, RunOptions, RunTimingSummary, ScenarioReport, StorageSizing,
    run_from_paths, run_scenario,
};
pub use scenario_service::{
    ScenarioSummary, cooling_load_column, cooling_params, heating_params, load_scenario,
    padwall_config, save_scenario, summarize_scenario, validate_scenario,
};
