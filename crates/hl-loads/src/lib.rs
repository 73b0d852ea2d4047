//! hl-loads: greenhouse heating and evaporative cooling load models.
//!
//! Provides:
//! - [`dry_air_mass_flow`]: fan airflow to dry-air mass flow
//! - [`PadwallSolver`]: pad outlet state under a pad efficiency ceiling and a humidity cap
//! - [`build_hourly_cooling`]: hourly cooling duty under strict-setpoint and
//!   max-temperature policies
//! - [`build_hourly_heating`]: hourly screened transmission heat loss
//! - [`hst_volume_m3`]: hot-water storage volume for a heating demand
//!
//! Physical constants (pressure, maximum pad efficiency) travel in [`PadwallConfig`]
//! rather than module state, so alternate sites can be evaluated side by side.
//!
//! # Example
//!
//! ```no_run
//! use hl_loads::{PadwallConfig, PadwallSolver};
//! use hl_psychro::AshraeModel;
//!
//! let model = AshraeModel::new();
//! let solver = PadwallSolver::new(&model, PadwallConfig::default());
//! let out = solver.solve(35.0, 30.0, 80.0, 28.0).unwrap();
//! println!(
//!     "eta = {:.3}, outlet {:.1} °C / {:.0} %",
//!     out.efficiency_used,
//!     out.outlet.dry_bulb_c(),
//!     out.outlet.rel_hum_pct()
//! );
//! ```

pub mod common;
pub mod cooling;
pub mod error;
pub mod heating;
pub mod mass_flow;
pub mod padwall;
pub mod storage;

pub use cooling::{
    COL_Q_STRICT_SETPOINT, COL_Q_TMAX, CoolingInputs, CoolingModel, CoolingParams, CoolingRow,
    HourlyCoolingRow, build_hourly_cooling, build_hourly_cooling_par,
};
pub use error::{LoadError, LoadResult};
pub use heating::{
    COL_Q_HEAT, HeatingInputs, HeatingParams, HeatingRow, HeatingTarget, HourlyHeatingRow,
    build_hourly_heating,
};
pub use mass_flow::dry_air_mass_flow;
pub use padwall::{PadwallConfig, PadwallOutcome, PadwallSolver};
pub use storage::{StorageParams, hst_volume_m3};
