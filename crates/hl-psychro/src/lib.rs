//! hl-psychro: moist-air (psychrometric) property calculations for hortiload.
//!
//! Provides:
//! - `MoistAirModel` trait: the standard moist-air state conversions at a
//!   caller-supplied pressure
//! - `AshraeModel`: ASHRAE Handbook Fundamentals (SI) correlations
//! - `AirState`: immutable dry-bulb / RH / humidity ratio / enthalpy record
//! - `compute_air_state`: one-shot full state report for a single inlet condition
//!
//! # Architecture
//!
//! The rest of hortiload only talks to `MoistAirModel`. Any backend may be swapped in
//! provided its conversions are mutual inverses at fixed pressure: humidity ratio and
//! relative humidity at a temperature, enthalpy and dry bulb at a humidity ratio.
//!
//! # Example
//!
//! ```no_run
//! use hl_psychro::{AshraeModel, MoistAirModel};
//! use hl_core::units::pa;
//!
//! let model = AshraeModel::new();
//! let p = pa(101_325.0);
//! let w = model.hum_ratio_from_rel_hum(35.0, 0.30, p).unwrap();
//! let h = model.moist_air_enthalpy(35.0, w).unwrap();
//! println!("W = {w:.5} kg/kg, h = {h:.0} J/kg");
//! ```

pub mod ashrae;
pub mod calculator;
pub mod error;
pub mod model;
pub mod state;

// Re-exports for ergonomics
pub use ashrae::{AshraeModel, TEMPERATURE_RANGE_C};
pub use calculator::{AirStateReport, compute_air_state};
pub use error::{PsychroError, PsychroResult};
pub use model::MoistAirModel;
pub use state::AirState;
