//! Padwall (direct evaporative pad) state solver.
//!
//! The pad moves air along the constant wet-bulb line from the inlet state toward
//! saturation at the inlet wet-bulb temperature. How far it gets is the efficiency,
//! limited by two independent ceilings:
//!
//! - the physical maximum pad efficiency from [`PadwallConfig`]
//! - a humidity-ratio cap, the humidity ratio of air at the cap RH and a reference
//!   temperature (the period's maximum allowed temperature)
//!
//! The pad runs at whichever ceiling is more restrictive and never below zero, so a cap
//! drier than the inlet air switches the pad off instead of dehumidifying.

use crate::common::{EPS_MOISTURE_SPAN, check_finite};
use crate::error::{LoadError, LoadResult};
use hl_core::pct_to_frac;
use hl_core::units::constants::{MAX_PAD_EFFICIENCY, standard_atmosphere};
use hl_core::units::{HumRatio, Pressure};
use hl_psychro::{AirState, MoistAirModel};

/// Process-wide physical settings for the padwall model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadwallConfig {
    /// Site atmospheric pressure
    pub pressure: Pressure,
    /// Physical ceiling of the pad efficiency (dimensionless)
    pub max_pad_efficiency: f64,
}

impl Default for PadwallConfig {
    fn default() -> Self {
        Self {
            pressure: standard_atmosphere(),
            max_pad_efficiency: MAX_PAD_EFFICIENCY,
        }
    }
}

/// Result of one padwall solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadwallOutcome {
    /// Efficiency the pad actually ran at, in `[0, max_pad_efficiency]`
    pub efficiency_used: f64,
    /// Efficiency that would exactly reach the cap; `None` when the pad has no moisture
    /// span to act on
    pub efficiency_limit: Option<f64>,
    pub wet_bulb_c: f64,
    pub inlet: AirState,
    /// Saturated air at the inlet wet-bulb temperature (the 100 % efficiency endpoint)
    pub saturation: AirState,
    pub outlet: AirState,
    pub cap_hum_ratio: HumRatio,
}

impl PadwallOutcome {
    /// Whether the humidity cap, not the pad's physical ceiling, set the efficiency.
    pub fn is_cap_limited(&self, max_pad_efficiency: f64) -> bool {
        self.efficiency_limit
            .is_some_and(|limit| limit < max_pad_efficiency)
    }
}

/// Solves the outlet state of a padwall for one inlet condition.
pub struct PadwallSolver<'a> {
    model: &'a dyn MoistAirModel,
    config: PadwallConfig,
}

impl<'a> PadwallSolver<'a> {
    pub fn new(model: &'a dyn MoistAirModel, config: PadwallConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &PadwallConfig {
        &self.config
    }

    /// Solve the pad outlet.
    ///
    /// Relative humidities are in percent. The cap humidity ratio is evaluated at
    /// `t_ref_c`, not at the inlet or outlet temperature.
    pub fn solve(
        &self,
        t_in_c: f64,
        rh_in_pct: f64,
        rh_cap_pct: f64,
        t_ref_c: f64,
    ) -> LoadResult<PadwallOutcome> {
        let p = self.config.pressure;
        let eta_max = self.config.max_pad_efficiency;
        if !(eta_max > 0.0 && eta_max <= 1.0) {
            return Err(LoadError::InvalidArg {
                what: "max pad efficiency must be in (0, 1]",
            });
        }
        let rh_in = pct_to_frac(rh_in_pct);

        let inlet = AirState::from_t_rh(self.model, t_in_c, rh_in, p)?;

        let wet_bulb_c = self.model.wet_bulb_from_rel_hum(t_in_c, rh_in, p)?;
        let saturation = AirState::from_t_rh(self.model, wet_bulb_c, 1.0, p)?;

        let cap_hum_ratio =
            self.model
                .hum_ratio_from_rel_hum(t_ref_c, pct_to_frac(rh_cap_pct), p)?;

        let span = saturation.hum_ratio() - inlet.hum_ratio();
        if span <= EPS_MOISTURE_SPAN {
            return Ok(PadwallOutcome {
                efficiency_used: 0.0,
                efficiency_limit: None,
                wet_bulb_c,
                inlet,
                saturation,
                outlet: inlet,
                cap_hum_ratio,
            });
        }

        let limit = (cap_hum_ratio - inlet.hum_ratio()) / span;
        check_finite(limit, "padwall efficiency limit")?;
        let efficiency_used = eta_max.min(limit).clamp(0.0, eta_max);

        let outlet = if efficiency_used == 0.0 {
            inlet
        } else {
            let w = inlet.hum_ratio() + efficiency_used * span;
            let h = inlet.enthalpy() + efficiency_used * (saturation.enthalpy() - inlet.enthalpy());
            AirState::from_h_w(self.model, h, w, p)?
        };

        Ok(PadwallOutcome {
            efficiency_used,
            efficiency_limit: Some(limit),
            wet_bulb_c,
            inlet,
            saturation,
            outlet,
            cap_hum_ratio,
        })
    }
}
