//! Hourly active-cooling series.
//!
//! Each retained weather hour is classified on its own:
//!
//! - idle when the outdoor temperature is at or below the period's maximum temperature:
//!   the pad is off, the outlet equals the outdoor air and both duties are zero
//! - active otherwise: the padwall solver runs with its cap referenced at the maximum
//!   temperature, and the remaining duty is computed under two target policies
//!
//! The strict-setpoint policy cools the pad outlet down to the enthalpy of the setpoint
//! (temperature and RH). The max-temperature policy only removes sensible heat down to the
//! maximum temperature at the pad outlet humidity ratio. Both duties are floored at zero.

use crate::common::{format_timestamp, is_percent};
use crate::error::{LoadError, LoadResult};
use crate::mass_flow::dry_air_mass_flow;
use crate::padwall::{PadwallConfig, PadwallSolver};
use chrono::NaiveDateTime;
use hl_core::pct_to_frac;
use hl_psychro::{AirState, MoistAirModel, TEMPERATURE_RANGE_C};
use hl_results::{Cell, TableRow};
use hl_weather::WeatherRow;
use rayon::prelude::*;
use uom::si::mass_rate::kilogram_per_second;

pub const COL_Q_STRICT_SETPOINT: &str = "Q_active_W_m2_strict_setpoint";
pub const COL_Q_TMAX: &str = "Q_active_W_m2_Tmax";

/// Ventilation parameters of one cooling unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingParams {
    /// Fan airflow per unit [m³/h]
    pub airflow_m3_h: f64,
    /// Footprint area served per unit [m²]
    pub area_m2: f64,
}

impl Default for CoolingParams {
    fn default() -> Self {
        Self {
            airflow_m3_h: 18_000.0,
            area_m2: 200.0,
        }
    }
}

impl CoolingParams {
    fn validate(&self) -> LoadResult<()> {
        if !self.airflow_m3_h.is_finite() || self.airflow_m3_h < 0.0 {
            return Err(LoadError::InvalidArg {
                what: "airflow must be finite and non-negative",
            });
        }
        if !self.area_m2.is_finite() || self.area_m2 <= 0.0 {
            return Err(LoadError::InvalidArg {
                what: "area must be finite and positive",
            });
        }
        Ok(())
    }

    pub fn vent_intensity_m3h_m2(&self) -> f64 {
        self.airflow_m3_h / self.area_m2
    }
}

/// A weather hour with every field the cooling model needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingRow {
    pub timestamp: NaiveDateTime,
    pub t_out_c: f64,
    pub rh_out_pct: f64,
    pub solar_w_m2: Option<f64>,
    pub t_set_c: f64,
    pub rh_set_pct: f64,
    pub t_max_c: f64,
    pub rh_cap_pct: f64,
}

impl CoolingRow {
    /// Populated and physically plausible fields only; anything else is not a cooling row.
    ///
    /// Temperatures must lie inside the psychrometric range, so sentinel values such as
    /// `-999` drop the hour instead of failing the series.
    pub fn from_weather(row: &WeatherRow) -> Option<Self> {
        let t = &row.targets;
        let cooling = Self {
            timestamp: row.timestamp,
            t_out_c: row.temperature_c?,
            rh_out_pct: row.rel_hum_pct?,
            solar_w_m2: row.solar_w_m2,
            t_set_c: t.t_set_c?,
            rh_set_pct: t.rh_set_pct?,
            t_max_c: t.t_max_c?,
            rh_cap_pct: t.rh_cap_pct?,
        };

        let plausible = [cooling.t_out_c, cooling.t_set_c, cooling.t_max_c]
            .iter()
            .all(|v| TEMPERATURE_RANGE_C.contains(v))
            && [cooling.rh_out_pct, cooling.rh_set_pct, cooling.rh_cap_pct]
                .iter()
                .all(|v| is_percent(*v));
        plausible.then_some(cooling)
    }

    pub fn needs_cooling(&self) -> bool {
        self.t_out_c > self.t_max_c
    }
}

/// Lazy pass over weather rows yielding only complete cooling rows.
///
/// Cloning restarts the pass from where the clone was taken.
#[derive(Debug, Clone)]
pub struct CoolingInputs<'a> {
    rows: std::slice::Iter<'a, WeatherRow>,
}

impl<'a> CoolingInputs<'a> {
    pub fn new(rows: &'a [WeatherRow]) -> Self {
        Self { rows: rows.iter() }
    }
}

impl Iterator for CoolingInputs<'_> {
    type Item = CoolingRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.by_ref().find_map(CoolingRow::from_weather)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.rows.size_hint().1)
    }
}

/// One hour of the cooling series. Field order follows the result table columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyCoolingRow {
    pub timestamp: NaiveDateTime,
    pub t_out_c: f64,
    pub rh_out_pct: f64,
    pub solar_w_m2: Option<f64>,
    pub t_set_c: f64,
    pub rh_set_pct: f64,
    pub t_max_c: f64,
    pub rh_cap_pct: f64,
    pub eta_used: f64,
    pub t_pw_c: f64,
    pub rh_pw_pct: f64,
    pub h_out_j_kg: f64,
    pub h_pw_j_kg: f64,
    pub h_set_j_kg: f64,
    pub h_tmax_same_w_j_kg: f64,
    pub duty_strict_setpoint_j_kg: f64,
    pub duty_tmax_j_kg: f64,
    pub mdot_dry_air_kg_s: f64,
    pub q_strict_setpoint_w_m2: f64,
    pub q_tmax_w_m2: f64,
    pub airflow_m3_h: f64,
    pub area_m2: f64,
    pub vent_intensity_m3h_m2: f64,
}

impl TableRow for HourlyCoolingRow {
    fn columns() -> &'static [&'static str] {
        &[
            "timestamp",
            "T_out_C",
            "RH_out_pct",
            "Solar_W_m2",
            "T_set_C",
            "RH_set_pct",
            "T_max_C",
            "RH_cap_pct",
            "eta_used",
            "T_pw_C",
            "RH_pw_pct",
            "h_out_J_kgDA",
            "h_pw_J_kgDA",
            "h_set_J_kgDA",
            "h_tmax_sameW_J_kgDA",
            "active_J_kg_strict_setpoint",
            "active_J_kg_Tmax",
            "m_dot_dryair_kg_s",
            COL_Q_STRICT_SETPOINT,
            COL_Q_TMAX,
            "airflow_m3_h",
            "area_m2",
            "vent_intensity_m3h_m2",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(format_timestamp(&self.timestamp)),
            self.t_out_c.into(),
            self.rh_out_pct.into(),
            self.solar_w_m2.into(),
            self.t_set_c.into(),
            self.rh_set_pct.into(),
            self.t_max_c.into(),
            self.rh_cap_pct.into(),
            self.eta_used.into(),
            self.t_pw_c.into(),
            self.rh_pw_pct.into(),
            self.h_out_j_kg.into(),
            self.h_pw_j_kg.into(),
            self.h_set_j_kg.into(),
            self.h_tmax_same_w_j_kg.into(),
            self.duty_strict_setpoint_j_kg.into(),
            self.duty_tmax_j_kg.into(),
            self.mdot_dry_air_kg_s.into(),
            self.q_strict_setpoint_w_m2.into(),
            self.q_tmax_w_m2.into(),
            self.airflow_m3_h.into(),
            self.area_m2.into(),
            self.vent_intensity_m3h_m2.into(),
        ]
    }
}

/// Evaluates single cooling hours against one model, configuration and unit.
pub struct CoolingModel<'a> {
    model: &'a dyn MoistAirModel,
    config: PadwallConfig,
    params: CoolingParams,
}

impl<'a> CoolingModel<'a> {
    pub fn new(
        model: &'a dyn MoistAirModel,
        config: PadwallConfig,
        params: CoolingParams,
    ) -> LoadResult<Self> {
        params.validate()?;
        Ok(Self {
            model,
            config,
            params,
        })
    }

    pub fn evaluate(&self, row: &CoolingRow) -> LoadResult<HourlyCoolingRow> {
        let p = self.config.pressure;
        let outdoor = AirState::from_t_rh(self.model, row.t_out_c, pct_to_frac(row.rh_out_pct), p)?;

        let (eta_used, pad_out, rh_pw_pct) = if row.needs_cooling() {
            let pad = PadwallSolver::new(self.model, self.config).solve(
                row.t_out_c,
                row.rh_out_pct,
                row.rh_cap_pct,
                row.t_max_c,
            )?;
            (pad.efficiency_used, pad.outlet, pad.outlet.rel_hum_pct())
        } else {
            (0.0, outdoor, row.rh_out_pct)
        };

        let set_point = AirState::from_t_rh(self.model, row.t_set_c, pct_to_frac(row.rh_set_pct), p)?;
        let h_tmax_same_w = self
            .model
            .moist_air_enthalpy(row.t_max_c, pad_out.hum_ratio())?;

        let (duty_strict, duty_tmax) = if row.needs_cooling() {
            (
                (pad_out.enthalpy() - set_point.enthalpy()).max(0.0),
                (pad_out.enthalpy() - h_tmax_same_w).max(0.0),
            )
        } else {
            (0.0, 0.0)
        };

        let mdot = dry_air_mass_flow(
            self.model,
            p,
            self.params.airflow_m3_h,
            row.t_out_c,
            row.rh_out_pct,
        )?
        .get::<kilogram_per_second>();

        Ok(HourlyCoolingRow {
            timestamp: row.timestamp,
            t_out_c: row.t_out_c,
            rh_out_pct: row.rh_out_pct,
            solar_w_m2: row.solar_w_m2,
            t_set_c: row.t_set_c,
            rh_set_pct: row.rh_set_pct,
            t_max_c: row.t_max_c,
            rh_cap_pct: row.rh_cap_pct,
            eta_used,
            t_pw_c: if row.needs_cooling() {
                pad_out.dry_bulb_c()
            } else {
                row.t_out_c
            },
            rh_pw_pct,
            h_out_j_kg: outdoor.enthalpy(),
            h_pw_j_kg: pad_out.enthalpy(),
            h_set_j_kg: set_point.enthalpy(),
            h_tmax_same_w_j_kg: h_tmax_same_w,
            duty_strict_setpoint_j_kg: duty_strict,
            duty_tmax_j_kg: duty_tmax,
            mdot_dry_air_kg_s: mdot,
            q_strict_setpoint_w_m2: mdot * duty_strict / self.params.area_m2,
            q_tmax_w_m2: mdot * duty_tmax / self.params.area_m2,
            airflow_m3_h: self.params.airflow_m3_h,
            area_m2: self.params.area_m2,
            vent_intensity_m3h_m2: self.params.vent_intensity_m3h_m2(),
        })
    }
}

/// Build the hourly cooling series from prepared weather rows.
///
/// Rows missing any required field are skipped; the output keeps input order.
pub fn build_hourly_cooling(
    model: &dyn MoistAirModel,
    config: PadwallConfig,
    params: CoolingParams,
    rows: &[WeatherRow],
) -> LoadResult<Vec<HourlyCoolingRow>> {
    let cooling = CoolingModel::new(model, config, params)?;
    let out = CoolingInputs::new(rows)
        .map(|row| cooling.evaluate(&row))
        .collect::<LoadResult<Vec<_>>>()?;

    log_series(rows, &out);
    Ok(out)
}

/// Same as [`build_hourly_cooling`], evaluating hours on the rayon thread pool.
pub fn build_hourly_cooling_par(
    model: &dyn MoistAirModel,
    config: PadwallConfig,
    params: CoolingParams,
    rows: &[WeatherRow],
) -> LoadResult<Vec<HourlyCoolingRow>> {
    let cooling = CoolingModel::new(model, config, params)?;
    let inputs: Vec<CoolingRow> = CoolingInputs::new(rows).collect();
    let out = inputs
        .par_iter()
        .map(|row| cooling.evaluate(row))
        .collect::<LoadResult<Vec<_>>>()?;

    log_series(rows, &out);
    Ok(out)
}

fn has_out_of_range_temperature(row: &WeatherRow) -> bool {
    [row.temperature_c, row.targets.t_set_c, row.targets.t_max_c]
        .iter()
        .flatten()
        .any(|t| !TEMPERATURE_RANGE_C.contains(t))
}

fn log_series(rows: &[WeatherRow], out: &[HourlyCoolingRow]) {
    let active = out.iter().filter(|r| r.t_out_c > r.t_max_c).count();
    let out_of_range = rows
        .iter()
        .filter(|r| has_out_of_range_temperature(r))
        .count();
    if out_of_range > 0 {
        tracing::warn!(
            out_of_range,
            "skipped weather hours with temperatures outside the psychrometric range"
        );
    }
    tracing::debug!(
        input_rows = rows.len(),
        skipped = rows.len() - out.len(),
        out_of_range,
        active,
        "built hourly cooling series"
    );
}
