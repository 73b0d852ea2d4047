//! Hourly heating series.
//!
//! Steady-state transmission loss through the roof, reduced by energy screens:
//! the first screen is drawn day and night, the blackout screen only at night.
//!
//! `Q = (U_scr · cladd + U_leak) · (T_target − T_out)` [W/m² footprint] while the
//! outdoor temperature is below the target, zero otherwise.

use crate::common::{format_timestamp, is_percent};
use crate::error::{LoadError, LoadResult};
use chrono::NaiveDateTime;
use hl_core::pct_to_frac;
use hl_results::{Cell, TableRow};
use hl_weather::WeatherRow;
use serde::{Deserialize, Serialize};

pub const COL_Q_HEAT: &str = "Q_heat_W_m2";

/// Which temperature the greenhouse is heated to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingTarget {
    /// Heat to the period's temperature setpoint.
    #[default]
    Setpoint,
    /// Only keep the period's minimum temperature.
    MinTemperature,
}

impl HeatingTarget {
    fn pick(self, row: &WeatherRow) -> Option<f64> {
        match self {
            Self::Setpoint => row.targets.t_set_c,
            Self::MinTemperature => row.targets.t_min_c,
        }
    }
}

/// Envelope parameters of the greenhouse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingParams {
    /// Energy screen efficiency [%]
    pub screen1_eff_pct: f64,
    /// Blackout screen efficiency [%], night only
    pub screen2_eff_pct: f64,
    /// Cladding to footprint area ratio
    pub cladd: f64,
    /// Leakage loss coefficient [W/(m²·K)]
    pub u_leak: f64,
    /// Roof transmission coefficient [W/(m²·K)]
    pub u_roof: f64,
    pub target: HeatingTarget,
}

impl Default for HeatingParams {
    fn default() -> Self {
        Self {
            screen1_eff_pct: 0.0,
            screen2_eff_pct: 0.0,
            cladd: 1.2,
            u_leak: 0.7,
            u_roof: 6.9,
            target: HeatingTarget::Setpoint,
        }
    }
}

impl HeatingParams {
    fn validate(&self) -> LoadResult<()> {
        if !is_percent(self.screen1_eff_pct) || !is_percent(self.screen2_eff_pct) {
            return Err(LoadError::InvalidArg {
                what: "screen efficiencies must be within [0, 100] %",
            });
        }
        let coefficients = [self.cladd, self.u_leak, self.u_roof];
        if coefficients.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(LoadError::InvalidArg {
                what: "envelope coefficients must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Roof U-value behind the screens drawn in this period [W/(m²·K)].
    pub fn screened_u_value(&self, is_day: bool) -> f64 {
        let u_scr1 = self.u_roof * (1.0 - pct_to_frac(self.screen1_eff_pct));
        if is_day {
            u_scr1
        } else {
            u_scr1 * (1.0 - pct_to_frac(self.screen2_eff_pct))
        }
    }

    /// Heat demand [W/m²] for one hour.
    pub fn heat_demand_w_m2(&self, t_out_c: f64, t_target_c: f64, is_day: bool) -> f64 {
        if t_out_c < t_target_c {
            (self.screened_u_value(is_day) * self.cladd + self.u_leak) * (t_target_c - t_out_c)
        } else {
            0.0
        }
    }
}

/// A weather hour with an outdoor temperature and a heating target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingRow {
    pub timestamp: NaiveDateTime,
    pub t_out_c: f64,
    pub is_day: bool,
    pub t_target_c: f64,
}

/// Lazy pass over weather rows yielding only rows the heating model can use.
#[derive(Debug, Clone)]
pub struct HeatingInputs<'a> {
    rows: std::slice::Iter<'a, WeatherRow>,
    target: HeatingTarget,
}

impl<'a> HeatingInputs<'a> {
    pub fn new(rows: &'a [WeatherRow], target: HeatingTarget) -> Self {
        Self {
            rows: rows.iter(),
            target,
        }
    }
}

impl Iterator for HeatingInputs<'_> {
    type Item = HeatingRow;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.target;
        self.rows.by_ref().find_map(|row| {
            let t_out_c = row.temperature_c.filter(|t| t.is_finite())?;
            let t_target_c = target.pick(row).filter(|t| t.is_finite())?;
            Some(HeatingRow {
                timestamp: row.timestamp,
                t_out_c,
                is_day: row.is_day(),
                t_target_c,
            })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.rows.size_hint().1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyHeatingRow {
    pub timestamp: NaiveDateTime,
    pub t_out_c: f64,
    pub is_day: bool,
    pub t_target_c: f64,
    pub u_scr: f64,
    pub q_heat_w_m2: f64,
}

impl TableRow for HourlyHeatingRow {
    fn columns() -> &'static [&'static str] {
        &["timestamp", "T_out_C", "is_day", "T_target", "U_scr", COL_Q_HEAT]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(format_timestamp(&self.timestamp)),
            self.t_out_c.into(),
            self.is_day.into(),
            self.t_target_c.into(),
            self.u_scr.into(),
            self.q_heat_w_m2.into(),
        ]
    }
}

/// Build the hourly heating series, skipping rows without temperature or target.
pub fn build_hourly_heating(
    params: &HeatingParams,
    rows: &[WeatherRow],
) -> LoadResult<Vec<HourlyHeatingRow>> {
    params.validate()?;

    let out: Vec<HourlyHeatingRow> = HeatingInputs::new(rows, params.target)
        .map(|row| HourlyHeatingRow {
            timestamp: row.timestamp,
            t_out_c: row.t_out_c,
            is_day: row.is_day,
            t_target_c: row.t_target_c,
            u_scr: params.screened_u_value(row.is_day),
            q_heat_w_m2: params.heat_demand_w_m2(row.t_out_c, row.t_target_c, row.is_day),
        })
        .collect();

    tracing::debug!(
        input_rows = rows.len(),
        skipped = rows.len() - out.len(),
        heating_hours = out.iter().filter(|r| r.q_heat_w_m2 > 0.0).count(),
        "built hourly heating series"
    );
    Ok(out)
}
