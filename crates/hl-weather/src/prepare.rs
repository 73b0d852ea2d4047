//! Day/night classification and per-row target assignment.

use crate::policy::{ClimatePolicy, DayPeriod, PeriodTargets};
use crate::record::WeatherObservation;
use chrono::NaiveDateTime;

/// A weather observation classified into a period and carrying that period's targets.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRow {
    pub timestamp: NaiveDateTime,
    pub temperature_c: Option<f64>,
    pub rel_hum_pct: Option<f64>,
    pub solar_w_m2: Option<f64>,
    pub period: DayPeriod,
    pub targets: PeriodTargets,
}

impl WeatherRow {
    pub fn is_day(&self) -> bool {
        self.period.is_day()
    }
}

/// Classify every observation and attach the targets of its period.
///
/// Input order is preserved and no row is dropped here; incomplete rows are filtered
/// by the load model that needs the missing field.
pub fn prepare_weather(records: &[WeatherObservation], policy: &ClimatePolicy) -> Vec<WeatherRow> {
    let rows: Vec<WeatherRow> = records
        .iter()
        .map(|obs| {
            let period = DayPeriod::from_solar(obs.solar_w_m2);
            WeatherRow {
                timestamp: obs.timestamp,
                temperature_c: obs.temperature_c,
                rel_hum_pct: obs.rel_hum_pct,
                solar_w_m2: obs.solar_w_m2,
                period,
                targets: policy.targets(period),
            }
        })
        .collect();

    let day_rows = rows.iter().filter(|r| r.is_day()).count();
    tracing::debug!(
        rows = rows.len(),
        day_rows,
        night_rows = rows.len() - day_rows,
        "prepared weather rows"
    );
    rows
}

/// Counts and temperature extremes of a prepared series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSummary {
    pub rows: usize,
    pub day_rows: usize,
    pub night_rows: usize,
    pub t_min_c: Option<f64>,
    pub t_max_c: Option<f64>,
}

pub fn summarize(rows: &[WeatherRow]) -> WeatherSummary {
    let day_rows = rows.iter().filter(|r| r.is_day()).count();
    let temps = rows.iter().filter_map(|r| r.temperature_c);

    let (t_min_c, t_max_c) = temps.fold((None, None), |(lo, hi): (Option<f64>, Option<f64>), t| {
        (
            Some(lo.map_or(t, |v| v.min(t))),
            Some(hi.map_or(t, |v| v.max(t))),
        )
    });

    WeatherSummary {
        rows: rows.len(),
        day_rows,
        night_rows: rows.len() - day_rows,
        t_min_c,
        t_max_c,
    }
}
