//! Day/night climate targets.

use serde::{Deserialize, Serialize};

/// Which half of the day an hourly record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// Classify from solar radiation: positive radiation is day, anything else
    /// (zero, negative sensor noise, missing) is night.
    pub fn from_solar(solar_w_m2: Option<f64>) -> Self {
        match solar_w_m2 {
            Some(s) if s > 0.0 => Self::Day,
            _ => Self::Night,
        }
    }

    pub fn is_day(self) -> bool {
        matches!(self, Self::Day)
    }
}

/// Climate targets for one period of the day.
///
/// All fields are optional so a scenario only has to state the targets its load
/// methods actually use; rows lacking a target a model needs are skipped by that model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTargets {
    /// Temperature setpoint [°C]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_set_c: Option<f64>,
    /// Relative humidity setpoint [%]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rh_set_pct: Option<f64>,
    /// Maximum allowed relative humidity after pad treatment [%]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rh_cap_pct: Option<f64>,
    /// Maximum allowed temperature [°C]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_max_c: Option<f64>,
    /// Minimum allowed temperature [°C]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_min_c: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimatePolicy {
    pub day: PeriodTargets,
    pub night: PeriodTargets,
}

impl ClimatePolicy {
    pub fn targets(&self, period: DayPeriod) -> PeriodTargets {
        match period {
            DayPeriod::Day => self.day,
            DayPeriod::Night => self.night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_classification() {
        assert_eq!(DayPeriod::from_solar(Some(120.0)), DayPeriod::Day);
        assert_eq!(DayPeriod::from_solar(Some(0.0)), DayPeriod::Night);
        assert_eq!(DayPeriod::from_solar(Some(-2.0)), DayPeriod::Night);
        assert_eq!(DayPeriod::from_solar(None), DayPeriod::Night);
    }

    #[test]
    fn policy_selects_period() {
        let policy = ClimatePolicy {
            day: PeriodTargets {
                t_max_c: Some(28.0),
                ..Default::default()
            },
            night: PeriodTargets {
                t_max_c: Some(22.0),
                ..Default::default()
            },
        };
        assert_eq!(policy.targets(DayPeriod::Day).t_max_c, Some(28.0));
        assert_eq!(policy.targets(DayPeriod::Night).t_max_c, Some(22.0));
    }
}
