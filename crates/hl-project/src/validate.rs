//! Scenario validation logic.

use crate::schema::{SCHEMA_VERSION, Scenario};
use hl_core::pct_to_frac;
use hl_core::units::pa;
use hl_psychro::{AshraeModel, MoistAirModel, TEMPERATURE_RANGE_C};
use hl_weather::PeriodTargets;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field} ({reason})")]
    Missing { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn check_percent(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, "must be within [0, 100]"))
    }
}

fn check_temperature(field: &str, value: f64) -> Result<(), ValidationError> {
    if TEMPERATURE_RANGE_C.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            value,
            &format!(
                "must be within [{}, {}] °C",
                TEMPERATURE_RANGE_C.start(),
                TEMPERATURE_RANGE_C.end()
            ),
        ))
    }
}

/// The (temperature, RH) target must describe real moist air at the site pressure.
fn check_moist_air(
    field: &str,
    t_c: f64,
    rh_pct: f64,
    pressure_pa: f64,
) -> Result<(), ValidationError> {
    AshraeModel::new()
        .hum_ratio_from_rel_hum(t_c, pct_to_frac(rh_pct), pa(pressure_pa))
        .map(|_| ())
        .map_err(|e| invalid(field, t_c, &format!("no moist-air state at {rh_pct} % RH: {e}")))
}

fn validate_targets(
    period: &str,
    targets: &PeriodTargets,
    pressure_pa: f64,
) -> Result<(), ValidationError> {
    let pct = [
        ("rh_set_pct", targets.rh_set_pct),
        ("rh_cap_pct", targets.rh_cap_pct),
    ];
    for (name, value) in pct {
        if let Some(v) = value {
            check_percent(&format!("climate.{period}.{name}"), v)?;
        }
    }

    let temps = [
        ("t_set_c", targets.t_set_c),
        ("t_max_c", targets.t_max_c),
        ("t_min_c", targets.t_min_c),
    ];
    for (name, value) in temps {
        if let Some(v) = value {
            check_temperature(&format!("climate.{period}.{name}"), v)?;
        }
    }

    let pairs = [
        ("t_set_c", targets.t_set_c, targets.rh_set_pct),
        ("t_max_c", targets.t_max_c, targets.rh_cap_pct),
    ];
    for (name, t, rh) in pairs {
        if let (Some(t), Some(rh)) = (t, rh) {
            check_moist_air(&format!("climate.{period}.{name}"), t, rh, pressure_pa)?;
        }
    }

    if let (Some(t_min), Some(t_max)) = (targets.t_min_c, targets.t_max_c) {
        if t_min > t_max {
            return Err(invalid(
                &format!("climate.{period}.t_min_c"),
                t_min,
                "must not exceed t_max_c",
            ));
        }
    }
    Ok(())
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
            reason: "scenario needs a name".to_string(),
        });
    }

    if let Some(physics) = &scenario.physics {
        if !physics.pressure_pa.is_finite() || physics.pressure_pa <= 0.0 {
            return Err(invalid(
                "physics.pressure_pa",
                physics.pressure_pa,
                "must be positive",
            ));
        }
        let eta = physics.max_pad_efficiency;
        if !(eta > 0.0 && eta <= 1.0) {
            return Err(invalid(
                "physics.max_pad_efficiency",
                eta,
                "must be within (0, 1]",
            ));
        }
    }

    let pressure_pa = scenario.physics().pressure_pa;
    validate_targets("day", &scenario.climate.day, pressure_pa)?;
    validate_targets("night", &scenario.climate.night, pressure_pa)?;

    let gh = &scenario.greenhouse;
    if !gh.area_m2.is_finite() || gh.area_m2 <= 0.0 {
        return Err(invalid("greenhouse.area_m2", gh.area_m2, "must be positive"));
    }
    if !gh.airflow_m3_h.is_finite() || gh.airflow_m3_h < 0.0 {
        return Err(invalid(
            "greenhouse.airflow_m3_h",
            gh.airflow_m3_h,
            "must be non-negative",
        ));
    }
    for (field, value) in [
        ("greenhouse.cladd_ratio", gh.cladd_ratio),
        ("greenhouse.u_roof", gh.u_roof),
        ("greenhouse.u_leak", gh.u_leak),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(field, value, "must be non-negative"));
        }
    }
    check_percent("greenhouse.screen1_eff_pct", gh.screen1_eff_pct)?;
    check_percent("greenhouse.screen2_eff_pct", gh.screen2_eff_pct)?;

    let design = &scenario.design;
    if design.percentiles.is_empty() {
        return Err(ValidationError::Missing {
            field: "design.percentiles".to_string(),
            reason: "at least one percentile level is required".to_string(),
        });
    }
    for level in &design.percentiles {
        check_percent("design.percentiles", *level)?;
    }
    if !design.percentiles.contains(&design.peak_percentile) {
        return Err(invalid(
            "design.peak_percentile",
            design.peak_percentile,
            "must be one of design.percentiles",
        ));
    }
    if !design.storage_hours.is_finite() || design.storage_hours < 0.0 {
        return Err(invalid(
            "design.storage_hours",
            design.storage_hours,
            "must be non-negative",
        ));
    }

    Ok(())
}
