//! Scenario loading, saving, validation and mapping onto the load models.

use std::path::Path;

use hl_core::units::pa;
use hl_loads::{CoolingParams, HeatingParams, HeatingTarget, PadwallConfig};
use hl_project::{CoolingMethod, HeatingMethod, Scenario};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub name: String,
    pub unit_count: u32,
    pub total_area_m2: f64,
    pub cooling_method: CoolingMethod,
    pub heating_method: HeatingMethod,
    pub percentiles: Vec<f64>,
    pub storage_hours: f64,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load and validate a scenario. `.json` files are read as JSON, anything else as YAML.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario: Scenario = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Scenario(format!("Failed to parse scenario JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Scenario(format!("Failed to parse scenario YAML: {}", e)))?
    };

    validate_scenario(&scenario)?;
    tracing::info!(name = %scenario.name, path = %path.display(), "loaded scenario");
    Ok(scenario)
}

/// Save a scenario, choosing the format from the file extension.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    validate_scenario(scenario)?;
    let content = if is_json(path) {
        serde_json::to_string_pretty(scenario)
            .map_err(|e| AppError::Scenario(format!("Failed to serialize scenario: {}", e)))?
    } else {
        serde_yaml::to_string(scenario)
            .map_err(|e| AppError::Scenario(format!("Failed to serialize scenario: {}", e)))?
    };

    std::fs::write(path, content).map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    hl_project::validate_scenario(scenario)?;
    Ok(())
}

pub fn summarize_scenario(scenario: &Scenario) -> ScenarioSummary {
    let gh = &scenario.greenhouse;
    ScenarioSummary {
        name: scenario.name.clone(),
        unit_count: gh.unit_count,
        total_area_m2: gh.area_m2 * f64::from(gh.unit_count),
        cooling_method: scenario.methods.cooling,
        heating_method: scenario.methods.heating,
        percentiles: scenario.design.percentiles.clone(),
        storage_hours: scenario.design.storage_hours,
    }
}

pub fn padwall_config(scenario: &Scenario) -> PadwallConfig {
    let physics = scenario.physics();
    PadwallConfig {
        pressure: pa(physics.pressure_pa),
        max_pad_efficiency: physics.max_pad_efficiency,
    }
}

pub fn cooling_params(scenario: &Scenario) -> CoolingParams {
    CoolingParams {
        airflow_m3_h: scenario.greenhouse.airflow_m3_h,
        area_m2: scenario.greenhouse.area_m2,
    }
}

pub fn heating_params(scenario: &Scenario) -> HeatingParams {
    let gh = &scenario.greenhouse;
    HeatingParams {
        screen1_eff_pct: gh.screen1_eff_pct,
        screen2_eff_pct: gh.screen2_eff_pct,
        cladd: gh.cladd_ratio,
        u_leak: gh.u_leak,
        u_roof: gh.u_roof,
        target: match scenario.methods.heating {
            HeatingMethod::Setpoint => HeatingTarget::Setpoint,
            HeatingMethod::MinTemperature => HeatingTarget::MinTemperature,
        },
    }
}

/// Result column the cooling summary is taken over.
pub fn cooling_load_column(method: CoolingMethod) -> &'static str {
    match method {
        CoolingMethod::StrictSetpoint => hl_loads::COL_Q_STRICT_SETPOINT,
        CoolingMethod::MaxTemperature => hl_loads::COL_Q_TMAX,
    }
}
