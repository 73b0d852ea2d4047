//! Scenario schema definitions.

use hl_weather::ClimatePolicy;
use serde::{Deserialize, Serialize};

/// Current scenario file version.
pub const SCHEMA_VERSION: u32 = 1;

pub const DEFAULT_PERCENTILES: [f64; 5] = [98.0, 95.0, 92.5, 90.0, 85.0];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub climate: ClimatePolicy,
    #[serde(default)]
    pub greenhouse: GreenhouseDef,
    #[serde(default)]
    pub methods: MethodsDef,
    #[serde(default)]
    pub design: DesignDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics: Option<PhysicsDef>,
}

/// Greenhouse envelope and air-handling units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GreenhouseDef {
    /// Airflow per unit [m³/h]
    pub airflow_m3_h: f64,
    /// Floor area served per unit [m²]
    pub area_m2: f64,
    pub unit_count: u32,
    /// Cladding to footprint area ratio
    pub cladd_ratio: f64,
    /// [W/(m²·K)]
    pub u_roof: f64,
    /// [W/(m²·K)]
    pub u_leak: f64,
    /// Energy screen efficiency [%]
    pub screen1_eff_pct: f64,
    /// Blackout screen efficiency [%]
    pub screen2_eff_pct: f64,
}

impl Default for GreenhouseDef {
    fn default() -> Self {
        Self {
            airflow_m3_h: 18_000.0,
            area_m2: 200.0,
            unit_count: 1,
            cladd_ratio: 1.2,
            u_roof: 6.9,
            u_leak: 0.7,
            screen1_eff_pct: 47.0,
            screen2_eff_pct: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoolingMethod {
    /// Cool to the temperature and RH setpoints.
    #[default]
    StrictSetpoint,
    /// Cool sensibly to the maximum temperature, RH unconstrained.
    MaxTemperature,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeatingMethod {
    #[default]
    Setpoint,
    MinTemperature,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MethodsDef {
    pub cooling: CoolingMethod,
    pub heating: HeatingMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DesignDef {
    /// Percentile levels reported, in output order
    pub percentiles: Vec<f64>,
    /// Level used to size storage; must be one of `percentiles`
    pub peak_percentile: f64,
    /// Hours of heating demand the storage tank must cover
    pub storage_hours: f64,
}

impl Default for DesignDef {
    fn default() -> Self {
        Self {
            percentiles: DEFAULT_PERCENTILES.to_vec(),
            peak_percentile: 98.0,
            storage_hours: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsDef {
    pub pressure_pa: f64,
    pub max_pad_efficiency: f64,
}

impl Default for PhysicsDef {
    fn default() -> Self {
        Self {
            pressure_pa: 101_325.0,
            max_pad_efficiency: 0.8,
        }
    }
}

impl Scenario {
    /// Physical settings, falling back to defaults when the file has none.
    pub fn physics(&self) -> PhysicsDef {
        self.physics.unwrap_or_default()
    }
}
