//! Scenario execution: weather in, hourly series and design summaries out.

use std::path::{Path, PathBuf};
use std::time::Instant;

use hl_loads::{
    COL_Q_HEAT, HourlyCoolingRow, HourlyHeatingRow, StorageParams, build_hourly_cooling,
    build_hourly_cooling_par, build_hourly_heating, hst_volume_m3,
};
use hl_project::Scenario;
use hl_psychro::AshraeModel;
use hl_results::{SummaryOutcome, SummarySpec, Table, summarize};
use hl_weather::{WeatherRow, WeatherSummary, load_weather_csv, prepare_weather};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::scenario_service;

pub const COOLING_LABEL: &str = "Cooling Design Summary";
pub const HEATING_LABEL: &str = "Heating Design Summary";

/// Options for running a scenario.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Evaluate cooling hours on the rayon thread pool.
    pub parallel: bool,
}

/// Hot-water storage sized from the heating fleet demand at the peak percentile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageSizing {
    pub peak_percentile: f64,
    pub demand_mw: f64,
    pub hours: f64,
    pub volume_m3: f64,
}

/// Wall-clock breakdown of one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunTimingSummary {
    pub cooling_time_s: f64,
    pub heating_time_s: f64,
    pub summary_time_s: f64,
    pub total_time_s: f64,
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub weather: WeatherSummary,
    pub cooling_rows: Vec<HourlyCoolingRow>,
    pub heating_rows: Vec<HourlyHeatingRow>,
    /// Column the cooling summary was taken over
    pub cooling_column: &'static str,
    pub cooling_summary: SummaryOutcome,
    pub heating_summary: SummaryOutcome,
    pub storage: Option<StorageSizing>,
    /// Human-readable notes about skipped steps
    pub diagnostics: Vec<String>,
    pub timing: RunTimingSummary,
}

impl ScenarioReport {
    pub fn cooling_table(&self) -> Table {
        Table::from_rows(&self.cooling_rows)
    }

    pub fn heating_table(&self) -> Table {
        Table::from_rows(&self.heating_rows)
    }

    /// Write hourly tables and summaries into `dir`, returning the files written.
    pub fn write_outputs(&self, dir: &Path) -> AppResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        let path = dir.join("hourly_cooling.csv");
        hl_results::save_table_csv(&self.cooling_table(), &path)?;
        written.push(path);

        let path = dir.join("hourly_heating.csv");
        hl_results::save_table_csv(&self.heating_table(), &path)?;
        written.push(path);

        for (stem, outcome) in [
            ("cooling_summary", &self.cooling_summary),
            ("heating_summary", &self.heating_summary),
        ] {
            let path = dir.join(format!("{stem}.json"));
            hl_results::save_summary_json(outcome, &path)?;
            written.push(path);

            if let Some(summary) = outcome.summary() {
                let path = dir.join(format!("{stem}.csv"));
                hl_results::save_summary_csv(summary, &path)?;
                written.push(path);
            }
        }

        if let Some(storage) = &self.storage {
            let path = dir.join("storage.json");
            let json = serde_json::to_string_pretty(storage)
                .map_err(|e| AppError::Results(e.to_string()))?;
            std::fs::write(&path, json)?;
            written.push(path);
        }

        tracing::info!(dir = %dir.display(), files = written.len(), "wrote run outputs");
        Ok(written)
    }
}

fn summary_spec(scenario: &Scenario, label: &str) -> SummarySpec {
    SummarySpec {
        label: label.to_string(),
        area_m2: scenario.greenhouse.area_m2,
        unit_count: scenario.greenhouse.unit_count,
        percentiles: scenario.design.percentiles.clone(),
    }
}

fn size_storage(
    scenario: &Scenario,
    heating_summary: &SummaryOutcome,
    diagnostics: &mut Vec<String>,
) -> AppResult<Option<StorageSizing>> {
    let peak = scenario.design.peak_percentile;
    let summary = match heating_summary {
        SummaryOutcome::Summary(s) => s,
        SummaryOutcome::Empty { message } => {
            diagnostics.push(format!("Storage sizing skipped.\n{message}"));
            return Ok(None);
        }
    };
    let Some(row) = summary.get(peak) else {
        diagnostics.push(format!(
            "Storage sizing skipped: percentile {peak} is not in the heating summary."
        ));
        return Ok(None);
    };

    let hours = scenario.design.storage_hours;
    let volume_m3 = hst_volume_m3(row.fleet_total_mw, hours, &StorageParams::default())?;
    Ok(Some(StorageSizing {
        peak_percentile: peak,
        demand_mw: row.fleet_total_mw,
        hours,
        volume_m3,
    }))
}

/// Run both load models over prepared weather rows and summarise them.
pub fn run_scenario(
    scenario: &Scenario,
    rows: &[WeatherRow],
    options: RunOptions,
) -> AppResult<ScenarioReport> {
    let total_start = Instant::now();
    scenario_service::validate_scenario(scenario)?;

    let model = AshraeModel::new();
    let config = scenario_service::padwall_config(scenario);
    let cooling_params = scenario_service::cooling_params(scenario);

    let cooling_start = Instant::now();
    let cooling_rows = if options.parallel {
        build_hourly_cooling_par(&model, config, cooling_params, rows)?
    } else {
        build_hourly_cooling(&model, config, cooling_params, rows)?
    };
    let cooling_time_s = cooling_start.elapsed().as_secs_f64();

    let heating_start = Instant::now();
    let heating_rows = build_hourly_heating(&scenario_service::heating_params(scenario), rows)?;
    let heating_time_s = heating_start.elapsed().as_secs_f64();

    let summary_start = Instant::now();
    let cooling_column = scenario_service::cooling_load_column(scenario.methods.cooling);
    let cooling_summary = summarize(
        &Table::from_rows(&cooling_rows),
        cooling_column,
        &summary_spec(scenario, COOLING_LABEL),
    )?;
    let heating_summary = summarize(
        &Table::from_rows(&heating_rows),
        COL_Q_HEAT,
        &summary_spec(scenario, HEATING_LABEL),
    )?;

    let mut diagnostics = Vec::new();
    for outcome in [&cooling_summary, &heating_summary] {
        if let SummaryOutcome::Empty { message } = outcome {
            diagnostics.push(message.clone());
        }
    }
    let storage = size_storage(scenario, &heating_summary, &mut diagnostics)?;
    let summary_time_s = summary_start.elapsed().as_secs_f64();

    tracing::info!(
        scenario = %scenario.name,
        cooling_rows = cooling_rows.len(),
        heating_rows = heating_rows.len(),
        parallel = options.parallel,
        "scenario run complete"
    );

    Ok(ScenarioReport {
        scenario_name: scenario.name.clone(),
        weather: hl_weather::summarize(rows),
        cooling_rows,
        heating_rows,
        cooling_column,
        cooling_summary,
        heating_summary,
        storage,
        diagnostics,
        timing: RunTimingSummary {
            cooling_time_s,
            heating_time_s,
            summary_time_s,
            total_time_s: total_start.elapsed().as_secs_f64(),
        },
    })
}

/// Load a scenario file and a weather CSV, then run.
pub fn run_from_paths(
    scenario_path: &Path,
    weather_path: &Path,
    options: RunOptions,
) -> AppResult<ScenarioReport> {
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let records = load_weather_csv(weather_path)?;
    let rows = prepare_weather(&records, &scenario.climate);
    run_scenario(&scenario, &rows, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_project::{DesignDef, GreenhouseDef, MethodsDef, SCHEMA_VERSION};
    use hl_weather::{ClimatePolicy, PeriodTargets, read_weather_csv};

    fn scenario() -> Scenario {
        let targets = PeriodTargets {
            t_set_c: Some(24.0),
            rh_set_pct: Some(70.0),
            rh_cap_pct: Some(80.0),
            t_max_c: Some(28.0),
            t_min_c: Some(18.0),
        };
        Scenario {
            version: SCHEMA_VERSION,
            name: "Unit".to_string(),
            description: None,
            climate: ClimatePolicy {
                day: targets,
                night: targets,
            },
            greenhouse: GreenhouseDef {
                unit_count: 10,
                ..Default::default()
            },
            methods: MethodsDef::default(),
            design: DesignDef {
                storage_hours: 4.0,
                ..Default::default()
            },
            physics: None,
        }
    }

    fn rows(s: &Scenario) -> Vec<WeatherRow> {
        let csv = "Local Time,Temperature (C),Relative Humidity (%),Solar Radiation (W/m²)\n\
                   2024-07-01 04:00:00,12.0,90,0\n\
                   2024-07-01 13:00:00,35.0,30,880\n\
                   2024-07-01 14:00:00,33.0,34,850\n";
        prepare_weather(&read_weather_csv(csv.as_bytes()).unwrap(), &s.climate)
    }

    #[test]
    fn run_produces_both_series() {
        let s = scenario();
        let report = run_scenario(&s, &rows(&s), RunOptions::default()).unwrap();

        assert_eq!(report.cooling_rows.len(), 3);
        assert_eq!(report.heating_rows.len(), 3);
        assert_eq!(report.cooling_column, "Q_active_W_m2_strict_setpoint");
        assert!(!report.cooling_summary.is_empty());

        let storage = report.storage.expect("heating summary is not empty");
        assert_eq!(storage.peak_percentile, 98.0);
        assert!(storage.demand_mw > 0.0);
        assert!(storage.volume_m3 > 0.0);
    }

    #[test]
    fn empty_weather_reports_diagnostics() {
        let s = scenario();
        let report = run_scenario(&s, &[], RunOptions::default()).unwrap();
        assert!(report.cooling_summary.is_empty());
        assert!(report.storage.is_none());
        assert!(
            report
                .diagnostics
                .iter()
                .any(|d| d.contains("Storage sizing skipped"))
        );
    }
}
