use clap::{Parser, Subcommand};
use hl_app::{AppResult, RunOptions, ScenarioReport, run_service, scenario_service};
use hl_core::units::constants::{MAX_PAD_EFFICIENCY, STANDARD_ATMOSPHERE_PA};
use hl_core::units::pa;
use hl_loads::{PadwallConfig, PadwallSolver};
use hl_psychro::{AshraeModel, compute_air_state};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hl-cli")]
#[command(about = "HortiLoad CLI - Greenhouse heating and padwall cooling design loads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run heating and cooling loads for a scenario over a weather file
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Hourly weather CSV
        weather_path: PathBuf,
        /// Directory for hourly tables and summaries (optional, prints only when absent)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Evaluate cooling hours in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Solve a single padwall outlet state
    Padwall {
        /// Inlet dry-bulb temperature [°C]
        #[arg(long)]
        t_in: f64,
        /// Inlet relative humidity [%]
        #[arg(long)]
        rh_in: f64,
        /// Humidity cap [% RH at the reference temperature]
        #[arg(long)]
        rh_cap: f64,
        /// Reference temperature for the cap [°C]
        #[arg(long)]
        t_ref: f64,
        /// Atmospheric pressure [Pa]
        #[arg(long, default_value_t = STANDARD_ATMOSPHERE_PA)]
        pressure: f64,
        /// Maximum pad efficiency
        #[arg(long, default_value_t = MAX_PAD_EFFICIENCY)]
        max_eff: f64,
    },
    /// Print the full moist-air state for a temperature and RH
    AirState {
        /// Dry-bulb temperature [°C]
        #[arg(long)]
        t: f64,
        /// Relative humidity [%]
        #[arg(long)]
        rh: f64,
        /// Atmospheric pressure [Pa]
        #[arg(long, default_value_t = STANDARD_ATMOSPHERE_PA)]
        pressure: f64,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            weather_path,
            out_dir,
            parallel,
        } => cmd_run(&scenario_path, &weather_path, out_dir.as_deref(), parallel),
        Commands::Padwall {
            t_in,
            rh_in,
            rh_cap,
            t_ref,
            pressure,
            max_eff,
        } => cmd_padwall(t_in, rh_in, rh_cap, t_ref, pressure, max_eff),
        Commands::AirState { t, rh, pressure } => cmd_air_state(t, rh, pressure),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = scenario_service::load_scenario(scenario_path)?;
    let summary = scenario_service::summarize_scenario(&scenario);
    tracing::info!(name = %summary.name, units = summary.unit_count, "scenario validated");

    println!("✓ Scenario is valid");
    println!("  Name: {}", summary.name);
    println!(
        "  Units: {} x {:.0} m² ({:.0} m² total)",
        summary.unit_count,
        scenario.greenhouse.area_m2,
        summary.total_area_m2
    );
    println!("  Cooling method: {:?}", summary.cooling_method);
    println!("  Heating method: {:?}", summary.heating_method);
    println!("  Percentiles: {:?}", summary.percentiles);
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    weather_path: &Path,
    out_dir: Option<&Path>,
    parallel: bool,
) -> AppResult<()> {
    println!("Running scenario: {}", scenario_path.display());
    let report =
        run_service::run_from_paths(scenario_path, weather_path, RunOptions { parallel })?;

    tracing::info!(
        scenario = %report.scenario_name,
        total_time_s = report.timing.total_time_s,
        "run finished"
    );
    print_report(&report);

    if let Some(dir) = out_dir {
        let written = report.write_outputs(dir)?;
        println!("✓ Wrote {} files to {}", written.len(), dir.display());
    }
    Ok(())
}

fn print_report(report: &ScenarioReport) {
    let w = &report.weather;
    println!(
        "✓ {} weather hours ({} day, {} night)",
        w.rows, w.day_rows, w.night_rows
    );
    println!(
        "  Hourly rows: {} cooling, {} heating",
        report.cooling_rows.len(),
        report.heating_rows.len()
    );

    for (label, outcome) in [
        (
            format!("{} ({})", run_service::COOLING_LABEL, report.cooling_column),
            &report.cooling_summary,
        ),
        (
            run_service::HEATING_LABEL.to_string(),
            &report.heating_summary,
        ),
    ] {
        println!();
        match outcome.summary() {
            Some(summary) => {
                println!("--- {} ---", label);
                println!(
                    "  {:>10}  {:>10}  {:>12}  {:>10}",
                    "pct", "W/m²", "kW/unit", "MW total"
                );
                for row in &summary.rows {
                    println!(
                        "  {:>10}  {:>10.2}  {:>12.2}  {:>10.3}",
                        row.percentile, row.load_w_m2, row.per_unit_kw, row.fleet_total_mw
                    );
                }
            }
            None => println!("--- {} ---\n  (no data)", label),
        }
    }

    println!();
    match &report.storage {
        Some(s) => println!(
            "Recommended HST volume: {:.0} m³ to store {} hours of heat at P{} ({:.3} MW)",
            s.volume_m3, s.hours, s.peak_percentile, s.demand_mw
        ),
        None => println!("No storage sizing"),
    }
    for note in &report.diagnostics {
        println!("! {}", note);
    }
    println!("  Total time: {:.3}s", report.timing.total_time_s);
}

fn cmd_padwall(
    t_in: f64,
    rh_in: f64,
    rh_cap: f64,
    t_ref: f64,
    pressure: f64,
    max_eff: f64,
) -> AppResult<()> {
    let model = AshraeModel::new();
    let config = PadwallConfig {
        pressure: pa(pressure),
        max_pad_efficiency: max_eff,
    };
    let out = PadwallSolver::new(&model, config).solve(t_in, rh_in, rh_cap, t_ref)?;
    tracing::debug!(efficiency = out.efficiency_used, "padwall solved");

    println!(
        "Inlet:      {:.2} °C, {:.1} % RH, W = {:.5} kg/kg, h = {:.0} J/kg",
        out.inlet.dry_bulb_c(),
        out.inlet.rel_hum_pct(),
        out.inlet.hum_ratio(),
        out.inlet.enthalpy()
    );
    println!("Wet bulb:   {:.2} °C", out.wet_bulb_c);
    println!("Cap W:      {:.5} kg/kg", out.cap_hum_ratio);
    match out.efficiency_limit {
        Some(limit) => println!(
            "Efficiency: {:.4} (cap limit {:.4}{})",
            out.efficiency_used,
            limit,
            if out.is_cap_limited(max_eff) {
                ", cap-limited"
            } else {
                ""
            }
        ),
        None => println!("Efficiency: 0 (inlet already saturated)"),
    }
    println!(
        "Outlet:     {:.2} °C, {:.1} % RH, W = {:.5} kg/kg, h = {:.0} J/kg",
        out.outlet.dry_bulb_c(),
        out.outlet.rel_hum_pct(),
        out.outlet.hum_ratio(),
        out.outlet.enthalpy()
    );
    Ok(())
}

fn cmd_air_state(t: f64, rh: f64, pressure: f64) -> AppResult<()> {
    let model = AshraeModel::new();
    let report = compute_air_state(&model, pa(pressure), t, rh)?;

    println!("Pressure:       {:.0} Pa", report.pressure_pa());
    println!("Dry bulb:       {:.2} °C", report.dry_bulb_c);
    println!("RH:             {:.1} %", report.rel_hum_pct);
    println!("Humidity ratio: {:.5} kg/kg", report.hum_ratio);
    println!("Enthalpy:       {:.0} J/kg", report.enthalpy_j_per_kg);
    println!("Wet bulb:       {:.2} °C", report.wet_bulb_c);
    println!("Dew point:      {:.2} °C", report.dew_point_c);
    println!("Density:        {:.4} kg/m³", report.density_kg_m3());
    Ok(())
}
