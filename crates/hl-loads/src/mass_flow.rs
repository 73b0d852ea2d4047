//! Volumetric airflow to dry-air mass flow.

use crate::common::check_finite;
use crate::error::LoadResult;
use hl_core::pct_to_frac;
use hl_core::units::{MassRate, Pressure, kgps};
use hl_psychro::MoistAirModel;
use uom::si::mass_density::kilogram_per_cubic_meter;

/// Dry-air mass flow [kg dry air/s] for a fan moving `airflow_m3_h` of air at the
/// given inlet state.
///
/// Moist density already includes the vapour mass, so the moist mass flow is divided
/// by `1 + W` to get the dry-air basis that all enthalpies are expressed on.
/// A non-positive airflow is a stopped fan and gives exactly zero.
pub fn dry_air_mass_flow(
    model: &dyn MoistAirModel,
    pressure: Pressure,
    airflow_m3_h: f64,
    t_c: f64,
    rh_pct: f64,
) -> LoadResult<MassRate> {
    check_finite(airflow_m3_h, "airflow")?;
    if airflow_m3_h <= 0.0 {
        return Ok(kgps(0.0));
    }

    let w = model.hum_ratio_from_rel_hum(t_c, pct_to_frac(rh_pct), pressure)?;
    let rho_moist = model
        .moist_air_density(t_c, w, pressure)?
        .get::<kilogram_per_cubic_meter>();

    let mdot_moist = rho_moist * airflow_m3_h / 3600.0;
    let mdot_dry = mdot_moist / (1.0 + w);
    check_finite(mdot_dry, "dry-air mass flow")?;

    Ok(kgps(mdot_dry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::units::constants::standard_atmosphere;
    use hl_psychro::AshraeModel;
    use uom::si::mass_rate::kilogram_per_second;

    fn mdot(airflow: f64, t: f64, rh: f64) -> f64 {
        dry_air_mass_flow(&AshraeModel::new(), standard_atmosphere(), airflow, t, rh)
            .unwrap()
            .get::<kilogram_per_second>()
    }

    #[test]
    fn stopped_fan_is_zero() {
        assert_eq!(mdot(0.0, 30.0, 50.0), 0.0);
        assert_eq!(mdot(-500.0, 30.0, 50.0), 0.0);
    }

    #[test]
    fn typical_fan() {
        // 18 000 m³/h of 30 °C / 50 % air
        assert!((mdot(18_000.0, 30.0, 50.0) - 5.7002).abs() < 2e-3);
        assert!((mdot(18_000.0, 35.0, 30.0) - 5.6322).abs() < 2e-3);
    }

    #[test]
    fn proportional_to_airflow() {
        let a = mdot(9_000.0, 25.0, 60.0);
        let b = mdot(18_000.0, 25.0, 60.0);
        assert!((b - 2.0 * a).abs() < 1e-12);
    }

    #[test]
    fn non_finite_airflow_rejected() {
        let result = dry_air_mass_flow(
            &AshraeModel::new(),
            standard_atmosphere(),
            f64::NAN,
            25.0,
            50.0,
        );
        assert!(result.is_err());
    }
}
