//! ASHRAE backend integration tests.
//!
//! These check the behaviour the padwall solver leans on: the adiabatic saturation
//! line, monotonic trends, and the inverse pairs the backend contract requires.

use hl_core::units::pa;
use hl_psychro::{AirState, AshraeModel, MoistAirModel};
use proptest::prelude::*;

#[test]
fn evaporative_cooling_follows_constant_enthalpy() {
    let model = AshraeModel::new();
    let p = pa(101_325.0);

    let inlet = AirState::from_t_rh(&model, 35.0, 0.30, p).unwrap();
    let t_wb = model.wet_bulb_from_rel_hum(35.0, 0.30, p).unwrap();
    let sat = AirState::from_t_rh(&model, t_wb, 1.0, p).unwrap();

    // Adiabatic saturation: enthalpy changes only by the sensible heat of the added water.
    let dh = (sat.enthalpy() - inlet.enthalpy()).abs();
    assert!(dh < 0.02 * inlet.enthalpy(), "dh = {dh} J/kg");
    assert!(sat.hum_ratio() > inlet.hum_ratio());
    assert!(sat.dry_bulb_c() < inlet.dry_bulb_c());
}

#[test]
fn wet_bulb_rises_with_humidity() {
    let model = AshraeModel::new();
    let p = pa(101_325.0);

    let mut last = f64::NEG_INFINITY;
    for rh in [0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
        let t_wb = model.wet_bulb_from_rel_hum(30.0, rh, p).unwrap();
        assert!(t_wb > last, "wet bulb should rise with RH");
        last = t_wb;
    }
    assert_eq!(last, 30.0);
}

#[test]
fn density_falls_with_temperature() {
    let model = AshraeModel::new();
    let p = pa(101_325.0);
    let w = 0.010;

    let cold = model.moist_air_density(5.0, w, p).unwrap();
    let warm = model.moist_air_density(35.0, w, p).unwrap();
    assert!(cold.value > warm.value);
}

proptest! {
    #[test]
    fn hum_ratio_rel_hum_round_trip(t in -20.0_f64..50.0, rh in 0.01_f64..1.0) {
        let model = AshraeModel::new();
        let p = pa(101_325.0);
        let w = model.hum_ratio_from_rel_hum(t, rh, p).unwrap();
        let rh_back = model.rel_hum_from_hum_ratio(t, w, p).unwrap();
        prop_assert!((rh - rh_back).abs() < 1e-9);
    }

    #[test]
    fn enthalpy_dry_bulb_round_trip(t in -20.0_f64..50.0, w in 0.0005_f64..0.04) {
        let model = AshraeModel::new();
        let h = model.moist_air_enthalpy(t, w).unwrap();
        let t_back = model.dry_bulb_from_enthalpy_and_hum_ratio(h, w).unwrap();
        prop_assert!((t - t_back).abs() < 1e-9);
    }
}
