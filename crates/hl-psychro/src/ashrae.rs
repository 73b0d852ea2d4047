//! ASHRAE-correlation moist-air model.

use std::ops::RangeInclusive;

use crate::error::{PsychroError, PsychroResult};
use crate::model::{MoistAirModel, validation};
use hl_core::units::{Density, HumRatio, Pressure, SpecEnthalpy, kg_per_m3};

/// Ratio of the molecular masses of water vapour and dry air.
const MOLAR_MASS_RATIO: f64 = 0.621_945;
/// Specific gas constant of dry air [J/(kg·K)].
const R_DRY_AIR: f64 = 287.042;
const ZERO_CELSIUS_K: f64 = 273.15;
const TRIPLE_POINT_WATER_C: f64 = 0.01;
/// Humidity ratio floor; keeps logarithms and divisions defined for bone-dry air.
const MIN_HUM_RATIO: f64 = 1e-7;

/// Validity range of the Hyland-Wexler saturation pressure fit [°C].
pub const TEMPERATURE_RANGE_C: RangeInclusive<f64> = T_MIN_C..=T_MAX_C;
const T_MIN_C: f64 = -100.0;
const T_MAX_C: f64 = 200.0;

const WET_BULB_TOL_C: f64 = 1e-4;
const DEW_POINT_TOL_C: f64 = 1e-6;
const MAX_ITER: usize = 200;

/// Moist-air properties from the ASHRAE Handbook Fundamentals (2017, SI) correlations.
///
/// Saturation pressure uses Hyland-Wexler over ice below the triple point and over
/// liquid water above it. Enthalpy and dry-bulb temperature are closed-form inverses of
/// each other at a fixed humidity ratio; humidity ratio and relative humidity are
/// closed-form inverses at a fixed temperature.
///
/// Stateless and therefore trivially thread-safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct AshraeModel;

impl AshraeModel {
    /// Create a new ASHRAE model.
    pub fn new() -> Self {
        Self
    }

    /// Saturation vapour pressure [Pa] at dry-bulb temperature `t_c`.
    pub fn sat_vap_pres(&self, t_c: f64) -> PsychroResult<f64> {
        validation::validate_temperature(t_c)?;
        if !TEMPERATURE_RANGE_C.contains(&t_c) {
            return Err(PsychroError::OutOfRange {
                what: "temperature outside [-100, 200] °C",
            });
        }

        let t_k = t_c + ZERO_CELSIUS_K;
        let ln_pws = if t_c <= TRIPLE_POINT_WATER_C {
            -5.674_535_9e3 / t_k + 6.392_524_7 - 9.677_843e-3 * t_k + 6.221_570_1e-7 * t_k.powi(2)
                + 2.074_782_5e-9 * t_k.powi(3)
                - 9.484_024e-13 * t_k.powi(4)
                + 4.163_501_9 * t_k.ln()
        } else {
            -5.800_220_6e3 / t_k + 1.391_499_3 - 4.864_023_9e-2 * t_k + 4.176_476_8e-5 * t_k.powi(2)
                - 1.445_209_3e-8 * t_k.powi(3)
                + 6.545_967_3 * t_k.ln()
        };
        Ok(ln_pws.exp())
    }

    /// Partial pressure of water vapour [Pa] for humidity ratio `w`.
    pub fn vap_pres_from_hum_ratio(&self, w: HumRatio, p: Pressure) -> PsychroResult<f64> {
        validation::validate_hum_ratio(w)?;
        let p_pa = validation::validate_pressure(p)?;
        let w = w.max(MIN_HUM_RATIO);
        Ok(p_pa * w / (MOLAR_MASS_RATIO + w))
    }

    /// Humidity ratio for a partial pressure of water vapour `pv` [Pa].
    pub fn hum_ratio_from_vap_pres(&self, pv: f64, p: Pressure) -> PsychroResult<HumRatio> {
        let p_pa = validation::validate_pressure(p)?;
        if !pv.is_finite() || pv < 0.0 {
            return Err(PsychroError::NonPhysical {
                what: "vapour pressure must be non-negative and finite",
            });
        }
        if pv >= p_pa {
            return Err(PsychroError::NonPhysical {
                what: "vapour pressure must be below total pressure",
            });
        }
        Ok((MOLAR_MASS_RATIO * pv / (p_pa - pv)).max(MIN_HUM_RATIO))
    }

    /// Humidity ratio of air at `t_c` whose wet-bulb temperature is `t_wb_c`.
    pub fn hum_ratio_from_wet_bulb(
        &self,
        t_c: f64,
        t_wb_c: f64,
        p: Pressure,
    ) -> PsychroResult<HumRatio> {
        if t_wb_c > t_c {
            return Err(PsychroError::NonPhysical {
                what: "wet bulb temperature above dry bulb temperature",
            });
        }
        let ws_star = self.hum_ratio_from_rel_hum(t_wb_c, 1.0, p)?;
        let w = if t_wb_c >= 0.0 {
            ((2501.0 - 2.326 * t_wb_c) * ws_star - 1.006 * (t_c - t_wb_c))
                / (2501.0 + 1.86 * t_c - 4.186 * t_wb_c)
        } else {
            ((2830.0 - 0.24 * t_wb_c) * ws_star - 1.006 * (t_c - t_wb_c))
                / (2830.0 + 1.86 * t_c - 2.1 * t_wb_c)
        };
        Ok(w.max(MIN_HUM_RATIO))
    }

    /// Specific volume of moist air [m³ / kg dry air].
    pub fn moist_air_volume(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<f64> {
        validation::validate_temperature(t_c)?;
        validation::validate_hum_ratio(w)?;
        let p_pa = validation::validate_pressure(p)?;
        let w = w.max(MIN_HUM_RATIO);
        Ok(R_DRY_AIR * (t_c + ZERO_CELSIUS_K) * (1.0 + 1.607_858 * w) / p_pa)
    }
}

impl MoistAirModel for AshraeModel {
    fn name(&self) -> &str {
        "ASHRAE"
    }

    fn hum_ratio_from_rel_hum(&self, t_c: f64, rh: f64, p: Pressure) -> PsychroResult<HumRatio> {
        validation::validate_rel_hum(rh)?;
        let pv = rh * self.sat_vap_pres(t_c)?;
        self.hum_ratio_from_vap_pres(pv, p)
    }

    fn moist_air_enthalpy(&self, t_c: f64, w: HumRatio) -> PsychroResult<SpecEnthalpy> {
        validation::validate_temperature(t_c)?;
        validation::validate_hum_ratio(w)?;
        let w = w.max(MIN_HUM_RATIO);
        Ok((1.006 * t_c + w * (2501.0 + 1.86 * t_c)) * 1000.0)
    }

    fn wet_bulb_from_rel_hum(&self, t_c: f64, rh: f64, p: Pressure) -> PsychroResult<f64> {
        validation::validate_rel_hum(rh)?;
        if rh >= 1.0 {
            // Saturated air sits on its own adiabatic-saturation point.
            validation::validate_temperature(t_c)?;
            return Ok(t_c);
        }

        let w = self.hum_ratio_from_rel_hum(t_c, rh, p)?;
        let t_dew = self.dew_point_from_hum_ratio(t_c, w, p)?;

        let mut lo = t_dew;
        let mut hi = t_c;
        let mut t_wb = 0.5 * (lo + hi);
        for _ in 0..MAX_ITER {
            if hi - lo <= WET_BULB_TOL_C {
                return Ok(t_wb);
            }
            let w_star = self.hum_ratio_from_wet_bulb(t_c, t_wb, p)?;
            if w_star > w {
                hi = t_wb;
            } else {
                lo = t_wb;
            }
            t_wb = 0.5 * (lo + hi);
        }

        Err(PsychroError::ConvergenceFailed { what: "wet bulb" })
    }

    fn moist_air_density(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<Density> {
        let v = self.moist_air_volume(t_c, w, p)?;
        Ok(kg_per_m3((1.0 + w.max(MIN_HUM_RATIO)) / v))
    }

    fn rel_hum_from_hum_ratio(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<f64> {
        let pv = self.vap_pres_from_hum_ratio(w, p)?;
        let rh = pv / self.sat_vap_pres(t_c)?;
        Ok(rh.clamp(0.0, 1.0))
    }

    fn dry_bulb_from_enthalpy_and_hum_ratio(
        &self,
        h: SpecEnthalpy,
        w: HumRatio,
    ) -> PsychroResult<f64> {
        validation::validate_enthalpy(h)?;
        validation::validate_hum_ratio(w)?;
        let w = w.max(MIN_HUM_RATIO);
        Ok((h / 1000.0 - 2501.0 * w) / (1.006 + 1.86 * w))
    }

    fn dew_point_from_hum_ratio(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<f64> {
        let pv = self.vap_pres_from_hum_ratio(w, p)?;
        if self.sat_vap_pres(t_c)? <= pv {
            return Ok(t_c);
        }
        if self.sat_vap_pres(T_MIN_C)? > pv {
            return Err(PsychroError::OutOfRange {
                what: "dew point below -100 °C",
            });
        }

        // Saturation pressure is monotonic in temperature.
        let mut lo = T_MIN_C;
        let mut hi = t_c;
        for _ in 0..MAX_ITER {
            let mid = 0.5 * (lo + hi);
            if hi - lo <= DEW_POINT_TOL_C {
                return Ok(mid);
            }
            if self.sat_vap_pres(mid)? < pv {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Err(PsychroError::ConvergenceFailed { what: "dew point" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::units::pa;

    fn p0() -> Pressure {
        pa(101_325.0)
    }

    #[test]
    fn saturation_pressure_is_bounded_to_fit_range() {
        let model = AshraeModel::new();
        assert!(model.sat_vap_pres(*TEMPERATURE_RANGE_C.start()).is_ok());
        assert!(model.sat_vap_pres(*TEMPERATURE_RANGE_C.end()).is_ok());
        assert!(matches!(
            model.sat_vap_pres(-999.0),
            Err(PsychroError::OutOfRange { .. })
        ));
    }

    #[test]
    fn saturation_pressure_reference_points() {
        let model = AshraeModel::new();
        // ASHRAE table: 20 °C -> 2339 Pa, 0.01 °C -> 611.7 Pa (triple point)
        let p20 = model.sat_vap_pres(20.0).unwrap();
        assert!((p20 - 2339.0).abs() < 2.0, "psat(20) = {p20}");
        let p_tp = model.sat_vap_pres(0.01).unwrap();
        assert!((p_tp - 611.7).abs() < 1.0, "psat(0.01) = {p_tp}");
        assert!(model.sat_vap_pres(250.0).is_err());
    }

    #[test]
    fn hum_ratio_and_rel_hum_are_inverses() {
        let model = AshraeModel::new();
        for (t, rh) in [(5.0, 0.9), (20.0, 0.5), (35.0, 0.3), (42.0, 0.15)] {
            let w = model.hum_ratio_from_rel_hum(t, rh, p0()).unwrap();
            let rh_back = model.rel_hum_from_hum_ratio(t, w, p0()).unwrap();
            assert!((rh - rh_back).abs() < 1e-12, "t={t}, rh={rh}, back={rh_back}");
        }
    }

    #[test]
    fn enthalpy_and_dry_bulb_are_inverses() {
        let model = AshraeModel::new();
        let w = 0.0125;
        for t in [-5.0, 12.0, 28.0, 40.0] {
            let h = model.moist_air_enthalpy(t, w).unwrap();
            let t_back = model.dry_bulb_from_enthalpy_and_hum_ratio(h, w).unwrap();
            assert!((t - t_back).abs() < 1e-10);
        }
    }

    #[test]
    fn hot_dry_air_reference_state() {
        let model = AshraeModel::new();
        let w = model.hum_ratio_from_rel_hum(35.0, 0.30, p0()).unwrap();
        assert!((w - 0.010_54).abs() < 5e-5, "W = {w}");

        let h = model.moist_air_enthalpy(35.0, w).unwrap();
        assert!((h - 62_254.0).abs() < 150.0, "h = {h}");

        let t_wb = model.wet_bulb_from_rel_hum(35.0, 0.30, p0()).unwrap();
        assert!(t_wb > 21.0 && t_wb < 22.0, "t_wb = {t_wb}");
    }

    #[test]
    fn wet_bulb_bounded_by_dew_point_and_dry_bulb() {
        let model = AshraeModel::new();
        for (t, rh) in [(-10.0, 0.6), (10.0, 0.4), (30.0, 0.7), (45.0, 0.1)] {
            let w = model.hum_ratio_from_rel_hum(t, rh, p0()).unwrap();
            let t_dew = model.dew_point_from_hum_ratio(t, w, p0()).unwrap();
            let t_wb = model.wet_bulb_from_rel_hum(t, rh, p0()).unwrap();
            assert!(t_dew <= t_wb + WET_BULB_TOL_C && t_wb <= t, "t={t} rh={rh}");
        }
    }

    #[test]
    fn saturated_air_wet_bulb_is_dry_bulb() {
        let model = AshraeModel::new();
        assert_eq!(model.wet_bulb_from_rel_hum(20.0, 1.0, p0()).unwrap(), 20.0);

        let w = model.hum_ratio_from_rel_hum(20.0, 1.0, p0()).unwrap();
        let t_dew = model.dew_point_from_hum_ratio(20.0, w, p0()).unwrap();
        assert!((t_dew - 20.0).abs() < 1e-4);
    }

    #[test]
    fn density_near_standard_air() {
        let model = AshraeModel::new();
        let w = model.hum_ratio_from_rel_hum(20.0, 0.5, p0()).unwrap();
        let rho = model.moist_air_density(20.0, w, p0()).unwrap();
        assert!(rho.value > 1.18 && rho.value < 1.21, "rho = {}", rho.value);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let model = AshraeModel::new();
        assert!(model.hum_ratio_from_rel_hum(20.0, 1.2, p0()).is_err());
        assert!(model.hum_ratio_from_rel_hum(20.0, 0.5, pa(0.0)).is_err());
        assert!(model.moist_air_enthalpy(f64::NAN, 0.01).is_err());
        assert!(model.moist_air_density(20.0, -0.01, p0()).is_err());
    }
}
