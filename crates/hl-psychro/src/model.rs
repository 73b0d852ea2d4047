//! Moist-air property model trait and validation helpers.

use crate::error::PsychroResult;
use hl_core::units::{Density, HumRatio, Pressure, SpecEnthalpy};

/// Trait for moist-air property models.
///
/// Temperatures are dry-bulb degrees Celsius, relative humidity is a fraction in
/// `[0, 1]`, humidity ratio is kg water per kg dry air and enthalpy is J per kg dry air.
/// Pressure is passed explicitly so callers decide the site pressure.
///
/// Implementations must be thread-safe (Send + Sync) to support parallel evaluation.
/// All methods should validate inputs and outputs for physical plausibility.
pub trait MoistAirModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Humidity ratio from dry-bulb temperature and relative humidity.
    fn hum_ratio_from_rel_hum(&self, t_c: f64, rh: f64, p: Pressure) -> PsychroResult<HumRatio>;

    /// Moist-air enthalpy from dry-bulb temperature and humidity ratio.
    fn moist_air_enthalpy(&self, t_c: f64, w: HumRatio) -> PsychroResult<SpecEnthalpy>;

    /// Wet-bulb temperature from dry-bulb temperature and relative humidity.
    fn wet_bulb_from_rel_hum(&self, t_c: f64, rh: f64, p: Pressure) -> PsychroResult<f64>;

    /// Moist-air density (dry air plus vapour, per m³ of mixture).
    fn moist_air_density(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<Density>;

    /// Relative humidity from dry-bulb temperature and humidity ratio.
    fn rel_hum_from_hum_ratio(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<f64>;

    /// Dry-bulb temperature from enthalpy and humidity ratio.
    fn dry_bulb_from_enthalpy_and_hum_ratio(
        &self,
        h: SpecEnthalpy,
        w: HumRatio,
    ) -> PsychroResult<f64>;

    /// Dew-point temperature from dry-bulb temperature and humidity ratio.
    fn dew_point_from_hum_ratio(&self, t_c: f64, w: HumRatio, p: Pressure) -> PsychroResult<f64>;
}

/// Validation helpers for moist-air properties.
pub(crate) mod validation {
    use crate::error::{PsychroError, PsychroResult};
    use hl_core::units::Pressure;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> PsychroResult<f64> {
        let p_pa = p.value;
        if !p_pa.is_finite() || p_pa <= 0.0 {
            return Err(PsychroError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(p_pa)
    }

    /// Ensure a temperature is finite.
    pub fn validate_temperature(t_c: f64) -> PsychroResult<()> {
        if !t_c.is_finite() {
            return Err(PsychroError::InvalidArg {
                what: "temperature must be finite",
            });
        }
        Ok(())
    }

    /// Ensure relative humidity is a fraction in [0, 1].
    pub fn validate_rel_hum(rh: f64) -> PsychroResult<()> {
        if !rh.is_finite() {
            return Err(PsychroError::InvalidArg {
                what: "relative humidity must be finite",
            });
        }
        if !(0.0..=1.0).contains(&rh) {
            return Err(PsychroError::NonPhysical {
                what: "relative humidity must be within [0, 1]",
            });
        }
        Ok(())
    }

    /// Ensure humidity ratio is non-negative and finite.
    pub fn validate_hum_ratio(w: f64) -> PsychroResult<()> {
        if !w.is_finite() {
            return Err(PsychroError::InvalidArg {
                what: "humidity ratio must be finite",
            });
        }
        if w < 0.0 {
            return Err(PsychroError::NonPhysical {
                what: "humidity ratio must be non-negative",
            });
        }
        Ok(())
    }

    /// Ensure enthalpy is finite (can be negative).
    pub fn validate_enthalpy(h: f64) -> PsychroResult<()> {
        if !h.is_finite() {
            return Err(PsychroError::InvalidArg {
                what: "enthalpy must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use hl_core::units::pa;

    #[test]
    fn validate_positive_pressure() {
        assert!(validate_pressure(pa(101_325.0)).is_ok());
        assert!(validate_pressure(pa(-100.0)).is_err());
        assert!(validate_pressure(pa(0.0)).is_err());
        assert!(validate_pressure(pa(f64::NAN)).is_err());
    }

    #[test]
    fn validate_rel_hum_is_a_fraction() {
        assert!(validate_rel_hum(0.0).is_ok());
        assert!(validate_rel_hum(1.0).is_ok());
        assert!(validate_rel_hum(1.01).is_err());
        assert!(validate_rel_hum(-0.01).is_err());
        assert!(validate_rel_hum(f64::NAN).is_err());
    }

    #[test]
    fn validate_hum_ratio_non_negative() {
        assert!(validate_hum_ratio(0.0).is_ok());
        assert!(validate_hum_ratio(0.012).is_ok());
        assert!(validate_hum_ratio(-1e-6).is_err());
        assert!(validate_hum_ratio(f64::INFINITY).is_err());
    }

    #[test]
    fn validate_temperature_and_enthalpy_finite() {
        assert!(validate_temperature(-40.0).is_ok());
        assert!(validate_temperature(f64::NAN).is_err());
        assert!(validate_enthalpy(-5_000.0).is_ok());
        assert!(validate_enthalpy(f64::NEG_INFINITY).is_err());
    }
}
