//! Moist-air state definitions.

use crate::error::PsychroResult;
use crate::model::MoistAirModel;
use hl_core::units::{HumRatio, Pressure, SpecEnthalpy};

/// Moist-air state: dry bulb, relative humidity, humidity ratio and enthalpy.
///
/// States are produced fresh by one of the constructors and never mutated; all four
/// fields are kept mutually consistent through the `MoistAirModel` that built them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    t_c: f64,
    rh: f64,
    w: HumRatio,
    h: SpecEnthalpy,
}

impl AirState {
    /// Create a state from dry-bulb temperature and relative humidity (fraction).
    pub fn from_t_rh(
        model: &dyn MoistAirModel,
        t_c: f64,
        rh: f64,
        p: Pressure,
    ) -> PsychroResult<Self> {
        let w = model.hum_ratio_from_rel_hum(t_c, rh, p)?;
        let h = model.moist_air_enthalpy(t_c, w)?;
        Ok(Self { t_c, rh, w, h })
    }

    /// Create a state from dry-bulb temperature and humidity ratio.
    pub fn from_t_w(
        model: &dyn MoistAirModel,
        t_c: f64,
        w: HumRatio,
        p: Pressure,
    ) -> PsychroResult<Self> {
        let rh = model.rel_hum_from_hum_ratio(t_c, w, p)?;
        let h = model.moist_air_enthalpy(t_c, w)?;
        Ok(Self { t_c, rh, w, h })
    }

    /// Create a state from enthalpy and humidity ratio.
    pub fn from_h_w(
        model: &dyn MoistAirModel,
        h: SpecEnthalpy,
        w: HumRatio,
        p: Pressure,
    ) -> PsychroResult<Self> {
        let t_c = model.dry_bulb_from_enthalpy_and_hum_ratio(h, w)?;
        let rh = model.rel_hum_from_hum_ratio(t_c, w, p)?;
        Ok(Self { t_c, rh, w, h })
    }

    /// Dry-bulb temperature [°C].
    pub fn dry_bulb_c(&self) -> f64 {
        self.t_c
    }

    /// Relative humidity as a fraction.
    pub fn rel_hum(&self) -> f64 {
        self.rh
    }

    /// Relative humidity in percent.
    pub fn rel_hum_pct(&self) -> f64 {
        hl_core::frac_to_pct(self.rh)
    }

    /// Humidity ratio [kg water / kg dry air].
    pub fn hum_ratio(&self) -> HumRatio {
        self.w
    }

    /// Enthalpy [J / kg dry air].
    pub fn enthalpy(&self) -> SpecEnthalpy {
        self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AshraeModel;
    use hl_core::units::pa;

    #[test]
    fn constructors_agree() {
        let model = AshraeModel::new();
        let p = pa(101_325.0);

        let a = AirState::from_t_rh(&model, 30.0, 0.45, p).unwrap();
        let b = AirState::from_t_w(&model, 30.0, a.hum_ratio(), p).unwrap();
        let c = AirState::from_h_w(&model, a.enthalpy(), a.hum_ratio(), p).unwrap();

        assert!((a.rel_hum() - b.rel_hum()).abs() < 1e-12);
        assert!((a.dry_bulb_c() - c.dry_bulb_c()).abs() < 1e-10);
        assert!((a.rel_hum_pct() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn reject_out_of_range_humidity() {
        let model = AshraeModel::new();
        let result = AirState::from_t_rh(&model, 25.0, 1.5, pa(101_325.0));
        assert!(result.is_err());
    }
}
