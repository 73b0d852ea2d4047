use crate::{MoistAirModel, PsychroResult};
use hl_core::pct_to_frac;
use hl_core::units::{Density, Pressure};
use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::pascal};

#[derive(Debug, Clone)]
pub struct AirStateReport {
    pub pressure: Pressure,
    pub dry_bulb_c: f64,
    pub rel_hum_pct: f64,
    pub hum_ratio: f64,
    pub enthalpy_j_per_kg: f64,
    pub wet_bulb_c: f64,
    pub dew_point_c: f64,
    pub density: Density,
}

impl AirStateReport {
    pub fn pressure_pa(&self) -> f64 {
        self.pressure.get::<pascal>()
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
    }
}

pub fn compute_air_state(
    model: &dyn MoistAirModel,
    pressure: Pressure,
    t_c: f64,
    rh_pct: f64,
) -> PsychroResult<AirStateReport> {
    let rh = pct_to_frac(rh_pct);
    let hum_ratio = model.hum_ratio_from_rel_hum(t_c, rh, pressure)?;
    let enthalpy_j_per_kg = model.moist_air_enthalpy(t_c, hum_ratio)?;
    let wet_bulb_c = model.wet_bulb_from_rel_hum(t_c, rh, pressure)?;
    let dew_point_c = model.dew_point_from_hum_ratio(t_c, hum_ratio, pressure)?;
    let density = model.moist_air_density(t_c, hum_ratio, pressure)?;

    Ok(AirStateReport {
        pressure,
        dry_bulb_c: t_c,
        rel_hum_pct: rh_pct,
        hum_ratio,
        enthalpy_j_per_kg,
        wet_bulb_c,
        dew_point_c,
        density,
    })
}
