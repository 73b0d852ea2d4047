// hl-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MassRate as UomMassRate, Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;

/// Specific enthalpy [J/kg dry air].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Humidity ratio [kg water / kg dry air].
pub type HumRatio = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    use super::*;

    /// Standard sea-level atmospheric pressure [Pa].
    pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

    /// Physical ceiling of a direct evaporative pad (dimensionless).
    pub const MAX_PAD_EFFICIENCY: f64 = 0.8;

    #[inline]
    pub fn standard_atmosphere() -> Pressure {
        pa(STANDARD_ATMOSPHERE_PA)
    }
}
