//! Hot-water thermal storage sizing.

use crate::error::{LoadError, LoadResult};

/// Water properties and temperature swing of the storage tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageParams {
    /// Specific heat of water [kJ/(kg·K)]
    pub cp_kj_kg_k: f64,
    /// Water density [kg/m³]
    pub density_kg_m3: f64,
    /// Usable temperature swing [K]
    pub delta_t_k: f64,
}

impl Default for StorageParams {
    fn default() -> Self {
        Self {
            cp_kj_kg_k: 4.18,
            density_kg_m3: 999.65,
            delta_t_k: 6.0,
        }
    }
}

/// Tank volume [m³] that covers `demand_mw` for `hours` of backup.
pub fn hst_volume_m3(demand_mw: f64, hours: f64, params: &StorageParams) -> LoadResult<f64> {
    if !demand_mw.is_finite() || demand_mw < 0.0 {
        return Err(LoadError::InvalidArg {
            what: "storage demand must be finite and non-negative",
        });
    }
    if !hours.is_finite() || hours < 0.0 {
        return Err(LoadError::InvalidArg {
            what: "backup hours must be finite and non-negative",
        });
    }
    let divisors = [params.cp_kj_kg_k, params.density_kg_m3, params.delta_t_k];
    if divisors.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(LoadError::InvalidArg {
            what: "storage water properties must be positive",
        });
    }

    let capacity_mj = demand_mw * hours * 3600.0;
    Ok(capacity_mj / params.cp_kj_kg_k / params.density_kg_m3 / params.delta_t_k * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_megawatt_for_an_hour() {
        let v = hst_volume_m3(1.0, 1.0, &StorageParams::default()).unwrap();
        // 3600 MJ / 4.18 / 999.65 / 6 * 1000
        assert!((v - 143.593).abs() < 1e-2);
    }

    #[test]
    fn scales_linearly() {
        let p = StorageParams::default();
        let a = hst_volume_m3(2.0, 3.0, &p).unwrap();
        let b = hst_volume_m3(1.0, 1.0, &p).unwrap();
        assert!((a - 6.0 * b).abs() < 1e-9);
        assert_eq!(hst_volume_m3(0.0, 12.0, &p).unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        let p = StorageParams::default();
        assert!(hst_volume_m3(-1.0, 1.0, &p).is_err());
        assert!(hst_volume_m3(1.0, f64::NAN, &p).is_err());
        let zero_dt = StorageParams {
            delta_t_k: 0.0,
            ..p
        };
        assert!(hst_volume_m3(1.0, 1.0, &zero_dt).is_err());
    }
}
