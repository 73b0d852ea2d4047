use crate::{HlError, HlResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HlResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HlError::NonFinite { what, value: v })
    }
}

/// Check that `v` is finite and lies in the closed interval `[min, max]`.
pub fn ensure_in_range(v: Real, min: Real, max: Real, what: &'static str) -> HlResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(HlError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

/// Convert a percentage (0..=100) to a fraction (0..=1).
#[inline]
pub fn pct_to_frac(pct: Real) -> Real {
    pct / 100.0
}

/// Convert a fraction (0..=1) to a percentage (0..=100).
#[inline]
pub fn frac_to_pct(frac: Real) -> Real {
    frac * 100.0
}
