//! Common utilities for load calculations.

use crate::error::{LoadError, LoadResult};
use chrono::NaiveDateTime;
use hl_core::numeric::{ensure_finite, ensure_in_range};

/// Smallest moisture span [kg/kg] the pad can still act on.
pub const EPS_MOISTURE_SPAN: f64 = 1e-12;

/// Timestamp layout used in result tables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ensure a value is finite, returning LoadError if not.
pub fn check_finite(value: f64, what: &'static str) -> LoadResult<()> {
    ensure_finite(value, what).map_err(|_| LoadError::NonPhysical { what })?;
    Ok(())
}

/// Whether a percent value lies in [0, 100].
pub fn is_percent(value: f64) -> bool {
    ensure_in_range(value, 0.0, 100.0, "percent").is_ok()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn finite_check() {
        assert!(check_finite(1.0, "x").is_ok());
        assert!(matches!(
            check_finite(f64::NAN, "x"),
            Err(LoadError::NonPhysical { what: "x" })
        ));
    }

    #[test]
    fn percent_range() {
        assert!(is_percent(0.0));
        assert!(is_percent(100.0));
        assert!(!is_percent(100.5));
        assert!(!is_percent(f64::NAN));
    }

    #[test]
    fn timestamp_text() {
        let ts = NaiveDate::from_ymd_opt(2024, 7, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-07-01 09:00:00");
    }
}
