//! Percentile design-load summaries.
//!
//! Percentiles use linear interpolation between order statistics: for `n` sorted values
//! and level `p`, the rank is `p / 100 * (n - 1)` and the result interpolates between the
//! two neighbouring values. Missing values are dropped first, never read as zero.

use crate::table::Table;
use crate::{ResultsError, ResultsResult};
use serde::Serialize;

/// How to scale and label a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySpec {
    pub label: String,
    /// Footprint area of one unit [m²]
    pub area_m2: f64,
    /// Number of identical units in the fleet
    pub unit_count: u32,
    /// Percentile levels in output order
    pub percentiles: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    pub percentile: f64,
    pub load_w_m2: f64,
    pub per_unit_kw: f64,
    pub fleet_total_mw: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileSummary {
    pub label: String,
    pub column: String,
    /// Number of non-missing values the percentiles were taken over
    pub samples: usize,
    pub rows: Vec<SummaryRow>,
}

impl PercentileSummary {
    /// Row for an exact percentile level, if it was requested.
    pub fn get(&self, level: f64) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.percentile == level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary(PercentileSummary),
    /// No valid values were left once missing values were dropped.
    Empty { message: String },
}

impl SummaryOutcome {
    pub fn summary(&self) -> Option<&PercentileSummary> {
        match self {
            Self::Summary(s) => Some(s),
            Self::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Percentile of already sorted values. Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], level: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (level / 100.0).clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn check_levels(levels: &[f64]) -> ResultsResult<()> {
    match levels
        .iter()
        .find(|l| !l.is_finite() || !(0.0..=100.0).contains(*l))
    {
        Some(&level) => Err(ResultsError::InvalidPercentile { level }),
        None => Ok(()),
    }
}

/// Summarise a column of optional values.
pub fn summarize_values(
    values: &[Option<f64>],
    column: &str,
    spec: &SummarySpec,
) -> ResultsResult<SummaryOutcome> {
    check_levels(&spec.percentiles)?;

    let mut valid: Vec<f64> = values
        .iter()
        .filter_map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    if valid.is_empty() {
        tracing::warn!(label = %spec.label, column, "no valid values to summarise");
        return Ok(SummaryOutcome::Empty {
            message: format!(
                "--- {} ---\nNo valid values found in '{}'.",
                spec.label, column
            ),
        });
    }
    valid.sort_by(f64::total_cmp);

    let rows = spec
        .percentiles
        .iter()
        .filter_map(|&level| {
            let load_w_m2 = percentile(&valid, level)?;
            let per_unit_kw = load_w_m2 * spec.area_m2 / 1000.0;
            Some(SummaryRow {
                percentile: level,
                load_w_m2,
                per_unit_kw,
                fleet_total_mw: per_unit_kw * f64::from(spec.unit_count) / 1000.0,
            })
        })
        .collect();

    Ok(SummaryOutcome::Summary(PercentileSummary {
        label: spec.label.clone(),
        column: column.to_string(),
        samples: valid.len(),
        rows,
    }))
}

/// Summarise a named numeric column of a table.
pub fn summarize(table: &Table, column: &str, spec: &SummarySpec) -> ResultsResult<SummaryOutcome> {
    let values = table.float_column(column)?;
    summarize_values(&values, column, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;
    use proptest::prelude::*;

    fn spec(levels: &[f64]) -> SummarySpec {
        SummarySpec {
            label: "Cooling".into(),
            area_m2: 200.0,
            unit_count: 10,
            percentiles: levels.to_vec(),
        }
    }

    #[test]
    fn linear_interpolation_between_order_statistics() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 50.0), Some(2.5));
        assert_eq!(percentile(&sorted, 0.0), Some(1.0));
        assert_eq!(percentile(&sorted, 100.0), Some(4.0));
        assert!((percentile(&sorted, 90.0).unwrap() - 3.7).abs() < 1e-12);
        assert_eq!(percentile(&[7.0], 42.0), Some(7.0));
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn scaling_to_unit_and_fleet() {
        let values = vec![Some(100.0), Some(100.0)];
        let outcome = summarize_values(&values, "Q", &spec(&[50.0])).unwrap();
        let row = outcome.summary().unwrap().rows[0];
        assert_eq!(row.load_w_m2, 100.0);
        assert!((row.per_unit_kw - 20.0).abs() < 1e-12);
        assert!((row.fleet_total_mw - 0.2).abs() < 1e-12);
    }

    #[test]
    fn missing_values_are_dropped_not_zeroed() {
        let values = vec![None, Some(10.0), None, Some(20.0)];
        let outcome = summarize_values(&values, "Q", &spec(&[0.0])).unwrap();
        let summary = outcome.summary().unwrap();
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.rows[0].load_w_m2, 10.0);
    }

    #[test]
    fn infinite_loads_are_kept() {
        let values = vec![Some(f64::NAN), Some(10.0), Some(f64::INFINITY)];
        let outcome = summarize_values(&values, "Q", &spec(&[100.0, 0.0])).unwrap();
        let summary = outcome.summary().unwrap();
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.rows[0].load_w_m2, f64::INFINITY);
        assert_eq!(summary.rows[1].load_w_m2, 10.0);
    }

    #[test]
    fn rows_follow_requested_order() {
        let values: Vec<Option<f64>> = (1..=100).map(|v| Some(v as f64)).collect();
        let levels = [85.0, 98.0, 90.0, 92.5, 95.0];
        let outcome = summarize_values(&values, "Q", &spec(&levels)).unwrap();
        let got: Vec<f64> = outcome
            .summary()
            .unwrap()
            .rows
            .iter()
            .map(|r| r.percentile)
            .collect();
        assert_eq!(got, levels);
    }

    #[test]
    fn empty_input_gives_marker() {
        let outcome = summarize_values(&[None, None], "Q_heat_W_m2", &spec(&[95.0])).unwrap();
        assert_eq!(
            outcome,
            SummaryOutcome::Empty {
                message: "--- Cooling ---\nNo valid values found in 'Q_heat_W_m2'.".into()
            }
        );
        assert!(outcome.is_empty());
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        let values = vec![Some(1.0)];
        assert!(matches!(
            summarize_values(&values, "Q", &spec(&[101.0])),
            Err(ResultsError::InvalidPercentile { .. })
        ));
        assert!(matches!(
            summarize_values(&values, "Q", &spec(&[f64::NAN])),
            Err(ResultsError::InvalidPercentile { .. })
        ));
    }

    #[test]
    fn table_summary_reports_missing_column() {
        let mut table = Table::new(["Q_active_W_m2_Tmax"]);
        table.push_row(vec![Cell::float(3.0)]).unwrap();
        let err = summarize(&table, "Q_active_W_m2_strict_setpoint", &spec(&[95.0])).unwrap_err();
        assert!(matches!(err, ResultsError::MissingColumn { .. }));
    }

    #[test]
    fn get_finds_requested_level() {
        let values = vec![Some(1.0), Some(2.0)];
        let outcome = summarize_values(&values, "Q", &spec(&[98.0, 92.5])).unwrap();
        let summary = outcome.summary().unwrap();
        assert!(summary.get(92.5).is_some());
        assert!(summary.get(50.0).is_none());
    }

    proptest! {
        #[test]
        fn extremes_match_min_and_max(values in prop::collection::vec(-1e4f64..1e4, 1..60)) {
            let opts: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
            let outcome = summarize_values(&opts, "Q", &spec(&[100.0, 0.0])).unwrap();
            let rows = &outcome.summary().unwrap().rows;

            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(rows.len(), 2);
            prop_assert_eq!(rows[0].load_w_m2, max);
            prop_assert_eq!(rows[1].load_w_m2, min);
        }

        #[test]
        fn percentiles_are_monotonic(
            values in prop::collection::vec(0.0f64..500.0, 1..60),
            a in 0.0f64..100.0,
            b in 0.0f64..100.0,
        ) {
            let mut sorted = values.clone();
            sorted.sort_by(f64::total_cmp);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = percentile(&sorted, lo).unwrap();
            let p_hi = percentile(&sorted, hi).unwrap();
            prop_assert!(p_lo <= p_hi + 1e-9);
        }
    }
}
