//! CSV and JSON export of tables and summaries.

use crate::summary::{PercentileSummary, SummaryOutcome};
use crate::table::Table;
use crate::ResultsResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const SUMMARY_HEADER: [&str; 4] = [
    "percentile",
    "load_W_m2",
    "per_unit_kW",
    "fleet_total_MW",
];

pub fn write_table_csv<W: Write>(table: &Table, writer: W) -> ResultsResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(table.columns())?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(|c| c.render()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_table_csv(table: &Table, path: &Path) -> ResultsResult<()> {
    write_table_csv(table, File::create(path)?)
}

pub fn write_summary_csv<W: Write>(summary: &PercentileSummary, writer: W) -> ResultsResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;
    for row in &summary.rows {
        wtr.write_record([
            row.percentile.to_string(),
            row.load_w_m2.to_string(),
            row.per_unit_kw.to_string(),
            row.fleet_total_mw.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_summary_csv(summary: &PercentileSummary, path: &Path) -> ResultsResult<()> {
    write_summary_csv(summary, File::create(path)?)
}

pub fn summary_to_json(outcome: &SummaryOutcome) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub fn save_summary_json(outcome: &SummaryOutcome, path: &Path) -> ResultsResult<()> {
    std::fs::write(path, summary_to_json(outcome)?)?;
    Ok(())
}
