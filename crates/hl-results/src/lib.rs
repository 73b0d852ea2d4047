//! hl-results: named-column result tables, percentile design summaries and export.

pub mod export;
pub mod summary;
pub mod table;

pub use export::{
    save_summary_csv, save_summary_json, save_table_csv, summary_to_json, write_summary_csv,
    write_table_csv,
};
pub use summary::{
    PercentileSummary, SummaryOutcome, SummaryRow, SummarySpec, percentile, summarize,
    summarize_values,
};
pub use table::{Cell, Table, TableRow};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column '{column}' not found. Available columns: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Column '{column}' is not numeric")]
    NotNumeric { column: String },

    #[error("Invalid percentile level {level}: expected a finite value in [0, 100]")]
    InvalidPercentile { level: f64 },

    #[error("Row has {found} cells but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}
