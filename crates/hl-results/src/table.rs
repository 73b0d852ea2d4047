//! Row-oriented tables with named columns.

use crate::{ResultsError, ResultsResult};
use serde::Serialize;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Numeric value; `None` marks a missing value.
    Float(Option<f64>),
    Text(String),
    Flag(bool),
}

impl Cell {
    pub fn float(v: f64) -> Self {
        Self::Float(Some(v))
    }

    /// Render for delimited text output. Missing floats become an empty field.
    pub fn render(&self) -> String {
        match self {
            Self::Float(Some(v)) => v.to_string(),
            Self::Float(None) => String::new(),
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Float(Some(v))
    }
}

impl From<Option<f64>> for Cell {
    fn from(v: Option<f64>) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Cell {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A record type that can be laid out as one table row.
///
/// `cells` must return exactly one cell per entry of `columns`, in the same order.
pub trait TableRow {
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from typed rows, keeping their order.
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        Self {
            columns: R::columns().iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) -> ResultsResult<()> {
        if cells.len() != self.columns.len() {
            return Err(ResultsError::RowWidth {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Position of a column, or a `MissingColumn` error listing what is available.
    pub fn column_index(&self, name: &str) -> ResultsResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ResultsError::MissingColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// All values of a numeric column, missing values included as `None`.
    pub fn float_column(&self, name: &str) -> ResultsResult<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| match row.get(idx) {
                Some(Cell::Float(v)) => Ok(*v),
                _ => Err(ResultsError::NotNumeric {
                    column: name.to_string(),
                }),
            })
            .collect()
    }
}
