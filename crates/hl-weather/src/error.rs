//! Weather ingestion errors.

use thiserror::Error;

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required columns: {missing:?} (available columns: {available:?})")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Invalid timestamp '{value}' on data row {row}")]
    Timestamp { row: usize, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_names_both_sides() {
        let err = WeatherError::MissingColumns {
            missing: vec!["Solar Radiation (W/m²)".into()],
            available: vec!["Local Time".into(), "Temperature (C)".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Solar Radiation"));
        assert!(msg.contains("Local Time"));
    }
}
