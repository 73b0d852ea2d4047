//! Error types for the hl-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI one error surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Weather data error: {0}")]
    Weather(String),

    #[error("Load calculation error: {0}")]
    Loads(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hl-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hl_project::ProjectError> for AppError {
    fn from(err: hl_project::ProjectError) -> Self {
        match err {
            hl_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<hl_project::ValidationError> for AppError {
    fn from(err: hl_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hl_weather::WeatherError> for AppError {
    fn from(err: hl_weather::WeatherError) -> Self {
        AppError::Weather(err.to_string())
    }
}

impl From<hl_loads::LoadError> for AppError {
    fn from(err: hl_loads::LoadError) -> Self {
        AppError::Loads(err.to_string())
    }
}

impl From<hl_psychro::PsychroError> for AppError {
    fn from(err: hl_psychro::PsychroError) -> Self {
        AppError::Loads(err.to_string())
    }
}

impl From<hl_results::ResultsError> for AppError {
    fn from(err: hl_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_errors_keep_their_message() {
        let err: AppError = hl_weather::WeatherError::MissingColumns {
            missing: vec!["Local Time".into()],
            available: vec!["Date".into()],
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Weather data error"));
        assert!(msg.contains("Local Time"));
    }

    #[test]
    fn project_validation_maps_to_validation() {
        let err: AppError = hl_project::ProjectError::Validation(
            hl_project::ValidationError::UnsupportedVersion { version: 9 },
        )
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
