//! Error types for load calculations.

use hl_core::HlError;
use hl_psychro::PsychroError;
use thiserror::Error;

/// Errors that can occur during load calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Psychrometric error: {0}")]
    Psychro(#[from] PsychroError),

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type LoadResult<T> = Result<T, LoadError>;

impl From<LoadError> for HlError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Psychro(inner) => inner.into(),
            LoadError::NonPhysical { what } => HlError::Invariant { what },
            LoadError::InvalidArg { what } => HlError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::InvalidArg { what: "airflow" };
        assert!(err.to_string().contains("airflow"));

        let err: LoadError = PsychroError::NonPhysical { what: "pressure" }.into();
        assert!(err.to_string().contains("pressure"));
    }

    #[test]
    fn error_conversion() {
        let err = LoadError::NonPhysical { what: "area" };
        let hl: HlError = err.into();
        assert!(matches!(hl, HlError::Invariant { .. }));
    }
}
