//! Psychrometric property errors.

use hl_core::HlError;
use thiserror::Error;

/// Result type for psychrometric operations.
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Errors that can occur during moist-air property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// Non-physical values (negative humidity ratio, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the validity range of the correlations.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument (NaN, infinity).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Iterative solve did not converge (wet bulb, dew point).
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<PsychroError> for HlError {
    fn from(err: PsychroError) -> Self {
        match err {
            PsychroError::NonPhysical { what } => HlError::Invariant { what },
            PsychroError::OutOfRange { what } => HlError::InvalidArg { what },
            PsychroError::InvalidArg { what } => HlError::InvalidArg { what },
            PsychroError::ConvergenceFailed { what } => HlError::Invariant { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PsychroError::NonPhysical {
            what: "humidity ratio",
        };
        assert!(err.to_string().contains("humidity ratio"));

        let err = PsychroError::ConvergenceFailed { what: "wet bulb" };
        assert!(err.to_string().contains("wet bulb"));
    }

    #[test]
    fn error_to_hl_error() {
        let err = PsychroError::OutOfRange { what: "temperature" };
        let hl_err: HlError = err.into();
        assert!(matches!(hl_err, HlError::InvalidArg { .. }));
    }
}
