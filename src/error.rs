//! Error taxonomy for the Panchangam engine (see spec.md §7).
//!
//! `SolverNonConvergence` is intentionally absent from this enum: per the
//! propagation policy it is never surfaced to a caller, only logged.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanchangError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("ephemeris failure at JD {jd}: {message}")]
    EphemerisFailure { jd: f64, message: String },
}

impl PanchangError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PanchangError::InvalidInput(message.into())
    }

    pub fn ephemeris_failure(jd: f64, message: impl Into<String>) -> Self {
        PanchangError::EphemerisFailure {
            jd,
            message: message.into(),
        }
    }
}

pub type PanchangResult<T> = Result<T, PanchangError>;
