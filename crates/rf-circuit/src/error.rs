//! Error types for heat-transfer calculations.

use rf_core::RfError;
use thiserror::Error;

pub type CircuitResult<T> = Result<T, CircuitError>;

#[derive(Error, Debug)]
pub enum CircuitError {
    /// Non-physical input or result (negative resistance, NaN group, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Core numeric failure (root finding, special functions).
    #[error(transparent)]
    Core(#[from] RfError),
}

pub(crate) fn check_finite(value: f64, what: &'static str) -> CircuitResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CircuitError::NonPhysical { what })
    }
}
