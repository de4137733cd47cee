//! Fluid property errors.

use rf_core::RfError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value out of the provider's valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Gas model is over- or under-determined.
    #[error("Perfect gas definition invalid: {what}")]
    GasDefinition { what: &'static str },

    /// Backend (tabulated or library-backed provider) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<FluidError> for RfError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => RfError::Invariant { what },
            FluidError::OutOfRange { what } => RfError::InvalidArg { what },
            FluidError::InvalidArg { what } => RfError::InvalidArg { what },
            FluidError::GasDefinition { what } => RfError::InvalidArg { what },
            FluidError::Backend { message: _ } => RfError::Invariant {
                what: "fluid backend failure",
            },
        }
    }
}
