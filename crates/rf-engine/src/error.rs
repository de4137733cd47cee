//! Error types for engine configuration and station physics.

use rf_circuit::CircuitError;
use rf_core::RfError;
use rf_fluids::FluidError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Rejected before any numerical work.
    #[error("Configuration invalid: {what}")]
    Config { what: String },

    /// A station-level numerical routine diverged.
    #[error("{component} failed at x = {x} m")]
    Numerical {
        component: &'static str,
        x: f64,
        #[source]
        source: RfError,
    },

    /// The coolant density/static-pressure fixed point did not contract.
    #[error("coolant density fixed point failed at x = {x} m after {iterations} iterations")]
    DensityFixedPoint { x: f64, iterations: usize },

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Core(#[from] RfError),
}
