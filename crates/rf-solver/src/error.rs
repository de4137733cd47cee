//! Error types for the marching solver.

use rf_circuit::CircuitError;
use rf_core::RfError;
use rf_engine::EngineError;
use rf_fluids::FluidError;
use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Rejected before any numerical work.
    #[error("Configuration invalid: {what}")]
    Config { what: String },

    /// The marching integrator produced a non-physical state.
    #[error("{component} failed at x = {x} m: {what}")]
    Numerical {
        component: &'static str,
        x: f64,
        what: String,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Core(#[from] RfError),
}
