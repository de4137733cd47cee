//! rf-solver: steady heat-exchange marching solver for regenflow.
//!
//! Marches the coolant state station by station along the jacket, solving
//! the station thermal circuit with a two-level fixed-point iteration
//! (whole-march entry passes and per-station local passes), then
//! post-processes wall stresses and assembles the results record.

pub mod error;
pub mod hx;
pub mod steady;
pub mod stress;

pub use error::{SolverError, SolverResult};
pub use hx::{HxGrid, HxInlet, HxModel, HxSolver, HxState};
pub use steady::{SolverOptions, steady_heating_analysis};
pub use stress::{
    StressField, pressure_tangential_stress_plate, pressure_tangential_stress_shell,
    tangential_stresses, thermal_tangential_stress,
};
