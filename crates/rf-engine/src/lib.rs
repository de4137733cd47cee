//! rf-engine: engine definition and per-station physics for regenflow.
//!
//! Holds the configuration objects (chamber conditions, contour geometry,
//! wall stack, cooling jacket), the isentropic exhaust-gas solution along the
//! contour, and the station-level building blocks the marching solver calls:
//! thermal-resistance assembly, fin enhancement and coolant pressure
//! gradient.

pub mod chamber;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod isen;
pub mod jacket;
pub mod material;
pub mod wall;

pub use chamber::ChamberConditions;
pub use engine::{CircuitEval, CoolantConvection, Engine, ExhaustConvection};
pub use error::{EngineError, EngineResult};
pub use geometry::Geometry;
pub use jacket::{CoolingJacket, CoolingJacketBuilder, JacketConfiguration};
pub use material::Material;
pub use wall::Wall;
