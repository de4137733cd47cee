//! rf-core: stable foundation for regenflow.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + tolerances + float helpers + scalar root finding)
//! - field (axial profile values: constants or functions of x)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RfError, RfResult};
pub use field::AxialField;
pub use numeric::*;
pub use units::*;
