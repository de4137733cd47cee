//! rf-fluids: fluid property interfaces for regenflow.
//!
//! Provides the `TransportProperties` trait consumed by the heat-exchange
//! solver (viscosity, conductivity, Prandtl number, heat capacity and density
//! as functions of temperature and pressure), a constant-property
//! implementation for simple coolants and tests, and the `PerfectGas` exhaust
//! model.

pub mod constant;
pub mod error;
pub mod perfect_gas;
pub mod transport;

pub use constant::ConstantTransport;
pub use error::{FluidError, FluidResult};
pub use perfect_gas::{PerfectGas, PerfectGasSpec};
pub use transport::{Phase, TransportProperties};
