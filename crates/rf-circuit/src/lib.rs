//! rf-circuit: heat-transfer building blocks for regenflow.
//!
//! Closed-form convection correlations (pipe-flow Nusselt correlations for
//! the coolant side, Bartz forms for the exhaust side), the Darcy friction
//! factor, adiabatic-tip fin heat flow and the series thermal-resistance
//! circuit solved at every axial station.

pub mod circuit;
pub mod convection;
pub mod error;
pub mod fin;
pub mod friction;
pub mod radiation;

pub use circuit::ThermalCircuit;
pub use convection::{
    LaminarNusselt, h_coolant_dittus_boelter, h_coolant_gnielinski, h_coolant_sieder_tate,
    h_gas_bartz, h_gas_bartz_sigma, h_laminar,
};
pub use error::{CircuitError, CircuitResult};
pub use fin::fin_heat_flow;
pub use friction::f_darcy;
pub use radiation::black_body;
