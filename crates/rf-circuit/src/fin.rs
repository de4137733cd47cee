//! Adiabatic-tip fin heat flow.

use crate::error::{CircuitError, CircuitResult, check_finite};

/// Heat flow from a single straight fin with an adiabatic tip.
///
/// With m = sqrt(h P / (k A)):
///
/// ```text
/// Qdot = sqrt(h P k A) * (T_b - T_inf) * tanh(m L)
/// ```
///
/// `perimeter` and `area` are the fin's exposed perimeter and conduction
/// cross-section; for a fin resolved per unit axial length they carry the
/// per-unit-length convention of the caller.
pub fn fin_heat_flow(
    h: f64,
    perimeter: f64,
    k_wall: f64,
    area: f64,
    length: f64,
    t_base: f64,
    t_ambient: f64,
) -> CircuitResult<f64> {
    if h <= 0.0 || perimeter <= 0.0 || k_wall <= 0.0 || area <= 0.0 || length <= 0.0 {
        return Err(CircuitError::InvalidArg {
            what: "fin h, perimeter, conductivity, area and length must be positive",
        });
    }

    let m = (h * perimeter / (k_wall * area)).sqrt();
    let q = (h * perimeter * k_wall * area).sqrt() * (t_base - t_ambient) * (m * length).tanh();
    check_finite(q, "fin heat flow")
}
