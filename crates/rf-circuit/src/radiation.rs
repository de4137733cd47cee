//! Black-body radiation helper.

use rf_core::units::constants::SIGMA_SB;

/// Hemispherical black-body emissive power at temperature T (W/m^2).
///
/// Not used by the steady conduction-convection circuit; provided for
/// radiative sizing checks around the nozzle exit.
pub fn black_body(t: f64) -> f64 {
    SIGMA_SB * t.powi(4)
}
