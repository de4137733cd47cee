//! Darcy friction factor.

use crate::error::{CircuitError, CircuitResult, check_finite};
use rf_core::numeric::lambert_w0;
use rf_core::units::constants::REDH_LAMINAR;

/// Floor applied to the Reynolds number before any friction evaluation.
const RE_FLOOR: f64 = 1e-6;

/// Darcy friction factor for fully developed pipe flow.
///
/// Laminar flow (Re < 2300) uses f = 64/Re. Turbulent flow uses the Petukhov
/// equation for smooth walls, or the Colebrook-White equation in its
/// Lambert-W closed form when a roughness (m) is given. The closed form
/// avoids iterating on the implicit Colebrook equation, which keeps the
/// result deterministic near the laminar boundary.
pub fn f_darcy(re: f64, d_h: f64, roughness: Option<f64>) -> CircuitResult<f64> {
    if !re.is_finite() || !d_h.is_finite() || d_h <= 0.0 {
        return Err(CircuitError::InvalidArg {
            what: "Reynolds number and hydraulic diameter must be finite, d_h > 0",
        });
    }
    let re = re.max(RE_FLOOR);

    if re < REDH_LAMINAR {
        return Ok(64.0 / re);
    }

    match roughness {
        None => {
            // Petukhov equation for smooth pipes
            check_finite((0.79 * re.ln() - 1.64).powi(-2), "Petukhov friction factor")
        }
        Some(eps) => {
            if !(eps >= 0.0) || !eps.is_finite() {
                return Err(CircuitError::InvalidArg {
                    what: "roughness must be finite and non-negative",
                });
            }
            // Colebrook-White via the Lambert W function
            let a = 2.51 / re;
            let two_a = 2.0 * a;
            let b = eps / (3.71 * d_h);
            let ln10 = std::f64::consts::LN_10;

            let w = lambert_w0(ln10 / two_a * 10f64.powf(b / two_a))?;
            let inv_sqrt_f = 2.0 * w / ln10 - b / a;
            check_finite(inv_sqrt_f.powi(-2), "Colebrook-White friction factor")
        }
    }
}
