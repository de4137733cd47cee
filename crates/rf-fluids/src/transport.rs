//! Transport property provider trait and validation helpers.

use crate::error::{FluidError, FluidResult};

/// Fluid phase reported by a transport provider.
///
/// Used to warn about coolant phase change; providers that cannot tell
/// return `Unknown` and no warning is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Gas,
    Supercritical,
    Unknown,
}

/// Trait for transport property providers.
///
/// Both the coolant and the exhaust gas need one of these. All methods take
/// temperature (K) and pressure (Pa) and return SI values. Implementations
/// must be pure functions of (T, p) and thread-safe, so independent engines
/// can run on independent threads.
pub trait TransportProperties: Send + Sync {
    /// Density (kg/m^3).
    fn rho(&self, t: f64, p: f64) -> FluidResult<f64>;

    /// Absolute viscosity (Pa s).
    fn mu(&self, t: f64, p: f64) -> FluidResult<f64>;

    /// Thermal conductivity (W/m/K).
    fn k(&self, t: f64, p: f64) -> FluidResult<f64>;

    /// Prandtl number (dimensionless).
    fn pr(&self, t: f64, p: f64) -> FluidResult<f64>;

    /// Specific heat capacity at constant pressure (J/kg/K).
    fn cp(&self, t: f64, p: f64) -> FluidResult<f64>;

    /// Phase at the given state, if the provider can tell.
    fn phase(&self, _t: f64, _p: f64) -> Phase {
        Phase::Unknown
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    pub fn validate_state(t: f64, p: f64) -> FluidResult<()> {
        if !t.is_finite() || t <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        if !p.is_finite() || p <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn validate_property(v: f64, what: &'static str) -> FluidResult<f64> {
        if !v.is_finite() || v <= 0.0 {
            return Err(FluidError::NonPhysical { what });
        }
        Ok(v)
    }
}
