//! Constant-property transport provider.

use crate::error::FluidResult;
use crate::transport::validation::{validate_property, validate_state};
use crate::transport::{Phase, TransportProperties};

/// Transport provider with fixed properties, independent of (T, p).
///
/// Good enough for incompressible coolants over a modest temperature range,
/// and the workhorse of the test suite. Prandtl number is derived as
/// mu * cp / k so the property set stays consistent.
#[derive(Debug, Clone)]
pub struct ConstantTransport {
    rho: f64,
    mu: f64,
    k: f64,
    cp: f64,
    phase: Phase,
    /// Temperature above which `phase()` reports gas, if set.
    boiling_point: Option<f64>,
}

impl ConstantTransport {
    /// Create a provider from density (kg/m^3), viscosity (Pa s),
    /// conductivity (W/m/K) and heat capacity (J/kg/K).
    pub fn new(rho: f64, mu: f64, k: f64, cp: f64) -> FluidResult<Self> {
        validate_property(rho, "density")?;
        validate_property(mu, "viscosity")?;
        validate_property(k, "thermal conductivity")?;
        validate_property(cp, "heat capacity")?;
        Ok(Self {
            rho,
            mu,
            k,
            cp,
            phase: Phase::Unknown,
            boiling_point: None,
        })
    }

    /// Report a fixed phase from `phase()`.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Report `Phase::Gas` above the given temperature (K).
    pub fn with_boiling_point(mut self, t_boil: f64) -> Self {
        self.boiling_point = Some(t_boil);
        self
    }
}

impl TransportProperties for ConstantTransport {
    fn rho(&self, t: f64, p: f64) -> FluidResult<f64> {
        validate_state(t, p)?;
        Ok(self.rho)
    }

    fn mu(&self, t: f64, p: f64) -> FluidResult<f64> {
        validate_state(t, p)?;
        Ok(self.mu)
    }

    fn k(&self, t: f64, p: f64) -> FluidResult<f64> {
        validate_state(t, p)?;
        Ok(self.k)
    }

    fn pr(&self, t: f64, p: f64) -> FluidResult<f64> {
        validate_state(t, p)?;
        Ok(self.mu * self.cp / self.k)
    }

    fn cp(&self, t: f64, p: f64) -> FluidResult<f64> {
        validate_state(t, p)?;
        Ok(self.cp)
    }

    fn phase(&self, t: f64, _p: f64) -> Phase {
        match self.boiling_point {
            Some(t_boil) if t >= t_boil => Phase::Gas,
            Some(_) => Phase::Liquid,
            None => self.phase,
        }
    }
}

/// Water-like coolant used in several tests and examples.
pub fn water_like() -> ConstantTransport {
    // rho = 1000 kg/m^3, mu = 1e-3 Pa s, k = 0.6 W/m/K, cp = 4180 J/kg/K
    ConstantTransport::new(1000.0, 1e-3, 0.6, 4180.0)
        .expect("water-like properties are valid")
        .with_phase(Phase::Liquid)
}
