//! Combustion chamber stagnation conditions.

use crate::error::{EngineError, EngineResult};
use rf_core::units::{Pressure, Temperature};

/// Chamber stagnation conditions. The exhaust mass flow rate is not part of
/// the definition; it is fixed by choking at the nozzle throat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberConditions {
    p0: f64,
    t0: f64,
}

impl ChamberConditions {
    pub fn new(p0: Pressure, t0: Temperature) -> EngineResult<Self> {
        let p0 = p0.value;
        let t0 = t0.value;
        if !p0.is_finite() || p0 <= 0.0 {
            return Err(EngineError::Config {
                what: "chamber stagnation pressure must be positive and finite".into(),
            });
        }
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(EngineError::Config {
                what: "chamber stagnation temperature must be positive and finite".into(),
            });
        }
        Ok(Self { p0, t0 })
    }

    /// Stagnation pressure (Pa).
    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Stagnation temperature (K).
    pub fn t0(&self) -> f64 {
        self.t0
    }
}
