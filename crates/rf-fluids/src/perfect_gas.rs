//! Perfect-gas exhaust model.

use crate::error::{FluidError, FluidResult};
use rf_core::units::constants::R_BAR;

/// Two-property specification of a perfect gas.
///
/// A perfect gas is fully determined by any two of {gamma, cp, molecular
/// weight}; supplying all three would overdetermine it, so the input is an
/// enum and the invalid combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerfectGasSpec {
    /// Ratio of specific heats and cp (J/kg/K).
    GammaCp { gamma: f64, cp: f64 },
    /// Ratio of specific heats and molecular weight (kg/kmol).
    GammaMolecularWeight { gamma: f64, molecular_weight: f64 },
    /// cp (J/kg/K) and molecular weight (kg/kmol).
    CpMolecularWeight { cp: f64, molecular_weight: f64 },
}

/// Ideal gas with constant cp and cv.
///
/// Invariants: gamma > 1, cp > 0, R = cp (gamma - 1) / gamma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    gamma: f64,
    cp: f64,
    molecular_weight: f64,
    r_specific: f64,
}

impl PerfectGas {
    pub fn new(spec: PerfectGasSpec) -> FluidResult<Self> {
        let (gamma, cp, molecular_weight, r_specific) = match spec {
            PerfectGasSpec::GammaCp { gamma, cp } => {
                Self::check_gamma(gamma)?;
                Self::check_positive(cp, "cp must be positive and finite")?;
                let r = cp * (gamma - 1.0) / gamma;
                (gamma, cp, R_BAR / r, r)
            }
            PerfectGasSpec::GammaMolecularWeight {
                gamma,
                molecular_weight,
            } => {
                Self::check_gamma(gamma)?;
                Self::check_positive(
                    molecular_weight,
                    "molecular weight must be positive and finite",
                )?;
                let r = R_BAR / molecular_weight;
                (gamma, gamma * r / (gamma - 1.0), molecular_weight, r)
            }
            PerfectGasSpec::CpMolecularWeight {
                cp,
                molecular_weight,
            } => {
                Self::check_positive(cp, "cp must be positive and finite")?;
                Self::check_positive(
                    molecular_weight,
                    "molecular weight must be positive and finite",
                )?;
                let r = R_BAR / molecular_weight;
                if cp <= r {
                    return Err(FluidError::GasDefinition {
                        what: "cp must exceed the specific gas constant",
                    });
                }
                (cp / (cp - r), cp, molecular_weight, r)
            }
        };

        Ok(Self {
            gamma,
            cp,
            molecular_weight,
            r_specific,
        })
    }

    fn check_gamma(gamma: f64) -> FluidResult<()> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(FluidError::GasDefinition {
                what: "gamma must be > 1 and finite",
            });
        }
        Ok(())
    }

    fn check_positive(v: f64, what: &'static str) -> FluidResult<()> {
        if !v.is_finite() || v <= 0.0 {
            return Err(FluidError::GasDefinition { what });
        }
        Ok(())
    }

    /// Ratio of specific heats cp/cv.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Specific heat capacity at constant pressure (J/kg/K).
    pub fn cp(&self) -> f64 {
        self.cp
    }

    /// Molecular weight (kg/kmol).
    pub fn molecular_weight(&self) -> f64 {
        self.molecular_weight
    }

    /// Specific gas constant (J/kg/K).
    pub fn r_specific(&self) -> f64 {
        self.r_specific
    }
}
