//! Solid wall materials.

use crate::error::{EngineError, EngineResult};

/// Isotropic wall material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Young's modulus (Pa)
    pub e: f64,
    /// 0.2% yield stress (Pa)
    pub sigma_y: f64,
    /// Poisson's ratio
    pub poisson: f64,
    /// Thermal expansion coefficient (1/K)
    pub alpha: f64,
    /// Thermal conductivity (W/m/K)
    pub k: f64,
}

impl Material {
    pub fn new(e: f64, sigma_y: f64, poisson: f64, alpha: f64, k: f64) -> EngineResult<Self> {
        for (v, name) in [
            (e, "Young's modulus"),
            (sigma_y, "yield stress"),
            (poisson, "Poisson's ratio"),
            (alpha, "thermal expansion coefficient"),
            (k, "thermal conductivity"),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(EngineError::Config {
                    what: format!("material {name} must be positive and finite"),
                });
            }
        }
        Ok(Self {
            e,
            sigma_y,
            poisson,
            alpha,
            k,
        })
    }

    /// Figure of merit for thermal-stress resistance; higher is better.
    pub fn performance_thermal(&self) -> f64 {
        (1.0 - self.poisson) * self.k / self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_like() {
        let cu = Material::new(120e9, 70e6, 0.34, 16.5e-6, 400.0).unwrap();
        assert!((cu.performance_thermal() - 0.66 * 400.0 / 16.5e-6).abs() < 1.0);
    }

    #[test]
    fn rejects_nonpositive_properties() {
        assert!(Material::new(0.0, 70e6, 0.34, 16.5e-6, 400.0).is_err());
        assert!(Material::new(120e9, 70e6, 0.34, -1e-6, 400.0).is_err());
    }
}
