//! Tangential wall stresses, after Huzel and Huang.

use rf_engine::{Engine, JacketConfiguration, Material};

use crate::error::{SolverError, SolverResult};
use crate::hx::HxState;

/// Blockage below this is treated as no fins for the pressure-stress case.
const BLOCKAGE_EPS: f64 = 1e-12;

/// Per-station, per-wall tangential stresses. Wall index 0 touches the
/// exhaust gas.
#[derive(Debug, Clone)]
pub struct StressField {
    pub sigma_t_thermal: Vec<Vec<f64>>,
    pub sigma_t_pressure: Vec<Vec<f64>>,
    pub sigma_t_max: Vec<Vec<f64>>,
}

/// Tangential thermal stress across a wall carrying a heat flux `dq_da`
/// (W/m^2 of inner chamber area):
///
/// ```text
/// sigma = E alpha q t / (2 (1 - nu) k)
/// ```
pub fn thermal_tangential_stress(material: &Material, dq_da: f64, thickness: f64) -> f64 {
    material.e * material.alpha * dq_da * thickness / (2.0 * (1.0 - material.poisson) * material.k)
}

/// Tangential pressure stress for an unrestrained thin cylindrical shell of
/// mean diameter `d_mean`.
pub fn pressure_tangential_stress_shell(dp: f64, d_mean: f64, thickness: f64) -> f64 {
    dp * d_mean / (2.0 * thickness)
}

/// Tangential pressure stress for an inner wall restrained by fins: a flat
/// plate of span `w` clamped at both edges.
pub fn pressure_tangential_stress_plate(dp: f64, w: f64, thickness: f64) -> f64 {
    0.5 * dp * (w / thickness) * (w / thickness)
}

/// Evaluate the tangential stresses for every station and wall.
///
/// The pressure difference is coolant static pressure minus exhaust static
/// pressure; with a blocked channel whose fins are attached to the outer
/// jacket, the inner wall behaves as a restrained plate between fins rather
/// than a free shell.
pub fn tangential_stresses(engine: &Engine, states: &[HxState]) -> SolverResult<StressField> {
    let jacket = engine.cooling_jacket().ok_or_else(|| SolverError::Config {
        what: "a cooling jacket is required for stress post-processing".into(),
    })?;
    let walls = engine.walls();
    let n_fins = f64::from(jacket.number_of_fins());

    let mut sigma_t_thermal = Vec::with_capacity(states.len());
    let mut sigma_t_pressure = Vec::with_capacity(states.len());
    let mut sigma_t_max = Vec::with_capacity(states.len());

    for state in states {
        let x = state.x;
        let y = engine.geometry().y(x);
        let dq_da = state.dq_dx / (2.0 * std::f64::consts::PI * y);

        let rho_coolant = engine.rho_coolant(x, state.t_coolant, state.p0_coolant)?;
        let p_coolant = engine.p_coolant(x, state.p0_coolant, rho_coolant)?;
        let p_exhaust = engine.p_exhaust(x)?;
        let dp = p_coolant - p_exhaust;

        let blockage_ratio = jacket.blockage_ratio(x);
        let restrained = blockage_ratio >= BLOCKAGE_EPS && jacket.restrain_fins();

        let mut thermal = Vec::with_capacity(walls.len());
        let mut pressure = Vec::with_capacity(walls.len());
        let mut max = Vec::with_capacity(walls.len());

        let mut r_inner = y;
        for wall in walls {
            let t_w = wall.thickness(x);
            let d_mean = 2.0 * r_inner + t_w;

            let s_thermal = thermal_tangential_stress(&wall.material, dq_da, t_w);
            let s_pressure = if restrained {
                let w = match jacket.configuration() {
                    JacketConfiguration::Vertical => {
                        std::f64::consts::PI * d_mean * (1.0 - blockage_ratio) / n_fins
                    }
                    JacketConfiguration::Spiral { .. } => {
                        jacket.pitch(x).unwrap_or(0.0) * (1.0 - blockage_ratio)
                    }
                };
                pressure_tangential_stress_plate(dp, w, t_w)
            } else {
                pressure_tangential_stress_shell(dp, d_mean, t_w)
            };

            thermal.push(s_thermal);
            pressure.push(s_pressure);
            max.push(s_thermal.abs() + s_pressure.abs());

            r_inner += t_w;
        }

        sigma_t_thermal.push(thermal);
        sigma_t_pressure.push(pressure);
        sigma_t_max.push(max);
    }

    Ok(StressField {
        sigma_t_thermal,
        sigma_t_pressure,
        sigma_t_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_shell_pressure_stress() {
        // dp = 25 bar, D = 0.1 m, t = 1 mm: sigma = 1.25e8 Pa
        let sigma = pressure_tangential_stress_shell(25e5, 0.1, 1e-3);
        assert!((sigma - 1.25e8).abs() < 1e-3 * 1.25e8);
    }

    #[test]
    fn restrained_plate_stress() {
        let sigma = pressure_tangential_stress_plate(25e5, 5e-3, 1e-3);
        assert!((sigma - 0.5 * 25e5 * 25.0).abs() < 1.0);
    }

    #[test]
    fn thermal_stress_scales_with_flux_and_thickness() {
        let copper = Material::new(120e9, 70e6, 0.34, 16.5e-6, 400.0).unwrap();
        let s1 = thermal_tangential_stress(&copper, 1e6, 1e-3);
        let s2 = thermal_tangential_stress(&copper, 2e6, 1e-3);
        let s3 = thermal_tangential_stress(&copper, 1e6, 2e-3);
        assert!((s2 - 2.0 * s1).abs() < 1e-6 * s1);
        assert!((s3 - 2.0 * s1).abs() < 1e-6 * s1);

        let expected = 120e9 * 16.5e-6 * 1e6 * 1e-3 / (2.0 * 0.66 * 400.0);
        assert!((s1 - expected).abs() < 1e-6 * expected);
    }
}
