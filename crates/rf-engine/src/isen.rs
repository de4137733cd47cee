//! Isentropic compressible-flow relations for a perfect gas.

use rf_fluids::PerfectGas;

/// Dimensionless mass-flow function:
///
/// ```text
/// m_bar(M, gamma) = gamma M (1 + (gamma-1) M^2 / 2)^(-(gamma+1)/(2(gamma-1))) / sqrt(gamma - 1)
/// ```
///
/// Satisfies mdot sqrt(cp T0) / (A p0) = m_bar(M, gamma) along an isentropic
/// quasi-1D flow, and peaks at M = 1, which is what pins the choked mass
/// flow to the throat.
pub fn m_bar(mach: f64, gamma: f64) -> f64 {
    let recovery = 1.0 + (gamma - 1.0) / 2.0 * mach * mach;
    gamma * mach * recovery.powf(-(gamma + 1.0) / (2.0 * (gamma - 1.0))) / (gamma - 1.0).sqrt()
}

/// Static temperature from stagnation temperature (K).
pub fn temperature(t0: f64, mach: f64, gamma: f64) -> f64 {
    t0 / (1.0 + (gamma - 1.0) / 2.0 * mach * mach)
}

/// Static pressure from stagnation pressure (Pa).
pub fn pressure(p0: f64, mach: f64, gamma: f64) -> f64 {
    let t_ratio = 1.0 / (1.0 + (gamma - 1.0) / 2.0 * mach * mach);
    p0 * t_ratio.powf(gamma / (gamma - 1.0))
}

/// Choked mass flow rate through a throat of area `a_throat` (kg/s).
pub fn choked_mass_flow(a_throat: f64, p0: f64, t0: f64, gas: &PerfectGas) -> f64 {
    a_throat * p0 * m_bar(1.0, gas.gamma()) / (gas.cp() * t0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_fluids::PerfectGasSpec;

    #[test]
    fn m_bar_closed_form_at_sonic() {
        // m_bar(1, gamma) = gamma (2/(gamma+1))^((gamma+1)/(2(gamma-1))) / sqrt(gamma - 1)
        for gamma in [1.2f64, 1.3, 1.4] {
            let expected = gamma * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)))
                / (gamma - 1.0).sqrt();
            assert!((m_bar(1.0, gamma) - expected).abs() < 1e-14);
        }
    }

    #[test]
    fn m_bar_is_consistent_with_the_flow_it_names() {
        // mdot sqrt(cp T0) / (A p0) computed from rho V A must equal m_bar
        let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
            gamma: 1.2,
            cp: 1800.0,
        })
        .unwrap();
        let (p0, t0, a) = (20e5, 3000.0, 0.01);
        for mach in [0.3, 1.0, 2.0] {
            let t = temperature(t0, mach, gas.gamma());
            let p = pressure(p0, mach, gas.gamma());
            let rho = p / (gas.r_specific() * t);
            let v = mach * (gas.gamma() * gas.r_specific() * t).sqrt();
            let lhs = rho * v * a * (gas.cp() * t0).sqrt() / (a * p0);
            assert!((lhs - m_bar(mach, gas.gamma())).abs() < 1e-12 * lhs);
        }
    }

    #[test]
    fn m_bar_peaks_at_sonic() {
        let gamma = 1.2;
        let peak = m_bar(1.0, gamma);
        for mach in [0.1, 0.5, 0.9, 1.1, 2.0, 5.0] {
            assert!(m_bar(mach, gamma) < peak);
        }
    }

    #[test]
    fn isentropic_round_trip() {
        // Invert T(T0, M) for M, then recompute p: must match p(p0, M)
        let (gamma, t0, p0) = (1.2, 3000.0, 20e5);
        for mach in [0.3, 1.0, 2.24] {
            let t = temperature(t0, mach, gamma);
            let mach_back = ((t0 / t - 1.0) * 2.0 / (gamma - 1.0)).sqrt();
            let p_direct = pressure(p0, mach, gamma);
            let p_back = pressure(p0, mach_back, gamma);
            assert!((p_direct - p_back).abs() < 1e-10 * p_direct);
        }
    }

    #[test]
    fn choked_mass_flow_scenario() {
        // A_t = pi 0.05^2, p0 = 20 bar, T0 = 3000 K, gamma = 1.2, cp = 1800
        let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
            gamma: 1.2,
            cp: 1800.0,
        })
        .unwrap();
        let a_t = std::f64::consts::PI * 0.05 * 0.05;
        let mdot = choked_mass_flow(a_t, 20e5, 3000.0, &gas);
        assert!((mdot - 10.74).abs() / 10.74 < 0.02, "mdot = {mdot}");
    }

    #[test]
    fn choked_mass_flow_scales_linearly_with_p0() {
        let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
            gamma: 1.2,
            cp: 1800.0,
        })
        .unwrap();
        let a_t = std::f64::consts::PI * 0.05 * 0.05;
        let m1 = choked_mass_flow(a_t, 20e5, 3000.0, &gas);
        let m2 = choked_mass_flow(a_t, 40e5, 3000.0, &gas);
        assert!((m2 - 2.0 * m1).abs() < 1e-9 * m1);
    }
}
