//! Convective heat-transfer coefficient correlations.
//!
//! Coolant-side correlations are standard turbulent pipe-flow Nusselt forms;
//! exhaust-side coefficients use the Bartz equations for rocket nozzles.
//! Every function returns h in W/m^2/K.

use crate::error::{CircuitResult, check_finite};

/// Nusselt number to use when the coolant flow is laminar (Re < 2300).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaminarNusselt {
    /// Nu = 3.66, fully developed flow with constant wall temperature.
    #[default]
    ConstantWallTemperature,
    /// Nu = 4.36, fully developed flow with constant heat flux.
    ConstantHeatFlux,
}

impl LaminarNusselt {
    pub fn value(self) -> f64 {
        match self {
            LaminarNusselt::ConstantWallTemperature => 3.66,
            LaminarNusselt::ConstantHeatFlux => 4.36,
        }
    }
}

/// Laminar fully-developed pipe flow: h = Nu k / D with constant Nu.
pub fn h_laminar(nusselt: LaminarNusselt, k: f64, d: f64) -> CircuitResult<f64> {
    check_finite(nusselt.value() * k / d, "laminar h")
}

/// Dittus-Boelter: Nu = 0.023 Re^0.8 Pr^0.4.
pub fn h_coolant_dittus_boelter(
    rho: f64,
    v: f64,
    d: f64,
    mu: f64,
    pr: f64,
    k: f64,
) -> CircuitResult<f64> {
    let re = rho * v * d / mu;
    let nu = 0.023 * re.powf(0.8) * pr.powf(0.4);
    check_finite(nu * k / d, "Dittus-Boelter h")
}

/// Sieder-Tate: Nu = 0.027 Re^0.8 Pr^(1/3) (mu_bulk/mu_wall)^0.14.
///
/// The viscosity ratio corrects for the thermal boundary layer next to a
/// wall much hotter or colder than the bulk.
pub fn h_coolant_sieder_tate(
    rho: f64,
    v: f64,
    d: f64,
    mu_bulk: f64,
    mu_wall: f64,
    pr: f64,
    k: f64,
) -> CircuitResult<f64> {
    let re = rho * v * d / mu_bulk;
    let nu = 0.027 * re.powf(0.8) * pr.powf(1.0 / 3.0) * (mu_bulk / mu_wall).powf(0.14);
    check_finite(nu * k / d, "Sieder-Tate h")
}

/// Gnielinski: Nu = (f/8)(Re - 1000)Pr / (1 + 12.7 sqrt(f/8)(Pr^(2/3) - 1)).
///
/// Valid for 3000 < Re < 5e6; takes the Darcy friction factor so rough-wall
/// channels feed their friction penalty into the heat transfer.
pub fn h_coolant_gnielinski(
    rho: f64,
    v: f64,
    d: f64,
    mu: f64,
    pr: f64,
    k: f64,
    f_darcy: f64,
) -> CircuitResult<f64> {
    let re = rho * v * d / mu;
    let f8 = f_darcy / 8.0;
    let nu = f8 * (re - 1000.0) * pr / (1.0 + 12.7 * f8.sqrt() * (pr.powf(2.0 / 3.0) - 1.0));
    check_finite(nu * k / d, "Gnielinski h")
}

/// Bartz equation, freestream properties with an arithmetic-mean film
/// correction. 'am' properties are evaluated at T = (T_wall + T_freestream)/2,
/// mu0 at stagnation conditions.
#[allow(clippy::too_many_arguments)]
pub fn h_gas_bartz(
    d: f64,
    cp_inf: f64,
    mu_inf: f64,
    pr_inf: f64,
    rho_inf: f64,
    v_inf: f64,
    rho_am: f64,
    mu_am: f64,
    mu0: f64,
) -> CircuitResult<f64> {
    let h = (0.026 / d.powf(0.2)) * (cp_inf * mu_inf.powf(0.2)) / pr_inf.powf(0.6)
        * (rho_inf * v_inf).powf(0.8)
        * (rho_am / rho_inf)
        * (mu_am / mu0).powf(0.2);
    check_finite(h, "Bartz h")
}

/// Bartz sigma correlation, built on chamber stagnation properties and the
/// boundary-layer correction factor sigma.
#[allow(clippy::too_many_arguments)]
pub fn h_gas_bartz_sigma(
    c_star: f64,
    a_throat: f64,
    a: f64,
    p_chamber: f64,
    t_chamber: f64,
    mach: f64,
    t_wall: f64,
    mu0: f64,
    cp0: f64,
    gamma: f64,
    pr0: f64,
) -> CircuitResult<f64> {
    let d_throat = (4.0 * a_throat / std::f64::consts::PI).sqrt();
    let recovery = 1.0 + (gamma - 1.0) / 2.0 * mach * mach;
    let sigma = (0.5 * (t_wall / t_chamber) * recovery + 0.5).powf(0.68) * recovery.powf(-0.12);

    let h = (0.026 / d_throat.powf(0.2))
        * (mu0.powf(0.2) * cp0 / pr0.powf(0.6))
        * (p_chamber / c_star).powf(0.8)
        * (a_throat / a).powf(0.9)
        * sigma;
    check_finite(h, "Bartz-sigma h")
}
