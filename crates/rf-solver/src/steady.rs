//! Steady cooling analysis orchestration.

use rf_engine::{CircuitEval, Engine};
use rf_fluids::Phase;
use rf_results::HeatingResults;

use crate::error::{SolverError, SolverResult};
use crate::hx::{HxGrid, HxInlet, HxModel, HxSolver, HxState};
use crate::stress::tangential_stresses;

/// Options for [`steady_heating_analysis`].
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Number of axial stations.
    pub num_grid: usize,
    /// Coolant flows against the exhaust (from the nozzle end towards the
    /// injector) when true.
    pub counterflow: bool,
    /// Whole-march passes iterating on the entry wall-temperature profile.
    pub iter_start: usize,
    /// Local fixed-point passes per station.
    pub iter_each: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            num_grid: 1000,
            counterflow: true,
            iter_start: 5,
            iter_each: 1,
        }
    }
}

impl HxModel for Engine {
    fn t_hot(&self, x: f64) -> SolverResult<f64> {
        Ok(self.t_exhaust(x)?)
    }

    fn cp_coolant(&self, state: &HxState) -> SolverResult<f64> {
        Ok(Engine::cp_coolant(self, state.x, state.t_coolant, state.p0_coolant)?)
    }

    fn circuit(&self, state: &HxState) -> SolverResult<CircuitEval> {
        Ok(self.thermal_resistances(
            state.x,
            state.t_coolant,
            state.t_wall_cold,
            state.t_wall_hot,
            state.p0_coolant,
        )?)
    }

    fn extra_dq_dx(&self, state: &HxState, h_coolant: f64) -> SolverResult<f64> {
        Ok(Engine::extra_dq_dx(
            self,
            state.x,
            state.t_coolant,
            state.t_wall_cold,
            h_coolant,
        )?)
    }

    fn dp_dx(&self, state: &HxState) -> SolverResult<f64> {
        Ok(Engine::dp_dx(self, state.x, state.t_coolant, state.p0_coolant)?)
    }

    fn coolant_phase(&self, state: &HxState) -> SolverResult<Phase> {
        Ok(Engine::coolant_phase(
            self,
            state.x,
            state.t_coolant,
            state.p0_coolant,
        )?)
    }
}

/// Run a steady-state cooling analysis over the jacketed part of the engine.
///
/// Validates the configuration, marches the coolant through the jacket,
/// post-processes wall stresses and returns the assembled per-station
/// results, ordered along the coolant flow direction.
pub fn steady_heating_analysis(
    engine: &Engine,
    options: &SolverOptions,
) -> SolverResult<HeatingResults> {
    engine.validate_cooling_setup()?;

    let jacket = engine.cooling_jacket().ok_or_else(|| SolverError::Config {
        what: "a cooling jacket is required for cooling analysis".into(),
    })?;

    if engine.walls().len() > 1 {
        tracing::warn!(
            "multiple wall layers: thermal stresses ignore any incompatibility between the \
             layers' thermal expansions"
        );
    }

    let (x_min, x_max) = engine.jacket_span()?;
    let (x_start, x_end) = if options.counterflow {
        (x_max, x_min)
    } else {
        (x_min, x_max)
    };

    let inlet = HxInlet {
        t_coolant: jacket.t_coolant_in(),
        p0_coolant: jacket.p0_coolant_in(),
        mdot_coolant: jacket.mdot_coolant(),
    };
    let grid = HxGrid {
        x_start,
        x_end,
        num_stations: options.num_grid,
    };

    let states = HxSolver::new(engine, inlet, grid)?.run(options.iter_start, options.iter_each)?;
    let stresses = tangential_stresses(engine, &states)?;

    let n = states.len();
    let mut results = HeatingResults {
        x: Vec::with_capacity(n),
        temps: Vec::with_capacity(n),
        t_coolant: Vec::with_capacity(n),
        t_exhaust: Vec::with_capacity(n),
        dq_dx: Vec::with_capacity(n),
        dq_da: Vec::with_capacity(n),
        p0_coolant: Vec::with_capacity(n),
        p_coolant: Vec::with_capacity(n),
        rho_coolant: Vec::with_capacity(n),
        v_coolant: Vec::with_capacity(n),
        sigma_t_thermal: stresses.sigma_t_thermal,
        sigma_t_pressure: stresses.sigma_t_pressure,
        sigma_t_max: stresses.sigma_t_max,
    };

    for state in states {
        let x = state.x;
        let y = engine.geometry().y(x);

        let rho = engine.rho_coolant(x, state.t_coolant, state.p0_coolant)?;
        let p = engine.p_coolant(x, state.p0_coolant, rho)?;
        let v = engine.v_coolant(x, rho)?;

        let t_exhaust = state.temps.last().copied().ok_or(SolverError::Numerical {
            component: "results assembly",
            x,
            what: "station has no solved thermal circuit".into(),
        })?;

        results.x.push(x);
        results.t_coolant.push(state.t_coolant);
        results.t_exhaust.push(t_exhaust);
        results.dq_dx.push(state.dq_dx);
        results
            .dq_da
            .push(state.dq_dx / (2.0 * std::f64::consts::PI * y));
        results.p0_coolant.push(state.p0_coolant);
        results.p_coolant.push(p);
        results.rho_coolant.push(rho);
        results.v_coolant.push(v);
        results.temps.push(state.temps);
    }

    Ok(results)
}
