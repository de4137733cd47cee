//! Marching heat-exchange solver.

use rf_circuit::ThermalCircuit;
use rf_engine::CircuitEval;
use rf_fluids::Phase;

use crate::error::{SolverError, SolverResult};

/// Coolant entry conditions.
#[derive(Debug, Clone, Copy)]
pub struct HxInlet {
    /// Coolant inlet temperature (K).
    pub t_coolant: f64,
    /// Coolant inlet stagnation pressure (Pa).
    pub p0_coolant: f64,
    /// Coolant mass flow rate (kg/s).
    pub mdot_coolant: f64,
}

/// Station grid. The solver marches from `x_start` to `x_end` in the coolant
/// flow direction; for counter-flow cooling `x_start > x_end`.
#[derive(Debug, Clone, Copy)]
pub struct HxGrid {
    pub x_start: f64,
    pub x_end: f64,
    pub num_stations: usize,
}

/// Solver state at one station.
#[derive(Debug, Clone)]
pub struct HxState {
    /// Axial position (m).
    pub x: f64,
    /// Coolant bulk temperature (K).
    pub t_coolant: f64,
    /// Coolant stagnation pressure (Pa).
    pub p0_coolant: f64,
    /// Wall surface temperature on the coolant side (K).
    pub t_wall_cold: f64,
    /// Wall surface temperature on the exhaust side (K).
    pub t_wall_hot: f64,
    /// Node temperatures across the stack, cold to hot (K).
    pub temps: Vec<f64>,
    /// Heat transfer per unit axial length (W/m), positive when heat leaves
    /// the gas; includes the fin enhancement.
    pub dq_dx: f64,
}

/// Everything the marching solver needs to know about the system, evaluated
/// at the current coolant state. The hot side is a function of x alone.
pub trait HxModel {
    /// Hot-side driving temperature at x (K).
    fn t_hot(&self, x: f64) -> SolverResult<f64>;

    /// Coolant specific heat capacity at the station's bulk state (J/kg/K).
    fn cp_coolant(&self, state: &HxState) -> SolverResult<f64>;

    /// Series resistances cold to hot, plus the coolant film coefficient.
    fn circuit(&self, state: &HxState) -> SolverResult<CircuitEval>;

    /// Extra heat flow per unit axial length from extended surfaces (W/m).
    fn extra_dq_dx(&self, state: &HxState, h_coolant: f64) -> SolverResult<f64>;

    /// Coolant stagnation-pressure gradient magnitude (Pa/m).
    fn dp_dx(&self, state: &HxState) -> SolverResult<f64>;

    /// Coolant phase at the station's bulk state, for phase-change warnings.
    fn coolant_phase(&self, _state: &HxState) -> SolverResult<Phase> {
        Ok(Phase::Unknown)
    }
}

/// Marching solver for the coupled coolant / wall-temperature problem.
///
/// Station updates are explicit Euler in x. The wall temperatures entering
/// each station's resistance evaluation come from a fixed-point discipline:
/// `iter_each` local passes per station, and `iter_start` whole-march passes
/// that feed the previous pass's wall-temperature profile back as the next
/// initial guess (this is what couples counter-flow cooling, where the wall
/// profile depends on downstream coolant states).
pub struct HxSolver<'a, M: HxModel> {
    model: &'a M,
    inlet: HxInlet,
    grid: HxGrid,
}

impl<'a, M: HxModel> HxSolver<'a, M> {
    pub fn new(model: &'a M, inlet: HxInlet, grid: HxGrid) -> SolverResult<Self> {
        if grid.num_stations < 2 {
            return Err(SolverError::Config {
                what: format!("need at least 2 stations, got {}", grid.num_stations),
            });
        }
        if !(grid.x_start - grid.x_end).is_normal() {
            return Err(SolverError::Config {
                what: "grid start and end must differ".into(),
            });
        }
        for (v, name) in [
            (inlet.t_coolant, "inlet coolant temperature"),
            (inlet.p0_coolant, "inlet coolant stagnation pressure"),
            (inlet.mdot_coolant, "coolant mass flow rate"),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(SolverError::Config {
                    what: format!("{name} must be positive and finite"),
                });
            }
        }
        Ok(Self { model, inlet, grid })
    }

    /// Run the marching solve and return the last pass's station states, in
    /// marching order.
    pub fn run(&self, iter_start: usize, iter_each: usize) -> SolverResult<Vec<HxState>> {
        let n = self.grid.num_stations;
        let dx = (self.grid.x_end - self.grid.x_start) / (n as f64 - 1.0);
        let dx_abs = dx.abs();
        let passes = iter_start.max(1);
        let per_station = iter_each.max(1);

        // Wall-temperature profile carried between passes. On the first pass
        // there is no profile yet: each station starts from the previous
        // station's wall temperatures, seeded with the coolant inlet
        // temperature.
        let mut wall_guess = vec![(self.inlet.t_coolant, self.inlet.t_coolant); n];

        let mut warned_laminar = false;
        let mut warned_phase = false;
        let mut states: Vec<HxState> = Vec::new();

        for pass in 0..passes {
            states = Vec::with_capacity(n);
            let mut t_coolant = self.inlet.t_coolant;
            let mut p0_coolant = self.inlet.p0_coolant;
            let mut upstream_walls = (self.inlet.t_coolant, self.inlet.t_coolant);

            for i in 0..n {
                let x = self.grid.x_start + dx * i as f64;
                let (guess_cold, guess_hot) = if pass == 0 {
                    upstream_walls
                } else {
                    wall_guess[i]
                };
                let mut state = HxState {
                    x,
                    t_coolant,
                    p0_coolant,
                    t_wall_cold: guess_cold,
                    t_wall_hot: guess_hot,
                    temps: Vec::new(),
                    dq_dx: 0.0,
                };

                let t_hot = self.model.t_hot(x)?;
                let mut remaining = per_station;
                let eval: CircuitEval = loop {
                    let eval = self.model.circuit(&state)?;
                    let circuit = ThermalCircuit::solve(state.t_coolant, t_hot, &eval.resistances)?;
                    state.t_wall_cold = circuit.t_wall_cold();
                    state.t_wall_hot = circuit.t_wall_hot();
                    state.dq_dx = circuit.q_dot;
                    state.temps = circuit.temps;
                    remaining -= 1;
                    if remaining == 0 {
                        break eval;
                    }
                };

                if eval.laminar_coolant && !warned_laminar {
                    tracing::warn!(
                        x,
                        "coolant Reynolds number below the laminar cutoff; using the constant-Nu \
                         laminar branch instead of the selected turbulent correlation"
                    );
                    warned_laminar = true;
                }

                state.dq_dx += self.model.extra_dq_dx(&state, eval.h_coolant)?;

                if !warned_phase && self.model.coolant_phase(&state)? == Phase::Gas {
                    tracing::warn!(x, "coolant phase change detected");
                    warned_phase = true;
                }

                wall_guess[i] = (state.t_wall_cold, state.t_wall_hot);
                upstream_walls = wall_guess[i];

                if i + 1 < n {
                    let cp = self.model.cp_coolant(&state)?;
                    t_coolant = state.t_coolant
                        + state.dq_dx * dx_abs / (self.inlet.mdot_coolant * cp);
                    p0_coolant = state.p0_coolant - self.model.dp_dx(&state)? * dx_abs;

                    if !t_coolant.is_finite() || t_coolant <= 0.0 {
                        return Err(SolverError::Numerical {
                            component: "coolant temperature update",
                            x,
                            what: format!("coolant temperature became {t_coolant} K"),
                        });
                    }
                    if !p0_coolant.is_finite() || p0_coolant <= 0.0 {
                        return Err(SolverError::Numerical {
                            component: "coolant pressure update",
                            x,
                            what: format!("coolant stagnation pressure became {p0_coolant} Pa"),
                        });
                    }
                }

                states.push(state);
            }
        }

        Ok(states)
    }
}
