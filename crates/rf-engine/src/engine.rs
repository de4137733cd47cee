//! Engine assembly: gas dynamics along the contour plus the per-station
//! quantities the marching solver needs.

use std::str::FromStr;
use std::sync::Arc;

use crate::chamber::ChamberConditions;
use crate::error::{EngineError, EngineResult};
use crate::geometry::Geometry;
use crate::isen;
use crate::jacket::{CoolingJacket, JacketConfiguration};
use crate::wall::Wall;
use rf_circuit::{
    LaminarNusselt, f_darcy, fin_heat_flow, h_coolant_dittus_boelter, h_coolant_gnielinski,
    h_coolant_sieder_tate, h_gas_bartz, h_gas_bartz_sigma, h_laminar,
};
use rf_core::numeric::{BrentConfig, brent};
use rf_core::units::constants::REDH_LAMINAR;
use rf_fluids::{PerfectGas, Phase, TransportProperties};

/// Tolerance for "at the throat" when resolving the Mach number.
const THROAT_EPS: f64 = 1e-12;

/// Blockage below this is treated as no fins at all.
const BLOCKAGE_EPS: f64 = 1e-12;

/// Iteration cap for the coolant density fixed point.
const RHO_MAX_ITER: usize = 100;

/// Convective model for the coolant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoolantConvection {
    DittusBoelter,
    SiederTate,
    #[default]
    Gnielinski,
}

impl FromStr for CoolantConvection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dittus-boelter" => Ok(Self::DittusBoelter),
            "sieder-tate" => Ok(Self::SiederTate),
            "gnielinski" => Ok(Self::Gnielinski),
            other => Err(EngineError::Config {
                what: format!(
                    "unknown coolant convection model '{other}' \
                     (expected 'dittus-boelter', 'sieder-tate' or 'gnielinski')"
                ),
            }),
        }
    }
}

/// Convective model for the exhaust side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustConvection {
    DittusBoelter,
    Bartz,
    #[default]
    BartzSigma,
}

impl FromStr for ExhaustConvection {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dittus-boelter" => Ok(Self::DittusBoelter),
            "bartz" => Ok(Self::Bartz),
            "bartz-sigma" => Ok(Self::BartzSigma),
            other => Err(EngineError::Config {
                what: format!(
                    "unknown exhaust convection model '{other}' \
                     (expected 'dittus-boelter', 'bartz' or 'bartz-sigma')"
                ),
            }),
        }
    }
}

/// Thermal-resistance assembly at one station.
#[derive(Debug, Clone)]
pub struct CircuitEval {
    /// Resistances per unit axial length, ordered cold to hot: coolant film,
    /// walls from the coolant side inward, gas film (K m / W).
    pub resistances: Vec<f64>,
    /// Coolant-side film coefficient used for the coolant resistance
    /// (W/m^2/K); the fin enhancement reuses it.
    pub h_coolant: f64,
    /// The coolant Reynolds number fell below the laminar cutoff and the
    /// constant-Nu laminar branch replaced the selected correlation.
    pub laminar_coolant: bool,
}

/// A liquid rocket engine: perfect-gas exhaust model, chamber conditions and
/// contour, optionally dressed with a wall stack, cooling jacket and exhaust
/// transport properties for heat-transfer analysis.
#[derive(Clone)]
pub struct Engine {
    perfect_gas: PerfectGas,
    chamber: ChamberConditions,
    geometry: Geometry,
    coolant_convection: CoolantConvection,
    exhaust_convection: ExhaustConvection,
    laminar_nusselt: LaminarNusselt,
    walls: Vec<Wall>,
    cooling_jacket: Option<CoolingJacket>,
    exhaust_transport: Option<Arc<dyn TransportProperties>>,
    mdot: f64,
    c_star: f64,
}

impl Engine {
    /// Create an engine. The exhaust mass flow rate is fixed by choking at
    /// the throat, and c* follows from it.
    pub fn new(perfect_gas: PerfectGas, chamber: ChamberConditions, geometry: Geometry) -> Self {
        let mdot = isen::choked_mass_flow(geometry.a_throat(), chamber.p0(), chamber.t0(), &perfect_gas);
        let c_star = chamber.p0() * geometry.a_throat() / mdot;

        Self {
            perfect_gas,
            chamber,
            geometry,
            coolant_convection: CoolantConvection::default(),
            exhaust_convection: ExhaustConvection::default(),
            laminar_nusselt: LaminarNusselt::default(),
            walls: Vec::new(),
            cooling_jacket: None,
            exhaust_transport: None,
            mdot,
            c_star,
        }
    }

    /// Wall stack, ordered hot side (index 0) to coolant side.
    pub fn with_walls(mut self, walls: Vec<Wall>) -> Self {
        self.walls = walls;
        self
    }

    pub fn with_cooling_jacket(mut self, jacket: CoolingJacket) -> Self {
        self.cooling_jacket = Some(jacket);
        self
    }

    pub fn with_exhaust_transport(mut self, transport: Arc<dyn TransportProperties>) -> Self {
        self.exhaust_transport = Some(transport);
        self
    }

    pub fn with_coolant_convection(mut self, model: CoolantConvection) -> Self {
        self.coolant_convection = model;
        self
    }

    pub fn with_exhaust_convection(mut self, model: ExhaustConvection) -> Self {
        self.exhaust_convection = model;
        self
    }

    pub fn with_laminar_nusselt(mut self, nusselt: LaminarNusselt) -> Self {
        self.laminar_nusselt = nusselt;
        self
    }

    pub fn perfect_gas(&self) -> &PerfectGas {
        &self.perfect_gas
    }

    pub fn chamber(&self) -> &ChamberConditions {
        &self.chamber
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn cooling_jacket(&self) -> Option<&CoolingJacket> {
        self.cooling_jacket.as_ref()
    }

    /// Exhaust mass flow rate (kg/s).
    pub fn mdot(&self) -> f64 {
        self.mdot
    }

    /// Characteristic velocity c* = p0 A_t / mdot (m/s).
    pub fn c_star(&self) -> f64 {
        self.c_star
    }

    // ---------------------------------------------------------------- exhaust

    /// Exhaust Mach number at x.
    ///
    /// Returns exactly 1 at the throat; elsewhere inverts the dimensionless
    /// mass-flow relation with a bracketed root finder, on [~0, 1] upstream
    /// of the throat and [1, 500] downstream.
    pub fn mach(&self, x: f64) -> EngineResult<f64> {
        let x_throat = self.geometry.x_throat();
        if (x - x_throat).abs() <= THROAT_EPS {
            return Ok(1.0);
        }

        let area = self.geometry.area(x);
        // A/A* = 1 within rounding means sonic flow; straight chamber
        // sections would otherwise hand the root finder a degenerate bracket
        if area <= self.geometry.a_throat() * (1.0 + 1e-12) {
            return Ok(1.0);
        }
        let gamma = self.perfect_gas.gamma();
        let target = self.mdot * (self.perfect_gas.cp() * self.chamber.t0()).sqrt()
            / (area * self.chamber.p0());

        let (lo, hi) = if x > x_throat {
            (1.0, 500.0)
        } else {
            (1e-10, 1.0)
        };

        let result = brent(
            |mach| Ok(target - isen::m_bar(mach, gamma)),
            lo,
            hi,
            &BrentConfig::default(),
        )
        .map_err(|source| EngineError::Numerical {
            component: "Mach solver",
            x,
            source,
        })?;

        Ok(result.root)
    }

    /// Exhaust static temperature at x (K).
    pub fn t_exhaust(&self, x: f64) -> EngineResult<f64> {
        Ok(isen::temperature(
            self.chamber.t0(),
            self.mach(x)?,
            self.perfect_gas.gamma(),
        ))
    }

    /// Exhaust static pressure at x (Pa).
    pub fn p_exhaust(&self, x: f64) -> EngineResult<f64> {
        Ok(isen::pressure(
            self.chamber.p0(),
            self.mach(x)?,
            self.perfect_gas.gamma(),
        ))
    }

    /// Exhaust density at x (kg/m^3), from p = rho R T.
    pub fn rho_exhaust(&self, x: f64) -> EngineResult<f64> {
        Ok(self.p_exhaust(x)? / (self.perfect_gas.r_specific() * self.t_exhaust(x)?))
    }

    /// Thrust at the given ambient pressure (N).
    pub fn thrust(&self, p_amb: f64) -> EngineResult<f64> {
        let (_, x_exit) = self.geometry.span();
        let mach_e = self.mach(x_exit)?;
        let t_e = self.t_exhaust(x_exit)?;
        let p_e = self.p_exhaust(x_exit)?;
        let v_e = mach_e * (self.perfect_gas.gamma() * self.perfect_gas.r_specific() * t_e).sqrt();

        Ok(self.mdot * v_e + (p_e - p_amb) * self.geometry.a_exit())
    }

    /// Specific impulse at the given ambient pressure (m/s).
    pub fn isp(&self, p_amb: f64) -> EngineResult<f64> {
        Ok(self.thrust(p_amb)? / self.mdot)
    }

    // ----------------------------------------------------------------- walls

    /// Total wall stack thickness at x (m).
    pub fn total_wall_thickness(&self, x: f64) -> f64 {
        self.walls.iter().map(|w| w.thickness(x)).sum()
    }

    // --------------------------------------------------------------- coolant

    fn jacket(&self) -> EngineResult<&CoolingJacket> {
        self.cooling_jacket.as_ref().ok_or_else(|| EngineError::Config {
            what: "a cooling jacket is required for cooling analysis".into(),
        })
    }

    fn blockage_ratio_checked(&self, jacket: &CoolingJacket, x: f64) -> EngineResult<f64> {
        let br = jacket.blockage_ratio(x);
        if !(0.0..1.0).contains(&br) {
            return Err(EngineError::Config {
                what: format!("blockage ratio profile returned {br} at x = {x} m"),
            });
        }
        Ok(br)
    }

    /// Axial range covered by the cooling jacket, defaulting to the full
    /// contour. Errors if a configured extent leaves the contour.
    pub fn jacket_span(&self) -> EngineResult<(f64, f64)> {
        let jacket = self.jacket()?;
        let (x_min, x_max) = self.geometry.span();
        match jacket.extent() {
            None => Ok((x_min, x_max)),
            Some((x_a, x_b)) => {
                if x_a < x_min || x_b > x_max {
                    return Err(EngineError::Config {
                        what: format!(
                            "cooling jacket extent [{x_a}, {x_b}] leaves the engine contour \
                             [{x_min}, {x_max}]"
                        ),
                    });
                }
                Ok((x_a, x_b))
            }
        }
    }

    /// Coolant flow area at x (m^2).
    pub fn a_coolant(&self, x: f64) -> EngineResult<f64> {
        let jacket = self.jacket()?;
        let br = self.blockage_ratio_checked(jacket, x)?;
        let height = jacket.channel_height(x);

        match jacket.configuration() {
            JacketConfiguration::Vertical => {
                let r_in = self.geometry.y(x) + self.total_wall_thickness(x);
                let r_out = r_in + height;
                Ok(std::f64::consts::PI * (r_out * r_out - r_in * r_in) * (1.0 - br))
            }
            JacketConfiguration::Spiral { .. } => {
                let pitch = jacket.pitch(x).unwrap_or(0.0);
                Ok(pitch * height * (1.0 - br))
            }
        }
    }

    /// Hydraulic diameter of the coolant channel at x (m): 4 A / P with the
    /// fin side-faces counted in the wetted perimeter.
    pub fn dh_coolant(&self, x: f64) -> EngineResult<f64> {
        let jacket = self.jacket()?;
        let br = self.blockage_ratio_checked(jacket, x)?;
        let height = jacket.channel_height(x);
        let n_fins = f64::from(jacket.number_of_fins());

        let perimeter = match jacket.configuration() {
            JacketConfiguration::Vertical => {
                let r_in = self.geometry.y(x) + self.total_wall_thickness(x);
                let two_pi = 2.0 * std::f64::consts::PI;
                (two_pi * r_in + two_pi * (r_in + height)) * (1.0 - br) + 2.0 * n_fins * height
            }
            JacketConfiguration::Spiral { .. } => {
                let pitch = jacket.pitch(x).unwrap_or(0.0);
                2.0 * pitch + 2.0 * height + 2.0 * height * n_fins
            }
        };

        Ok(4.0 * self.a_coolant(x)? / perimeter)
    }

    /// Coolant bulk velocity at x for a given density (m/s).
    pub fn v_coolant(&self, x: f64, rho_coolant: f64) -> EngineResult<f64> {
        Ok(self.jacket()?.mdot_coolant() / (rho_coolant * self.a_coolant(x)?))
    }

    /// Coolant static pressure from stagnation pressure (Pa), incompressible.
    pub fn p_coolant(&self, x: f64, p0_coolant: f64, rho_coolant: f64) -> EngineResult<f64> {
        let v = self.v_coolant(x, rho_coolant)?;
        Ok(p0_coolant - 0.5 * rho_coolant * v * v)
    }

    /// Coolant density at x (kg/m^3).
    ///
    /// Density depends on the static pressure, which depends on the velocity
    /// and hence the density. Fixed-point iterate from the stagnation-state
    /// density until the update falls below a 1e-12 relative change.
    pub fn rho_coolant(&self, x: f64, t_coolant: f64, p0_coolant: f64) -> EngineResult<f64> {
        let jacket = self.jacket()?;
        let transport = jacket.coolant_transport();

        let mut rho = transport.rho(t_coolant, p0_coolant)?;
        for _ in 0..RHO_MAX_ITER {
            let p = self.p_coolant(x, p0_coolant, rho)?;
            let next = transport.rho(t_coolant, p)?;
            let change = (next - rho).abs();
            rho = next;
            if change <= rho * 1e-12 {
                return Ok(rho);
            }
        }

        Err(EngineError::DensityFixedPoint {
            x,
            iterations: RHO_MAX_ITER,
        })
    }

    /// Coolant specific heat capacity at the station's bulk state (J/kg/K).
    pub fn cp_coolant(&self, x: f64, t_coolant: f64, p0_coolant: f64) -> EngineResult<f64> {
        let rho = self.rho_coolant(x, t_coolant, p0_coolant)?;
        let p = self.p_coolant(x, p0_coolant, rho)?;
        Ok(self.jacket()?.coolant_transport().cp(t_coolant, p)?)
    }

    /// Coolant phase reported by the transport provider at the bulk state.
    pub fn coolant_phase(&self, x: f64, t_coolant: f64, p0_coolant: f64) -> EngineResult<Phase> {
        let rho = self.rho_coolant(x, t_coolant, p0_coolant)?;
        let p = self.p_coolant(x, p0_coolant, rho)?;
        Ok(self.jacket()?.coolant_transport().phase(t_coolant, p))
    }

    // -------------------------------------------------------- thermal circuit

    /// Assemble the station's series resistances, ordered cold to hot:
    /// coolant film, each wall from the coolant side inward, gas film.
    pub fn thermal_resistances(
        &self,
        x: f64,
        t_coolant: f64,
        t_wall_cold: f64,
        t_wall_hot: f64,
        p0_coolant: f64,
    ) -> EngineResult<CircuitEval> {
        let jacket = self.jacket()?;
        if self.walls.is_empty() {
            return Err(EngineError::Config {
                what: "at least one wall is required for cooling analysis".into(),
            });
        }
        let transport = jacket.coolant_transport();
        let y = self.geometry.y(x);

        // Coolant film
        let rho_c = self.rho_coolant(x, t_coolant, p0_coolant)?;
        let p_c = self.p_coolant(x, p0_coolant, rho_c)?;
        let v_c = self.v_coolant(x, rho_c)?;
        let dh_c = self.dh_coolant(x)?;

        let mu_c = transport.mu(t_coolant, p_c)?;
        let k_c = transport.k(t_coolant, p_c)?;
        let pr_c = transport.pr(t_coolant, p_c)?;
        let re_c = rho_c * v_c * dh_c / mu_c;

        let laminar_coolant = re_c < REDH_LAMINAR;
        let h_coolant = if laminar_coolant {
            h_laminar(self.laminar_nusselt, k_c, dh_c)?
        } else {
            match self.coolant_convection {
                CoolantConvection::DittusBoelter => {
                    h_coolant_dittus_boelter(rho_c, v_c, dh_c, mu_c, pr_c, k_c)?
                }
                CoolantConvection::SiederTate => {
                    let mu_wall = transport.mu(t_wall_cold, p_c)?;
                    h_coolant_sieder_tate(rho_c, v_c, dh_c, mu_c, mu_wall, pr_c, k_c)?
                }
                CoolantConvection::Gnielinski => {
                    let f = f_darcy(re_c, dh_c, jacket.roughness(x))?;
                    h_coolant_gnielinski(rho_c, v_c, dh_c, mu_c, pr_c, k_c, f)?
                }
            }
        };

        let mut resistances = Vec::with_capacity(self.walls.len() + 2);

        // Wetted area per unit axial length on the coolant side
        let a_coolant_wetted =
            2.0 * std::f64::consts::PI * (y + self.total_wall_thickness(x) + jacket.channel_height(x));
        resistances.push(1.0 / (h_coolant * a_coolant_wetted));

        // Solid walls, walking from the coolant side inward. The stack is
        // ordered hot to cold, so wall i (cold to hot) is walls[n - 1 - i]
        // and its inner radius accumulates every wall closer to the gas.
        let n = self.walls.len();
        for i in 0..n {
            let wall = &self.walls[n - 1 - i];
            let mut r1 = y;
            for inner in &self.walls[..n - 1 - i] {
                r1 += inner.thickness(x);
            }
            let r2 = r1 + wall.thickness(x);
            resistances.push((r2 / r1).ln() / (2.0 * std::f64::consts::PI * wall.material.k));
        }

        // Gas film
        let transport_ex = self
            .exhaust_transport
            .as_deref()
            .ok_or_else(|| EngineError::Config {
                what: "exhaust transport properties are required for cooling analysis".into(),
            })?;

        let mach = self.mach(x)?;
        let t_ex = isen::temperature(self.chamber.t0(), mach, self.perfect_gas.gamma());
        let p_ex = isen::pressure(self.chamber.p0(), mach, self.perfect_gas.gamma());
        let rho_ex = p_ex / (self.perfect_gas.r_specific() * t_ex);
        let v_ex =
            mach * (self.perfect_gas.gamma() * self.perfect_gas.r_specific() * t_ex).sqrt();
        let dh_ex = 2.0 * y;

        let mu_ex = transport_ex.mu(t_ex, p_ex)?;
        let pr_ex = transport_ex.pr(t_ex, p_ex)?;
        let k_ex = transport_ex.k(t_ex, p_ex)?;

        let h_exhaust = match self.exhaust_convection {
            ExhaustConvection::DittusBoelter => {
                h_coolant_dittus_boelter(rho_ex, v_ex, dh_ex, mu_ex, pr_ex, k_ex)?
            }
            ExhaustConvection::Bartz => {
                // Film properties at the arithmetic mean of wall and freestream
                let t_am = 0.5 * (t_ex + t_wall_hot);
                let mu_am = transport_ex.mu(t_am, p_ex)?;
                let rho_am = p_ex / (self.perfect_gas.r_specific() * t_am);
                let mu_0 = transport_ex.mu(self.chamber.t0(), self.chamber.p0())?;
                h_gas_bartz(
                    dh_ex,
                    self.perfect_gas.cp(),
                    mu_ex,
                    pr_ex,
                    rho_ex,
                    v_ex,
                    rho_am,
                    mu_am,
                    mu_0,
                )?
            }
            ExhaustConvection::BartzSigma => {
                let mu_0 = transport_ex.mu(self.chamber.t0(), self.chamber.p0())?;
                let pr_0 = transport_ex.pr(self.chamber.t0(), self.chamber.p0())?;
                h_gas_bartz_sigma(
                    self.c_star,
                    self.geometry.a_throat(),
                    std::f64::consts::PI * dh_ex * dh_ex / 4.0,
                    self.chamber.p0(),
                    self.chamber.t0(),
                    mach,
                    t_wall_hot,
                    mu_0,
                    self.perfect_gas.cp(),
                    self.perfect_gas.gamma(),
                    pr_0,
                )?
            }
        };

        let a_exhaust_wetted = 2.0 * std::f64::consts::PI * y;
        resistances.push(1.0 / (h_exhaust * a_exhaust_wetted));

        Ok(CircuitEval {
            resistances,
            h_coolant,
            laminar_coolant,
        })
    }

    /// Additional heat flow per unit axial length from fins (W/m).
    ///
    /// Treats each fin as a straight adiabatic-tip fin spanning the channel
    /// height, then subtracts the plain convection of the base area the fins
    /// displaced. Zero when the blockage ratio is (numerically) zero.
    pub fn extra_dq_dx(
        &self,
        x: f64,
        t_coolant: f64,
        t_wall_cold: f64,
        h_coolant: f64,
    ) -> EngineResult<f64> {
        let jacket = self.jacket()?;
        let br = self.blockage_ratio_checked(jacket, x)?;
        if br < BLOCKAGE_EPS {
            return Ok(0.0);
        }

        // Per unit dx the exposed fin perimeter is two side faces
        let perimeter = 2.0;
        let length = jacket.channel_height(x);
        let n_fins = f64::from(jacket.number_of_fins());
        let r_base = self.geometry.y(x) + self.total_wall_thickness(x);

        // Constant fin cross-section equal to the blocked base area per fin
        let (area_fin, base_no_fin) = match jacket.configuration() {
            JacketConfiguration::Vertical => {
                let circumference = 2.0 * std::f64::consts::PI * r_base;
                (
                    circumference * br / n_fins,
                    circumference * (1.0 - br),
                )
            }
            JacketConfiguration::Spiral { .. } => {
                let pitch = jacket.pitch(x).unwrap_or(0.0);
                (pitch * br / n_fins, pitch * (1.0 - br))
            }
        };

        // Fins conduct from the coolant-side wall they are cut into
        let k_wall = self.walls.last().ok_or_else(|| EngineError::Config {
            what: "at least one wall is required for cooling analysis".into(),
        })?;

        let q_fin = fin_heat_flow(
            h_coolant,
            perimeter,
            k_wall.material.k,
            area_fin,
            length,
            t_wall_cold,
            t_coolant,
        )?;

        Ok((q_fin * n_fins).abs() - base_no_fin * h_coolant * (t_wall_cold - t_coolant))
    }

    /// Coolant stagnation-pressure gradient magnitude at x (Pa/m of axial
    /// distance), from Darcy-Weisbach friction. Spiral channels pick up the
    /// helix path-length factor dL/dx.
    pub fn dp_dx(&self, x: f64, t_coolant: f64, p0_coolant: f64) -> EngineResult<f64> {
        let jacket = self.jacket()?;
        let dh = self.dh_coolant(x)?;
        let rho = self.rho_coolant(x, t_coolant, p0_coolant)?;
        let p = self.p_coolant(x, p0_coolant, rho)?;
        let v = self.v_coolant(x, rho)?;
        let mu = jacket.coolant_transport().mu(t_coolant, p)?;

        let re = rho * v * dh / mu;
        let f = f_darcy(re, dh, jacket.roughness(x))?;

        // Pressure drop per unit length travelled by the fluid
        let dp_dl = f * (rho / 2.0) * v * v / dh;

        match jacket.configuration() {
            JacketConfiguration::Vertical => Ok(dp_dl),
            JacketConfiguration::Spiral { .. } => {
                let pitch = jacket.pitch(x).unwrap_or(0.0);
                let r = self.geometry.y(x) + self.total_wall_thickness(x);
                let circumference = 2.0 * std::f64::consts::PI * r;
                let helix_angle = (circumference / pitch).atan();
                Ok(dp_dl / helix_angle.cos())
            }
        }
    }

    /// Check everything a cooling analysis needs is present and coherent.
    /// Fails before any numerical work.
    pub fn validate_cooling_setup(&self) -> EngineResult<()> {
        if self.walls.is_empty() {
            return Err(EngineError::Config {
                what: "at least one wall is required for cooling analysis".into(),
            });
        }
        if self.exhaust_transport.is_none() {
            return Err(EngineError::Config {
                what: "exhaust transport properties are required for cooling analysis".into(),
            });
        }
        self.jacket_span().map(|_| ())
    }
}
