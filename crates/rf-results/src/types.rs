//! Result data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-station results of a steady heating analysis.
///
/// Every array is aligned to `x` and ordered along the coolant flow
/// direction (for counter-flow cooling, descending x). Stress arrays are
/// indexed per station, then per wall with index 0 the wall touching the
/// exhaust gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingResults {
    /// Axial position of each station (m).
    pub x: Vec<f64>,
    /// Node temperatures across the stack at each station, cold to hot (K):
    /// coolant bulk, wall boundaries, exhaust freestream.
    pub temps: Vec<Vec<f64>>,
    /// Coolant bulk temperature (K); equals `temps[i][0]`.
    pub t_coolant: Vec<f64>,
    /// Exhaust freestream temperature (K); equals the last entry of
    /// `temps[i]`.
    pub t_exhaust: Vec<f64>,
    /// Heat transfer rate per unit axial length (W/m), positive when heat
    /// leaves the exhaust gas.
    pub dq_dx: Vec<f64>,
    /// Heat flux per unit chamber inner area (W/m^2).
    pub dq_da: Vec<f64>,
    /// Coolant stagnation pressure (Pa).
    pub p0_coolant: Vec<f64>,
    /// Coolant static pressure (Pa).
    pub p_coolant: Vec<f64>,
    /// Coolant density (kg/m^3).
    pub rho_coolant: Vec<f64>,
    /// Coolant bulk velocity (m/s).
    pub v_coolant: Vec<f64>,
    /// Tangential stress from uneven thermal expansion, per wall (Pa).
    pub sigma_t_thermal: Vec<Vec<f64>>,
    /// Tangential stress from the pressure difference across each wall (Pa).
    pub sigma_t_pressure: Vec<Vec<f64>>,
    /// Worst-case tangential stress per wall (Pa):
    /// |sigma_t_thermal| + |sigma_t_pressure|.
    pub sigma_t_max: Vec<Vec<f64>>,
}

impl HeatingResults {
    /// Number of stations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Human-readable description of every field, keyed by field name.
    pub fn info() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("x", "Axial position along the engine (m)."),
            (
                "temps",
                "Temperature at each position (K). temps[i][j] is the temperature at x[i] at the \
                 j'th boundary, cold to hot: j = 0 is the coolant bulk, the last j is the exhaust \
                 freestream.",
            ),
            (
                "t_coolant",
                "Coolant bulk temperature at each position (K); equal to temps[i][0].",
            ),
            (
                "t_exhaust",
                "Exhaust freestream temperature at each position (K); equal to the last entry of \
                 temps[i].",
            ),
            (
                "dq_dx",
                "Heat transfer rate per unit axial length (W/m), positive when heat flows from \
                 the exhaust gas to the coolant.",
            ),
            (
                "dq_da",
                "Heat transfer rate per unit chamber inner area (W/m^2), dq_dx / (2 pi y).",
            ),
            ("p0_coolant", "Coolant stagnation pressure (Pa)."),
            ("p_coolant", "Coolant static pressure (Pa)."),
            ("rho_coolant", "Coolant density (kg/m^3)."),
            ("v_coolant", "Coolant bulk velocity (m/s)."),
            (
                "sigma_t_thermal",
                "Tangential stress from uneven thermal expansion (Pa). sigma_t_thermal[i][j] is \
                 the stress at x[i] across the j'th wall; j = 0 touches the exhaust gas.",
            ),
            (
                "sigma_t_pressure",
                "Tangential stress from the pressure difference across the wall (Pa). \
                 sigma_t_pressure[i][j] is the stress at x[i] across the j'th wall; j = 0 touches \
                 the exhaust gas.",
            ),
            (
                "sigma_t_max",
                "Maximum tangential stress (Pa), |sigma_t_thermal| + |sigma_t_pressure|, indexed \
                 like the other stress arrays.",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeatingResults {
        HeatingResults {
            x: vec![0.2, 0.1, 0.0],
            temps: vec![vec![300.0, 320.0, 380.0, 3000.0]; 3],
            t_coolant: vec![300.0, 301.0, 302.0],
            t_exhaust: vec![3000.0; 3],
            dq_dx: vec![1e5; 3],
            dq_da: vec![3.2e5; 3],
            p0_coolant: vec![30e5, 29.9e5, 29.8e5],
            p_coolant: vec![29.5e5, 29.4e5, 29.3e5],
            rho_coolant: vec![1000.0; 3],
            v_coolant: vec![0.5; 3],
            sigma_t_thermal: vec![vec![1e7]; 3],
            sigma_t_pressure: vec![vec![1.25e8]; 3],
            sigma_t_max: vec![vec![1.35e8]; 3],
        }
    }

    #[test]
    fn serde_round_trip() {
        let results = sample();
        let json = serde_json::to_string(&results).unwrap();
        let back: HeatingResults = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }

    #[test]
    fn info_covers_every_field() {
        let info = HeatingResults::info();
        let json = serde_json::to_value(sample()).unwrap();
        for field in json.as_object().unwrap().keys() {
            assert!(info.contains_key(field.as_str()), "missing info for {field}");
        }
        assert_eq!(info.len(), json.as_object().unwrap().len());
    }

    #[test]
    fn len_tracks_stations() {
        let results = sample();
        assert_eq!(results.len(), 3);
        assert!(!results.is_empty());
    }
}
