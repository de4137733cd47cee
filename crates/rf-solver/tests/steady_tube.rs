//! Integration test: straight chamber with a vertical cooling jacket.

use std::sync::Arc;

use rf_core::units::{k, kgps, pa};
use rf_engine::{
    ChamberConditions, CoolingJacket, Engine, ExhaustConvection, Geometry, Material, Wall,
};
use rf_fluids::constant::water_like;
use rf_fluids::{ConstantTransport, PerfectGas, PerfectGasSpec};
use rf_solver::{SolverOptions, steady_heating_analysis};

fn straight_tube_engine() -> Engine {
    // Straight chamber, y = 0.05 m from x = 0 to 0.2, driven by a cold gas
    // so the water-like coolant stays single phase.
    let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
        gamma: 1.2,
        cp: 1800.0,
    })
    .unwrap();
    let geometry = Geometry::new(vec![0.0, 0.1, 0.2], vec![0.05, 0.05, 0.05]).unwrap();
    let chamber = ChamberConditions::new(pa(1e5), k(400.0)).unwrap();

    let copper = Material::new(120e9, 70e6, 0.34, 16.5e-6, 400.0).unwrap();
    let jacket = CoolingJacket::builder(
        Arc::new(water_like()),
        k(300.0),
        pa(30e5),
        kgps(0.5),
        3e-3,
    )
    .build()
    .unwrap();

    Engine::new(gas, chamber, geometry)
        .with_walls(vec![Wall::new(copper, 2e-3)])
        .with_cooling_jacket(jacket)
        .with_exhaust_transport(Arc::new(
            ConstantTransport::new(1.0, 3e-5, 0.1, 1800.0).unwrap(),
        ))
        .with_exhaust_convection(ExhaustConvection::DittusBoelter)
}

#[test]
fn counterflow_profiles_are_monotone() {
    let engine = straight_tube_engine();
    let options = SolverOptions {
        num_grid: 500,
        ..SolverOptions::default()
    };
    let results = steady_heating_analysis(&engine, &options).unwrap();

    assert_eq!(results.len(), 500);

    // Counter-flow: stations march from the nozzle end back to the injector
    assert!(results.x.windows(2).all(|w| w[1] < w[0]));

    // Coolant heats up monotonically along its flow direction
    assert!(
        results.t_coolant.windows(2).all(|w| w[1] >= w[0]),
        "coolant temperature must not decrease along the flow"
    );
    let rise = results.t_coolant.last().unwrap() - results.t_coolant.first().unwrap();
    assert!(rise > 0.0, "coolant must heat up, rise = {rise}");

    // Stagnation pressure falls monotonically
    assert!(results.p0_coolant.windows(2).all(|w| w[1] < w[0]));
    let drop = results.p0_coolant.first().unwrap() - results.p0_coolant.last().unwrap();
    assert!(drop > 0.0, "pressure drop = {drop}");

    // Static pressure sits below stagnation
    for (p, p0) in results.p_coolant.iter().zip(&results.p0_coolant) {
        assert!(p < p0);
    }
}

#[test]
fn energy_balance_closes() {
    let engine = straight_tube_engine();
    let options = SolverOptions {
        num_grid: 1000,
        ..SolverOptions::default()
    };
    let results = steady_heating_analysis(&engine, &options).unwrap();

    let dx = (results.x[0] - results.x[1]).abs();
    let total_heat: f64 = results.dq_dx.iter().map(|q| q * dx).sum();

    let rise = results.t_coolant.last().unwrap() - results.t_coolant.first().unwrap();
    let absorbed = 0.5 * 4180.0 * rise;

    let error = (total_heat - absorbed).abs() / absorbed;
    assert!(error < 0.01, "energy balance error = {error}");
}

#[test]
fn station_temperatures_are_ordered_cold_to_hot() {
    let engine = straight_tube_engine();
    let options = SolverOptions {
        num_grid: 100,
        ..SolverOptions::default()
    };
    let results = steady_heating_analysis(&engine, &options).unwrap();

    for i in 0..results.len() {
        let temps = &results.temps[i];
        // Coolant bulk, coolant-side wall, gas-side wall, exhaust freestream
        assert_eq!(temps.len(), 4);
        assert!(temps.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(results.t_coolant[i], temps[0]);
        assert_eq!(results.t_exhaust[i], temps[3]);

        // Heat leaves the gas everywhere in this setup
        assert!(results.dq_dx[i] > 0.0);
        let y = 0.05;
        let expected_dq_da = results.dq_dx[i] / (2.0 * std::f64::consts::PI * y);
        assert!((results.dq_da[i] - expected_dq_da).abs() < 1e-9 * expected_dq_da);
    }
}

#[test]
fn coflow_marches_the_other_way() {
    let engine = straight_tube_engine();
    let options = SolverOptions {
        num_grid: 200,
        counterflow: false,
        ..SolverOptions::default()
    };
    let results = steady_heating_analysis(&engine, &options).unwrap();

    assert!(results.x.windows(2).all(|w| w[1] > w[0]));
    assert!(results.t_coolant.windows(2).all(|w| w[1] >= w[0]));
    assert!(results.p0_coolant.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn entry_iteration_converges_wall_temperatures() {
    let engine = straight_tube_engine();
    let few = steady_heating_analysis(
        &engine,
        &SolverOptions {
            num_grid: 200,
            iter_start: 5,
            ..SolverOptions::default()
        },
    )
    .unwrap();
    let many = steady_heating_analysis(
        &engine,
        &SolverOptions {
            num_grid: 200,
            iter_start: 10,
            iter_each: 2,
            ..SolverOptions::default()
        },
    )
    .unwrap();

    // Extra fixed-point passes barely move the answer once converged
    for (a, b) in few.t_coolant.iter().zip(&many.t_coolant) {
        assert!((a - b).abs() < 0.05, "t_coolant moved from {a} to {b}");
    }
}
