//! Integration tests: stress post-processing on solver results.

use std::sync::Arc;

use rf_core::units::{k, kgps, pa};
use rf_engine::{
    ChamberConditions, CoolingJacket, CoolingJacketBuilder, Engine, ExhaustConvection, Geometry,
    Material, Wall,
};
use rf_fluids::constant::water_like;
use rf_fluids::{ConstantTransport, PerfectGas, PerfectGasSpec};
use rf_solver::{SolverOptions, steady_heating_analysis};

fn copper() -> Material {
    Material::new(120e9, 70e6, 0.34, 16.5e-6, 400.0).unwrap()
}

fn steel() -> Material {
    Material::new(200e9, 250e6, 0.29, 12e-6, 45.0).unwrap()
}

fn jacket_builder() -> CoolingJacketBuilder {
    CoolingJacket::builder(
        Arc::new(water_like()),
        k(300.0),
        pa(30e5),
        kgps(0.5),
        3e-3,
    )
}

fn tube_engine(walls: Vec<Wall>, jacket: CoolingJacket) -> Engine {
    let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
        gamma: 1.2,
        cp: 1800.0,
    })
    .unwrap();
    let geometry = Geometry::new(vec![0.0, 0.1, 0.2], vec![0.05, 0.05, 0.05]).unwrap();
    let chamber = ChamberConditions::new(pa(1e5), k(400.0)).unwrap();

    Engine::new(gas, chamber, geometry)
        .with_walls(walls)
        .with_cooling_jacket(jacket)
        .with_exhaust_transport(Arc::new(
            ConstantTransport::new(1.0, 3e-5, 0.1, 1800.0).unwrap(),
        ))
        .with_exhaust_convection(ExhaustConvection::DittusBoelter)
}

fn options() -> SolverOptions {
    SolverOptions {
        num_grid: 100,
        ..SolverOptions::default()
    }
}

#[test]
fn unrestrained_wall_sees_thin_shell_hoop_stress() {
    let engine = tube_engine(
        vec![Wall::new(copper(), 1e-3)],
        jacket_builder().build().unwrap(),
    );
    let results = steady_heating_analysis(&engine, &options()).unwrap();

    for i in 0..results.len() {
        let dp = results.p_coolant[i] - 1e5 * (1.0f64 / 1.1).powf(6.0);
        let d_mean = 2.0 * 0.05 + 1e-3;
        let expected = dp * d_mean / (2.0 * 1e-3);
        let sigma = results.sigma_t_pressure[i][0];
        assert!(
            (sigma - expected).abs() < 1e-6 * expected.abs(),
            "sigma = {sigma}, expected = {expected}"
        );
        assert!(sigma > 0.0, "coolant pressure exceeds the exhaust here");

        // sigma_t_max combines both contributions
        let max = results.sigma_t_max[i][0];
        let thermal = results.sigma_t_thermal[i][0];
        assert!((max - (thermal.abs() + sigma.abs())).abs() < 1e-9 * max);
    }
}

#[test]
fn restrained_fins_switch_to_the_plate_formula() {
    let restrained = tube_engine(
        vec![Wall::new(copper(), 1e-3)],
        jacket_builder()
            .blockage_ratio(0.3)
            .number_of_fins(80)
            .restrain_fins(true)
            .build()
            .unwrap(),
    );
    let free = tube_engine(
        vec![Wall::new(copper(), 1e-3)],
        jacket_builder()
            .blockage_ratio(0.3)
            .number_of_fins(80)
            .restrain_fins(false)
            .build()
            .unwrap(),
    );

    let r_restrained = steady_heating_analysis(&restrained, &options()).unwrap();
    let r_free = steady_heating_analysis(&free, &options()).unwrap();

    // With 80 fins the restrained span w is a few millimetres, so the plate
    // stress sits far below the free-shell hoop stress
    let i = 50;
    let s_restrained = r_restrained.sigma_t_pressure[i][0];
    let s_free = r_free.sigma_t_pressure[i][0];
    assert!(
        s_restrained < 0.15 * s_free,
        "restrained = {s_restrained}, free = {s_free}"
    );

    // The thermal stress formula does not care about fin restraint
    let t_restrained = r_restrained.sigma_t_thermal[i][0];
    let t_free = r_free.sigma_t_thermal[i][0];
    assert!((t_restrained - t_free).abs() < 1e-9 * t_restrained.abs());
}

#[test]
fn two_wall_stack_reports_stress_per_wall() {
    let engine = tube_engine(
        vec![Wall::new(copper(), 1.5e-3), Wall::new(steel(), 1e-3)],
        jacket_builder().build().unwrap(),
    );
    let results = steady_heating_analysis(&engine, &options()).unwrap();

    for i in 0..results.len() {
        assert_eq!(results.sigma_t_thermal[i].len(), 2);
        assert_eq!(results.sigma_t_pressure[i].len(), 2);
        assert_eq!(results.sigma_t_max[i].len(), 2);

        // Five temperature nodes: coolant, three wall boundaries, exhaust
        assert_eq!(results.temps[i].len(), 5);

        // The outer (steel) wall sits on a larger mean diameter
        let d_inner = 2.0 * 0.05 + 1.5e-3;
        let d_outer = 2.0 * (0.05 + 1.5e-3) + 1e-3;
        let ratio = results.sigma_t_pressure[i][1] / results.sigma_t_pressure[i][0];
        let expected_ratio = (d_outer / d_inner) * (1.5e-3 / 1e-3);
        assert!((ratio - expected_ratio).abs() < 1e-6 * expected_ratio);
    }
}
