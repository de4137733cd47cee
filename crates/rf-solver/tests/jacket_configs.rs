//! Integration tests: spiral channels, roughness and fin blockage.

use std::sync::Arc;

use rf_core::units::{k, kgps, pa};
use rf_engine::{
    ChamberConditions, CoolingJacket, CoolingJacketBuilder, Engine, ExhaustConvection, Geometry,
    Material, Wall,
};
use rf_fluids::constant::water_like;
use rf_fluids::{ConstantTransport, PerfectGas, PerfectGasSpec};
use rf_solver::{SolverOptions, steady_heating_analysis};

fn jacket_builder() -> CoolingJacketBuilder {
    CoolingJacket::builder(
        Arc::new(water_like()),
        k(300.0),
        pa(30e5),
        kgps(0.5),
        3e-3,
    )
}

fn tube_engine(jacket: CoolingJacket) -> Engine {
    let gas = PerfectGas::new(PerfectGasSpec::GammaCp {
        gamma: 1.2,
        cp: 1800.0,
    })
    .unwrap();
    let geometry = Geometry::new(vec![0.0, 0.1, 0.2], vec![0.05, 0.05, 0.05]).unwrap();
    let chamber = ChamberConditions::new(pa(1e5), k(400.0)).unwrap();
    let copper = Material::new(120e9, 70e6, 0.34, 16.5e-6, 400.0).unwrap();

    Engine::new(gas, chamber, geometry)
        .with_walls(vec![Wall::new(copper, 2e-3)])
        .with_cooling_jacket(jacket)
        .with_exhaust_transport(Arc::new(
            ConstantTransport::new(1.0, 3e-5, 0.1, 1800.0).unwrap(),
        ))
        .with_exhaust_convection(ExhaustConvection::DittusBoelter)
}

fn options() -> SolverOptions {
    SolverOptions {
        num_grid: 300,
        ..SolverOptions::default()
    }
}

#[test]
fn spiral_pressure_drop_dwarfs_vertical() {
    let vertical = tube_engine(jacket_builder().roughness(1e-5).build().unwrap());
    let spiral = tube_engine(
        jacket_builder()
            .spiral(5e-2)
            .roughness(1e-5)
            .build()
            .unwrap(),
    );

    let r_vertical = steady_heating_analysis(&vertical, &options()).unwrap();
    let r_spiral = steady_heating_analysis(&spiral, &options()).unwrap();

    let drop = |r: &rf_results::HeatingResults| {
        r.p0_coolant.first().unwrap() - r.p0_coolant.last().unwrap()
    };

    let drop_vertical = drop(&r_vertical);
    let drop_spiral = drop(&r_spiral);

    // The coolant in the spiral channel travels ~1/cos(helix angle) further
    // per unit axial length, through a much smaller channel
    assert!(
        drop_spiral > 10.0 * drop_vertical,
        "spiral = {drop_spiral} Pa, vertical = {drop_vertical} Pa"
    );
}

#[test]
fn zero_blockage_matches_absent_blockage_exactly() {
    let bare = tube_engine(jacket_builder().spiral(5e-2).build().unwrap());
    let blocked = tube_engine(
        jacket_builder()
            .spiral(5e-2)
            .blockage_ratio(0.0)
            .build()
            .unwrap(),
    );

    let r_bare = steady_heating_analysis(&bare, &options()).unwrap();
    let r_blocked = steady_heating_analysis(&blocked, &options()).unwrap();

    assert_eq!(r_bare.t_coolant, r_blocked.t_coolant);
    assert_eq!(r_bare.p0_coolant, r_blocked.p0_coolant);
    assert_eq!(r_bare.dq_dx, r_blocked.dq_dx);
}

#[test]
fn fins_change_the_heat_balance() {
    let plain = tube_engine(jacket_builder().build().unwrap());
    let finned = tube_engine(
        jacket_builder()
            .blockage_ratio(0.3)
            .number_of_fins(20)
            .build()
            .unwrap(),
    );

    let r_plain = steady_heating_analysis(&plain, &options()).unwrap();
    let r_finned = steady_heating_analysis(&finned, &options()).unwrap();

    // Blockage changes the flow area, the film coefficient and adds the fin
    // term; the heat-flux profile must move
    let q_plain: f64 = r_plain.dq_dx.iter().sum();
    let q_finned: f64 = r_finned.dq_dx.iter().sum();
    assert!(
        (q_plain - q_finned).abs() > 1e-6 * q_plain.abs(),
        "fins had no effect on the heat balance"
    );

    // And the result stays physical
    assert!(r_finned.t_coolant.windows(2).all(|w| w[1] >= w[0]));
    assert!(r_finned.dq_dx.iter().all(|q| q.is_finite()));
}

#[test]
fn jacket_extent_restricts_the_solve() {
    let jacket = jacket_builder().extent(0.05, 0.15).build().unwrap();
    let engine = tube_engine(jacket);
    let results = steady_heating_analysis(&engine, &options()).unwrap();

    for &x in &results.x {
        assert!((0.05..=0.15).contains(&x), "station outside jacket: {x}");
    }
    assert!((results.x.first().unwrap() - 0.15).abs() < 1e-12);
    assert!((results.x.last().unwrap() - 0.05).abs() < 1e-12);
}

#[test]
fn rough_channels_drop_more_pressure_than_smooth() {
    let smooth = tube_engine(jacket_builder().build().unwrap());
    let rough = tube_engine(jacket_builder().roughness(5e-5).build().unwrap());

    let r_smooth = steady_heating_analysis(&smooth, &options()).unwrap();
    let r_rough = steady_heating_analysis(&rough, &options()).unwrap();

    let drop_smooth = r_smooth.p0_coolant.first().unwrap() - r_smooth.p0_coolant.last().unwrap();
    let drop_rough = r_rough.p0_coolant.first().unwrap() - r_rough.p0_coolant.last().unwrap();
    assert!(drop_rough > drop_smooth);
}
