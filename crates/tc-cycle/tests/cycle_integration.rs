//! End-to-end cycle analysis tests against hand-checked reference values.

use tc_core::{Field, Tolerances, nearly_equal};
use tc_cycle::{Ambient, CycleError, TurbofanAnalysis};
use tc_gas::stagnation_pressure_ratio;

const TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-6,
};

/// High-bypass engine from the worked design case.
fn cruise_engine() -> TurbofanAnalysis {
    let mut engine = TurbofanAnalysis::new();
    engine
        .set_fuel_properties(42.7984e6, 1.33, 1155.5568)
        .unwrap();
    engine.set_inlet_outlet_properties(0.99, 0.99, 0.99).unwrap();
    engine.set_burner_properties(0.96, 0.99).unwrap();
    engine.set_compressor_properties(36.0, 0.9).unwrap();
    engine.set_fan_properties(1.7, 0.89).unwrap();
    engine.set_turbine_properties(1666.67, 0.89, 0.99).unwrap();
    engine.set_bypass_ratio(8.0).unwrap();
    engine.initialize_problem().unwrap();
    engine
}

/// ISA state at 12 km.
fn isa_12km() -> Ambient {
    Ambient::new(216.65, 19_330.4, 295.07, 0.3108)
}

/// ISA state at 8 km.
fn isa_8km() -> Ambient {
    Ambient::new(236.15, 35_599.785, 308.062_574, 0.525_167)
}

fn scalar(field: &Field) -> f64 {
    field.as_scalar().expect("expected scalar result")
}

#[test]
fn cruise_design_point_matches_reference_values() {
    let mut engine = cruise_engine();
    engine.perform_analysis(0.8 * 295.07, &isa_12km()).unwrap();

    let reference = engine.reference_ratios().unwrap();
    assert!(nearly_equal(scalar(&reference.tau), 1.128, TOL));
    assert!(nearly_equal(scalar(&reference.pi), 1.524_340_01, TOL));

    let turbine = engine.turbine_ratios().unwrap();
    assert!(nearly_equal(scalar(&turbine.tau), 0.548_711_44, TOL));
    assert!(nearly_equal(scalar(&turbine.pi), 0.066_014_223_7, TOL));

    let fuel = engine.fuel_consumption().unwrap();
    assert!(nearly_equal(scalar(&fuel.tsfc), 1.800_383_98e-5, TOL));
    assert!(nearly_equal(
        scalar(&fuel.fuel_air_ratio),
        0.028_682_516_4 / 9.0,
        TOL
    ));

    let thrust = engine.specific_thrust().unwrap();
    assert!(nearly_equal(scalar(&thrust.core), 58.880_070_6, TOL));
    assert!(nearly_equal(scalar(&thrust.fan), 118.134_739, TOL));
    assert!(nearly_equal(scalar(&thrust.total), 177.014_809, TOL));

    let eff = engine.efficiencies().unwrap();
    assert!(nearly_equal(scalar(&eff.propulsive), 0.649_572_181, TOL));
    assert!(nearly_equal(scalar(&eff.thermal), 0.471_622_975, TOL));
    assert!(nearly_equal(scalar(&eff.overall), 0.306_353_164, TOL));

    // Overall efficiency must land in the physically plausible range.
    let overall = scalar(&eff.overall);
    assert!(overall > 0.0 && overall < 1.0);
    assert!(scalar(&thrust.total) > 0.0);
}

#[test]
fn unchoked_exits_match_isentropic_solution() {
    let mut engine = cruise_engine();
    engine.perform_analysis(0.8 * 295.07, &isa_12km()).unwrap();

    let core = engine.core_exit_state().unwrap();
    let fan = engine.fan_exit_state().unwrap();

    // High pressure-ratio products: supersonic isentropic expansion with the
    // exit expanded to ambient static pressure.
    assert!(nearly_equal(scalar(&core.mach), 1.468_096_61, TOL));
    assert!(nearly_equal(scalar(&fan.mach), 1.235_194_57, TOL));
    assert_eq!(scalar(&core.pressure), 19_330.4);
    assert_eq!(scalar(&fan.pressure), 19_330.4);

    // Reconstruct the isentropic exit Mach independently from the pressure
    // ratio chain reported by the getters.
    let reference = engine.reference_ratios().unwrap();
    let turbine = engine.turbine_ratios().unwrap();
    let gamma_t = 1.33;
    let product =
        scalar(&reference.pi) * 0.99 * 36.0 * 0.96 * scalar(&turbine.pi) * 0.99;
    let expected =
        ((2.0 / (gamma_t - 1.0)) * (product.powf((gamma_t - 1.0) / gamma_t) - 1.0)).sqrt();
    assert!(nearly_equal(scalar(&core.mach), expected, TOL));

    assert!(nearly_equal(scalar(&core.temperature), 674.611_623, TOL));
    assert!(nearly_equal(scalar(&core.velocity), 744.619_087, TOL));
    assert!(nearly_equal(scalar(&fan.temperature), 222.019_291, TOL));
    assert!(nearly_equal(scalar(&fan.velocity), 368.957_581, TOL));
}

#[test]
fn low_pressure_ratio_exits_clamp_to_sonic_ambient() {
    let mut engine = TurbofanAnalysis::new();
    engine
        .set_fuel_properties(42.7984e6, 1.33, 1155.5568)
        .unwrap();
    engine.set_inlet_outlet_properties(0.99, 0.99, 0.99).unwrap();
    engine.set_burner_properties(0.96, 0.99).unwrap();
    engine.set_compressor_properties(1.05, 0.9).unwrap();
    engine.set_fan_properties(1.1, 0.89).unwrap();
    engine.set_turbine_properties(1666.67, 0.89, 0.99).unwrap();
    engine.set_bypass_ratio(8.0).unwrap();
    engine.initialize_problem().unwrap();

    let sea_level = Ambient::new(288.15, 101_325.0, 340.29, 1.225);
    engine.perform_analysis(100.0, &sea_level).unwrap();

    let core = engine.core_exit_state().unwrap();
    let fan = engine.fan_exit_state().unwrap();
    assert_eq!(scalar(&core.mach), 1.0);
    assert_eq!(scalar(&core.pressure), 101_325.0);
    assert_eq!(scalar(&fan.mach), 1.0);
    assert_eq!(scalar(&fan.pressure), 101_325.0);
}

#[test]
fn fixed_exit_pressure_ratios_pin_underexpanded_exits() {
    let mut engine = cruise_engine();
    engine.set_exit_pressure_ratios(0.9, 0.9).unwrap();
    engine.initialize_problem().unwrap();
    engine.perform_analysis(0.8 * 295.07, &isa_12km()).unwrap();

    let core = engine.core_exit_state().unwrap();
    let fan = engine.fan_exit_state().unwrap();
    assert!(nearly_equal(scalar(&core.mach), 1.394_026_42, TOL));
    assert!(nearly_equal(scalar(&core.pressure), 21_478.222_2, TOL));
    assert!(nearly_equal(scalar(&fan.mach), 1.154_205_18, TOL));
    assert!(nearly_equal(scalar(&fan.pressure), 21_478.222_2, TOL));

    // Exit pressure above ambient leaves a positive pressure-thrust share.
    assert!(scalar(&core.pressure) > 19_330.4);

    let thrust = engine.specific_thrust().unwrap();
    assert!(nearly_equal(scalar(&thrust.total), 176.776_301, TOL));

    // Clearing the overrides restores the default exit logic.
    engine.clear_exit_pressure_ratios();
    engine.perform_analysis(0.8 * 295.07, &isa_12km()).unwrap();
    let core = engine.core_exit_state().unwrap();
    assert_eq!(scalar(&core.pressure), 19_330.4);
}

#[test]
fn array_envelope_matches_scalar_path_element_wise() {
    // Two altitudes, both at Mach 0.8, evaluated in one vectorized call.
    let speeds = vec![0.8 * 295.07, 0.8 * 308.062_574];
    let ambient = Ambient::new(
        vec![216.65, 236.15],
        vec![19_330.4, 35_599.785],
        vec![295.07, 308.062_574],
        vec![0.3108, 0.525_167],
    );

    let mut vectorized = cruise_engine();
    vectorized
        .perform_analysis(speeds.clone(), &ambient)
        .unwrap();
    let thrust = vectorized.specific_thrust().unwrap();
    let eff = vectorized.efficiencies().unwrap();
    assert_eq!(thrust.total.shape(), Some(2));
    assert_eq!(eff.overall.shape(), Some(2));

    // Each element reproduces the scalar path with that element's inputs.
    for (i, atmosphere) in [isa_12km(), isa_8km()].iter().enumerate() {
        let mut scalar_engine = cruise_engine();
        scalar_engine
            .perform_analysis(speeds[i], atmosphere)
            .unwrap();
        let scalar_thrust = scalar_engine.specific_thrust().unwrap();
        let scalar_eff = scalar_engine.efficiencies().unwrap();
        assert!(nearly_equal(
            thrust.total.at(i),
            scalar(&scalar_thrust.total),
            TOL
        ));
        assert!(nearly_equal(
            eff.overall.at(i),
            scalar(&scalar_eff.overall),
            TOL
        ));
    }
}

#[test]
fn degenerate_fuel_air_denominator_yields_non_finite_results() {
    // A heating value small enough to drive the stage-5 denominator negative
    // toward zero is not guarded; results pass through as non-finite or
    // non-physical rather than raising an error.
    let mut engine = TurbofanAnalysis::new();
    engine.set_fuel_properties(1.0, 1.33, 1155.5568).unwrap();
    engine.set_inlet_outlet_properties(0.99, 0.99, 0.99).unwrap();
    engine.set_burner_properties(0.96, 0.99).unwrap();
    engine.set_compressor_properties(36.0, 0.9).unwrap();
    engine.set_fan_properties(1.7, 0.89).unwrap();
    engine.set_turbine_properties(1666.67, 0.89, 0.99).unwrap();
    engine.set_bypass_ratio(8.0).unwrap();
    engine.initialize_problem().unwrap();

    engine.perform_analysis(0.8 * 295.07, &isa_12km()).unwrap();
    let fuel = engine.fuel_consumption().unwrap();
    // The run completes; the output is simply not physically meaningful.
    assert!(scalar(&fuel.fuel_air_ratio) < 0.0 || !scalar(&fuel.fuel_air_ratio).is_finite());
}

#[test]
fn getter_errors_name_the_required_call() {
    let engine_without_run = cruise_engine();
    match engine_without_run.efficiencies() {
        Err(CycleError::ResultNotAvailable { what }) => assert_eq!(what, "efficiencies"),
        other => panic!("expected ResultNotAvailable, got {other:?}"),
    }
}

#[test]
fn critical_pressure_ratio_consistency() {
    // The clamped/expanded boundary sits at the critical pressure ratio.
    let gamma = 1.4;
    let critical = stagnation_pressure_ratio(gamma, 1.0);
    assert!(nearly_equal(critical, 1.892_929_158_74, Tolerances::default()));
}
