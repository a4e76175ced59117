//! 계산 체인 회귀 테스트. 문서화된 기본 입력에 대한 기준값을 고정해 둔다.

use hydropower_design_toolbox::hydro::performance::{
    compute, compute_with, energy, power, DesignParameterSet, PerformanceError,
};
use hydropower_design_toolbox::hydro::{
    draft_head, effective_head, estimate_hydraulic_diameter, gross_head, ConfigurationError,
    DomainError, FrictionSolver,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn default_inputs_reproduce_reference_result() {
    let result = compute(&DesignParameterSet::default()).expect("default chain");
    assert_close("d_h", result.hydraulic_diameter_m, 6.335_767_249_301_435, 1e-9);
    assert_close("h_gross", result.gross_head_m, 90.0, 1e-9);
    assert_close("h_draft", result.draft_head_m, 50.000_53, 1e-9);
    assert_close("Re", result.reynolds_number, 3.167_883_624_650_717_5e7, 1e-9);
    assert_close("lambda", result.friction_factor, 0.011_907_871_241_437, 1e-9);
    assert_close("h_loss", result.major_loss_m, 1.197_418_394_342_012, 1e-9);
    assert_close("h_eff", result.effective_head_m, 38.802_051_605_657_93, 1e-9);
    assert_close("P", result.power_kw, 18_199.738_536_400_05, 1e-9);
    assert_close("E", result.energy_kwh, 436_793.724_873_601_2, 1e-9);
}

#[test]
fn hydraulic_diameter_is_monotonic_in_discharge() {
    let discharges = [0.5, 1.0, 2.0, 10.0, 56.25, 100.0, 150.0];
    let mut previous = f64::NEG_INFINITY;
    for q in discharges {
        let d = estimate_hydraulic_diameter(q).expect("positive discharge");
        assert!(d > previous, "d({q}) = {d} not above {previous}");
        previous = d;
    }
}

#[test]
fn gross_head_is_linear_in_levels() {
    assert_close("base", gross_head(400.0, 370.0, 300.0), 90.0, 1e-9);
    // 2:1 가중치에 따라 HWL +3 → +2 m, LWL +3 → +1 m, TWL +1 → -1 m
    assert_close(
        "hwl",
        gross_head(403.0, 370.0, 300.0) - gross_head(400.0, 370.0, 300.0),
        2.0,
        1e-9,
    );
    assert_close(
        "lwl",
        gross_head(400.0, 373.0, 300.0) - gross_head(400.0, 370.0, 300.0),
        1.0,
        1e-9,
    );
    assert_close(
        "twl",
        gross_head(400.0, 370.0, 301.0) - gross_head(400.0, 370.0, 300.0),
        -1.0,
        1e-9,
    );
    // HWL 410에서의 기준점
    let h = gross_head(410.0, 370.0, 300.0);
    assert!((h - 96.67).abs() < 0.01, "h = {h}");
}

#[test]
fn gross_head_may_go_negative_for_inconsistent_levels() {
    assert!(gross_head(300.0, 290.0, 400.0) < 0.0);
}

#[test]
fn draft_head_matches_quadratic_fit() {
    assert_close("h=0", draft_head(0.0), 51.70, 1e-9);
    assert_close("h=90", draft_head(90.0), 50.000_53, 1e-9);
}

#[test]
fn effective_head_is_not_clamped() {
    assert_close("negative", effective_head(10.0, 5.0, 50.0), -45.0, 1e-9);
}

#[test]
fn power_is_linear_in_efficiency_and_head() {
    let g = 9.81;
    assert_close(
        "eta",
        2.0 * power(56.25, 40.0, g, 0.425),
        power(56.25, 40.0, g, 0.85),
        1e-9,
    );
    assert_close(
        "head",
        2.0 * power(56.25, 20.0, g, 0.85),
        power(56.25, 40.0, g, 0.85),
        1e-9,
    );
    assert_eq!(power(56.25, 0.0, g, 0.85), 0.0);
    assert!(power(56.25, -10.0, g, 0.85) < 0.0);
}

#[test]
fn energy_is_linear_in_time() {
    assert_eq!(energy(100.0, 24.0), 2400.0);
    assert_close("double", energy(100.0, 48.0), 2.0 * energy(100.0, 24.0), 1e-9);
}

#[test]
fn zero_viscosity_is_a_domain_error() {
    let params = DesignParameterSet {
        kinematic_viscosity_m2_per_s: 0.0,
        ..DesignParameterSet::default()
    };
    match compute(&params) {
        Err(PerformanceError::Domain(DomainError::NonPositiveViscosity(_))) => {}
        other => panic!("expected viscosity domain error, got {other:?}"),
    }
}

#[test]
fn out_of_range_efficiency_is_a_configuration_error() {
    let params = DesignParameterSet {
        efficiency: 1.5,
        ..DesignParameterSet::default()
    };
    match compute(&params) {
        Err(PerformanceError::Configuration(ConfigurationError::EfficiencyOutOfRange(eta))) => {
            assert_eq!(eta, 1.5)
        }
        other => panic!("expected efficiency error, got {other:?}"),
    }
}

#[test]
fn non_positive_pipe_length_is_rejected() {
    let params = DesignParameterSet {
        penstock_length_m: 0.0,
        ..DesignParameterSet::default()
    };
    assert!(matches!(
        compute(&params),
        Err(PerformanceError::Configuration(
            ConfigurationError::NonPositivePipeLength(_)
        ))
    ));
}

#[test]
fn non_positive_discharge_is_rejected_before_the_logarithm() {
    assert!(matches!(
        estimate_hydraulic_diameter(0.0),
        Err(DomainError::NonPositiveDischarge(_))
    ));
    assert!(matches!(
        estimate_hydraulic_diameter(-5.0),
        Err(DomainError::NonPositiveDischarge(_))
    ));
}

#[test]
fn tolerance_mode_matches_fixed_iteration_chain() {
    let params = DesignParameterSet::default();
    let fixed = compute(&params).expect("fixed budget");
    let early = compute_with(&params, &FrictionSolver::new(100).with_tolerance(1e-12))
        .expect("tolerance mode");
    assert_close(
        "lambda",
        early.friction_factor,
        fixed.friction_factor,
        1e-9,
    );
    assert_close("P", early.power_kw, fixed.power_kw, 1e-9);
}

#[test]
fn result_is_a_pure_function_of_the_input() {
    let params = DesignParameterSet::default();
    let first = compute(&params).expect("first pass");
    let second = compute(&params).expect("second pass");
    assert_eq!(first, second);
}
