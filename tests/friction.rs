//! 마찰계수 해석기 테스트: 층류 폐형식과 Colebrook 고정점 반복.

use hydropower_design_toolbox::hydro::penstock::{friction_factor, FrictionSolver};
use hydropower_design_toolbox::hydro::DomainError;

#[test]
fn laminar_regime_uses_closed_form() {
    let f = friction_factor(1000.0, 0.0006, 6.17).expect("laminar");
    assert!((f - 0.064).abs() < 1e-12, "f = {f}");
}

#[test]
fn turbulent_regime_converges_to_plausible_range() {
    let f = friction_factor(1.0e6, 0.0006, 6.17).expect("turbulent");
    assert!((0.01..=0.05).contains(&f), "f = {f}");
    assert!((f - 0.013_394_005_144).abs() < 1e-9, "f = {f}");
}

#[test]
fn tolerance_solver_agrees_with_fixed_iteration_budget() {
    let fixed = FrictionSolver::default()
        .solve(1.0e6, 0.0006, 6.17)
        .expect("fixed");
    let early = FrictionSolver::new(100)
        .with_tolerance(1e-12)
        .solve(1.0e6, 0.0006, 6.17)
        .expect("tolerance");
    assert!((fixed - early).abs() < 1e-10, "fixed={fixed} early={early}");
}

#[test]
fn non_positive_reynolds_is_rejected() {
    assert!(matches!(
        friction_factor(0.0, 0.0006, 6.17),
        Err(DomainError::NonPositiveReynolds(_))
    ));
    assert!(matches!(
        friction_factor(-10.0, 0.0006, 6.17),
        Err(DomainError::NonPositiveReynolds(_))
    ));
}

#[test]
fn degenerate_iteration_is_an_error_not_infinity() {
    // k/D가 비정상적으로 커지면 log10 인자가 1을 넘어 우변이 0 이하로 떨어진다.
    match friction_factor(5000.0, 10.0, 1.0) {
        Err(DomainError::DegenerateFrictionIteration { .. }) => {}
        other => panic!("expected degenerate iteration error, got {other:?}"),
    }
}

#[test]
fn regime_boundary_switches_at_2300() {
    let just_laminar = friction_factor(2299.9, 0.0006, 6.17).expect("laminar side");
    assert!((just_laminar - 64.0 / 2299.9).abs() < 1e-12);

    // 경계 바로 위는 Colebrook 경로를 탄다.
    let just_turbulent = friction_factor(2300.0, 0.0006, 6.17).expect("turbulent side");
    assert!(just_turbulent > 0.0 && (just_turbulent - 64.0 / 2300.0).abs() > 1e-6);
}
