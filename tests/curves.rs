//! 곡선 샘플링 테스트: 게으른 유한 시퀀스, 재시작 가능성, 구간 검증.

use hydropower_design_toolbox::hydro::curve::{
    sample_curve, sample_diameter_curve, sample_energy_curve, SampleDomain,
};
use hydropower_design_toolbox::hydro::DomainError;

#[test]
fn diameter_curve_covers_default_domain() {
    let points: Vec<(f64, f64)> =
        sample_diameter_curve(SampleDomain::discharge_default())
            .expect("positive domain")
            .collect();
    assert_eq!(points.len(), 100);
    let (q0, d0) = points[0];
    let (q_last, d_last) = points[99];
    assert!((q0 - 10.0).abs() < 1e-12);
    assert!((q_last - 150.0).abs() < 1e-12);
    assert!((d0 - 4.263_102_111_592_855).abs() < 1e-9);
    assert!((d_last - 7.512_762_352_915_506).abs() < 1e-9);
    // 유량 축은 단조 증가
    for pair in points.windows(2) {
        assert!(pair[1].0 > pair[0].0);
    }
}

#[test]
fn energy_curve_is_linear_over_operating_time() {
    let points: Vec<(f64, f64)> =
        sample_energy_curve(100.0, SampleDomain::operating_time_default()).collect();
    assert_eq!(points.len(), 100);
    assert_eq!(points[0], (0.0, 0.0));
    let (t_last, e_last) = points[99];
    assert!((t_last - 48.0).abs() < 1e-12);
    assert!((e_last - 4800.0).abs() < 1e-9);
}

#[test]
fn curves_are_restartable_via_clone() {
    let mut first = sample_diameter_curve(SampleDomain::discharge_default()).expect("domain");
    // 일부 소비한 뒤에도 복제본은 처음부터 같은 시퀀스를 낸다.
    let _ = first.next();
    let _ = first.next();
    let restarted: Vec<(f64, f64)> = first.clone().collect();
    let remaining: Vec<(f64, f64)> = first.collect();
    assert_eq!(restarted.len(), 98);
    assert_eq!(restarted, remaining);

    let full_a: Vec<(f64, f64)> =
        sample_diameter_curve(SampleDomain::discharge_default())
            .expect("domain")
            .collect();
    let full_b: Vec<(f64, f64)> =
        sample_diameter_curve(SampleDomain::discharge_default())
            .expect("domain")
            .collect();
    assert_eq!(full_a, full_b);
}

#[test]
fn curve_length_is_known_in_advance() {
    let curve = sample_curve(SampleDomain::new(0.0, 1.0, 25), |x| x * x);
    assert_eq!(curve.len(), 25);
    assert_eq!(curve.count(), 25);
}

#[test]
fn single_point_domain_samples_the_start() {
    let points: Vec<(f64, f64)> = sample_curve(SampleDomain::new(3.0, 9.0, 1), |x| 2.0 * x)
        .collect();
    assert_eq!(points, vec![(3.0, 6.0)]);
}

#[test]
fn diameter_curve_rejects_non_positive_discharge_domain() {
    assert!(matches!(
        sample_diameter_curve(SampleDomain::new(0.0, 150.0, 100)),
        Err(DomainError::NonPositiveDischarge(_))
    ));
    assert!(matches!(
        sample_diameter_curve(SampleDomain::new(-10.0, -1.0, 10)),
        Err(DomainError::NonPositiveDischarge(_))
    ));
}
