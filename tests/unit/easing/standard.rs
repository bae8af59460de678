use super::*;

const MODES: [EaseMode; 3] = [EaseMode::In, EaseMode::Out, EaseMode::InOut];

#[test]
fn stable_endpoints() {
    for family in EaseFamily::ALL {
        for mode in MODES {
            let a = family.apply(mode, 0.0);
            let b = family.apply(mode, 1.0);
            assert!(a.abs() < 1e-12, "{family:?} {mode:?} at 0 = {a}");
            assert!((b - 1.0).abs() < 1e-12, "{family:?} {mode:?} at 1 = {b}");
        }
    }
}

#[test]
fn power_families_are_symmetric() {
    for family in [
        EaseFamily::Quadratic,
        EaseFamily::Cubic,
        EaseFamily::Quartic,
        EaseFamily::Quintic,
        EaseFamily::SquareRoot,
        EaseFamily::CubeRoot,
    ] {
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let a = family.apply(EaseMode::In, t);
            let b = 1.0 - family.apply(EaseMode::Out, 1.0 - t);
            assert!((a - b).abs() < 1e-12, "{family:?} t={t}");
        }
    }
}

#[test]
fn power_in_out_matches_closed_forms() {
    let t = 0.3;
    assert!((EaseFamily::Quadratic.apply(EaseMode::InOut, t) - 2.0 * t * t).abs() < 1e-12);
    let t = 0.8;
    let expect = (2.0 - t) * t * 2.0 - 1.0;
    assert!((EaseFamily::Quadratic.apply(EaseMode::InOut, t) - expect).abs() < 1e-12);
    let expect = 1.0 - (2.0 - 2.0 * t).sqrt() / 2.0;
    assert!((EaseFamily::SquareRoot.apply(EaseMode::InOut, t) - expect).abs() < 1e-12);
    assert!((EaseFamily::Cubic.apply(EaseMode::In, 0.5) - 0.125).abs() < 1e-12);
}

#[test]
fn monotonic_spot_check() {
    for family in [EaseFamily::Sinusoidal, EaseFamily::Circular, EaseFamily::Exponential] {
        for mode in MODES {
            let mut prev = family.apply(mode, 0.0);
            for i in 1..=50 {
                let v = family.apply(mode, f64::from(i) / 50.0);
                assert!(v >= prev - 1e-12, "{family:?} {mode:?}");
                prev = v;
            }
        }
    }
}

#[test]
fn back_and_elastic_overshoot() {
    assert!(EaseFamily::Back.apply(EaseMode::In, 0.2) < 0.0);
    assert!(EaseFamily::Back.apply(EaseMode::Out, 0.8) > 1.0);
    let peak = (1..100)
        .map(|i| EaseFamily::Elastic.apply(EaseMode::Out, f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn bounce_midpoint_and_range() {
    assert!((EaseFamily::Bounce.apply(EaseMode::InOut, 0.5) - 0.5).abs() < 1e-12);
    for i in 0..=100 {
        let v = EaseFamily::Bounce.apply(EaseMode::Out, f64::from(i) / 100.0);
        assert!((-1e-12..=1.0 + 1e-12).contains(&v));
    }
}

#[test]
fn names_are_unique() {
    let mut names: Vec<_> = EaseFamily::ALL.iter().map(|f| f.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), EaseFamily::ALL.len());
}
