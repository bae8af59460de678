use super::*;

fn stop(x: Option<f64>, y: f64) -> LinearStop {
    LinearStop { x, y }
}

#[test]
fn linear_peak_interpolates_each_side() {
    let l = CssLinear::resolve(&[stop(Some(0.0), 0.0), stop(Some(0.5), 1.0), stop(Some(1.0), 0.0)]);
    assert_eq!(l.apply(0.5), 1.0);
    assert!((l.apply(0.25) - 0.5).abs() < 1e-12);
    assert!((l.apply(0.75) - 0.5).abs() < 1e-12);
    assert_eq!(l.apply(0.0), 0.0);
    assert_eq!(l.apply(1.0), 0.0);
}

#[test]
fn linear_degenerate_stop_counts() {
    let empty = CssLinear::resolve(&[]);
    assert_eq!(empty.apply(0.3), 0.3);
    let single = CssLinear::resolve(&[stop(None, 0.25)]);
    assert_eq!(single.apply(0.0), 0.75);
    assert_eq!(single.apply(1.0), 0.75);
}

#[test]
fn linear_fills_missing_positions_evenly() {
    let l = CssLinear::resolve(&[
        stop(None, 0.0),
        stop(None, 0.2),
        stop(None, 0.4),
        stop(Some(0.9), 0.6),
        stop(None, 1.0),
    ]);
    let xs: Vec<f64> = l.points().iter().map(|p| p.0).collect();
    assert!((xs[1] - 0.3).abs() < 1e-12);
    assert!((xs[2] - 0.6).abs() < 1e-12);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[3], 0.9);
    assert_eq!(xs[4], 1.0);
}

#[test]
fn linear_positions_never_decrease() {
    let l = CssLinear::resolve(&[stop(Some(0.0), 0.0), stop(Some(0.6), 0.5), stop(Some(0.4), 0.7), stop(None, 1.0)]);
    let xs: Vec<f64> = l.points().iter().map(|p| p.0).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{xs:?}");
    // coincident stops jump straight to the later value
    assert_eq!(l.apply(0.6), 0.7);
}

#[test]
fn bezier_identity_curve() {
    let b = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    let eps = 1.0 / 1000.0;
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        assert!((b.solve(t, eps) - t).abs() < eps, "t={t}");
    }
}

#[test]
fn bezier_presets_hit_endpoints_and_are_monotonic() {
    for b in [
        CubicBezier::EASE,
        CubicBezier::EASE_IN,
        CubicBezier::EASE_OUT,
        CubicBezier::EASE_IN_OUT,
    ] {
        let eps = 1e-4;
        assert!(b.solve(0.0, eps).abs() < 1e-3);
        assert!((b.solve(1.0, eps) - 1.0).abs() < 1e-3);
        let mut prev = -1.0;
        for i in 0..=50 {
            let v = b.solve(f64::from(i) / 50.0, eps);
            assert!(v >= prev - 1e-3);
            prev = v;
        }
    }
}

#[test]
fn bezier_ease_in_out_is_symmetric() {
    let b = CubicBezier::EASE_IN_OUT;
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let a = b.solve(t, 1e-6);
        let m = 1.0 - b.solve(1.0 - t, 1e-6);
        assert!((a - m).abs() < 1e-4, "t={t}");
    }
}

#[test]
fn bezier_extrapolates_outside_unit_range() {
    let b = CubicBezier::new(0.5, 0.25, 0.5, 0.75);
    assert!((b.solve(-0.5, 1e-3) - (-0.25)).abs() < 1e-12);
    assert!((b.solve(1.5, 1e-3) - 1.25).abs() < 1e-12);
    assert!(CubicBezier::new(1.5, 0.0, 0.5, 1.0).validate().is_err());
    assert!(CubicBezier::EASE.validate().is_ok());
}

#[test]
fn steps_jump_end_floors() {
    let s = Steps::new(4, JumpPolicy::JumpEnd).unwrap();
    assert_eq!(s.apply(0.0), 0.0);
    assert_eq!(s.apply(0.2), 0.0);
    assert_eq!(s.apply(0.25), 0.25);
    assert_eq!(s.apply(0.6), 0.5);
    assert_eq!(s.apply(0.99), 0.75);
    assert_eq!(s.apply(1.0), 1.0);
}

#[test]
fn steps_other_policies() {
    let start = Steps::new(4, JumpPolicy::JumpStart).unwrap();
    assert_eq!(start.apply(0.0), 0.25);
    assert_eq!(start.apply(1.0), 1.0);

    let none = Steps::new(5, JumpPolicy::JumpNone).unwrap();
    assert_eq!(none.apply(0.0), 0.0);
    assert_eq!(none.apply(0.2), 0.25);
    assert_eq!(none.apply(1.0), 1.0);

    let both = Steps::new(3, JumpPolicy::JumpBoth).unwrap();
    assert_eq!(both.apply(0.0), 0.25);
    assert_eq!(both.apply(0.5), 0.5);
    assert_eq!(both.apply(1.0), 1.0);
}

#[test]
fn steps_validation_and_keywords() {
    assert!(Steps::new(0, JumpPolicy::JumpEnd).is_err());
    assert!(Steps::new(1, JumpPolicy::JumpNone).is_err());
    assert!(Steps::new(1, JumpPolicy::JumpStart).is_ok());
    assert_eq!(JumpPolicy::parse("start").unwrap(), JumpPolicy::JumpStart);
    assert_eq!(JumpPolicy::parse("END").unwrap(), JumpPolicy::JumpEnd);
    let err = JumpPolicy::parse("middle").unwrap_err().to_string();
    assert!(err.contains("middle"));
}
