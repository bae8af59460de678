use super::*;
use crate::foundation::math::{Vec2, Vec4};
use crate::params::table::PrimingContext;
use crate::transitions::fragment::tests::{BLUE, RED, Solid, eval};

#[test]
fn names_are_unique_and_round_trip() {
    let mut seen = std::collections::HashSet::new();
    for kind in TransitionKind::ALL {
        assert!(seen.insert(kind.name().to_ascii_lowercase()), "{}", kind.name());
        assert_eq!(TransitionKind::from_name(kind.name()).unwrap(), kind);
    }
}

#[test]
fn lookup_ignores_case_and_prefix() {
    assert_eq!(TransitionKind::from_name("ANGULAR").unwrap(), TransitionKind::Angular);
    assert_eq!(TransitionKind::from_name("gl_stripe_wipe").unwrap(), TransitionKind::StripeWipe);
    assert_eq!(TransitionKind::from_name("GL_crossZoom").unwrap(), TransitionKind::CrossZoom);
    assert_eq!(TransitionKind::from_name("test_blend").unwrap(), TransitionKind::TestBlend);
}

#[test]
fn unknown_names_report_the_token() {
    let err = TransitionKind::from_name("gl_nope").unwrap_err();
    assert!(err.to_string().contains("'gl_nope'"), "{err}");
    assert!(parse_transition("").is_err());
    assert!(parse_transition("angular(1").is_err());
}

#[test]
fn parse_splits_name_and_arguments() {
    let (kind, args) = parse_transition(" gl_Diamond ( smoothness=0.2 ) ").unwrap();
    assert_eq!(kind, TransitionKind::Diamond);
    assert_eq!(args.named("smoothness"), Some(0.2));

    let (kind, args) = parse_transition("chessboard").unwrap();
    assert_eq!(kind, TransitionKind::Chessboard);
    assert!(args.is_empty());
}

#[test]
fn every_entry_primes_with_defaults() {
    let src = Solid::red_blue();
    for kind in TransitionKind::ALL {
        for ratio in [1.0, 16.0 / 9.0] {
            let args = ArgList::new();
            let ctx = PrimingContext {
                ratio,
                ..PrimingContext::default()
            };
            let mut decl = Declarations::new(&args, ctx);
            let t = kind.prime(&mut decl).unwrap();
            let table = decl.finish();
            assert!(table.len() <= crate::params::table::MAX_SLOTS, "{}", kind.name());
            for &(x, y) in &[(0.1, 0.2), (0.5, 0.5), (0.9, 0.7)] {
                let c: Vec4 = eval(t.as_ref(), &src, 0.37, Vec2::new(x, y));
                assert!(c.0.iter().all(|v| v.is_finite()), "{} {c:?}", kind.name());
            }
        }
    }
}

#[test]
fn primed_entries_reach_both_frames() {
    let src = Solid::red_blue();
    let p = Vec2::new(0.3, 0.4);
    for kind in [TransitionKind::FanIn, TransitionKind::FanOut, TransitionKind::Angular] {
        let args = ArgList::new();
        let mut decl = Declarations::new(&args, PrimingContext::default());
        let t = kind.prime(&mut decl).unwrap();
        assert_eq!(eval(t.as_ref(), &src, 0.0, p), RED, "{}", kind.name());
        assert_eq!(eval(t.as_ref(), &src, 1.0, p), BLUE, "{}", kind.name());
    }
}
