use super::*;
use crate::foundation::math::Vec2;
use crate::params::args::ArgList;
use crate::params::table::ParamValue;
use crate::transitions::fragment::tests::{BLUE, RED, Solid, close, eval, prime_with};

const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

#[test]
fn blend_passes_through_the_blended_image() {
    let t = prime_with::<Blend>("mode=1");
    assert_eq!(t.mode, BlendMode::Multiply);
    let src = Solid::red_blue();
    let p = Vec2::new(0.5, 0.5);
    assert_eq!(eval(&t, &src, 0.0, p), RED);
    assert!(close(eval(&t, &src, 0.5, p), BLACK, 1e-12));
    assert!(close(eval(&t, &src, 1.0, p), BLUE, 1e-12));
    let quarter = eval(&t, &src, 0.25, p);
    assert!(close(quarter, Vec4::new(0.5, 0.0, 0.0, 1.0), 1e-12), "{quarter:?}");
}

#[test]
fn unknown_blend_mode_falls_back_to_normal() {
    let args = ArgList::parse("blendMode=42").unwrap();
    let mut decl = Declarations::new(&args, Default::default());
    let t = TestBlend::prime(&mut decl).unwrap();
    assert_eq!(t.mode, BlendMode::Normal);
    assert_eq!(decl.finish().get("blendMode"), Some(ParamValue::Number(42.0)));

    let t = prime_with::<TestBlend>("-3");
    assert_eq!(t.mode, BlendMode::Normal);
}

#[test]
fn test_blend_swaps_operands_at_the_midpoint() {
    let t = prime_with::<TestBlend>("blendMode=4");
    let src = Solid {
        a: Vec4::new(0.8, 0.2, 0.5, 1.0),
        b: Vec4::new(0.3, 0.6, 0.5, 1.0),
    };
    let p = Vec2::new(0.1, 0.1);
    let darken = Vec4::new(0.3, 0.2, 0.5, 1.0);
    assert!(close(eval(&t, &src, 0.2, p), darken, 1e-12));
    assert!(close(eval(&t, &src, 0.8, p), darken, 1e-12));
}

#[test]
fn test_texture_renders_its_colour() {
    let t = prime_with::<TestTexture>("0.25");
    let c = eval(&t, &Solid::red_blue(), 0.3, Vec2::new(0.7, 0.2));
    assert_eq!(c, Vec4::new(0.25, 0.25, 0.25, 1.0));
}

#[test]
fn stripe_wipe_sweeps_coloured_layers() {
    let t = prime_with::<StripeWipe>("");
    let src = Solid::red_blue();
    for &x in &[0.1, 0.5, 0.9] {
        let p = Vec2::new(x, 0.5);
        assert!(close(eval(&t, &src, 0.0, p), RED, 1e-12), "x={x}");
        assert!(close(eval(&t, &src, 1.0, p), BLUE, 1e-12), "x={x}");
    }
    let mid = eval(&t, &src, 0.5, Vec2::new(0.9, 0.5));
    assert!(!close(mid, RED, 1e-3) && !close(mid, BLUE, 1e-3), "{mid:?}");
    assert!((t.offset - 1.0).abs() < 1e-12);
}

#[test]
fn stripe_bend_touches_luma_only_in_yuv() {
    let c = Vec4::new(0.5, 0.4, 0.6, 1.0);
    let yuv = StripeWipe::bend(c, [0.5, 0.25, 0.75], ColorModel::Yuv);
    assert!(close(yuv, Vec4::new(0.25, 0.4, 0.6, 1.0), 1e-12));
    let rgb = StripeWipe::bend(c, [0.5, 0.25, 0.75], ColorModel::Rgb);
    assert!(close(rgb, Vec4::new(0.375, 0.2, 0.15, 1.0), 1e-12));
}
