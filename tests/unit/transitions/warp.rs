use super::*;
use crate::foundation::core::ColorModel;
use crate::params::args::ArgList;
use crate::transitions::fragment::PixelSource;
use crate::transitions::fragment::Which;
use crate::transitions::fragment::tests::{BLUE, RED, Ramp, Solid, close, eval, prime_with};

fn endpoint_cases() -> Vec<(&'static str, Box<dyn Transition>)> {
    vec![
        ("crosswarp", Box::new(CrossWarp)),
        ("directionalwarp", Box::new(prime_with::<DirectionalWarp>(""))),
        ("dreamy", Box::new(Dreamy)),
        ("waterdrop", Box::new(prime_with::<WaterDrop>(""))),
        ("swirl", Box::new(prime_with::<Swirl>(""))),
        ("rotate", Box::new(RotateTransition)),
        ("rotate_scale_fade", Box::new(prime_with::<RotateScaleFade>(""))),
        ("rotate_scale_vanish", Box::new(prime_with::<RotateScaleVanish>(""))),
        ("directional_scaled", Box::new(prime_with::<DirectionalScaled>(""))),
        ("kaleidoscope", Box::new(prime_with::<Kaleidoscope>(""))),
        ("morph", Box::new(prime_with::<Morph>(""))),
        ("crosszoom", Box::new(prime_with::<CrossZoom>(""))),
        ("hexagonalize", Box::new(prime_with::<Hexagonalize>(""))),
        ("butterfly", Box::new(prime_with::<ButterflyWaveScrawler>(""))),
        ("crazy_parametric", Box::new(prime_with::<CrazyParametricFun>(""))),
        ("edge", Box::new(prime_with::<EdgeTransition>(""))),
        ("exponential_swish", Box::new(prime_with::<ExponentialSwish>(""))),
        ("exponential_swish_blur", Box::new(prime_with::<ExponentialSwish>("blur=0.5"))),
        ("lissajous_tiles", Box::new(prime_with::<LissajousTiles>(""))),
        ("power_kaleido", Box::new(prime_with::<PowerKaleido>(""))),
    ]
}

#[test]
fn warps_start_on_a_and_end_on_b() {
    let src = Solid::red_blue();
    let p = Vec2::new(0.3, 0.4);
    for (name, t) in endpoint_cases() {
        let start = eval(t.as_ref(), &src, 0.0, p);
        let end = eval(t.as_ref(), &src, 1.0, p);
        assert!(close(start, RED, 1e-9), "{name} at 0: {start:?}");
        assert!(close(end, BLUE, 1e-9), "{name} at 1: {end:?}");
    }
}

#[test]
fn rotation_is_identity_at_zero() {
    let p = Vec2::new(0.25, 0.75);
    let expected = Ramp.sample(Which::A, p);
    assert!(close(eval(&RotateTransition, &Ramp, 0.0, p), expected, 1e-12));
    assert!(close(eval(&prime_with::<Swirl>(""), &Ramp, 0.0, p), expected, 1e-12));
}

#[test]
fn directional_warp_keeps_direction_out_of_the_table() {
    let args = ArgList::parse("direction.x=0, direction.y=1").unwrap();
    let mut decl = Declarations::new(&args, Default::default());
    let t = DirectionalWarp::prime(&mut decl).unwrap();
    assert_eq!(decl.finish().len(), 3);
    assert_eq!(t.v, Vec2::new(0.0, 1.0));
    assert_eq!(t.d, 0.5);
}

#[test]
fn ripple_settles_on_b() {
    let t = prime_with::<Ripple>("");
    let c = eval(&t, &Solid::red_blue(), 1.0, Vec2::new(0.1, 0.9));
    assert_eq!(c, BLUE);
}

#[test]
fn morph_offset_follows_plane_order() {
    let rgb = Morph::offset(RED, true);
    assert!((rgb - Vec2::new(0.0, -1.0)).hypot() < 1e-12);
    let yuv = Morph::offset(Vec4::new(0.5, 0.25, 0.75, 1.0), false);
    assert!((yuv - Vec2::new(0.0, -0.25)).hypot() < 1e-12);
}

#[test]
fn mosaic_lands_on_the_end_tile() {
    let t = prime_with::<Mosaic>("");
    let src = Solid::red_blue();
    assert_eq!(eval(&t, &src, 1.0, Vec2::new(0.3, 0.6)), BLUE);
    assert_eq!(eval(&t, &src, 0.0, Vec2::new(0.5, 0.5)), RED);
}

#[test]
fn slides_push_the_frame_out() {
    let t = prime_with::<Slides>("type=0");
    let p = Vec2::new(0.25, 0.75);
    assert!(close(eval(&t, &Ramp, 0.0, p), Ramp.sample(Which::A, p), 1e-12));
    assert_eq!(eval(&t, &Solid::red_blue(), 1.0, Vec2::new(0.3, 0.6)), BLUE);

    let t = prime_with::<Slides>("type=4, slideIn=1");
    assert_eq!(eval(&t, &Solid::red_blue(), 0.0, Vec2::new(0.3, 0.6)), RED);
}

#[test]
fn rolls_uncover_b() {
    let t = prime_with::<Rolls>("");
    let src = Solid::red_blue();
    assert_eq!(eval(&t, &src, 0.0, Vec2::new(0.5, 0.5)), RED);
    assert_eq!(eval(&t, &src, 1.0, Vec2::new(0.5, 0.5)), BLUE);
}

#[test]
fn crosszoom_keeps_alpha_in_yuv() {
    let t = prime_with::<CrossZoom>("");
    let src = Solid {
        a: Vec4::new(0.5, 0.5, 0.5, 0.25),
        b: Vec4::new(0.5, 0.5, 0.5, 0.75),
    };
    let p = Vec2::new(0.4, 0.4);
    let frag = Fragment::new(
        0.5,
        p,
        src.sample(Which::A, p),
        src.sample(Which::B, p),
        1.0,
        ColorModel::Yuv,
        &src,
    );
    let c = t.evaluate(&frag);
    assert!((c.alpha() - 0.5).abs() < 1e-9, "{c:?}");
}

#[test]
fn butterfly_separates_blue_and_red_of_a() {
    let t = prime_with::<ButterflyWaveScrawler>("colorSeparation=0");
    let p = Vec2::new(0.25, 0.75);
    let plain = eval(&t, &Ramp, 0.4, p);
    let t = prime_with::<ButterflyWaveScrawler>("");
    let split = eval(&t, &Ramp, 0.4, p);
    // green is sampled at the unscaled displacement either way
    assert!((plain.0[1] - split.0[1]).abs() < 1e-12);
    // red of A is sampled at 0.7 of the displacement and B has no red
    let dp = t.displacement(p, 0.4) * 0.4;
    assert!((plain.0[0] - 0.6 * clamp_unit(0.25 + dp)).abs() < 1e-12);
    assert!((split.0[0] - 0.6 * clamp_unit(0.25 + dp * 0.7)).abs() < 1e-12);
}

#[test]
fn edge_transition_dims_flat_frames_to_black_at_the_midpoint() {
    let t = prime_with::<EdgeTransition>("");
    let c = eval(&t, &Solid::red_blue(), 0.5, Vec2::new(0.4, 0.6));
    assert!(close(c, Vec4::new(0.0, 0.0, 0.0, 1.0), 1e-12), "{c:?}");
}

#[test]
fn exponential_swish_shows_background_when_unwrapped() {
    let t = prime_with::<ExponentialSwish>("wrap.x=0, wrap.y=0, background=#ffffff");
    // B is still shrunk inside the frame just after the midpoint
    let c = eval(&t, &Solid::red_blue(), 0.55, Vec2::new(0.02, 0.5));
    assert!(close(c, Vec4::new(1.0, 1.0, 1.0, 1.0), 1e-12), "{c:?}");
    assert_eq!(eval(&t, &Solid::red_blue(), 0.45, Vec2::new(0.5, 0.5)), RED);
    assert_eq!(eval(&t, &Solid::red_blue(), 0.55, Vec2::new(0.5, 0.5)), BLUE);
}

#[test]
fn lissajous_tiles_with_an_empty_grid_render_the_background() {
    let t = prime_with::<LissajousTiles>("grid.x=0, background=#ffffff");
    assert_eq!(t.tiles, 0);
    let c = eval(&t, &Solid::red_blue(), 0.5, Vec2::new(0.3, 0.3));
    assert!(close(c, Vec4::new(1.0, 1.0, 1.0, 1.0), 1e-12), "{c:?}");
}

#[test]
fn power_kaleido_uses_three_mirrors() {
    let t = prime_with::<PowerKaleido>("");
    assert_eq!(t.mirrors.len(), 3);
    assert!((t.mirrors[1] - Vec2::new(-0.5, 3f64.sqrt() / 2.0)).hypot() < 1e-12);
}
