use super::*;

fn close(a: Vec4, b: Vec4, eps: f64) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| (x - y).abs() < eps)
}

const BG: Vec4 = Vec4::new(0.2, 0.5, 0.8, 1.0);
const FG: Vec4 = Vec4::new(0.9, 0.3, 0.1, 1.0);

#[test]
fn composite_opaque_foreground_returns_blended() {
    let blended = Vec4::new(0.4, 0.6, 0.1, 1.0);
    let out = composite(BG, FG, blended);
    assert!(close(out, blended, 1e-12), "{out:?}");
}

#[test]
fn composite_transparent_foreground_returns_background() {
    let fg = FG.with_alpha(0.0);
    let out = composite(BG, fg, Vec4::new(0.4, 0.6, 0.1, 1.0));
    assert_eq!(out, BG);

    let half_bg = BG.with_alpha(0.5);
    assert_eq!(composite(half_bg, fg, FG), half_bg);
}

#[test]
fn composite_alpha_union() {
    let out = composite(BG.with_alpha(0.5), FG.with_alpha(0.5), FG);
    assert!((out.alpha() - 0.75).abs() < 1e-12);
    let none = composite(BG.with_alpha(0.0), FG.with_alpha(0.0), FG);
    assert_eq!(none.alpha(), 0.0);
}

#[test]
fn separable_modes_match_reference_values() {
    let b = Vec4::new(0.5, 0.25, 1.0, 1.0);
    let f = Vec4::new(0.5, 0.75, 0.0, 1.0);
    let m = BlendMode::Multiply.apply(b, f);
    assert_eq!([m.0[0], m.0[1], m.0[2]], [0.25, 0.1875, 0.0]);
    let s = BlendMode::Screen.apply(b, f);
    assert_eq!([s.0[0], s.0[1], s.0[2]], [0.75, 0.8125, 1.0]);
    let d = BlendMode::Difference.apply(b, f);
    assert_eq!([d.0[0], d.0[1], d.0[2]], [0.0, 0.5, 1.0]);
    assert_eq!(BlendMode::Darken.apply(b, f).0[1], 0.25);
    assert_eq!(BlendMode::Lighten.apply(b, f).0[1], 0.75);
    assert_eq!(BlendMode::Normal.apply(b, f), f);
}

#[test]
fn dodge_and_burn_edge_cases() {
    assert_eq!(color_dodge(0.0, 1.0), 0.0);
    assert_eq!(color_dodge(0.5, 1.0), 1.0);
    assert_eq!(color_dodge(0.25, 0.5), 0.5);
    assert_eq!(color_burn(1.0, 0.0), 1.0);
    assert_eq!(color_burn(0.5, 0.0), 0.0);
    assert_eq!(color_burn(0.75, 0.5), 0.5);
}

#[test]
fn overlay_is_hard_light_with_swapped_operands() {
    for &(b, f) in &[(0.2, 0.7), (0.8, 0.3), (0.5, 0.5)] {
        let o = BlendMode::Overlay.apply(Vec4::splat(b), Vec4::splat(f));
        assert_eq!(o.0[0], hard_light(f, b));
    }
    assert!((soft_light(0.5, 0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn set_lum_preserves_target_and_stays_in_range() {
    for &l in &[0.0, 0.1, 0.5, 0.9, 1.0] {
        let c = set_lum(Vec4::new(0.9, 0.1, 0.5, 1.0), l);
        assert!((lum(c) - l).abs() < 1e-9, "l={l} c={c:?}");
        assert!(c.min3() >= -1e-9 && c.max3() <= 1.0 + 1e-9);
    }
}

#[test]
fn set_sat_keeps_channel_order() {
    let c = set_sat(Vec4::new(0.6, 0.2, 0.4, 1.0), 0.5);
    assert_eq!(c.0[1], 0.0);
    assert!((c.0[0] - 0.5).abs() < 1e-12);
    assert!((c.0[2] - 0.25).abs() < 1e-12);
    assert!((sat(c) - 0.5).abs() < 1e-12);

    let flat = set_sat(Vec4::new(0.3, 0.3, 0.3, 1.0), 0.8);
    assert_eq!([flat.0[0], flat.0[1], flat.0[2]], [0.0, 0.0, 0.0]);
}

#[test]
fn non_separable_modes_hit_their_targets() {
    let c = BlendMode::Luminosity.apply(BG, FG);
    assert!((lum(c) - lum(FG)).abs() < 1e-9);
    let c = BlendMode::Color.apply(BG, FG);
    assert!((lum(c) - lum(BG)).abs() < 1e-9);
    let c = BlendMode::Hue.apply(BG, FG);
    assert!((lum(c) - lum(BG)).abs() < 1e-9);
}

#[test]
fn blend_in_yuv_round_trips_through_rgb() {
    use crate::color::convert::{rgb_to_yuv, yuv_to_rgb};

    let b = rgb_to_yuv(BG);
    let f = rgb_to_yuv(FG);
    let out = blend(b, f, BlendMode::Normal, ColorModel::Yuv);
    assert!(close(yuv_to_rgb(out), FG, 2e-3));
    let out = blend(BG, FG, BlendMode::Multiply, ColorModel::Rgb);
    assert!(close(out, (BG * FG).with_alpha(1.0), 1e-12));
}

#[test]
fn names_and_indices_resolve() {
    assert_eq!(BlendMode::parse("Color-Dodge").unwrap(), BlendMode::ColorDodge);
    assert_eq!(BlendMode::parse("soft_light").unwrap(), BlendMode::SoftLight);
    assert!(BlendMode::parse("plasma").is_err());
    assert_eq!(BlendMode::from_index(15), BlendMode::Luminosity);
    assert_eq!(BlendMode::from_index(-1), BlendMode::Normal);
    assert_eq!(BlendMode::from_index(99), BlendMode::Normal);
    let j = serde_json::to_string(&BlendMode::HardLight).unwrap();
    assert_eq!(j, "\"hard_light\"");
}
