use super::*;

fn close(a: Vec4, b: Vec4, eps: f64) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| (x - y).abs() < eps)
}

#[test]
fn yuv_roundtrip_within_tolerance() {
    for &c in &[
        Vec4::new(0.0, 0.0, 0.0, 1.0),
        Vec4::new(1.0, 1.0, 1.0, 0.5),
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.2, 0.7, 0.4, 0.0),
        Vec4::new(0.9, 0.1, 0.6, 1.0),
    ] {
        let back = yuv_to_rgb(rgb_to_yuv(c));
        assert!(close(back, c, 1e-3), "{c:?} -> {back:?}");
        let native = rgb_to_yuv(c);
        let again = from_canonical_rgb(to_canonical_rgb(native, ColorModel::Yuv), ColorModel::Yuv);
        assert!(close(again, native, 1e-3));
    }
}

#[test]
fn limited_range_endpoints() {
    let black = rgb_to_yuv(Vec4::new(0.0, 0.0, 0.0, 1.0));
    assert!((black.0[0] - 16.0 / 255.0).abs() < 1e-9);
    assert!((black.0[1] - 128.0 / 255.0).abs() < 1e-9);
    let white = rgb_to_yuv(Vec4::new(1.0, 1.0, 1.0, 1.0));
    assert!((white.0[0] - 235.0 / 255.0).abs() < 1e-3);
    assert!((white.0[2] - 128.0 / 255.0).abs() < 1e-3);
}

#[test]
fn rgb_model_is_identity() {
    let c = Vec4::new(0.3, 0.2, 0.1, 0.9);
    assert_eq!(to_canonical_rgb(c, ColorModel::Rgb), c);
    assert_eq!(from_canonical_rgb(c, ColorModel::Rgb), c);
}

#[test]
fn shade_touches_luma_only_for_yuv() {
    let c = Vec4::new(0.8, 0.4, 0.6, 1.0);
    assert_eq!(shade(c, 0.5, ColorModel::Yuv), Vec4::new(0.4, 0.4, 0.6, 1.0));
    assert_eq!(shade(c, 0.5, ColorModel::Rgb), Vec4::new(0.4, 0.2, 0.3, 1.0));
    assert_eq!(grey(0.3, 1.0, ColorModel::Yuv), Vec4::new(0.3, 0.5, 0.5, 1.0));
}
