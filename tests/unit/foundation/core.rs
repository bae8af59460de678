use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(25, 0).is_err());
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 0.01);
    assert!((fps.frame_duration_secs() * fps.as_f64() - 1.0).abs() < 1e-12);
}

#[test]
fn frame_format_validation() {
    assert!(FrameFormat::rgba8(4, 4).validate().is_ok());
    assert!(FrameFormat::rgba8(0, 4).validate().is_err());

    let mut f = FrameFormat::rgba8(4, 4);
    f.planes = 2;
    assert!(f.validate().is_err());

    f.planes = 1;
    assert!(f.validate().is_err());
    f.model = ColorModel::Yuv;
    assert!(f.validate().is_ok());

    f.bit_depth = 17;
    assert!(f.validate().is_err());
}

#[test]
fn frame_format_derived_values() {
    let mut f = FrameFormat::rgba8(16, 9);
    assert!((f.ratio() - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(f.max_value(), 255);
    f.bit_depth = 16;
    assert_eq!(f.max_value(), u16::MAX);
    f.bit_depth = 10;
    assert_eq!(f.max_value(), 1023);
    assert_eq!(f.max_x(), 15.0);
    assert_eq!(FrameFormat::rgba8(1, 1).max_y(), 1.0);
    assert_eq!(f.sample_count(), 16 * 9 * 4);
}

#[test]
fn color_model_serde_is_snake_case() {
    let s = serde_json::to_string(&ColorModel::Yuv).unwrap();
    assert_eq!(s, "\"yuv\"");
    let m: ColorModel = serde_json::from_str("\"rgb\"").unwrap();
    assert!(m.is_rgb());
}
