use super::*;

fn gradient(width: u32, height: u32) -> PlaneFrame {
    let format = FrameFormat::rgba8(width, height);
    let mut samples = Vec::new();
    for y in 0..height {
        for x in 0..width {
            samples.extend([x as u16 * 10, y as u16 * 10, 0, 255]);
        }
    }
    PlaneFrame::from_samples(format, samples).unwrap()
}

#[test]
fn quantize_rounds_half_up_and_clips() {
    assert_eq!(quantize(0.0, 255), 0);
    assert_eq!(quantize(1.0, 255), 255);
    assert_eq!(quantize(0.5, 255), 128);
    assert_eq!(quantize(1.7, 1023), 1023);
    assert_eq!(quantize(-0.2, 255), 0);
    assert_eq!(quantize(f64::NAN, 255), 0);
}

#[test]
fn from_samples_checks_length_and_range() {
    let format = FrameFormat::rgba8(2, 2);
    let err = PlaneFrame::from_samples(format, vec![0; 15]).unwrap_err();
    assert!(err.to_string().contains("needs 16 samples"), "{err}");
    let err = PlaneFrame::from_samples(format, vec![300; 16]).unwrap_err();
    assert!(err.to_string().contains("300"), "{err}");
    assert!(PlaneFrame::new(FrameFormat::rgba8(0, 4)).is_err());
}

#[test]
fn missing_planes_read_as_defaults() {
    let mut format = FrameFormat::rgba8(1, 1);
    format.planes = 1;
    format.model = ColorModel::Yuv;
    let luma = PlaneFrame::from_samples(format, vec![51]).unwrap();
    assert_eq!(luma.pixel(0, 0), Vec4::new(0.2, 0.5, 0.5, 1.0));

    format.planes = 3;
    format.model = ColorModel::Rgb;
    let rgb = PlaneFrame::from_samples(format, vec![255, 0, 51]).unwrap();
    assert_eq!(rgb.pixel(0, 0), Vec4::new(1.0, 0.0, 0.2, 1.0));
}

#[test]
fn pair_samples_nearest_with_y_up_and_clamping() {
    let a = gradient(5, 3);
    let b = PlaneFrame::new(FrameFormat::rgba8(5, 3)).unwrap();
    let pair = FramePair::new(&a, &b).unwrap();

    // top-left pixel is y = 1
    let c = pair.sample(Which::A, Vec2::new(0.0, 1.0));
    assert_eq!((c.0[0], c.0[1]), (0.0, 0.0));
    // bottom row, x index round(0.6 * 4) = 2
    let c = pair.sample(Which::A, Vec2::new(0.6, 0.0));
    assert_eq!((c.0[0], c.0[1]), (20.0 / 255.0, 20.0 / 255.0));
    // out of range clamps to the edges
    let c = pair.sample(Which::A, Vec2::new(3.0, -2.0));
    assert_eq!((c.0[0], c.0[1]), (40.0 / 255.0, 20.0 / 255.0));
    let c = pair.sample(Which::A, Vec2::new(f64::NAN, 7.0));
    assert_eq!((c.0[0], c.0[1]), (0.0, 0.0));

    assert_eq!(pair.sample(Which::B, Vec2::new(0.5, 0.5)), Vec4::ZERO);
}

#[test]
fn pair_requires_matching_formats() {
    let a = gradient(4, 4);
    let b = gradient(4, 3);
    let err = FramePair::new(&a, &b).unwrap_err();
    assert!(err.to_string().contains("differ in format"), "{err}");
}

#[test]
fn rgba8_round_trip_preserves_pixels() {
    let img = image::RgbaImage::from_fn(3, 2, |x, y| image::Rgba([x as u8 * 80, y as u8 * 90, 7, 200]));
    let frame = PlaneFrame::from_rgba8(&img);
    assert_eq!(frame.format(), &FrameFormat::rgba8(3, 2));
    assert_eq!(frame.to_rgba8().unwrap(), img);
}

#[test]
fn to_model_converts_through_rgb() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
    let rgb = PlaneFrame::from_rgba8(&img);
    let yuv = rgb.to_model(ColorModel::Yuv).unwrap();
    assert_eq!(yuv.format().model, ColorModel::Yuv);
    // limited-range white
    assert_eq!(&yuv.samples()[..4], &[235, 128, 128, 255]);

    let back = yuv.to_model(ColorModel::Rgb).unwrap();
    assert_eq!(back.to_rgba8().unwrap(), img);

    let mut format = FrameFormat::rgba8(1, 1);
    format.planes = 1;
    format.model = ColorModel::Yuv;
    let luma = PlaneFrame::from_samples(format, vec![16]).unwrap();
    let rgb = luma.to_model(ColorModel::Rgb).unwrap();
    assert_eq!(rgb.format().planes, 3);
    // black within rounding of the limited-range neutral chroma
    assert!(rgb.samples().iter().all(|&s| s <= 1), "{:?}", rgb.samples());
}
