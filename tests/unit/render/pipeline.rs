use super::*;
use crate::engine::config::EngineConfig;
use crate::engine::context::Engine;
use crate::foundation::core::{ColorModel, FrameFormat};

fn solid(format: FrameFormat, value: [u16; 4]) -> PlaneFrame {
    let planes = usize::from(format.planes);
    let pixels = format.width as usize * format.height as usize;
    let samples = value[..planes].repeat(pixels);
    PlaneFrame::from_samples(format, samples).unwrap()
}

fn primed(transition: &str, format: FrameFormat) -> PrimedEngine {
    Engine::configure(&EngineConfig::new(transition))
        .unwrap()
        .prime(format)
        .unwrap()
}

#[test]
fn endpoints_reproduce_the_inputs() {
    let format = FrameFormat::rgba8(9, 7);
    let a = solid(format, [255, 0, 0, 255]);
    let b = solid(format, [0, 0, 255, 255]);
    let pair = FramePair::new(&a, &b).unwrap();
    let engine = primed("gl_blend", format);
    let threading = RenderThreading::default();
    assert_eq!(render_frame(&engine, &pair, 0.0, &threading).unwrap(), a);
    assert_eq!(render_frame(&engine, &pair, 1.0, &threading).unwrap(), b);
    // host progress outside [0, 1] is clamped
    assert_eq!(render_frame(&engine, &pair, 3.0, &threading).unwrap(), b);
    assert!(render_frame(&engine, &pair, f64::NAN, &threading).is_err());
}

#[test]
fn serial_and_parallel_renders_match() {
    let mut format = FrameFormat::rgba8(23, 17);
    format.bit_depth = 10;
    let a = solid(format, [1023, 100, 0, 1023]);
    let b = solid(format, [0, 500, 900, 512]);
    let pair = FramePair::new(&a, &b).unwrap();
    for name in ["gl_Swirl", "gl_perlin", "gl_StarWipe", "gl_SimpleBookCurl"] {
        let engine = primed(name, format);
        let serial = FrameRenderer::new(&engine, &RenderThreading::default()).unwrap();
        let parallel = FrameRenderer::new(
            &engine,
            &RenderThreading {
                parallel: true,
                threads: Some(3),
                rows_per_slice: 4,
            },
        )
        .unwrap();
        for t in [0.2, 0.55] {
            assert_eq!(
                serial.render(&pair, t).unwrap(),
                parallel.render(&pair, t).unwrap(),
                "{name} at {t}"
            );
        }
    }
}

#[test]
fn zero_rows_per_slice_still_covers_the_frame() {
    let format = FrameFormat::rgba8(5, 5);
    let a = solid(format, [10, 20, 30, 255]);
    let pair = FramePair::new(&a, &a).unwrap();
    let engine = primed("gl_angular", format);
    let threading = RenderThreading {
        rows_per_slice: 0,
        ..RenderThreading::default()
    };
    assert_eq!(render_frame(&engine, &pair, 0.4, &threading).unwrap(), a);
}

#[test]
fn zero_threads_is_rejected() {
    let format = FrameFormat::rgba8(2, 2);
    let engine = primed("gl_angular", format);
    let threading = RenderThreading {
        parallel: true,
        threads: Some(0),
        rows_per_slice: 1,
    };
    let err = FrameRenderer::new(&engine, &threading).unwrap_err();
    assert!(err.to_string().contains("threads"), "{err}");
}

#[test]
fn frames_must_match_the_primed_format() {
    let engine = primed("gl_angular", FrameFormat::rgba8(4, 4));
    let mut format = FrameFormat::rgba8(4, 4);
    format.model = ColorModel::Yuv;
    let a = solid(format, [16, 128, 128, 255]);
    let pair = FramePair::new(&a, &a).unwrap();
    let err = render_frame(&engine, &pair, 0.5, &RenderThreading::default()).unwrap_err();
    assert!(err.to_string().contains("primed"), "{err}");
}

#[test]
fn three_plane_output_drops_alpha() {
    let mut format = FrameFormat::rgba8(3, 3);
    format.planes = 3;
    let a = solid(format, [255, 255, 255, 0]);
    let b = solid(format, [0, 0, 0, 0]);
    let pair = FramePair::new(&a, &b).unwrap();
    let engine = primed("gl_blend", format);
    let out = render_frame(&engine, &pair, 1.0, &RenderThreading::default()).unwrap();
    assert_eq!(out.samples().len(), 27);
    assert!(out.samples().iter().all(|&s| s == 0));
}
