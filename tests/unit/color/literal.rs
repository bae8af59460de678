use super::*;

#[test]
fn hex_and_named_literals_pack_rgba() {
    assert_eq!(parse_color("#3319CC").unwrap(), 0x3319_CCFF);
    assert_eq!(parse_color("#3319cc80").unwrap(), 0x3319_CC80);
    assert_eq!(parse_color("0x66CCFFFF").unwrap(), 0x66CC_FFFF);
    assert_eq!(parse_color("Red").unwrap(), 0xFF00_00FF);
    assert_eq!(parse_color("white@0.5").unwrap(), 0xFFFF_FF80);
    assert_eq!(parse_color("#000000@0x10").unwrap(), 0x0000_0010);
}

#[test]
fn malformed_literals_name_the_token() {
    let err = parse_color("#12345").unwrap_err().to_string();
    assert!(err.contains("12345"), "{err}");
    let err = parse_color("notacolour").unwrap_err().to_string();
    assert!(err.contains("notacolour"), "{err}");
    assert!(parse_color("red@2").is_err());
    assert!(parse_color("#GG0000").is_err());
}

#[test]
fn encoded_literals_are_always_above_one() {
    assert!(encode_rgba(0) > 1.0);
    assert_eq!(encode_rgba(0x0000_00FF), 4_294_967_551.0);
}

#[test]
fn colour_token_detection() {
    assert!(looks_like_color("#fff000"));
    assert!(looks_like_color("0x00ff00ff"));
    assert!(looks_like_color("blue"));
    assert!(looks_like_color("1@0.5"));
    assert!(!looks_like_color("0.25"));
    assert!(!looks_like_color("-3"));
}

#[test]
fn decode_magnitude_ranges() {
    let rgba = ColorArg::decode(encode_rgba(0xFF80_00FF), ColorModel::Rgb);
    assert_eq!(
        rgba,
        ColorArg::Solid(Vec4::new(1.0, 128.0 / 255.0, 0.0, 1.0))
    );

    assert_eq!(
        ColorArg::decode(0.25, ColorModel::Rgb),
        ColorArg::Solid(Vec4::new(0.25, 0.25, 0.25, 1.0))
    );
    assert_eq!(
        ColorArg::decode(0.25, ColorModel::Yuv),
        ColorArg::Solid(Vec4::new(0.25, 0.5, 0.5, 1.0))
    );
    assert_eq!(
        ColorArg::decode(-0.5, ColorModel::Rgb),
        ColorArg::Solid(Vec4::new(0.5, 0.5, 0.5, 0.0))
    );
    assert_eq!(
        ColorArg::decode(-0.0, ColorModel::Rgb),
        ColorArg::Solid(Vec4::new(0.0, 0.0, 0.0, 0.0))
    );
    assert_eq!(
        ColorArg::decode(0.0, ColorModel::Rgb),
        ColorArg::Solid(Vec4::new(0.0, 0.0, 0.0, 1.0))
    );
}

#[test]
fn decode_texture_selectors() {
    assert_eq!(
        ColorArg::decode(-4.0, ColorModel::Rgb),
        ColorArg::Texture {
            texture: Texture::GlowingMarbling,
            animated: true
        }
    );
    assert_eq!(
        ColorArg::decode(-5.0, ColorModel::Rgb),
        ColorArg::Texture {
            texture: Texture::GlowingMarbling,
            animated: false
        }
    );
    assert_eq!(
        ColorArg::decode(-3.0, ColorModel::Rgb),
        ColorArg::Texture {
            texture: Texture::NaturalVignetting,
            animated: false
        }
    );
    assert_eq!(
        ColorArg::decode(-2.0, ColorModel::Rgb),
        ColorArg::Texture {
            texture: Texture::NaturalVignetting,
            animated: true
        }
    );
}

#[test]
fn static_textures_ignore_progress() {
    let arg = ColorArg::decode(-11.0, ColorModel::Rgb);
    let p = Vec2::new(0.3, 0.6);
    assert_eq!(arg.resolve(p, 0.0, 1.0, ColorModel::Rgb), arg.resolve(p, 0.9, 1.0, ColorModel::Rgb));
}
