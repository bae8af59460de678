use super::*;

const SELECTORS: [i64; 12] = [-2, -4, -6, -8, -10, -12, -14, -16, -18, -20, -22, -24];

#[test]
fn every_selector_maps_to_a_distinct_texture() {
    let mut seen = std::collections::HashSet::new();
    for s in SELECTORS {
        assert!(seen.insert(Texture::from_selector(s)), "duplicate for {s}");
    }
    assert_eq!(Texture::from_selector(-100), Texture::NaturalVignetting);
}

#[test]
fn textures_are_opaque_and_clamped() {
    for s in SELECTORS {
        let tex = Texture::from_selector(s);
        for &(x, y) in &[(0.1, 0.2), (0.5, 0.5), (0.9, 0.75), (0.0, 1.0)] {
            for &t in &[0.0, 0.3, 1.0] {
                let c = tex.sample(Vec2::new(x, y), t, 16.0 / 9.0);
                assert_eq!(c.alpha(), 1.0);
                for v in &c.0[..3] {
                    assert!(v.is_nan() || (0.0..=1.0).contains(v), "{tex:?} {c:?}");
                }
            }
        }
    }
}

#[test]
fn vignette_is_brightest_at_centre() {
    let centre = Texture::NaturalVignetting.sample(Vec2::new(0.5, 0.5), 0.0, 1.0);
    let corner = Texture::NaturalVignetting.sample(Vec2::new(0.0, 0.0), 0.0, 1.0);
    assert_eq!(centre.0[0], 1.0);
    assert!(corner.0[0] < centre.0[0]);
}

#[test]
fn rainbow_scrolls_with_progress() {
    let a = Texture::Rainbow.sample(Vec2::new(0.2, 0.5), 0.0, 1.0);
    let b = Texture::Rainbow.sample(Vec2::new(0.0, 0.5), 0.2, 1.0);
    for i in 0..3 {
        assert!((a.0[i] - b.0[i]).abs() < 1e-9);
    }
}
