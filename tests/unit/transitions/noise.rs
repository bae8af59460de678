use super::*;
use crate::transitions::fragment::tests::{BLUE, RED, Solid, close, eval, prime_with};

#[test]
fn dissolves_start_on_a_and_end_on_b() {
    let cases: Vec<(&str, Box<dyn Transition>)> = vec![
        ("randomnoisex", Box::new(RandomNoiseX)),
        ("randomsquares", Box::new(prime_with::<RandomSquares>(""))),
        ("perlin", Box::new(prime_with::<Perlin>(""))),
        ("static_wipe", Box::new(prime_with::<StaticWipe>(""))),
        ("crosshatch", Box::new(prime_with::<Crosshatch>(""))),
        ("gridflip", Box::new(prime_with::<GridFlip>(""))),
    ];
    let src = Solid::red_blue();
    for (name, t) in &cases {
        for i in 1..10 {
            let p = Vec2::new(f64::from(i) * 0.097, 1.0 - f64::from(i) * 0.089);
            let start = eval(t.as_ref(), &src, 0.0, p);
            let end = eval(t.as_ref(), &src, 1.0, p);
            assert!(close(start, RED, 1e-12), "{name} at 0 {p:?}: {start:?}");
            assert!(close(end, BLUE, 1e-12), "{name} at 1 {p:?}: {end:?}");
        }
    }
}

#[test]
fn perlin_noise_hits_the_lattice_hash() {
    assert_eq!(Perlin::noise(Vec2::new(2.0, 3.0)), frand(2.0, 3.0));
    let n = Perlin::noise(Vec2::new(2.5, 3.25));
    assert!((0.0..1.0).contains(&n));
}

#[test]
fn random_noise_is_deterministic() {
    let src = Solid::red_blue();
    let p = Vec2::new(0.31, 0.77);
    let first = eval(&RandomNoiseX, &src, 0.4, p);
    assert_eq!(first, eval(&RandomNoiseX, &src, 0.4, p));
    let expected = if frand(0.31, 0.77) + 0.4 >= 1.0 { BLUE } else { RED };
    assert_eq!(first, expected);
}

#[test]
fn grid_flip_draws_dividers_between_tiles() {
    let t = prime_with::<GridFlip>("background=#00ff00");
    let c = eval(&t, &Solid::red_blue(), 0.5, Vec2::new(0.25, 0.4));
    assert_eq!(c, Vec4::new(0.0, 1.0, 0.0, 1.0));
}
