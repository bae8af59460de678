use super::*;
use crate::params::args::ArgList;
use crate::params::table::ParamValue;
use crate::transitions::fragment::tests::{BLUE, RED, Solid, close, eval, prime_with};

fn with_logs<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[test]
fn inverted_curl_substitutes_unsupported_angles() {
    let args = ArgList::parse("angle=45").unwrap();
    let mut decl = Declarations::new(&args, Default::default());
    let t = with_logs(|| InvertedPageCurl::prime(&mut decl)).unwrap();
    assert_eq!(t.angle, 100);
    let table = decl.finish();
    assert_eq!(table.get("angle"), Some(ParamValue::Number(45.0)));
    assert_eq!(table.get("ang"), Some(ParamValue::Derived(100.0)));

    let t = prime_with::<InvertedPageCurl>("30");
    assert_eq!(t.angle, 30);
}

#[test]
fn curls_start_on_a_and_end_on_b() {
    let cases: Vec<(&str, Box<dyn Transition>)> = vec![
        ("inverted", Box::new(prime_with::<InvertedPageCurl>(""))),
        ("inverted reversed", Box::new(prime_with::<InvertedPageCurl>("reverseEffect=1"))),
        ("simple page", Box::new(prime_with::<SimplePageCurl>(""))),
        ("simple book", Box::new(prime_with::<SimpleBookCurl>(""))),
    ];
    let src = Solid::red_blue();
    for (name, t) in &cases {
        for &(x, y) in &[(0.5, 0.5), (0.2, 0.8), (0.8, 0.3)] {
            let p = Vec2::new(x, y);
            let start = eval(t.as_ref(), &src, 0.0, p);
            let end = eval(t.as_ref(), &src, 1.0, p);
            assert!(close(start, RED, 1e-9), "{name} at 0 {p:?}: {start:?}");
            assert!(close(end, BLUE, 1e-9), "{name} at 1 {p:?}: {end:?}");
        }
    }
}

#[test]
fn simple_page_curl_derives_its_path() {
    let args = ArgList::new();
    let mut decl = Declarations::new(&args, Default::default());
    let t = SimplePageCurl::prime(&mut decl).unwrap();
    assert!((t.dir.hypot() - 1.0).abs() < 1e-12);
    // the axis ends a curl diameter beyond the opposite corner
    let end = t.start + t.path;
    assert!((end.dot(t.dir) + t.start.dot(t.dir) + 2.0 * t.radius).abs() < 1e-12);
    let table = decl.finish();
    assert_eq!(table.len(), 13);
    assert!(table.get("m.y").is_some());
}

#[test]
fn edge_distance_measures_outside_too() {
    let d = InvertedPageCurl::distance_to_edge;
    assert!((d(Vec2::new(0.2, 0.7)) - 0.2).abs() < 1e-12);
    assert!((d(Vec2::new(-0.1, 0.5)) - 0.1).abs() < 1e-12);
    assert!((d(Vec2::new(-0.3, 1.4)) - 0.5).abs() < 1e-12);
}

#[test]
fn helpers_follow_the_colour_model() {
    assert_eq!(quadrant_corner(Vec2::new(-0.3, 0.2)), Vec2::new(-0.5, 0.5));
    assert!(close(lighten(RED, 0.5, ColorModel::Rgb), Vec4::new(1.0, 0.5, 0.5, 1.0), 1e-12));
    let yuv = lighten(Vec4::new(0.5, 0.2, 0.8, 1.0), 0.5, ColorModel::Yuv);
    assert!(close(yuv, Vec4::new(0.75, 0.2, 0.8, 1.0), 1e-12));
    let dir = curl_direction(90.0, 2.0);
    assert!(close(Vec4::new(dir.x, dir.y, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 0.0), 1e-12));
}
