//! Recognition scenarios against the built-in libraries.

use q_symbol_recognizer::{library, Point, RankedResult, RecognizeError, Recognizer};
use std::collections::HashSet;

fn unistroke() -> Recognizer {
    library::unistroke().expect("uni-stroke library")
}

fn multistroke() -> Recognizer {
    library::multistroke().expect("multi-stroke library")
}

fn names(results: &[RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

fn assert_pruned(results: &[RankedResult]) {
    if results[0].score > 0.5 {
        assert!(results.iter().all(|r| r.score > 0.1), "{results:?}");
    }
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(results.iter().all(|r| r.score > 0.0 && r.score <= 1.0));
}

/// A slightly wobbly left-to-right line of 300px
fn horizontal_line() -> Vec<Point> {
    (0..31)
        .map(|i| Point::new(50.0 + i as f64 * 10.0, 200.0 + 3.0 * (i as f64 * 0.7).sin(), 1))
        .collect()
}

fn vertical_line() -> Vec<Point> {
    (0..31)
        .map(|i| Point::new(200.0 + 3.0 * (i as f64 * 0.5).sin(), 50.0 + i as f64 * 10.0, 1))
        .collect()
}

/// The shipped "S" template drawn back at screen scale
fn perfect_s() -> Vec<Point> {
    let recognizer = unistroke();
    let s = recognizer
        .templates()
        .iter()
        .find(|t| t.name() == "S")
        .expect("S template");
    s.points()
        .iter()
        .map(|p| Point::new(300.0 + 200.0 * p.x, 300.0 + 200.0 * p.y, p.stroke_id))
        .collect()
}

#[test]
fn horizontal_line_is_a_dash() {
    let results = unistroke().recognize_all(&horizontal_line()).unwrap();
    assert_eq!(results[0].name, "-");
    assert!(results[0].score > 0.5);
    assert_pruned(&results);
}

#[test]
fn direction_does_not_matter() {
    let mut line = horizontal_line();
    line.reverse();
    let results = unistroke().recognize_all(&line).unwrap();
    assert_eq!(results[0].name, "-");
}

#[test]
fn vertical_line_is_a_bar() {
    let results = unistroke().recognize_all(&vertical_line()).unwrap();
    assert_eq!(results[0].name, "|");
    assert!(results[0].score > 0.5);
    assert_pruned(&results);
}

#[test]
fn size_does_not_matter() {
    let small: Vec<Point> = vertical_line()
        .into_iter()
        .map(|p| Point::new(p.x / 10.0, p.y / 10.0, 1))
        .collect();
    assert_eq!(unistroke().recognize_all(&small).unwrap()[0].name, "|");
}

#[test]
fn chevrons_and_circles() {
    let recognizer = unistroke();

    let v: Vec<Point> = (0..11)
        .map(|i| Point::new(100.0 + i as f64 * 5.0, 100.0 + i as f64 * 10.0, 1))
        .chain((1..11).map(|i| Point::new(150.0 + i as f64 * 5.0, 200.0 - i as f64 * 10.0, 1)))
        .collect();
    assert_eq!(recognizer.recognize_all(&v).unwrap()[0].name, "v");

    let caret: Vec<Point> = v.iter().map(|p| Point::new(p.x, 300.0 - p.y, 1)).collect();
    assert_eq!(recognizer.recognize_all(&caret).unwrap()[0].name, "^");

    let o: Vec<Point> = (0..40)
        .map(|i| {
            let a = -std::f64::consts::FRAC_PI_2 - i as f64 / 39.0 * std::f64::consts::TAU;
            Point::new(200.0 + 80.0 * a.cos(), 200.0 + 80.0 * a.sin(), 1)
        })
        .collect();
    let results = recognizer.recognize_all(&o).unwrap();
    assert_eq!(results[0].name, "o");
    assert_pruned(&results);
}

#[test]
fn two_strokes_make_a_t() {
    let t = Point::from_strokes([
        (0..21).map(|i| (100.0 + i as f64 * 10.0, 100.0)).collect::<Vec<_>>(),
        (0..21).map(|i| (200.0, 100.0 + i as f64 * 10.0)).collect(),
    ]);
    let results = multistroke().recognize_all(&t).unwrap();
    assert_eq!(results[0].name, "T");
    assert_pruned(&results);
}

#[test]
fn stroke_order_does_not_matter() {
    let x = Point::from_strokes([
        (0..21).map(|i| (100.0 + i as f64 * 10.0, 300.0 - i as f64 * 10.0)).collect::<Vec<_>>(),
        (0..21).map(|i| (300.0 - i as f64 * 10.0, 300.0 - i as f64 * 10.0)).collect(),
    ]);
    assert_eq!(multistroke().recognize_all(&x).unwrap()[0].name, "X");
}

#[test]
fn coincident_points_are_degenerate() {
    let dot = vec![Point::new(120.0, 80.0, 1); 10];
    assert!(matches!(
        unistroke().recognize_all(&dot),
        Err(RecognizeError::DegenerateInput)
    ));
}

#[test]
fn ignored_symbols_are_never_returned() {
    let recognizer = unistroke();
    let s = perfect_s();
    assert_eq!(recognizer.recognize_all(&s).unwrap()[0].name, "S");

    let ignore: HashSet<&str> = ["S"].into();
    let results = recognizer.recognize(&s, &ignore).unwrap();
    assert!(!results.is_empty());
    assert!(!names(&results).contains(&"S"));
    assert_pruned(&results);
}

#[test]
fn recognition_is_deterministic() {
    let recognizer = unistroke();
    let s = perfect_s();
    let first = recognizer.recognize_all(&s).unwrap();
    for _ in 0..5 {
        assert_eq!(recognizer.recognize_all(&s).unwrap(), first);
    }
}

#[test]
fn recognizer_is_shared_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Recognizer>();

    let recognizer = unistroke();
    std::thread::scope(|scope| {
        let dash = scope.spawn(|| recognizer.recognize_all(&horizontal_line()).unwrap());
        let bar = scope.spawn(|| recognizer.recognize_all(&vertical_line()).unwrap());
        assert_eq!(dash.join().unwrap()[0].name, "-");
        assert_eq!(bar.join().unwrap()[0].name, "|");
    });
}
