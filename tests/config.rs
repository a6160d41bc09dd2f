use q_symbol_recognizer::{library, MatchParameters, Point, RecognizerConfig};

#[test]
fn config_loads_from_ron() {
    let config: RecognizerConfig = ron::from_str(
        "(matching: (use_early_abandoning: false), abandon_slack: 0.0, min_score: 0.2)",
    )
    .unwrap();
    assert_eq!(
        config.matching,
        MatchParameters {
            use_early_abandoning: false,
            use_lower_bounding: true,
        }
    );
    assert_eq!(config.abandon_slack, 0.0);
    assert_eq!(config.confident_score, 0.5);
    assert_eq!(config.min_score, 0.2);
}

#[test]
fn pruning_layers_do_not_change_the_winner() {
    let exhaustive = RecognizerConfig {
        matching: MatchParameters {
            use_early_abandoning: false,
            use_lower_bounding: false,
        },
        ..RecognizerConfig::default()
    };
    let fast = library::unistroke().unwrap();
    let slow = library::unistroke_with_config(exhaustive).unwrap();
    assert_eq!(slow.config(), &exhaustive);

    let zigzag: Vec<Point> = (0..9)
        .map(|i| Point::new(i as f64 * 30.0, if i % 2 == 0 { 0.0 } else { 60.0 }, 1))
        .collect();
    let a = fast.recognize_all(&zigzag).unwrap();
    let b = slow.recognize_all(&zigzag).unwrap();
    assert_eq!(a[0].name, b[0].name);
    assert!((a[0].score - b[0].score).abs() < 1e-9);
}
