use super::*;

fn counter(from: f64, to: f64) -> CountUp {
    CountUp {
        from,
        to,
        ..CountUp::default()
    }
}

#[test]
fn value_holds_during_delay_and_settles_at_end() {
    let c = CountUp {
        delay: 0.5,
        ..counter(0.0, 500.0)
    };
    assert_eq!(c.value_at(0.0), 0.0);
    assert_eq!(c.value_at(0.5), 0.0);
    assert_eq!(c.value_at(2.5), 500.0);
    assert_eq!(c.value_at(10.0), 500.0);

    let mid = c.value_at(1.5);
    assert!(mid > 250.0 && mid < 500.0, "ease-out front-loads: {mid}");
}

#[test]
fn down_direction_swaps_endpoints() {
    let c = CountUp {
        direction: CountDirection::Down,
        ..counter(10.0, 100.0)
    };
    assert_eq!(c.value_at(0.0), 100.0);
    assert_eq!(c.value_at(c.total_secs()), 10.0);
}

#[test]
fn zero_duration_jumps_to_end() {
    let c = CountUp {
        duration: 0.0,
        ..counter(0.0, 42.0)
    };
    assert_eq!(c.value_at(0.0), 0.0);
    assert_eq!(c.value_at(0.01), 42.0);
}

#[test]
fn format_uses_max_decimals_of_bounds() {
    let c = counter(0.0, 98.5);
    assert_eq!(c.format(12.345), "12.3");
    assert_eq!(c.format(98.5), "98.5");

    let c = counter(0.0, 120.0);
    assert_eq!(c.format(64.6), "65");
}

#[test]
fn format_rounds_ties_away_from_zero() {
    let c = CountUp::to(10.0);
    assert_eq!(c.format(2.5), "3");
    assert_eq!(c.format(0.5), "1");
    assert_eq!(c.format(0.49), "0");
    assert_eq!(c.format(9.5), "10");
    assert_eq!(c.format(-2.5), "-3");

    let c = counter(0.0, 1.25);
    assert_eq!(c.format(0.125), "0.13");
    assert_eq!(c.format(1.005), "1.01");
    assert_eq!(c.format(0.995), "1.00");
    assert_eq!(c.format(0.0), "0.00");
}

#[test]
fn rounding_carries_into_groups() {
    let c = CountUp {
        separator: ",".to_string(),
        ..CountUp::to(1_000_000.0)
    };
    assert_eq!(c.format(999_999.5), "1,000,000");
    assert_eq!(c.format(999.5), "1,000");
}

#[test]
fn format_groups_only_with_separator() {
    let c = counter(0.0, 1_250_000.0);
    assert_eq!(c.format(1_250_000.0), "1250000");

    let c = CountUp {
        separator: ",".to_string(),
        ..counter(0.0, 1_250_000.0)
    };
    assert_eq!(c.format(1_250_000.0), "1,250,000");
    assert_eq!(c.format(999.0), "999");
    assert_eq!(c.format(1000.0), "1,000");

    let c = CountUp {
        separator: " ".to_string(),
        ..counter(-0.5, 12_345.5)
    };
    assert_eq!(c.format(-12_345.5), "-12 345.5");
}

#[test]
fn validate_rejects_negative_timing() {
    let c = CountUp {
        delay: -1.0,
        ..counter(0.0, 1.0)
    };
    assert!(c.validate().is_err());
    let c = CountUp {
        duration: f64::NAN,
        ..counter(0.0, 1.0)
    };
    assert!(CountUpRun::new(c).is_err());
}

#[test]
fn run_emits_start_and_complete_once() {
    let mut run = CountUpRun::new(CountUp {
        delay: 0.25,
        duration: 1.0,
        ..counter(0.0, 10.0)
    })
    .unwrap();

    assert!(run.advance(0.1).is_empty());
    assert_eq!(run.text(), "0");
    assert_eq!(run.advance(0.2), vec![CountUpEvent::Started]);
    assert!(run.advance(0.5).is_empty());
    assert_eq!(run.advance(1.0), vec![CountUpEvent::Completed]);
    assert!(run.is_complete());
    assert_eq!(run.text(), "10");
    assert!(run.advance(1.0).is_empty());
}

#[test]
fn run_can_start_and_complete_in_one_step() {
    let mut run = CountUpRun::new(counter(0.0, 3.0)).unwrap();
    assert_eq!(
        run.advance(5.0),
        vec![CountUpEvent::Started, CountUpEvent::Completed]
    );
    assert_eq!(run.value(), 3.0);
}

#[test]
fn deserializes_with_defaults() {
    let c: CountUp = serde_json::from_str(r#"{"to": 250, "direction": "down"}"#).unwrap();
    assert_eq!(c.to, 250.0);
    assert_eq!(c.direction, CountDirection::Down);
    assert_eq!(c.duration, 2.0);
    assert_eq!(c.ease, Ease::OutCubic);
}

#[test]
fn deserializes_markup_ease_names() {
    let c: CountUp = serde_json::from_str(r#"{"to": 98, "ease": "power1.inOut"}"#).unwrap();
    assert_eq!(c.ease, Ease::InOutQuad);

    let err = serde_json::from_str::<CountUp>(r#"{"to": 98, "ease": "OutCubic"}"#);
    assert!(err.is_err());
}
