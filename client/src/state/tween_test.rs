use super::*;

#[test]
fn easing_endpoints() {
    assert!(ease_out_cubic(0.0).abs() < f64::EPSILON);
    assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn start_frame_shows_start_value() {
    let tween = Tween::new(0.0, 85.0, 1500.0, "%");
    assert_eq!(tween.sample(0.0), TweenFrame { text: "0%".into(), done: false });
}

#[test]
fn integer_target_floors_intermediate_values() {
    let tween = Tween::new(0.0, 100.0, 1000.0, "");
    // eased(0.5) = 0.875
    assert_eq!(tween.sample(500.0).text, "87");
}

#[test]
fn fractional_target_uses_one_decimal() {
    let tween = Tween::new(0.0, 4.5, 1000.0, "");
    // 4.5 * 0.875 = 3.9375
    assert_eq!(tween.sample(500.0).text, "3.9");
}

#[test]
fn completion_is_exact_end() {
    for (end, suffix, expected) in [(85.0, "%", "85%"), (4.5, "", "4.5"), (12.0, "+", "12+")] {
        let tween = Tween::new(0.0, end, 2000.0, suffix);
        for elapsed in [2000.0, 2000.1, 9999.0] {
            let frame = tween.sample(elapsed);
            assert!(frame.done);
            assert_eq!(frame.text, expected);
        }
    }
}

#[test]
fn zero_duration_completes_immediately() {
    let tween = Tween::new(0.0, 42.0, 0.0, "");
    assert_eq!(tween.sample(0.0), TweenFrame { text: "42".into(), done: true });
}

#[test]
fn negative_elapsed_clamps_to_start() {
    let tween = Tween::new(10.0, 20.0, 1000.0, "");
    assert_eq!(tween.sample(-50.0).text, "10");
}

#[test]
fn zero_target_stays_zero() {
    let tween = Tween::new(0.0, 0.0, 1500.0, "%");
    assert_eq!(tween.sample(700.0).text, "0%");
    assert_eq!(tween.sample(1500.0).text, "0%");
}
