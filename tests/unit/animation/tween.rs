use super::*;

#[test]
fn zero_duration_is_rejected() {
    let err = Tween::new(0.0, 1.0, Duration::ZERO, Ease::Linear).unwrap_err();
    assert!(err.to_string().contains("animation error:"));
}

#[test]
fn linear_tween_samples_proportionally() {
    let t = Tween::new(0.0, 10.0, Duration::from_secs(2), Ease::Linear).unwrap();
    assert_eq!(t.sample(Duration::ZERO), 0.0);
    assert_eq!(t.sample(Duration::from_millis(500)), 2.5);
    assert_eq!(t.sample(Duration::from_secs(1)), 5.0);
    assert_eq!(t.sample(Duration::from_secs(2)), 10.0);
}

#[test]
fn overshooting_elapsed_holds_the_end_value() {
    let t = Tween::new(1.0, 3.0, Duration::from_secs(1), Ease::InOutCubic).unwrap();
    assert!(t.is_finished(Duration::from_secs(5)));
    assert_eq!(t.sample(Duration::from_secs(5)), 3.0);
    assert_eq!(t.progress(Duration::from_secs(5)), 1.0);
}

#[test]
fn eased_tween_lags_linear_early_on() {
    let t = Tween::new(0.0, 1.0, Duration::from_secs(1), Ease::InOutCubic).unwrap();
    let v = t.sample(Duration::from_millis(250));
    assert!(v > 0.0 && v < 0.25);
}
