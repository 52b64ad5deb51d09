// Host-side tests for the interpolator.

use fractal_core::{Easing, Tween};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn easing_curves_hit_endpoints() {
    for e in [
        Easing::Linear,
        Easing::QuadraticInOut,
        Easing::QuadraticOut,
        Easing::CubicInOut,
    ] {
        assert!(approx(e.apply(0.0), 0.0), "{:?}", e);
        assert!(approx(e.apply(1.0), 1.0), "{:?}", e);
        // out-of-range progress is clamped
        assert!(approx(e.apply(2.0), 1.0), "{:?}", e);
    }
    assert!(approx(Easing::QuadraticInOut.apply(0.5), 0.5));
    assert!(approx(Easing::CubicInOut.apply(0.5), 0.5));
    assert!(approx(Easing::QuadraticOut.apply(0.5), 0.75));
}

#[test]
fn linear_tween_progresses_and_settles() {
    let mut t = Tween::new(&[0.0]);
    t.set_target(&[10.0], 100.0, Easing::Linear);
    assert!(t.is_active());

    // First advance stamps the start time
    assert!(t.advance(0.0));
    assert!(approx(t.channel()[0], 0.0));

    assert!(t.advance(50.0));
    assert!(approx(t.channel()[0], 5.0));

    assert!(!t.advance(100.0));
    assert_eq!(t.channel()[0], 10.0);
    assert!(!t.is_active());
}

#[test]
fn advance_with_same_timestamp_is_idempotent() {
    let mut t = Tween::new(&[0.0, 0.0]);
    t.set_target(&[4.0, -4.0], 200.0, Easing::QuadraticInOut);
    t.advance(10.0);
    t.advance(70.0);
    let first = t.channel().to_vec();
    t.advance(70.0);
    assert_eq!(t.channel().to_vec(), first);
    // earlier timestamps are ignored too
    t.advance(20.0);
    assert_eq!(t.channel().to_vec(), first);
}

#[test]
fn zero_duration_assigns_regardless_of_prior_state() {
    let mut t = Tween::new(&[1.0]);
    t.set_target(&[50.0], 1000.0, Easing::Linear);
    t.advance(0.0);
    t.advance(300.0);

    t.set_target(&[-3.0], 0.0, Easing::Linear);
    assert_eq!(t.channel()[0], -3.0);
    t.advance(400.0);
    assert_eq!(t.channel()[0], -3.0);
    assert!(!t.is_active());
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(&[0.0]);
    t.set_target(&[10.0], 100.0, Easing::Linear);
    t.advance(0.0);
    t.advance(50.0);
    assert!(approx(t.channel()[0], 5.0));

    // progress counts from the previous advance at 50
    t.set_target(&[0.0], 100.0, Easing::Linear);
    t.advance(60.0);
    assert!(approx(t.channel()[0], 4.5));
    t.advance(100.0);
    assert!(approx(t.channel()[0], 2.5));
    assert!(!t.advance(150.0));
    assert!(approx(t.channel()[0], 0.0));
}

#[test]
fn retarget_moves_on_the_next_frame() {
    let mut t = Tween::new(&[0.0]);
    t.advance(0.0);
    t.advance(16.0);
    t.set_target(&[100.0], 160.0, Easing::Linear);
    assert!(t.advance(32.0));
    assert!(approx(t.channel()[0], 10.0));
}

#[test]
fn stop_keeps_partial_value() {
    let mut t = Tween::new(&[0.0]);
    t.set_target(&[10.0], 100.0, Easing::Linear);
    t.advance(0.0);
    t.advance(50.0);
    t.stop();
    assert!(!t.is_active());
    t.advance(100.0);
    assert!(approx(t.channel()[0], 5.0));
    assert!(approx(t.target()[0], 5.0));
}

#[test]
fn snap_component_leaves_other_elements_animating() {
    let mut t = Tween::new(&[0.0, 0.0]);
    t.set_target(&[10.0, 10.0], 100.0, Easing::Linear);
    t.advance(0.0);
    t.snap_component(0, 3.0);
    assert_eq!(t.channel()[0], 3.0);
    t.advance(50.0);
    assert!(approx(t.channel()[0], 3.0));
    assert!(approx(t.channel()[1], 5.0));
}

#[test]
fn non_finite_targets_are_ignored() {
    let mut t = Tween::new(&[2.0]);
    t.set_target(&[f64::NAN], 100.0, Easing::Linear);
    assert!(!t.is_active());
    t.set_target(&[f64::INFINITY], 0.0, Easing::Linear);
    assert_eq!(t.channel()[0], 2.0);
}

#[test]
fn idle_advance_reports_inactive() {
    let mut t = Tween::new(&[1.0]);
    assert!(!t.advance(0.0));
    assert!(!t.advance(16.0));
    assert_eq!(t.channel()[0], 1.0);
}
