// Host-side tests for direction-locked gesture recognition.

use fractal_core::{Axis, Flow, GestureEvent, GestureRecognizer, TouchPoint};

fn p(id: i32, x: f64, y: f64) -> TouchPoint {
    TouchPoint::new(id, x, y)
}

fn consume(_: GestureEvent) -> Flow {
    Flow::Consume
}

#[test]
fn moves_below_threshold_emit_nothing() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 100.0, 100.0)]);
    let mut calls = 0;
    for (x, y) in [(105.0, 95.0), (110.0, 110.0), (112.0, 88.0)] {
        let ev = g.touch_move(&[p(1, x, y)], |_| {
            calls += 1;
            Flow::Consume
        });
        assert!(ev.is_none());
    }
    assert_eq!(calls, 0);
    assert_eq!(g.axis_of(1), None);
}

#[test]
fn axis_locks_to_larger_delta_permanently() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(7, 0.0, 0.0)]);

    let ev = g.touch_move(&[p(7, 20.0, 5.0)], consume).unwrap();
    assert_eq!(ev.axis, Axis::X);
    assert_eq!(ev.delta, 20.0);
    assert_eq!(ev.additional_fingers, 0);
    assert_eq!(g.axis_of(7), Some(Axis::X));

    // A large vertical move afterwards still reports on X
    let ev = g.touch_move(&[p(7, 25.0, 200.0)], consume).unwrap();
    assert_eq!(ev.axis, Axis::X);
    assert_eq!(ev.delta, 5.0);
    assert_eq!(g.axis_of(7), Some(Axis::X));
}

#[test]
fn vertical_lock_reports_signed_y_delta() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 50.0, 50.0)]);
    let ev = g.touch_move(&[p(1, 52.0, 20.0)], consume).unwrap();
    assert_eq!(ev.axis, Axis::Y);
    assert_eq!(ev.delta, -30.0);
}

#[test]
fn skip_keeps_reference_point() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 0.0, 0.0)]);

    let ev = g.touch_move(&[p(1, 20.0, 0.0)], |_| Flow::Skip).unwrap();
    assert_eq!(ev.delta, 20.0);
    let ev = g.touch_move(&[p(1, 30.0, 0.0)], |_| Flow::Skip).unwrap();
    assert_eq!(ev.delta, 30.0);
    let ev = g.touch_move(&[p(1, 40.0, 0.0)], consume).unwrap();
    assert_eq!(ev.delta, 40.0);
    let ev = g.touch_move(&[p(1, 45.0, 0.0)], consume).unwrap();
    assert_eq!(ev.delta, 5.0);
}

#[test]
fn latest_touch_is_tracked_and_others_counted() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 0.0, 0.0), p(2, 10.0, 0.0)]);
    g.touch_start(&[p(3, 20.0, 0.0)]);
    assert_eq!(g.tracked_id(), Some(3));
    assert_eq!(g.active_touches(), 3);

    // Older touches do not drive events
    assert!(g.touch_move(&[p(1, 0.0, 50.0)], consume).is_none());

    let ev = g.touch_move(&[p(3, 20.0, 40.0)], consume).unwrap();
    assert_eq!(ev.axis, Axis::Y);
    assert_eq!(ev.additional_fingers, 2);
}

#[test]
fn ending_latest_touch_stops_tracking() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 0.0, 0.0), p(2, 0.0, 0.0)]);
    g.touch_end(&[2]);
    assert_eq!(g.tracked_id(), None);
    assert_eq!(g.active_touches(), 1);
    assert!(g.touch_move(&[p(1, 100.0, 0.0)], consume).is_none());

    // A new touch becomes tracked again
    g.touch_start(&[p(4, 0.0, 0.0)]);
    let ev = g.touch_move(&[p(4, 0.0, 30.0)], consume).unwrap();
    assert_eq!(ev.additional_fingers, 1);
}

#[test]
fn ending_other_touch_keeps_tracking() {
    let mut g = GestureRecognizer::default();
    g.touch_start(&[p(1, 0.0, 0.0), p(2, 0.0, 0.0)]);
    g.touch_end(&[1]);
    assert_eq!(g.tracked_id(), Some(2));
    let ev = g.touch_move(&[p(2, 0.0, 30.0)], consume).unwrap();
    assert_eq!(ev.additional_fingers, 0);
}

#[test]
fn custom_threshold_is_respected() {
    let mut g = GestureRecognizer::new(40.0);
    g.touch_start(&[p(1, 0.0, 0.0)]);
    assert!(g.touch_move(&[p(1, 30.0, 0.0)], consume).is_none());
    assert!(g.touch_move(&[p(1, 41.0, 0.0)], consume).is_some());

    g.clear();
    assert_eq!(g.active_touches(), 0);
    assert_eq!(g.tracked_id(), None);
}
