// Host-side tests for the view-state store and its URL fragment codec.

use fractal_core::constants::*;
use fractal_core::{Field, FractalKind, Patch, Smoothing, StateError, Value, ViewState};
use std::collections::HashSet;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn fresh() -> (ViewState, Smoothing) {
    let state = ViewState::new();
    let smoothing = Smoothing::new(&state);
    (state, smoothing)
}

#[test]
fn defaults_match_the_field_table() {
    let s = ViewState::new();
    assert_eq!(s.fractal(), FractalKind::Mandelbrot);
    assert_eq!(s.exponent(), 2);
    assert_eq!(s.palette_id(), "266");
    assert!(approx(s.center().x, -0.2));
    assert!(approx(s.center().y, 0.0));
    assert_eq!(s.zoom_exponent(), 0.0);
    assert!(s.playing());
    assert_eq!(s.direction(), 1.0);
    assert_eq!(s.escape_radius(), 2.0);
    assert!(s.smoothing());
    assert!(!s.force_help());
}

#[test]
fn short_keys_are_unique_uppercase_ascii() {
    let keys: HashSet<char> = Field::ALL.iter().map(|f| f.short_key()).collect();
    assert_eq!(keys.len(), Field::COUNT);
    assert!(keys.iter().all(|c| c.is_ascii_uppercase()));

    let s = ViewState::new();
    for f in Field::ALL {
        let key = f.short_key().to_string();
        assert_eq!(s.field_for_short_key(&key), Some(f));
        assert_eq!(Field::from_name(f.name()), Some(f));
    }
    assert_eq!(s.field_for_short_key("ZZ"), None);
    assert_eq!(s.field_for_short_key(""), None);
}

#[test]
fn default_fragment_layout() {
    let s = ViewState::new();
    assert_eq!(
        s.encode_fragment(),
        "R=0_I=0_F=0_E=2_P=266_X=-0.2_Y=0_Z=0_A=1_D=1_B=2_S=1_K=1_M=1"
    );
}

#[test]
fn persist_then_restore_round_trips() {
    let (mut s, _) = fresh();
    let report = s.update(
        Patch::new()
            .set(Field::CReal, -0.7453)
            .set(Field::CImaginary, 0.1127)
            .set(Field::Fractal, 1)
            .set(Field::Exponent, 5)
            .set(Field::Palette, "wpt")
            .set(Field::X, 1.0 / 3.0)
            .set(Field::Y, -0.000_123)
            .set(Field::Zoom, 7.25)
            .set(Field::Playing, false)
            .set(Field::Direction, -1.0)
            .set(Field::EscapeRadius, 0.5)
            .set(Field::Speed, 4.0)
            .set(Field::Spacing, 0.25)
            .set(Field::Smoothing, false),
    );
    assert!(report.errors.is_empty());
    let fragment = s.encode_fragment();
    assert!(!fragment.starts_with('#'));

    let (mut restored, mut smoothing) = fresh();
    let r = restored.restore(&format!("#{}", fragment), &mut smoothing);
    assert!(r.errors.is_empty());
    assert_eq!(r.applied, Field::COUNT - 1);
    for f in Field::ALL {
        if f.spec().persist {
            assert_eq!(restored.get(f), s.get(f), "{:?}", f);
        }
    }
}

#[test]
fn force_help_is_restored_but_never_persisted() {
    let (mut s, mut sm) = fresh();
    let r = s.restore("H=1", &mut sm);
    assert_eq!(r.applied, 1);
    assert!(s.force_help());
    assert!(!s.encode_fragment().contains("H="));
}

#[test]
fn unknown_field_names_surface_one_error_each() {
    let mut s = ViewState::new();
    let before: Vec<Value> = Field::ALL.iter().map(|f| s.get(*f).clone()).collect();
    for name in ["bogus", "zoomLevel", "", "X"] {
        let r = s.update(Patch::new().set_named(name, 1.0));
        assert_eq!(r.errors.len(), 1, "{}", name);
        assert!(matches!(r.errors[0], StateError::UnknownField(_)));
        assert!(r.applied.is_empty());
    }
    let after: Vec<Value> = Field::ALL.iter().map(|f| s.get(*f).clone()).collect();
    assert_eq!(before, after);
    assert!(!s.take_dirty());
}

#[test]
fn mixed_patch_applies_valid_entries() {
    let mut s = ViewState::new();
    let r = s.update(
        Patch::new()
            .set_named("nope", 3.0)
            .set(Field::Exponent, 3),
    );
    assert_eq!(r.applied, vec![Field::Exponent]);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(s.exponent(), 3);
    assert!(s.take_dirty());
    assert!(!s.take_dirty());
}

#[test]
fn numeric_fields_are_clamped() {
    let mut s = ViewState::new();
    s.update(Patch::new().set(Field::Zoom, 100.0));
    assert_eq!(s.zoom_exponent(), MAX_ZOOM_EXPONENT);
    s.update(Patch::new().set(Field::Zoom, -100.0));
    assert_eq!(s.zoom_exponent(), MIN_ZOOM_EXPONENT);

    s.update(Patch::new().set(Field::Exponent, 40));
    assert_eq!(s.exponent(), MAX_EXPONENT);
    s.update(Patch::new().set(Field::Exponent, 3.4));
    assert_eq!(s.exponent(), 3);

    s.update(Patch::new().set(Field::CReal, 9.0).set(Field::CImaginary, -9.0));
    assert_eq!(s.c().x, C_BOUND);
    assert_eq!(s.c().y, -C_BOUND);

    s.update(Patch::new().set(Field::Fractal, 12));
    assert_eq!(s.fractal(), FractalKind::Mandala);

    s.update(Patch::new().set(Field::Speed, 1000.0).set(Field::Spacing, 0.0));
    assert_eq!(s.speed(), MAX_SPEED);
    assert_eq!(s.spacing(), MIN_SPACING);

    s.update(Patch::new().set(Field::Direction, -0.3));
    assert_eq!(s.direction(), -1.0);
}

#[test]
fn escape_radius_is_never_exactly_one() {
    let mut s = ViewState::new();
    s.update(Patch::new().set(Field::EscapeRadius, 1.0));
    assert!(approx(s.escape_radius(), 1.0 + ESCAPE_RADIUS_NUDGE));
    s.update(Patch::new().set(Field::EscapeRadius, 0.995));
    assert!(approx(s.escape_radius(), 1.0 - ESCAPE_RADIUS_NUDGE));
    s.update(Patch::new().set(Field::EscapeRadius, 5.0));
    assert_eq!(s.escape_radius(), MAX_ESCAPE_RADIUS);
    s.update(Patch::new().set(Field::EscapeRadius, -1.0));
    assert_eq!(s.escape_radius(), MIN_ESCAPE_RADIUS);

    let (mut r, mut sm) = fresh();
    r.restore("B=1", &mut sm);
    assert_ne!(r.escape_radius(), 1.0);
}

#[test]
fn wrong_types_and_non_finite_values_are_rejected() {
    let mut s = ViewState::new();
    let r = s.update(Patch::new().set(Field::Zoom, "deep"));
    assert!(matches!(r.errors[0], StateError::WrongType { field: "zoom", .. }));

    let r = s.update(Patch::new().set(Field::X, f64::NAN));
    assert_eq!(r.errors.len(), 1);
    assert!(approx(s.center().x, -0.2));

    let r = s.update(Patch::new().set(Field::Palette, 3.0));
    assert!(matches!(r.errors[0], StateError::WrongType { field: "palette", .. }));

    let r = s.update(Patch::new().set(Field::Palette, "zzz"));
    assert_eq!(r.errors[0], StateError::UnknownPalette("zzz".to_string()));
    assert_eq!(s.palette_id(), "266");
}

#[test]
fn restore_scenario_keeps_other_defaults() {
    let (mut s, mut sm) = fresh();
    let r = s.restore("#R=-0.8_I=0.2_E=3", &mut sm);
    assert_eq!(r.applied, 3);
    assert!(r.errors.is_empty());
    assert!(approx(s.c().x, -0.8));
    assert!(approx(s.c().y, 0.2));
    assert_eq!(s.exponent(), 3);

    let defaults = ViewState::new();
    for f in Field::ALL {
        if !matches!(f, Field::CReal | Field::CImaginary | Field::Exponent) {
            assert_eq!(s.get(f), defaults.get(f), "{:?}", f);
        }
    }
}

#[test]
fn restore_reports_unknown_keys_and_drops_bad_values() {
    let (mut s, mut sm) = fresh();
    let r = s.restore("Q=1_E=4", &mut sm);
    assert_eq!(r.applied, 1);
    assert_eq!(r.errors, vec![StateError::UnknownShortKey("Q".to_string())]);

    // Bad value for a known key is dropped silently
    let r = s.restore("Z=abc_E=5_P=nope", &mut sm);
    assert_eq!(r.applied, 1);
    assert!(r.errors.is_empty());
    assert_eq!(s.exponent(), 5);
    assert_eq!(s.zoom_exponent(), 0.0);
    assert_eq!(s.palette_id(), "266");

    let r = s.restore("E3_X=1", &mut sm);
    assert_eq!(r.applied, 1);
    assert_eq!(r.errors, vec![StateError::MalformedEntry("E3".to_string())]);
}

#[test]
fn restore_of_empty_or_garbage_fragment_applies_nothing() {
    let (mut s, mut sm) = fresh();
    assert_eq!(s.restore("", &mut sm).applied, 0);
    assert_eq!(s.restore("#", &mut sm).applied, 0);
    assert_eq!(s.restore("___", &mut sm).applied, 0);
    assert_eq!(s.encode_fragment(), ViewState::new().encode_fragment());
}

#[test]
fn restore_percent_decodes_values() {
    let (mut s, mut sm) = fresh();
    let r = s.restore("X=%2D0.5_P=w%70t", &mut sm);
    assert_eq!(r.applied, 2);
    assert!(approx(s.center().x, -0.5));
    assert_eq!(s.palette_id(), "wpt");
}

#[test]
fn restore_snaps_position_and_zoom_channels() {
    let (mut s, mut sm) = fresh();
    s.restore("X=1.5_Y=-0.25_Z=3", &mut sm);
    assert!(approx(sm.center().x, 1.5));
    assert!(approx(sm.center().y, -0.25));
    assert!(approx(sm.zoom_exponent(), 3.0));
    assert!(!sm.center.is_active());
    assert!(!sm.zoom.is_active());
}

#[test]
fn reset_restores_defaults_and_marks_dirty() {
    let mut s = ViewState::new();
    s.update(Patch::new().set(Field::Exponent, 9).set(Field::Zoom, 4.0));
    s.take_dirty();
    s.reset();
    assert!(s.take_dirty());
    assert_eq!(s.encode_fragment(), ViewState::new().encode_fragment());
}
