// Host-side tests for uniform packing, the palette clock and view math.

use fractal_core::{default_center, surface_to_world, FrameUniforms, PaletteClock, Viewport};
use glam::DVec2;

#[test]
fn uniform_block_has_no_padding() {
    // 3 vec2 + 8 scalars, all 4 bytes wide
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 56);
    assert_eq!(std::mem::align_of::<FrameUniforms>(), 4);
}

#[test]
fn viewport_never_collapses() {
    let v = Viewport::new(0.0, -5.0);
    assert_eq!(v.width, 1.0);
    assert_eq!(v.height, 1.0);
    assert_eq!(Viewport::new(640.0, 480.0).min_side(), 480.0);
}

#[test]
fn clock_advances_with_speed_over_spacing() {
    let mut c = PaletteClock::default();
    c.advance(0.0, true, 1.0, 2.0, 0.5);
    c.advance(500.0, true, 1.0, 2.0, 0.5);
    assert!((c.frame_index(100) - 2.0).abs() < 1e-9);
}

#[test]
fn clock_runs_backwards_and_wraps() {
    let mut c = PaletteClock::default();
    c.advance(0.0, true, -1.0, 1.0, 1.0);
    c.advance(1000.0, true, -1.0, 1.0, 1.0);
    assert!((c.frame_index(12) - 11.0).abs() < 1e-9);
    assert_eq!(c.frame_index(0), 0.0);
}

#[test]
fn clock_ignores_stale_timestamps_and_pauses() {
    let mut c = PaletteClock::default();
    c.advance(1000.0, true, 1.0, 1.0, 1.0);
    c.advance(500.0, true, 1.0, 1.0, 1.0);
    assert_eq!(c.frame_index(12), 0.0);
    c.advance(2000.0, false, 1.0, 1.0, 1.0);
    assert_eq!(c.frame_index(12), 0.0);
    c.advance(3000.0, true, 1.0, 1.0, 1.0);
    assert!((c.frame_index(12) - 1.0).abs() < 1e-9);
    c.reset();
    assert_eq!(c.frame_index(12), 0.0);
}

#[test]
fn surface_mapping_is_aspect_aware() {
    let wide = Viewport::new(400.0, 200.0);
    let centre = DVec2::new(-0.5, 0.25);
    // the middle of the surface is the current centre
    assert_eq!(surface_to_world(200.0, 100.0, wide, centre, 1.0), centre);
    // right edge of a 2:1 surface is two half-spans away
    let p = surface_to_world(400.0, 100.0, wide, DVec2::ZERO, 1.0);
    assert!((p.x - 2.0).abs() < 1e-12 && p.y.abs() < 1e-12);
    // top edge is +1 / zoom
    let p = surface_to_world(200.0, 0.0, wide, DVec2::ZERO, 4.0);
    assert!((p.y - 0.25).abs() < 1e-12);
}

#[test]
fn default_centre_depends_on_exponent() {
    assert_eq!(default_center(2), DVec2::new(-0.2, 0.0));
    assert_eq!(default_center(3), DVec2::ZERO);
}
