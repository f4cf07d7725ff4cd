// Host-side tests for the pure pointer functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn surface_uv_maps_corners_and_center() {
    let min = Vec2::new(10.0, 20.0);
    let size = Vec2::new(200.0, 100.0);

    assert_eq!(surface_uv(min, min, size), Some(Vec2::ZERO));
    assert_eq!(surface_uv(min + size, min, size), Some(Vec2::ONE));
    assert_eq!(
        surface_uv(min + size * 0.5, min, size),
        Some(Vec2::new(0.5, 0.5))
    );
}

#[test]
fn surface_uv_clamps_outside_the_surface() {
    let min = Vec2::ZERO;
    let size = Vec2::new(100.0, 100.0);

    let above_left = surface_uv(Vec2::new(-50.0, -50.0), min, size).unwrap();
    assert_eq!(above_left, Vec2::ZERO);

    let below_right = surface_uv(Vec2::new(300.0, 150.0), min, size).unwrap();
    assert_eq!(below_right, Vec2::ONE);
}

#[test]
fn surface_uv_refuses_zero_sized_surfaces() {
    // A container that has not been laid out yet must not divide by zero;
    // the caller keeps the previous pointer value instead.
    assert_eq!(
        surface_uv(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::new(0.0, 100.0)),
        None
    );
    assert_eq!(
        surface_uv(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::new(100.0, 0.0)),
        None
    );
}

#[test]
fn element_frac_is_unclamped() {
    let min = Vec2::new(0.0, 0.0);
    let size = Vec2::new(100.0, 50.0);
    let frac = element_frac(Vec2::new(25.0, 25.0), min, size).unwrap();
    assert_eq!(frac, Vec2::new(0.25, 0.5));

    // Just past the edge is legal; tilt math subtracts 0.5 and caps
    // visually through the small max angle.
    let outside = element_frac(Vec2::new(110.0, 25.0), min, size).unwrap();
    assert!(outside.x > 1.0);
}

#[test]
fn center_delta_is_signed() {
    let min = Vec2::new(100.0, 100.0);
    let size = Vec2::new(40.0, 20.0);
    // center is (120, 110)
    assert_eq!(center_delta(Vec2::new(120.0, 110.0), min, size), Vec2::ZERO);
    assert_eq!(
        center_delta(Vec2::new(130.0, 105.0), min, size),
        Vec2::new(10.0, -5.0)
    );
}

#[test]
fn default_mouse_state_parks_offscreen_with_centered_uv() {
    let state = MouseState::default();
    assert!(state.page.x < 0.0 && state.page.y < 0.0);
    assert_eq!(state.surface_uv, Vec2::new(0.5, 0.5));
}
