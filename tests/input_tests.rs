// Host-side tests for pure input functions.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_at_viewport_center_is_origin() {
    let (nx, ny) = normalized_pointer(960.0, 540.0, 1920.0, 1080.0);
    assert!(nx.abs() < 1e-6);
    assert!(ny.abs() < 1e-6);
}

#[test]
fn pointer_at_viewport_corners_is_unit() {
    assert_eq!(normalized_pointer(0.0, 0.0, 1920.0, 1080.0), (-1.0, -1.0));
    assert_eq!(normalized_pointer(1920.0, 1080.0, 1920.0, 1080.0), (1.0, 1.0));
}

#[test]
fn progress_percent_guards_zero_range() {
    assert_eq!(progress_percent(100.0, 0.0), 0.0);
    assert_eq!(progress_percent(100.0, -1.0), 0.0);
}

#[test]
fn progress_percent_tracks_scroll() {
    assert!((progress_percent(250.0, 1000.0) - 25.0).abs() < 1e-4);
    assert_eq!(progress_percent(2000.0, 1000.0), 100.0);
}

#[test]
fn tilt_at_card_center_is_level() {
    let (rx, ry) = tilt_angles(100.0, 50.0, 200.0, 100.0, 10.0);
    assert_eq!((rx, ry), (0.0, 0.0));
}

#[test]
fn tilt_at_card_corner_is_maximal() {
    // top-left corner of a 200x100 card with the certificate divisor
    let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0, 10.0);
    assert_eq!((rx, ry), (-5.0, 10.0));
    // bottom-right corner mirrors it
    let (rx, ry) = tilt_angles(200.0, 100.0, 200.0, 100.0, 10.0);
    assert_eq!((rx, ry), (5.0, -10.0));
}

#[test]
fn contact_divisor_softens_the_tilt() {
    let (cert_rx, _) = tilt_angles(0.0, 0.0, 300.0, 300.0, 10.0);
    let (contact_rx, _) = tilt_angles(0.0, 0.0, 300.0, 300.0, 15.0);
    assert!(contact_rx.abs() < cert_rx.abs());
}

#[test]
fn tilt_transform_substitutes_numbers() {
    let transform = tilt_transform(-5.0, 10.0);
    assert_eq!(
        transform,
        "translateY(-10px) rotateX(-5.00deg) rotateY(10.00deg)"
    );
    // no leftover template braces
    assert!(!transform.contains('{'));
    assert!(!transform.contains('}'));
}

#[test]
fn tilt_reset_recenters_the_card() {
    assert_eq!(TILT_RESET, "translateY(0) rotateX(0) rotateY(0)");
}

#[test]
fn glow_values_are_css_lengths() {
    assert_eq!(glow_offset_px(42.4), "42px");
    assert_eq!(GLOW_CENTER, "50%");
}

#[test]
fn active_section_picks_last_reached() {
    let tops = [0.0, 600.0, 1200.0];
    assert_eq!(active_section(&tops, 0.0, 100.0), Some(0));
    assert_eq!(active_section(&tops, 499.0, 100.0), Some(0));
    assert_eq!(active_section(&tops, 500.0, 100.0), Some(1));
    assert_eq!(active_section(&tops, 1100.0, 100.0), Some(2));
    assert_eq!(active_section(&tops, 5000.0, 100.0), Some(2));
}

#[test]
fn active_section_none_before_first() {
    assert_eq!(active_section(&[500.0], 0.0, 100.0), None);
    assert_eq!(active_section(&[], 1000.0, 100.0), None);
}
