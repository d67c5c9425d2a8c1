// Host-side tests for the shared state types and the render-loop machine.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod state {
    include!("../src/state.rs");
}

use state::*;

#[test]
fn loop_start_schedules_exactly_once() {
    let mut s = RenderLoopState::new();
    assert!(s.start(), "first start must schedule a chain");
    assert!(!s.start(), "second start must reuse the live chain");
    assert!(s.is_running());
}

#[test]
fn hidden_then_visible_keeps_a_single_chain() {
    let mut s = RenderLoopState::new();
    assert!(s.start());
    s.pause(); // tab hidden
    // tab visible again before the chain had a chance to tick: the live
    // chain resumes and no second chain may be scheduled
    assert!(!s.start());
    assert!(s.tick(), "the surviving chain keeps running");
}

#[test]
fn paused_chain_unwinds_and_a_new_one_starts() {
    let mut s = RenderLoopState::new();
    assert!(s.start());
    s.pause();
    assert!(!s.tick(), "the chain notices the pause and ends");
    assert!(s.start(), "after the chain died a fresh one is scheduled");
    assert!(s.tick());
}

#[test]
fn pause_is_idempotent() {
    let mut s = RenderLoopState::new();
    assert!(s.start());
    s.pause();
    s.pause();
    assert!(!s.tick());
    assert!(!s.tick());
    assert!(!s.is_running());
}

#[test]
fn interaction_state_defaults() {
    let s = InteractionState::new(1024.0, 768.0);
    assert_eq!(s.scroll_y, 0.0);
    assert_eq!(s.pointer.nx, 0.0);
    assert_eq!(s.pointer.ny, 0.0);
    assert_eq!(s.viewport.width, 1024.0);
    assert_eq!(s.viewport.height, 768.0);
}
