// Host-side tests for the scene update rules.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod palette {
    include!("../src/palette.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod state {
    include!("../src/state.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::Scene;
use state::InteractionState;

const DT: f32 = 1.0 / 60.0;

fn desktop_scene() -> Scene {
    let mut rng = StdRng::seed_from_u64(42);
    Scene::new(1920.0, 1080.0, &mut rng)
}

#[test]
fn particle_count_follows_the_breakpoint() {
    assert_eq!(Scene::particle_count_for_width(500.0), 300);
    assert_eq!(Scene::particle_count_for_width(767.0), 300);
    assert_eq!(Scene::particle_count_for_width(768.0), 800);
    assert_eq!(Scene::particle_count_for_width(1920.0), 800);
}

#[test]
fn new_scene_is_laid_out_within_bounds() {
    let scene = desktop_scene();
    assert_eq!(scene.shapes.len(), 5);
    for (shape, kind) in scene.shapes.iter().zip(geometry::SHAPE_KINDS) {
        assert_eq!(shape.kind, kind);
        assert!(shape.position.x.abs() <= 7.5);
        assert!(shape.position.y.abs() <= 7.5);
        assert!(shape.position.z.abs() <= 5.0);
        for angle in [shape.rotation.x, shape.rotation.y, shape.rotation.z] {
            assert!((0.0..std::f32::consts::PI).contains(&angle));
        }
    }
    assert_eq!(scene.particles.positions.len(), 800);
    assert_eq!(scene.particles.colors.len(), 800);
    for p in &scene.particles.positions {
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 10.0 && p.z.abs() <= 10.0);
    }
    for c in &scene.particles.colors {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn shapes_rotate_at_index_scaled_rates() {
    let mut scene = desktop_scene();
    let input = InteractionState::new(1920.0, 1080.0);
    let before: Vec<_> = scene.shapes.iter().map(|s| s.rotation).collect();
    scene.advance(DT, &input);
    for (index, shape) in scene.shapes.iter().enumerate() {
        let speed = (index + 1) as f32;
        let delta = shape.rotation - before[index];
        assert!((delta.x - 0.18 * speed * DT).abs() < 1e-5);
        assert!((delta.y - 0.30 * speed * DT).abs() < 1e-5);
        assert!((delta.z - 0.12 * speed * DT).abs() < 1e-5);
    }
}

#[test]
fn shape_depth_tracks_scroll() {
    let mut scene = desktop_scene();
    let mut input = InteractionState::new(1920.0, 1080.0);
    input.scroll_y = 600.0;
    scene.advance(DT, &input);
    for (index, shape) in scene.shapes.iter().enumerate() {
        let expected = 2.0 * (600.0 * 1.0e-3 + index as f32).sin();
        assert!((shape.position.z - expected).abs() < 1e-4);
    }
}

#[test]
fn shapes_bob_over_time() {
    let mut scene = desktop_scene();
    let input = InteractionState::new(1920.0, 1080.0);
    scene.advance(0.5, &input);
    scene.advance(0.5, &input);
    assert!(scene.shapes[0].bob.abs() > 1e-4);
}

#[test]
fn particle_cloud_responds_to_scroll() {
    let mut scene = desktop_scene();
    let mut input = InteractionState::new(1920.0, 1080.0);
    input.scroll_y = 1000.0;
    scene.advance(DT, &input);
    let p = &scene.particles;
    assert!((p.pitch() - 0.1).abs() < 1e-5);
    assert!((p.sink() + 2.0).abs() < 1e-5);
    // yaw combines the idle spin with the scroll-proportional term
    let expected_yaw = 0.03 * DT + 1000.0 * 3.0e-4;
    assert!((p.yaw() - expected_yaw).abs() < 1e-5);
}

#[test]
fn parallax_ignores_narrow_viewports() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut scene = Scene::new(600.0, 900.0, &mut rng);
    let mut input = InteractionState::new(600.0, 900.0);
    input.pointer.nx = 1.0;
    input.pointer.ny = 1.0;
    scene.advance(DT, &input);
    assert_eq!(scene.camera.eye.x, 0.0);
    assert_eq!(scene.camera.eye.y, 0.0);
}

#[test]
fn parallax_damps_toward_the_pointer() {
    let mut scene = desktop_scene();
    let mut input = InteractionState::new(1920.0, 1080.0);
    input.pointer.nx = 1.0;
    input.pointer.ny = 1.0;
    scene.advance(DT, &input);
    let alpha = 1.0 - (-DT * 3.0_f32).exp();
    assert!((scene.camera.eye.x - 0.05 * alpha).abs() < 1e-6);
    assert!((scene.camera.eye.y + 0.05 * alpha).abs() < 1e-6);
    // the eye approaches but never overshoots the parallax range
    for _ in 0..600 {
        scene.advance(DT, &input);
    }
    assert!(scene.camera.eye.x <= 0.05 + 1e-5);
    assert!(scene.camera.eye.x > 0.04);
}

#[test]
fn camera_matrices_are_finite_and_aspect_aware() {
    let mut scene = desktop_scene();
    let wide = scene.camera.projection_matrix();
    scene.set_viewport(800.0, 1200.0);
    let tall = scene.camera.projection_matrix();
    assert!(wide.to_cols_array().iter().all(|v| v.is_finite()));
    assert!(tall.to_cols_array().iter().all(|v| v.is_finite()));
    // horizontal focal term grows as the viewport narrows
    assert!(tall.col(0).x > wide.col(0).x);

    let view = scene.camera.view_matrix();
    assert!(view.to_cols_array().iter().all(|v| v.is_finite()));
}
