// Decorative background scene: a particle cloud, five wireframe shapes and
// the parallax camera.
//
// All state and per-frame math live here, free of any web APIs, so the
// update rules are testable on the host. The renderer consumes the model
// matrices and camera this module produces.

use crate::constants::*;
use crate::geometry::{ShapeKind, SHAPE_KINDS};
use crate::palette;
use crate::state::InteractionState;
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

/// Right-handed perspective camera, fixed look-at toward the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// The particle cloud: static local positions, animated as one rigid body.
pub struct Particles {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    spin: f32,
    yaw: f32,
    pitch: f32,
    sink: f32,
}

impl Particles {
    fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let half = PARTICLE_SPREAD / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        let colors = (0..count)
            .map(|_| {
                let hue = PARTICLE_HUE_BASE + rng.gen::<f32>() * PARTICLE_HUE_SPAN;
                palette::hsl_to_rgb(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS)
            })
            .collect();
        Self {
            positions,
            colors,
            spin: 0.0,
            yaw: 0.0,
            pitch: 0.0,
            sink: 0.0,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.sink, 0.0))
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn sink(&self) -> f32 {
        self.sink
    }
}

/// One wireframe solid with its animation state.
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub bob: f32,
}

impl Shape {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position + Vec3::new(0.0, self.bob, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

pub struct Scene {
    pub particles: Particles,
    pub shapes: Vec<Shape>,
    pub camera: Camera,
    pub time: f32,
}

impl Scene {
    pub fn new(viewport_w: f32, viewport_h: f32, rng: &mut impl Rng) -> Self {
        let particles = Particles::generate(Self::particle_count_for_width(viewport_w), rng);
        let shapes = SHAPE_KINDS
            .iter()
            .map(|&kind| Shape {
                kind,
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[0],
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[1],
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD[2],
                ),
                rotation: Vec3::new(
                    rng.gen::<f32>() * std::f32::consts::PI,
                    rng.gen::<f32>() * std::f32::consts::PI,
                    rng.gen::<f32>() * std::f32::consts::PI,
                ),
                bob: 0.0,
            })
            .collect();
        Self {
            particles,
            shapes,
            camera: Camera::new(viewport_w / viewport_h.max(1.0)),
            time: 0.0,
        }
    }

    /// Fewer particles on narrow viewports.
    pub fn particle_count_for_width(viewport_w: f32) -> usize {
        if viewport_w < MOBILE_BREAKPOINT_PX {
            PARTICLE_COUNT_MOBILE
        } else {
            PARTICLE_COUNT_DESKTOP
        }
    }

    /// One frame of animation driven by the shared interaction state.
    pub fn advance(&mut self, dt_sec: f32, input: &InteractionState) {
        self.time += dt_sec;
        let scroll = input.scroll_y;

        let p = &mut self.particles;
        p.spin += PARTICLE_SPIN_PER_SEC * dt_sec;
        p.yaw = p.spin + scroll * PARTICLE_SCROLL_SPIN;
        p.pitch = scroll * PARTICLE_SCROLL_TILT;
        p.sink = -scroll * PARTICLE_SCROLL_SINK;

        for (index, shape) in self.shapes.iter_mut().enumerate() {
            let speed = (index + 1) as f32;
            shape.rotation.x += SHAPE_ROT_X_PER_SEC * speed * dt_sec;
            shape.rotation.y += SHAPE_ROT_Y_PER_SEC * speed * dt_sec;
            shape.rotation.z += SHAPE_ROT_Z_PER_SEC * speed * dt_sec;
            shape.bob += (self.time + index as f32).sin() * SHAPE_BOB_PER_SEC * dt_sec;
            shape.position.z =
                SHAPE_DEPTH_AMPLITUDE * (scroll * SHAPE_DEPTH_SCROLL_FREQ + index as f32).sin();
        }

        // Damped pointer parallax, desktop only.
        if input.viewport.width > MOBILE_BREAKPOINT_PX {
            let target_x = input.pointer.nx * PARALLAX_RANGE;
            let target_y = -input.pointer.ny * PARALLAX_RANGE;
            let alpha = 1.0 - (-dt_sec * PARALLAX_RESPONSE_PER_SEC).exp();
            self.camera.eye.x += (target_x - self.camera.eye.x) * alpha;
            self.camera.eye.y += (target_y - self.camera.eye.y) * alpha;
        }
    }

    /// Track a viewport change; the renderer resizes its surface separately.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.aspect = width / height.max(1.0);
    }
}
