// Wireframe line-list geometry for the five decorative shapes.
//
// Each builder returns a flat list of line-segment endpoints (two vertices
// per segment) in the shape's local space, ready for a line-list vertex
// buffer. Everything is deterministic so the counts and radii are testable.

use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Torus,
    Octahedron,
    Tetrahedron,
    Icosahedron,
    TorusKnot,
}

/// Shape roster in scene order.
pub const SHAPE_KINDS: [ShapeKind; 5] = [
    ShapeKind::Torus,
    ShapeKind::Octahedron,
    ShapeKind::Tetrahedron,
    ShapeKind::Icosahedron,
    ShapeKind::TorusKnot,
];

const TORUS_RADIUS: f32 = 0.7;
const TORUS_TUBE: f32 = 0.3;
const TORUS_RADIAL_SEGMENTS: usize = 16;
const TORUS_TUBULAR_SEGMENTS: usize = 100;

const OCTAHEDRON_RADIUS: f32 = 0.6;
const TETRAHEDRON_RADIUS: f32 = 0.8;
const ICOSAHEDRON_RADIUS: f32 = 0.5;

const KNOT_RADIUS: f32 = 0.4;
const KNOT_TUBE: f32 = 0.15;
const KNOT_TUBULAR_SEGMENTS: usize = 100;
const KNOT_RADIAL_SEGMENTS: usize = 16;
const KNOT_P: f32 = 2.0;
const KNOT_Q: f32 = 3.0;

/// Line-segment endpoints for one shape.
pub fn line_vertices(kind: ShapeKind) -> Vec<Vec3> {
    match kind {
        ShapeKind::Torus => tube_grid_lines(&torus_rings()),
        ShapeKind::Octahedron => polyhedron_lines(&octahedron_vertices(OCTAHEDRON_RADIUS)),
        ShapeKind::Tetrahedron => polyhedron_lines(&tetrahedron_vertices(TETRAHEDRON_RADIUS)),
        ShapeKind::Icosahedron => polyhedron_lines(&icosahedron_vertices(ICOSAHEDRON_RADIUS)),
        ShapeKind::TorusKnot => tube_grid_lines(&knot_rings()),
    }
}

// ---------------- Polyhedra ----------------

fn tetrahedron_vertices(radius: f32) -> Vec<Vec3> {
    [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ]
    .iter()
    .map(|v| v.normalize() * radius)
    .collect()
}

fn octahedron_vertices(radius: f32) -> Vec<Vec3> {
    vec![
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(0.0, -radius, 0.0),
        Vec3::new(0.0, 0.0, radius),
        Vec3::new(0.0, 0.0, -radius),
    ]
}

fn icosahedron_vertices(radius: f32) -> Vec<Vec3> {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut verts = Vec::with_capacity(12);
    for &a in &[-1.0, 1.0] {
        for &b in &[-phi, phi] {
            verts.push(Vec3::new(0.0, a, b));
            verts.push(Vec3::new(a, b, 0.0));
            verts.push(Vec3::new(b, 0.0, a));
        }
    }
    verts.iter().map(|v| v.normalize() * radius).collect()
}

/// Connect every vertex pair at the minimal pairwise distance. For the
/// regular solids used here, those pairs are exactly the edges.
fn polyhedron_lines(vertices: &[Vec3]) -> Vec<Vec3> {
    let mut min_d2 = f32::MAX;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min_d2 = min_d2.min(vertices[i].distance_squared(vertices[j]));
        }
    }
    let tolerance = min_d2 * 1.01;

    let mut out = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if vertices[i].distance_squared(vertices[j]) <= tolerance {
                out.push(vertices[i]);
                out.push(vertices[j]);
            }
        }
    }
    out
}

// ---------------- Tubes ----------------

fn torus_rings() -> Vec<Vec<Vec3>> {
    (0..TORUS_TUBULAR_SEGMENTS)
        .map(|j| {
            let u = j as f32 / TORUS_TUBULAR_SEGMENTS as f32 * TAU;
            (0..TORUS_RADIAL_SEGMENTS)
                .map(|i| {
                    let v = i as f32 / TORUS_RADIAL_SEGMENTS as f32 * TAU;
                    Vec3::new(
                        (TORUS_RADIUS + TORUS_TUBE * v.cos()) * u.cos(),
                        (TORUS_RADIUS + TORUS_TUBE * v.cos()) * u.sin(),
                        TORUS_TUBE * v.sin(),
                    )
                })
                .collect()
        })
        .collect()
}

fn knot_curve_point(u: f32) -> Vec3 {
    let qu_over_p = KNOT_Q / KNOT_P * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.cos(),
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.sin(),
        KNOT_RADIUS * qu_over_p.sin() * 0.5,
    )
}

fn knot_rings() -> Vec<Vec<Vec3>> {
    let du = KNOT_P * TAU / KNOT_TUBULAR_SEGMENTS as f32;
    (0..KNOT_TUBULAR_SEGMENTS)
        .map(|j| {
            let u = j as f32 * du;
            let p1 = knot_curve_point(u);
            let p2 = knot_curve_point(u + du * 0.5);
            let tangent = (p2 - p1).normalize();
            // cheap frame: the curve never passes through the origin, so the
            // chord midpoint direction is a usable normal seed
            let binormal = tangent.cross(p2 + p1).normalize();
            let normal = binormal.cross(tangent);
            (0..KNOT_RADIAL_SEGMENTS)
                .map(|i| {
                    let v = i as f32 / KNOT_RADIAL_SEGMENTS as f32 * TAU;
                    p1 + KNOT_TUBE * (v.cos() * normal + v.sin() * binormal)
                })
                .collect()
        })
        .collect()
}

/// Ring segments around the tube plus longitudinal segments along it, with
/// both directions closed.
fn tube_grid_lines(rings: &[Vec<Vec3>]) -> Vec<Vec3> {
    let ring_count = rings.len();
    let mut out = Vec::with_capacity(ring_count * rings[0].len() * 4);
    for j in 0..ring_count {
        let ring = &rings[j];
        let next_ring = &rings[(j + 1) % ring_count];
        let side_count = ring.len();
        for i in 0..side_count {
            out.push(ring[i]);
            out.push(ring[(i + 1) % side_count]);
            out.push(ring[i]);
            out.push(next_ring[i]);
        }
    }
    out
}
