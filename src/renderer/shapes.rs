//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Mesh;
use crate::sim::Rect;

/// Generate two triangles covering a rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Mesh {
    let [tl, tr, br, bl] = rect.corners();
    let mut mesh = Mesh::new();
    mesh.push_triangle(tl, tr, br, color);
    mesh.push_triangle(tl, br, bl, color);
    mesh
}

/// Generate a filled circle as a fan of `segments` triangles
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut mesh = Mesh::new();
    mesh.vertices.reserve((segments * 3) as usize);

    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * TAU;
        center + Vec2::from_angle(theta) * radius
    };

    for i in 0..segments {
        // Triangle from center to edge
        mesh.push_triangle(center, point(i), point(i + 1), color);
    }

    mesh
}
