//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::physics::{Body, Shape, World};

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 24;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = center - half_extents;
    let max = center + half_extents;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Triangle fan around the center, as a plain triangle list
pub fn circle(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(CIRCLE_SEGMENTS * 3);
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radius;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p0.x, p0.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
    }
    vertices
}

/// Vertices for one body, in playfield coordinates
pub fn body_vertices(body: &Body) -> Vec<Vertex> {
    match body.shape {
        Shape::Circle { radius } => circle(body.pos, radius, body.fill),
        Shape::Rect { half_extents } => rect(body.pos, half_extents, body.fill).to_vec(),
    }
}

/// Vertices for every body in the world
pub fn world_vertices(world: &World) -> Vec<Vertex> {
    world.bodies().flat_map(body_vertices).collect()
}
