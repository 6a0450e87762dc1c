//! Rigid bodies and their descriptions

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable body handle, allocated in increasing order by the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Whether the world integrates the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Never moved by the world; only `World::set_position` moves it
    Static,
    /// Integrated every step and pushed out of contacts
    Dynamic,
}

/// Collision shape, centered on the body position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { half_extents: Vec2 },
}

/// Surface and damping parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Bounciness (1 = perfectly elastic)
    pub restitution: f32,
    /// Surface friction (not applied: contacts are frictionless)
    pub friction: f32,
    /// Fraction of velocity lost per step
    pub friction_air: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.01,
        }
    }
}

impl Material {
    /// No energy loss from contacts or from moving through the air
    pub const ELASTIC: Self = Self {
        restitution: 1.0,
        friction: 0.0,
        friction_air: 0.0,
    };
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// A body registered with the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub shape: Shape,
    pub pos: Vec2,
    pub vel: Vec2,
    pub material: Material,
    /// RGBA fill used by the renderer
    pub fill: [f32; 4],
}

impl Body {
    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn bounds(&self) -> Aabb {
        match self.shape {
            Shape::Circle { radius } => Aabb::from_center(self.pos, Vec2::splat(radius)),
            Shape::Rect { half_extents } => Aabb::from_center(self.pos, half_extents),
        }
    }

    /// Circle radius, or `None` for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Rect { .. } => None,
        }
    }
}

/// Builder for describing a body before adding it to the world
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub kind: BodyKind,
    pub shape: Shape,
    pub pos: Vec2,
    pub vel: Vec2,
    pub material: Material,
    pub fill: [f32; 4],
}

impl BodyDesc {
    /// A dynamic rectangle of the given full size centered on `pos`
    pub fn rectangle(pos: Vec2, size: Vec2) -> Self {
        Self::new(
            pos,
            Shape::Rect {
                half_extents: size / 2.0,
            },
        )
    }

    /// A dynamic circle centered on `pos`
    pub fn circle(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, Shape::Circle { radius })
    }

    fn new(pos: Vec2, shape: Shape) -> Self {
        Self {
            kind: BodyKind::Dynamic,
            shape,
            pos,
            vel: Vec2::ZERO,
            material: Material::default(),
            fill: [1.0; 4],
        }
    }

    pub fn fixed(mut self) -> Self {
        self.kind = BodyKind::Static;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_fill(mut self, fill: [f32; 4]) -> Self {
        self.fill = fill;
        self
    }
}
