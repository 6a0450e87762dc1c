//! The physics world: body storage, integration and collision-start events

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;

use super::body::{Body, BodyDesc, BodyId, BodyKind, Shape};
use super::collision::{
    CollisionResult, bounce_velocity, circle_circle_collision, circle_rect_collision,
    rect_rect_collision,
};

/// Two bodies that started touching during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollisionPair {
    pub a: BodyId,
    pub b: BodyId,
}

impl CollisionPair {
    /// Pairs are stored with the smaller id first
    pub fn new(a: BodyId, b: BodyId) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    pub fn involves(&self, id: BodyId) -> bool {
        self.a == id || self.b == id
    }

    /// The partner of `id` in this pair, if `id` is part of it
    pub fn other(&self, id: BodyId) -> Option<BodyId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Rigid-body world
///
/// Bodies are kept in id order so every step visits them identically.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Added to every dynamic body's velocity each step
    pub gravity: Vec2,
    bodies: BTreeMap<BodyId, Body>,
    /// Pairs overlapping at the end of the previous step
    contacts: BTreeSet<CollisionPair>,
    next_id: u32,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    /// Register a body and return its handle
    pub fn add(&mut self, desc: BodyDesc) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(
            id,
            Body {
                id,
                kind: desc.kind,
                shape: desc.shape,
                pos: desc.pos,
                vel: desc.vel,
                material: desc.material,
                fill: desc.fill,
            },
        );
        id
    }

    /// Remove a body permanently; it takes no further part in collisions
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let body = self.bodies.remove(&id)?;
        self.contacts.retain(|pair| !pair.involves(id));
        Some(body)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies in id order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    /// Teleport a body. Returns false if the body does not exist.
    pub fn set_position(&mut self, id: BodyId, pos: Vec2) -> bool {
        match self.bodies.get_mut(&id) {
            Some(body) => {
                body.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Overwrite a body's velocity. Returns false if the body does not exist.
    pub fn set_velocity(&mut self, id: BodyId, vel: Vec2) -> bool {
        match self.bodies.get_mut(&id) {
            Some(body) => {
                body.vel = vel;
                true
            }
            None => false,
        }
    }

    /// Advance one tick
    ///
    /// Integrates dynamic bodies, resolves every overlap involving a dynamic
    /// body, and returns the pairs that were not touching on the previous step.
    pub fn step(&mut self) -> Vec<CollisionPair> {
        let gravity = self.gravity;
        for body in self.bodies.values_mut() {
            if body.kind == BodyKind::Dynamic {
                body.vel += gravity;
                body.vel *= 1.0 - body.material.friction_air;
                body.pos += body.vel;
            }
        }

        let ids: Vec<BodyId> = self.bodies.keys().copied().collect();
        let mut current = BTreeSet::new();
        let mut started = Vec::new();

        for (i, &id_a) in ids.iter().enumerate() {
            for &id_b in &ids[i + 1..] {
                let (Some(a), Some(b)) = (self.bodies.get(&id_a), self.bodies.get(&id_b)) else {
                    continue;
                };
                if a.is_static() && b.is_static() {
                    continue;
                }

                let (mut a, mut b) = (*a, *b);
                let contact = detect(&a, &b);
                if !contact.hit {
                    continue;
                }

                resolve(&mut a, &mut b, &contact);
                self.bodies.insert(id_a, a);
                self.bodies.insert(id_b, b);

                let pair = CollisionPair::new(id_a, id_b);
                current.insert(pair);
                if !self.contacts.contains(&pair) {
                    started.push(pair);
                }
            }
        }

        self.contacts = current;
        started
    }
}

/// Narrow phase; the normal points from `b` toward `a`
fn detect(a: &Body, b: &Body) -> CollisionResult {
    match (a.shape, b.shape) {
        (Shape::Circle { radius }, Shape::Rect { .. }) => {
            circle_rect_collision(a.pos, radius, &b.bounds())
        }
        (Shape::Rect { .. }, Shape::Circle { radius }) => {
            circle_rect_collision(b.pos, radius, &a.bounds()).flipped()
        }
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle_collision(a.pos, ra, b.pos, rb)
        }
        (Shape::Rect { .. }, Shape::Rect { .. }) => rect_rect_collision(&a.bounds(), &b.bounds()),
    }
}

/// Separate the bodies and apply the restitution bounce
fn resolve(a: &mut Body, b: &mut Body, contact: &CollisionResult) {
    let restitution = a.material.restitution.max(b.material.restitution);
    let n = contact.normal;

    match (a.kind, b.kind) {
        (BodyKind::Dynamic, BodyKind::Static) => {
            a.pos += n * contact.penetration;
            a.vel = bounce_velocity(a.vel, n, restitution);
        }
        (BodyKind::Static, BodyKind::Dynamic) => {
            b.pos -= n * contact.penetration;
            b.vel = bounce_velocity(b.vel, -n, restitution);
        }
        (BodyKind::Dynamic, BodyKind::Dynamic) => {
            // Equal masses: split the correction and the impulse
            a.pos += n * contact.penetration / 2.0;
            b.pos -= n * contact.penetration / 2.0;
            let approach = (a.vel - b.vel).dot(n);
            if approach < 0.0 {
                let impulse = -(1.0 + restitution) * approach / 2.0;
                a.vel += n * impulse;
                b.vel -= n * impulse;
            }
        }
        (BodyKind::Static, BodyKind::Static) => {}
    }
}
