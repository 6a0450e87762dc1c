//! Narrow-phase collision tests and contact response
//!
//! Every test reports its normal pointing from the second shape toward the
//! first, so pushing the first body along `normal * penetration` separates them.

use glam::Vec2;

use super::body::Aabb;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point (if hit)
    pub point: Vec2,
    /// Surface normal at the contact, pointing toward the first shape
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Same contact seen from the other shape
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// Check collision between a circle and an axis-aligned rectangle
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Aabb) -> CollisionResult {
    let closest = center.clamp(rect.min, rect.max);
    let delta = center - closest;
    let dist_sq = delta.length_squared();

    if dist_sq > 0.0 {
        if dist_sq >= radius * radius {
            return CollisionResult::miss();
        }
        let dist = dist_sq.sqrt();
        return CollisionResult {
            hit: true,
            point: closest,
            normal: delta / dist,
            penetration: radius - dist,
        };
    }

    // Center is inside the rectangle: leave through the nearest face
    let to_left = center.x - rect.min.x;
    let to_right = rect.max.x - center.x;
    let to_top = center.y - rect.min.y;
    let to_bottom = rect.max.y - center.y;

    let (normal, face_dist) = [
        (Vec2::NEG_X, to_left),
        (Vec2::X, to_right),
        (Vec2::NEG_Y, to_top),
        (Vec2::Y, to_bottom),
    ]
    .into_iter()
    .fold((Vec2::NEG_Y, f32::INFINITY), |best, candidate| {
        if candidate.1 < best.1 { candidate } else { best }
    });

    CollisionResult {
        hit: true,
        point: center + normal * face_dist,
        normal,
        penetration: face_dist + radius,
    }
}

/// Check collision between two circles
pub fn circle_circle_collision(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> CollisionResult {
    let delta = a - b;
    let reach = radius_a + radius_b;
    let dist_sq = delta.length_squared();

    if dist_sq >= reach * reach {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    // Coincident centers: separate vertically
    let normal = if dist > 0.0 { delta / dist } else { Vec2::NEG_Y };
    CollisionResult {
        hit: true,
        point: b + normal * radius_b,
        normal,
        penetration: reach - dist,
    }
}

/// Check overlap between two axis-aligned rectangles
pub fn rect_rect_collision(a: &Aabb, b: &Aabb) -> CollisionResult {
    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return CollisionResult::miss();
    }

    let offset = a.center() - b.center();
    let (normal, penetration) = if overlap_x < overlap_y {
        (Vec2::new(offset.x.signum(), 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, offset.y.signum()), overlap_y)
    };

    CollisionResult {
        hit: true,
        point: (a.center() + b.center()) / 2.0,
        normal,
        penetration,
    }
}

/// Velocity after bouncing off an immovable surface with the given restitution
///
/// Only the normal component is affected, and only when moving into the surface.
pub fn bounce_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let approach = velocity.dot(normal);
    if approach >= 0.0 {
        return velocity;
    }
    velocity - (1.0 + restitution) * approach * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(center: Vec2, size: Vec2) -> Aabb {
        Aabb::from_center(center, size / 2.0)
    }

    #[test]
    fn test_circle_rect_collision_above() {
        let paddle = rect(Vec2::new(400.0, 550.0), Vec2::new(120.0, 20.0));

        // Ball resting 8 units above the paddle top with radius 10
        let result = circle_rect_collision(Vec2::new(400.0, 532.0), 10.0, &paddle);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::NEG_Y);
        assert!((result.penetration - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_circle_rect_collision_miss() {
        let brick = rect(Vec2::new(75.0, 50.0), Vec2::new(70.0, 20.0));
        let result = circle_rect_collision(Vec2::new(75.0, 80.0), 10.0, &brick);
        assert!(!result.hit);

        // Exactly touching does not count as overlap
        let result = circle_rect_collision(Vec2::new(75.0, 70.0), 10.0, &brick);
        assert!(!result.hit);
    }

    #[test]
    fn test_circle_rect_collision_corner() {
        let brick = rect(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let result = circle_rect_collision(Vec2::new(14.0, 14.0), 10.0, &brick);
        assert!(result.hit);
        assert!(result.normal.x > 0.0 && result.normal.y > 0.0);
        assert!((result.normal.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_circle_inside_rect_exits_nearest_face() {
        let brick = rect(Vec2::new(0.0, 0.0), Vec2::new(70.0, 20.0));
        let result = circle_rect_collision(Vec2::new(30.0, 0.0), 5.0, &brick);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert!((result.penetration - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_circle_circle_collision() {
        let result = circle_circle_collision(Vec2::new(15.0, 0.0), 10.0, Vec2::ZERO, 10.0);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::X);
        assert!((result.penetration - 5.0).abs() < 0.001);

        let result = circle_circle_collision(Vec2::new(25.0, 0.0), 10.0, Vec2::ZERO, 10.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_rect_rect_collision() {
        let a = rect(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        let b = rect(Vec2::new(0.0, 15.0), Vec2::new(20.0, 20.0));
        let result = rect_rect_collision(&a, &b);
        assert!(result.hit);
        assert_eq!(result.normal, Vec2::NEG_Y);
        assert!((result.penetration - 5.0).abs() < 0.001);

        let c = rect(Vec2::new(30.0, 0.0), Vec2::new(20.0, 20.0));
        assert!(!rect_rect_collision(&a, &c).hit);
    }

    #[test]
    fn test_bounce_velocity_restitution() {
        let v = Vec2::new(2.0, 5.0);

        // Fully elastic matches reflection
        assert_eq!(bounce_velocity(v, Vec2::NEG_Y, 1.0), Vec2::new(2.0, -5.0));
        // Inelastic kills the normal component
        assert_eq!(bounce_velocity(v, Vec2::NEG_Y, 0.0), Vec2::new(2.0, 0.0));
        // Separating velocity is left alone
        assert_eq!(bounce_velocity(v, Vec2::Y, 1.0), v);
    }
}
