//! Entity factory: paddle, ball and brick grid

use std::collections::BTreeMap;

use super::state::Brick;
use crate::physics::{BodyDesc, BodyId, Material, World};
use crate::tuning::Tuning;
use glam::Vec2;

/// Body fill colors (RGBA), stored on each body and read back by the renderer
pub mod fills {
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BRICK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Static paddle, centered horizontally near the bottom edge
pub fn spawn_paddle(world: &mut World, tuning: &Tuning) -> BodyId {
    let pos = Vec2::new(
        tuning.playfield_width / 2.0,
        tuning.playfield_height - tuning.paddle_bottom_offset,
    );
    world.add(
        BodyDesc::rectangle(pos, tuning.paddle_size)
            .fixed()
            .with_fill(fills::PADDLE),
    )
}

/// Frictionless, perfectly elastic ball just above the paddle, moving down-right
pub fn spawn_ball(world: &mut World, tuning: &Tuning) -> BodyId {
    let pos = Vec2::new(
        tuning.playfield_width / 2.0,
        tuning.playfield_height - tuning.ball_bottom_offset,
    );
    world.add(
        BodyDesc::circle(pos, tuning.ball_radius)
            .with_material(Material::ELASTIC)
            .with_velocity(tuning.launch_velocity)
            .with_fill(fills::BALL),
    )
}

/// Static brick grid; each brick is tagged with its 1-based row
pub fn spawn_bricks(world: &mut World, tuning: &Tuning) -> BTreeMap<BodyId, Brick> {
    let mut bricks = BTreeMap::new();
    for row in 0..tuning.brick_rows {
        for col in 0..tuning.brick_cols {
            let id = world.add(
                BodyDesc::rectangle(tuning.brick_center(row, col), tuning.brick_size)
                    .fixed()
                    .with_fill(fills::BRICK),
            );
            bricks.insert(id, Brick { row: row + 1, col });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Shape;

    #[test]
    fn test_brick_rows_are_one_based() {
        let mut world = World::new(Vec2::ZERO);
        let bricks = spawn_bricks(&mut world, &Tuning::default());
        assert_eq!(bricks.len(), 50);

        let rows: Vec<u32> = bricks.values().map(|b| b.row).collect();
        assert_eq!(*rows.iter().min().unwrap(), 1);
        assert_eq!(*rows.iter().max().unwrap(), 5);

        // Row 2 sits one brick height plus gap below row 1
        for (id, brick) in &bricks {
            let body = world.get(*id).unwrap();
            assert!(body.is_static());
            assert_eq!(body.pos.y, 50.0 + (brick.row - 1) as f32 * 30.0);
            assert_eq!(
                body.shape,
                Shape::Rect {
                    half_extents: Vec2::new(35.0, 10.0)
                }
            );
        }
    }

    #[test]
    fn test_ball_is_elastic_and_dynamic() {
        let mut world = World::new(Vec2::ZERO);
        let id = spawn_ball(&mut world, &Tuning::default());
        let ball = world.get(id).unwrap();
        assert!(!ball.is_static());
        assert_eq!(ball.material, Material::ELASTIC);
        assert_eq!(ball.fill, fills::BALL);
    }
}
