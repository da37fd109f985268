use serde::{Deserialize, Serialize};

use crate::{Ball, Config, Field, Paddle, Side};

/// Read-only projection of the world for an external renderer.
///
/// Flattened floats so the consumer needs no knowledge of the ECS types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_y: f32,
    pub ai_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub field_width: f32,
    pub field_height: f32,
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

/// Project the current world state for rendering.
pub fn snapshot(world: &hecs::World, field: &Field, config: &Config) -> Snapshot {
    let mut player_y = 0.0;
    let mut ai_y = 0.0;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player_y = paddle.y,
            Side::Ai => ai_y = paddle.y,
        }
    }

    let mut ball_x = 0.0;
    let mut ball_y = 0.0;
    for (_e, ball) in world.query::<&Ball>().iter() {
        ball_x = ball.pos.x;
        ball_y = ball.pos.y;
    }

    Snapshot {
        player_y,
        ai_y,
        ball_x,
        ball_y,
        field_width: field.width,
        field_height: field.height,
        ball_size: config.ball_size,
        paddle_width: config.paddle_width,
        paddle_height: config.paddle_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_snapshot_reflects_world() {
        let mut world = hecs::World::new();
        let field = Field::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Player, 111.0);
        create_paddle(&mut world, Side::Ai, 222.0);
        create_ball(&mut world, Vec2::new(300.0, 150.0), Vec2::new(6.0, 4.0));

        let snap = snapshot(&world, &field, &config);

        assert_eq!(snap.player_y, 111.0);
        assert_eq!(snap.ai_y, 222.0);
        assert_eq!(snap.ball_x, 300.0);
        assert_eq!(snap.ball_y, 150.0);
        assert_eq!(snap.field_width, field.width);
        assert_eq!(snap.paddle_height, config.paddle_height);
    }
}
