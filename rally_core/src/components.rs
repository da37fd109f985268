use glam::Vec2;

use crate::{Config, Field, GameRng};

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, driven externally via `set_player_y`.
    Player,
    /// Right paddle, driven by the opponent controller.
    Ai,
}

/// Paddle component. `y` is the top edge, clamped to the field after every
/// mutation.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical center of the paddle.
    pub fn center_y(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// Ball component. `pos` is the top-left corner of the bounding box;
/// `vel` is in field units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Vertical center of the ball.
    pub fn center_y(&self, ball_size: f32) -> f32 {
        self.pos.y + ball_size / 2.0
    }

    /// Recenter the ball and serve in a random direction.
    ///
    /// Serve speeds are fixed magnitudes with independently random signs.
    /// The x sign is drawn before the y sign; tests rely on that draw order.
    pub fn reset(&mut self, field: &Field, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = field.ball_spawn(config.ball_size);

        let x_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.serve_speed_x * x_sign,
            config.serve_speed_y * y_sign,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_centers_ball_with_serve_speeds() {
        let field = Field::new();
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(3.0, 3.0), Vec2::new(-11.0, 2.0));

        ball.reset(&field, &config, &mut rng);

        assert_eq!(ball.pos, field.ball_spawn(config.ball_size));
        assert_eq!(ball.vel.x.abs(), config.serve_speed_x);
        assert_eq!(ball.vel.y.abs(), config.serve_speed_y);
    }

    #[test]
    fn test_reset_is_deterministic_for_a_seed() {
        let field = Field::new();
        let config = Config::new();
        let mut ball_a = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let mut ball_b = Ball::new(Vec2::ZERO, Vec2::ZERO);

        let mut rng_a = GameRng::new(42);
        let mut rng_b = GameRng::new(42);
        ball_a.reset(&field, &config, &mut rng_a);
        ball_b.reset(&field, &config, &mut rng_b);

        assert_eq!(ball_a.vel, ball_b.vel);
    }
}
