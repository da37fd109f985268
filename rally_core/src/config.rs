use crate::params::Params;

/// Runtime tuning values, seeded from [`Params`].
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y: f32,
    pub speed_increase: f32,
    pub player_spin: f32,
    pub player_jitter: f32,
    pub ai_spin: f32,
    pub ai_jitter: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y: Params::SERVE_SPEED_Y,
            speed_increase: Params::SPEED_INCREASE,
            player_spin: Params::PLAYER_SPIN,
            player_jitter: Params::PLAYER_JITTER,
            ai_spin: Params::AI_SPIN,
            ai_jitter: Params::AI_JITTER,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge for the given side.
    pub fn paddle_x(&self, side: crate::Side, field: &crate::Field) -> f32 {
        match side {
            crate::Side::Player => field.paddle_margin,
            crate::Side::Ai => field.width - field.paddle_margin - self.paddle_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Side};

    #[test]
    fn test_paddle_x_positions() {
        let config = Config::new();
        let field = Field::new();
        assert_eq!(config.paddle_x(Side::Player, &field), field.paddle_margin);
        assert_eq!(
            config.paddle_x(Side::Ai, &field),
            field.width - field.paddle_margin - config.paddle_width
        );
    }
}
