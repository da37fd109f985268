use glam::Vec2;

use crate::params::Params;

/// The playfield: fixed for the lifetime of a simulation.
#[derive(Debug, Clone)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Distance from each side wall to its paddle's near edge.
    pub paddle_margin: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
        }
    }
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left spawn position that centers a ball of the given size.
    pub fn ball_spawn(&self, ball_size: f32) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - ball_size / 2.0,
            self.height / 2.0 - ball_size / 2.0,
        )
    }

    /// Clamp a paddle's top edge so the paddle stays fully inside the field.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }

    /// Clamp the ball's top edge between the walls.
    pub fn clamp_ball_y(&self, y: f32, ball_size: f32) -> f32 {
        y.clamp(0.0, self.height - ball_size)
    }

    /// Y position that vertically centers a paddle.
    pub fn paddle_start_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }
}
