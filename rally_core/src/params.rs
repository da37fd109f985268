/// Tuning parameters for the rally simulation.
///
/// All speeds are in field units per tick; the embedder's tick rate sets
/// the effective simulation speed.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    pub const PADDLE_MARGIN: f32 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const SERVE_SPEED_X: f32 = 6.0;
    pub const SERVE_SPEED_Y: f32 = 4.0;
    pub const SPEED_INCREASE: f32 = 1.05; // Multiply |vx| on paddle hit

    // Return angle: vy = delta_y * spin + uniform(-jitter/2, jitter/2)
    pub const PLAYER_SPIN: f32 = 0.20;
    pub const PLAYER_JITTER: f32 = 3.0;
    pub const AI_SPIN: f32 = 0.18;
    pub const AI_JITTER: f32 = 2.5;

    // Opponent controller
    pub const AI_SPEED_FACTOR: f32 = 0.85;
    pub const AI_DEAD_ZONE: f32 = 8.0;
}
