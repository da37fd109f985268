use crate::{Ball, Config, Field, Paddle, Side};
use hecs::World;

/// Move the AI paddle toward the ball's vertical center.
///
/// Bang-bang with a dead zone: no movement while the paddle center is
/// within the dead zone of the ball center, full step otherwise. The
/// limited step size is what makes the opponent beatable.
pub fn track_ball(world: &mut World, field: &Field, config: &Config) {
    let target = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.center_y(config.ball_size),
            None => return,
        }
    };

    let step = config.paddle_speed * config.ai_speed_factor;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let center = paddle.center_y(config.paddle_height);
        if center < target - config.ai_dead_zone {
            paddle.y += step;
        } else if center > target + config.ai_dead_zone {
            paddle.y -= step;
        }
        paddle.y = field.clamp_paddle_y(paddle.y, config.paddle_height);
    }
}
