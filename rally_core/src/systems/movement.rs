use crate::{Ball, Config, Events, Field};
use hecs::World;

/// Move the ball by its velocity (one tick).
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Bounce the ball off the top and bottom walls.
pub fn bounce_walls(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= field.height {
            ball.vel.y = -ball.vel.y;
            // Clamp position to prevent the ball escaping vertically
            ball.pos.y = field.clamp_ball_y(ball.pos.y, config.ball_size);
            events.ball_hit_wall = true;
        }
    }
}
