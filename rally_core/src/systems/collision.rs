use crate::{Aabb, Ball, Config, Events, Field, GameRng, Paddle, Side};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Resolve ball/paddle collisions: player paddle first, then AI.
///
/// On a hit the ball is pushed out to the paddle's outer edge (so the same
/// overlap cannot re-trigger next tick), its horizontal velocity is
/// reflected and amplified, and its vertical velocity is recomputed from
/// the contact offset plus a bounded random jitter.
pub fn collide_paddles(
    world: &mut World,
    field: &Field,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Collect paddle data without holding borrows on the world
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    // Player paddle is always checked before the AI paddle
    paddles.sort_by_key(|(side, _)| match side {
        Side::Player => 0u8,
        Side::Ai => 1u8,
    });

    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, b)| (b.pos, b.vel))
    };
    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return,
    };
    let mut hit = false;

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side, field);
        let paddle_box = Aabb::from_origin_size(
            Vec2::new(paddle_x, paddle_y),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        let ball_box = Aabb::from_origin_size(ball_pos, Vec2::splat(config.ball_size));

        if !ball_box.overlaps(&paddle_box) {
            continue;
        }

        // Push the ball out to the paddle's outer edge
        ball_pos.x = match side {
            Side::Player => paddle_x + config.paddle_width,
            Side::Ai => paddle_x - config.ball_size,
        };

        // Reflect and amplify horizontal velocity
        ball_vel.x = -ball_vel.x * config.speed_increase;

        // Vertical velocity from contact offset plus bounded jitter
        let (spin, jitter) = match side {
            Side::Player => (config.player_spin, config.player_jitter),
            Side::Ai => (config.ai_spin, config.ai_jitter),
        };
        let delta_y = (ball_pos.y + config.ball_size / 2.0)
            - (paddle_y + config.paddle_height / 2.0);
        let half = jitter / 2.0;
        ball_vel.y = delta_y * spin + rng.0.gen_range(-half..half);

        match side {
            Side::Player => events.ball_hit_player = true,
            Side::Ai => events.ball_hit_ai = true,
        }
        hit = true;
        log::debug!("paddle hit: side={:?} vx={:.2} vy={:.2}", side, ball_vel.x, ball_vel.y);
    }

    if hit {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
    }
}
