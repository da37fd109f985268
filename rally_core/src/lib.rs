//! Deterministic two-paddle rally simulation.
//!
//! One ball, two paddles, top/bottom walls. The left paddle is driven
//! externally ([`set_player_y`]); the right paddle tracks the ball with a
//! dead-zone bang-bang controller. When the ball leaves the field
//! horizontally the rally restarts with a fresh randomized serve. There is
//! no scoring: this is an endless rally generator.
//!
//! All randomness flows through [`GameRng`], so a fixed seed reproduces a
//! trajectory bit for bit.

pub mod components;
pub mod config;
pub mod field;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one tick.
///
/// Velocities and speeds are per tick, not per unit of time: the effective
/// simulation speed is whatever rate the embedder calls this at. Call it
/// from a fixed-rate scheduler.
///
/// Step order is fixed: integrate, wall bounce, player-paddle collision,
/// AI-paddle collision, horizontal exit check, opponent tracking. Paddle
/// collisions run before the exit check, so a deflected ball is repositioned
/// inward before the boundary is tested.
pub fn advance(
    world: &mut World,
    field: &Field,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    move_ball(world);
    bounce_walls(world, field, config, events);
    collide_paddles(world, field, config, events, rng);
    check_exit(world, field, config, events, rng);
    track_ball(world, field, config);
}

/// Set the player paddle's top edge, clamped to the field.
///
/// Entry point for the external input collaborator; safe to call at any
/// point between ticks on the simulation thread.
pub fn set_player_y(world: &mut World, field: &Field, config: &Config, y: f32) {
    let clamped = field.clamp_paddle_y(y, config.paddle_height);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = clamped;
        }
    }
}

/// Spawn a paddle entity for the given side.
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Spawn the ball entity.
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Build the standard world: two centered paddles and a served ball.
pub fn new_world(field: &Field, config: &Config, rng: &mut GameRng) -> World {
    let mut world = World::new();

    let paddle_y = field.paddle_start_y(config.paddle_height);
    create_paddle(&mut world, Side::Player, paddle_y);
    create_paddle(&mut world, Side::Ai, paddle_y);

    create_ball(&mut world, field.ball_spawn(config.ball_size), glam::Vec2::ZERO);
    // Initial serve uses the same randomized-direction rules as a reset
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(field, config, rng);
    }

    world
}
