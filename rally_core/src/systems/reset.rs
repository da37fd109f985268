use crate::{Ball, Config, Events, Field, GameRng};
use hecs::World;

/// Restart the rally if the ball has left the field horizontally.
///
/// The exit test is `x < 0 || x > width` — a ball sitting exactly at
/// `x == width` does not trigger a reset.
pub fn check_exit(
    world: &mut World,
    field: &Field,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 || ball.pos.x > field.width {
            ball.reset(field, config, rng);
            events.round_reset = true;
            log::debug!("round reset: serve vx={:.1} vy={:.1}", ball.vel.x, ball.vel.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup() -> (World, Field, Config, Events, GameRng) {
        (
            World::new(),
            Field::new(),
            Config::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_reset_fires_on_left_exit() {
        let (mut world, field, config, mut events, mut rng) = setup();
        create_ball(&mut world, Vec2::new(-0.1, 250.0), Vec2::new(-8.0, 0.0));

        check_exit(&mut world, &field, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, field.ball_spawn(config.ball_size));
            assert_eq!(ball.vel.x.abs(), config.serve_speed_x);
            assert_eq!(ball.vel.y.abs(), config.serve_speed_y);
        }
        assert!(events.round_reset);
    }

    #[test]
    fn test_reset_fires_on_right_exit() {
        let (mut world, field, config, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Vec2::new(field.width + 1.0, 250.0),
            Vec2::new(8.0, 0.0),
        );

        check_exit(&mut world, &field, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos.x, field.width / 2.0 - config.ball_size / 2.0);
        }
        assert!(events.round_reset);
    }

    #[test]
    fn test_ball_exactly_on_right_edge_does_not_reset() {
        let (mut world, field, config, mut events, mut rng) = setup();
        let pos = Vec2::new(field.width, 250.0);
        create_ball(&mut world, pos, Vec2::new(8.0, 0.0));

        check_exit(&mut world, &field, &config, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, pos, "exit test is strict: x == width is still in play");
        }
        assert!(!events.round_reset);
    }

    #[test]
    fn test_no_reset_in_bounds() {
        let (mut world, field, config, mut events, mut rng) = setup();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(8.0, 4.0));

        check_exit(&mut world, &field, &config, &mut events, &mut rng);

        assert!(!events.round_reset);
    }
}
