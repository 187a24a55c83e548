use crate::{Ball, Events, Paddle, Rect};
use hecs::World;

/// Flip the ball's vertical direction if it overlaps either paddle.
///
/// Paddles are drawn as discs but collide as rectangles. Overlapping both
/// paddles in one frame still flips only once.
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects without holding a borrow on the world
    let paddles: Vec<Rect> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.rect)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if paddles.iter().any(|rect| ball.rect.intersects(rect)) {
            ball.on_paddle_collision();
            tracing::debug!(pos = ?ball.rect.center(), "ball hit paddle");
            events.ball_hit_paddle = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, PaddleIntent, Side, Table};
    use glam::IVec2;

    fn setup_world() -> (World, Table, Config, Events) {
        let world = World::new();
        let config = Config::new();
        let table = Table::new(&config);
        let events = Events::new();
        (world, table, config, events)
    }

    fn paddle_size(config: &Config) -> IVec2 {
        IVec2::new(config.paddle_width, config.paddle_height)
    }

    #[test]
    fn test_ball_bounces_off_top_paddle() {
        let (mut world, table, config, mut events) = setup_world();
        create_paddle(&mut world, &table, Side::Top, paddle_size(&config));
        // Paddle spans x 190..270, y 15..30
        create_ball(&mut world, Rect::new(200, 25, 30, 30), IVec2::new(7, -20));

        check_collisions(&mut world, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, IVec2::new(7, 20), "Only vertical velocity flips");
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_bottom_paddle() {
        let (mut world, table, config, mut events) = setup_world();
        create_paddle(&mut world, &table, Side::Bottom, paddle_size(&config));
        // Paddle spans x 190..270, y 865..880
        create_ball(&mut world, Rect::new(250, 840, 30, 30), IVec2::new(-5, 20));

        check_collisions(&mut world, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, IVec2::new(-5, -20));
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_edge_is_not_a_collision() {
        let (mut world, table, config, mut events) = setup_world();
        create_paddle(&mut world, &table, Side::Bottom, paddle_size(&config));
        // Ball bottom sits exactly on the paddle top
        create_ball(&mut world, Rect::new(200, 835, 30, 30), IVec2::new(5, 20));

        check_collisions(&mut world, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.y, 20);
        }
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_away_from_paddles() {
        let (mut world, table, config, mut events) = setup_world();
        create_paddle(&mut world, &table, Side::Top, paddle_size(&config));
        create_paddle(&mut world, &table, Side::Bottom, paddle_size(&config));
        create_ball(&mut world, Rect::new(235, 435, 30, 30), IVec2::new(5, 20));

        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, table, config, mut events) = setup_world();
        create_paddle(&mut world, &table, Side::Top, paddle_size(&config));

        check_collisions(&mut world, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_overlapping_both_paddles_flips_once() {
        let (mut world, table, config, mut events) = setup_world();
        let size = paddle_size(&config);
        create_paddle(&mut world, &table, Side::Top, size);
        // Second paddle placed over the first so one ball overlaps both
        world.spawn((
            Paddle::new(Side::Bottom, table.paddle_spawn(Side::Top), size),
            PaddleIntent::new(),
        ));
        create_ball(&mut world, Rect::new(200, 25, 30, 30), IVec2::new(7, -20));

        check_collisions(&mut world, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, IVec2::new(7, 20));
        }
        assert!(events.ball_hit_paddle);
    }
}
