use crate::{Ball, Config, Events, Paddle, PaddleIntent, Side, Table};
use hecs::World;

/// Apply paddle movement based on intents.
///
/// Top paddle first, then bottom; within a paddle, left before right.
pub fn move_paddles(world: &mut World, table: &Table, config: &Config) {
    for side in [Side::Top, Side::Bottom] {
        for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
            if paddle.side != side {
                continue;
            }
            for direction in intent.directions() {
                paddle.move_by(table, config.paddle_speed, direction);
            }
        }
    }
}

/// Move ball by its velocity and reflect it off the walls
pub fn move_ball(world: &mut World, table: &Table, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(table) {
            tracing::trace!(vel = ?ball.vel, "ball bounced off wall");
            events.ball_hit_wall = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Rect};
    use glam::IVec2;

    fn paddle_size(config: &Config) -> IVec2 {
        IVec2::new(config.paddle_width, config.paddle_height)
    }

    #[test]
    fn test_move_paddles_follows_intent() {
        let mut world = World::new();
        let table = Table::default();
        let config = Config::new();
        let top = create_paddle(&mut world, &table, Side::Top, paddle_size(&config));
        world
            .insert_one(
                top,
                PaddleIntent {
                    left: true,
                    right: false,
                },
            )
            .unwrap();

        move_paddles(&mut world, &table, &config);

        let paddle = *world.get::<&Paddle>(top).unwrap();
        assert_eq!(paddle.rect.x, 190 - config.paddle_speed);
    }

    #[test]
    fn test_move_paddles_never_leaves_table() {
        let mut world = World::new();
        let table = Table::default();
        let config = Config::new();
        let bottom = create_paddle(&mut world, &table, Side::Bottom, paddle_size(&config));

        let pattern = [(true, false), (false, true), (true, true)];
        for step in 0..300 {
            let (left, right) = pattern[(step / 37) % pattern.len()];
            world
                .insert_one(bottom, PaddleIntent { left, right })
                .unwrap();
            move_paddles(&mut world, &table, &config);

            let paddle = *world.get::<&Paddle>(bottom).unwrap();
            assert!(paddle.rect.left() >= table.wall_thickness);
            assert!(paddle.rect.right() <= table.width - table.wall_thickness);
        }
    }

    #[test]
    fn test_move_ball_records_wall_event() {
        let mut world = World::new();
        let table = Table::default();
        let mut events = Events::new();
        create_ball(&mut world, Rect::new(455, 400, 30, 30), IVec2::new(7, 20));

        move_ball(&mut world, &table, &mut events);

        assert!(events.ball_hit_wall);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -7);
        }
    }

    #[test]
    fn test_move_ball_keeps_speed_magnitudes() {
        let mut world = World::new();
        let table = Table::default();
        let mut events = Events::new();
        create_ball(&mut world, Rect::new(100, 300, 30, 30), IVec2::new(7, 20));

        for _ in 0..500 {
            move_ball(&mut world, &table, &mut events);
            for (_e, ball) in world.query::<&Ball>().iter() {
                assert_eq!(ball.vel.x.abs(), 7);
                assert_eq!(ball.vel.y.abs(), 20);
            }
        }
    }
}
