use crate::{Ball, Config, Paddle, ServeSource, Table};
use hecs::World;

/// Re-serve the ball and recenter both paddles
pub fn restart_entities(
    world: &mut World,
    table: &Table,
    config: &Config,
    serve: &mut dyn ServeSource,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.restart(table, &config.ball_speeds_x_serve, serve);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.restart(table);
    }
}
