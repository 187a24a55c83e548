use crate::{Ball, Config, Events, Scoreboard, ServeSource, Side, Table};
use hecs::World;

/// Check whether the ball entered a goal gap.
///
/// A ball through the top gap scores for the bottom player and vice versa.
/// The top goal is checked first; after a goal the ball is re-served.
pub fn check_scoring(
    world: &mut World,
    table: &Table,
    config: &Config,
    scores: &mut Scoreboard,
    events: &mut Events,
    serve: &mut dyn ServeSource,
) {
    let t = table.wall_thickness;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.top() <= t && table.is_within_goal_gap(ball.rect.centerx()) {
            award_goal(Side::Bottom, scores, events);
            ball.restart(table, &config.ball_speeds_x_serve, serve);
        }
        if ball.rect.bottom() >= table.height - t && table.is_within_goal_gap(ball.rect.centerx()) {
            award_goal(Side::Top, scores, events);
            ball.restart(table, &config.ball_speeds_x_serve, serve);
        }
    }
}

fn award_goal(scorer: Side, scores: &mut Scoreboard, events: &mut Events) {
    let score = scores.get_mut(scorer);
    score.increase();
    match scorer {
        Side::Top => events.top_scored = true,
        Side::Bottom => events.bottom_scored = true,
    }
    tracing::info!(
        scorer = ?scorer,
        conceded = ?scorer.opponent(),
        top = scores.top.value,
        bottom = scores.bottom.value,
        "goal"
    );
}
