//! Frame drawing from a match snapshot

use game_core::{Side, Snapshot};
use glam::IVec2;

use super::resources::Rgb;
use super::Canvas;
use crate::error::ClientError;

const CENTER_LINE_WIDTH: i32 = 5;
const CENTER_CIRCLE_RADIUS: i32 = 50;
const CENTER_CIRCLE_WIDTH: i32 = 5;

pub fn paddle_color(side: Side) -> Rgb {
    match side {
        Side::Top => Rgb::RED,
        Side::Bottom => Rgb::BLUE,
    }
}

/// Draw the whole table, back to front, and present it
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    snapshot: &Snapshot,
) -> Result<(), ClientError> {
    let table = &snapshot.table;
    canvas.fill(Rgb::TABLE);

    // Walls, then cut the goal gaps back out
    for wall in table.walls {
        canvas.fill_rect(wall, Rgb::WHITE);
    }
    for gap in table.goal_gaps {
        canvas.fill_rect(gap, Rgb::TABLE);
    }

    let mid_y = table.height / 2;
    canvas.line(
        IVec2::new(0, mid_y),
        IVec2::new(table.width, mid_y),
        CENTER_LINE_WIDTH,
        Rgb::WHITE,
    );
    canvas.circle(
        IVec2::new(table.width / 2, mid_y),
        CENTER_CIRCLE_RADIUS,
        CENTER_CIRCLE_WIDTH,
        Rgb::WHITE,
    );

    if let Some(ball) = snapshot.ball {
        canvas.ellipse(ball, Rgb::PUCK);
    }

    for paddle in &snapshot.paddles {
        canvas.circle(
            paddle.rect.center(),
            paddle.rect.width / 2,
            0,
            paddle_color(paddle.side),
        );
    }

    for score in [snapshot.scores.top, snapshot.scores.bottom] {
        canvas.text(score.anchor, &score.value.to_string(), Rgb::WHITE);
    }

    canvas.present()
}
