//! Read-only view of a match, produced once per frame for rendering

use crate::{MatchState, Paddle, Rect, Scoreboard, Side, Table};

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub frame: u64,
    pub state: MatchState,
    pub table: TableView,
    /// Present only while playing
    pub ball: Option<Rect>,
    pub paddles: [PaddleView; 2],
    pub scores: Scoreboard,
}

/// Table geometry, precomputed for drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub width: i32,
    pub height: i32,
    pub walls: [Rect; 4],
    pub goal_gaps: [Rect; 2],
}

impl From<&Table> for TableView {
    fn from(table: &Table) -> Self {
        Self {
            width: table.width,
            height: table.height,
            walls: table.walls(),
            goal_gaps: table.goal_gaps(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            side: paddle.side,
            rect: paddle.rect,
        }
    }
}

impl Snapshot {
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn paddle(&self, side: Side) -> &PaddleView {
        match side {
            Side::Top => &self.paddles[0],
            Side::Bottom => &self.paddles[1],
        }
    }
}
