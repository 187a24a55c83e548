use glam::IVec2;

use crate::map::{Rect, Table};
use crate::resources::ServeSource;

/// Which end of the table a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// Horizontal paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Paddle component - a player's striker, fixed to one row
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub rect: Rect,
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side, pos: IVec2, size: IVec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, size.x, size.y),
            side,
        }
    }

    /// Shift horizontally, clamped between the side walls
    pub fn move_by(&mut self, table: &Table, speed: i32, direction: Direction) {
        let x = match direction {
            Direction::Left => self.rect.x - speed,
            Direction::Right => self.rect.x + speed,
        };
        self.rect.x = table.clamp_paddle_x(x, self.rect.width);
    }

    /// Recenter horizontally; the row never changes
    pub fn restart(&mut self, table: &Table) {
        self.rect.set_centerx(table.width / 2);
    }
}

/// Ball component - the puck
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Ball at the table center with a random initial direction on both axes
    pub fn spawn(
        table: &Table,
        size: i32,
        speeds_x: &[i32],
        speeds_y: &[i32],
        serve: &mut dyn ServeSource,
    ) -> Self {
        let mut rect = Rect::new(0, 0, size, size);
        rect.set_center(table.center());
        let vel = IVec2::new(serve.pick(speeds_x), serve.pick(speeds_y));
        Self { rect, vel }
    }

    /// Integrate one frame, then reflect off walls.
    ///
    /// The three wall checks are independent, so a corner flips both axes.
    /// Position is not corrected after a bounce. Returns true if any wall
    /// reflected the ball.
    pub fn advance(&mut self, table: &Table) -> bool {
        self.rect.x += self.vel.x;
        self.rect.y += self.vel.y;

        let t = table.wall_thickness;
        let mut bounced = false;

        if self.rect.left() <= t || self.rect.right() >= table.width - t {
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        let in_gap = table.is_within_goal_gap(self.rect.centerx());
        if self.rect.top() <= t && !in_gap {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        if self.rect.bottom() >= table.height - t && !in_gap {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }

    pub fn on_paddle_collision(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Serve from the center: new horizontal speed, reversed vertical direction
    pub fn restart(&mut self, table: &Table, serve_speeds: &[i32], serve: &mut dyn ServeSource) {
        self.rect.set_center(table.center());
        self.vel.x = serve.pick(serve_speeds);
        self.vel.y = -self.vel.y;
    }
}

/// Movement intent for a paddle, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub left: bool,
    pub right: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directions to apply this frame, left first
    pub fn directions(&self) -> impl Iterator<Item = Direction> {
        let left = self.left.then_some(Direction::Left);
        let right = self.right.then_some(Direction::Right);
        left.into_iter().chain(right)
    }
}
