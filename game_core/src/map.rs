use glam::IVec2;

use crate::components::Side;
use crate::config::Config;
use crate::params::Params;

/// Axis-aligned rectangle in table pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.centerx(), self.centery())
    }

    pub fn set_centerx(&mut self, cx: i32) {
        self.x = cx - self.width / 2;
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.width / 2;
        self.y = center.y - self.height / 2;
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Table bounds: walls and the two goal gaps
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub width: i32,
    pub height: i32,
    pub wall_thickness: i32,
    pub goal_width: i32,
}

impl Table {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.table_width,
            height: config.table_height,
            wall_thickness: config.wall_thickness,
            goal_width: config.goal_width,
        }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Bound a paddle's x to the space between the side walls
    pub fn clamp_paddle_x(&self, x: i32, paddle_width: i32) -> i32 {
        let min = self.wall_thickness;
        let max = self.width - self.wall_thickness - paddle_width;
        x.max(min).min(max)
    }

    /// Whether a center x lies strictly inside the goal gap
    pub fn is_within_goal_gap(&self, centerx: i32) -> bool {
        let mid = self.width / 2;
        let half_goal = self.goal_width / 2;
        mid - half_goal < centerx && centerx < mid + half_goal
    }

    /// Fixed vertical row of a paddle
    pub fn paddle_row(&self, side: Side) -> i32 {
        match side {
            Side::Top => Params::PADDLE_ROW_TOP,
            Side::Bottom => self.height - Params::PADDLE_ROW_BOTTOM_INSET,
        }
    }

    pub fn paddle_spawn(&self, side: Side) -> IVec2 {
        IVec2::new(
            self.width / 2 - Params::PADDLE_SPAWN_OFFSET,
            self.paddle_row(side),
        )
    }

    /// Display anchor for a side's score
    pub fn score_anchor(&self, side: Side) -> IVec2 {
        match side {
            Side::Top => IVec2::new(self.width / 4, Params::SCORE_ROW),
            Side::Bottom => IVec2::new(3 * self.width / 4, Params::SCORE_ROW),
        }
    }

    /// Top, bottom, left, right
    pub fn walls(&self) -> [Rect; 4] {
        let t = self.wall_thickness;
        [
            Rect::new(0, 0, self.width, t),
            Rect::new(0, self.height - t, self.width, t),
            Rect::new(0, 0, t, self.height),
            Rect::new(self.width - t, 0, t, self.height),
        ]
    }

    /// Open sections of the top and bottom walls
    pub fn goal_gaps(&self) -> [Rect; 2] {
        let x = self.width / 2 - self.goal_width / 2;
        let t = self.wall_thickness;
        [
            Rect::new(x, 0, self.goal_width, t),
            Rect::new(x, self.height - t, self.goal_width, t),
        ]
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_edges() {
        let rect = Rect::new(235, 435, 30, 30);
        assert_eq!(rect.left(), 235);
        assert_eq!(rect.right(), 265);
        assert_eq!(rect.top(), 435);
        assert_eq!(rect.bottom(), 465);
        assert_eq!(rect.center(), IVec2::new(250, 450));
    }

    #[test]
    fn test_rect_set_center_uses_integer_halves() {
        let mut rect = Rect::new(0, 0, 15, 15);
        rect.set_center(IVec2::new(100, 100));
        assert_eq!((rect.x, rect.y), (93, 93));
        assert_eq!(rect.center(), IVec2::new(100, 100));
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_clamp_paddle_x() {
        let table = Table::default();
        assert_eq!(table.clamp_paddle_x(-50, 80), 10);
        assert_eq!(table.clamp_paddle_x(1000, 80), 410);
        assert_eq!(table.clamp_paddle_x(200, 80), 200);
    }

    #[test]
    fn test_goal_gap_center_is_inside() {
        let table = Table::default();
        assert!(table.is_within_goal_gap(table.width / 2));
    }

    #[test]
    fn test_goal_gap_edges_are_excluded() {
        let table = Table::default();
        let mid = table.width / 2;
        let half = table.goal_width / 2;
        assert!(!table.is_within_goal_gap(mid - half));
        assert!(!table.is_within_goal_gap(mid + half));
        assert!(table.is_within_goal_gap(mid - half + 1));
        assert!(table.is_within_goal_gap(mid + half - 1));
    }

    #[test]
    fn test_paddle_rows() {
        let table = Table::default();
        assert_eq!(table.paddle_row(Side::Top), 15);
        assert_eq!(table.paddle_row(Side::Bottom), 865);
        assert_eq!(table.paddle_spawn(Side::Bottom), IVec2::new(190, 865));
    }

    #[test]
    fn test_goal_gaps_are_centered() {
        let table = Table::default();
        let [top, bottom] = table.goal_gaps();
        assert_eq!(top.centerx(), table.width / 2);
        assert_eq!(bottom.bottom(), table.height);
        assert_eq!(top.width, table.goal_width);
    }
}
