/// Game tuning parameters for Air Hockey
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (pixels)
    pub const TABLE_WIDTH: i32 = 500;
    pub const TABLE_HEIGHT: i32 = 900;
    pub const WALL_THICKNESS: i32 = 10;
    pub const GOAL_WIDTH: i32 = 200;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 80;
    pub const PADDLE_HEIGHT: i32 = 15;
    pub const PADDLE_SPEED: i32 = 10; // pixels per frame
    pub const PADDLE_ROW_TOP: i32 = 15;
    pub const PADDLE_ROW_BOTTOM_INSET: i32 = 35; // distance from the bottom edge
    pub const PADDLE_SPAWN_OFFSET: i32 = 60; // spawn x = W/2 - offset

    // Ball
    pub const BALL_SIZE: i32 = 30;
    pub const BALL_SPEEDS_X_INITIAL: [i32; 2] = [-7, 7];
    pub const BALL_SPEEDS_Y_INITIAL: [i32; 2] = [20, -20];
    pub const BALL_SPEEDS_X_SERVE: [i32; 2] = [-5, 5];

    // Score
    pub const SCORE_ROW: i32 = 15;

    // Timing
    pub const FPS: u32 = 40;
}
