use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: i32,
    pub table_height: i32,
    pub wall_thickness: i32,
    pub goal_width: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speeds_x_initial: [i32; 2],
    pub ball_speeds_y_initial: [i32; 2],
    pub ball_speeds_x_serve: [i32; 2],
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            goal_width: Params::GOAL_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speeds_x_initial: Params::BALL_SPEEDS_X_INITIAL,
            ball_speeds_y_initial: Params::BALL_SPEEDS_Y_INITIAL,
            ball_speeds_x_serve: Params::BALL_SPEEDS_X_SERVE,
            fps: Params::FPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame duration in milliseconds
    pub fn frame_millis(&self) -> u64 {
        1000 / u64::from(self.fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.table_width, 500);
        assert_eq!(config.table_height, 900);
        assert_eq!(config.wall_thickness, 10);
        assert_eq!(config.goal_width, 200);
        assert_eq!(config.paddle_width, 80);
        assert_eq!(config.ball_size, 30);
    }

    #[test]
    fn test_config_frame_millis() {
        let config = Config::new();
        assert_eq!(config.frame_millis(), 25, "40 fps is 25ms per frame");
    }
}
