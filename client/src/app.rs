//! The frame loop: poll input, step the match, draw, wait

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use game_core::{Config, GameRng, Match, MatchState};

use crate::clock::FrameClock;
use crate::error::ClientError;
use crate::input::{drain_events, InputSignal, KeyState};
use crate::renderer::{draw_frame, fit_scale, Renderer, TerminalSession, MAX_SCALE};

pub const STATUS_IDLE: &str = "P play  R reset  A/D red  \u{2190}/\u{2192} blue  Esc quit";
pub const STATUS_PLAYING: &str = "R reset  A/D red  \u{2190}/\u{2192} blue  Esc quit";
pub const STATUS_TOO_SMALL: &str = "terminal too small, enlarge it  Esc quit";

pub fn status_line(state: MatchState, cropped: bool) -> &'static str {
    if cropped {
        return STATUS_TOO_SMALL;
    }
    match state {
        MatchState::Idle => STATUS_IDLE,
        MatchState::Playing => STATUS_PLAYING,
    }
}

/// Refit the renderer after a resize. A terminal too small for the table
/// keeps the coarsest scale and crops the drawing; returns true when cropped.
pub fn refit<W: Write>(
    renderer: &mut Renderer<W>,
    config: &Config,
    cols: u16,
    rows: u16,
) -> bool {
    renderer.set_viewport(cols, rows);
    match fit_scale(config.table_width, config.table_height, cols, rows) {
        Ok(scale) => {
            renderer.rescale(scale);
            false
        }
        Err(err) => {
            tracing::warn!(%err, "drawing cropped");
            renderer.rescale(MAX_SCALE);
            true
        }
    }
}

/// Run until the quit key is pressed
pub fn run(session: &TerminalSession) -> Result<(), ClientError> {
    let config = Config::default();
    let (cols, rows) = session.size()?;
    let scale = fit_scale(config.table_width, config.table_height, cols, rows)?;
    tracing::info!(cols, rows, scale, "table fitted to terminal");

    let mut renderer: Renderer<Stdout> =
        Renderer::new(io::stdout(), config.table_width, config.table_height, scale);
    renderer.set_viewport(cols, rows);
    let mut cropped = false;
    let mut keys = KeyState::new(session.reports_key_release());
    let mut clock = FrameClock::new(Duration::from_millis(config.frame_millis()));
    let mut game = Match::new(config.clone(), Box::new(GameRng::from_entropy()));

    loop {
        let now = Instant::now();
        match drain_events(&mut keys, now)? {
            InputSignal::Quit => {
                tracing::info!(
                    frames = game.frame_count(),
                    top = game.scores().top.value,
                    bottom = game.scores().bottom.value,
                    "quit"
                );
                return Ok(());
            }
            InputSignal::Resized => {
                let (cols, rows) = session.size()?;
                cropped = refit(&mut renderer, &config, cols, rows);
            }
            InputSignal::None => {}
        }

        let input = keys.sample(now);
        game.frame(&input);

        renderer.set_status(status_line(game.state(), cropped));
        draw_frame(&mut renderer, &game.snapshot())?;

        clock.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{FixedServe, FrameInput};

    #[test]
    fn test_status_line_per_state() {
        assert!(status_line(MatchState::Idle, false).starts_with("P play"));
        assert!(!status_line(MatchState::Playing, false).contains("P play"));
        assert_eq!(status_line(MatchState::Playing, true), STATUS_TOO_SMALL);
    }

    #[test]
    fn test_refit_to_larger_terminal() {
        let config = Config::new();
        let mut renderer = Renderer::new(Vec::new(), 500, 900, 20);
        assert!(!refit(&mut renderer, &config, 200, 200));
    }

    #[test]
    fn test_shrinking_below_minimum_keeps_drawing() {
        let config = Config::new();
        let mut game = Match::new(config.clone(), Box::new(FixedServe::new(&[7, 20])));
        let mut renderer = Renderer::new(Vec::new(), 500, 900, 20);

        // 13 columns are needed even at the coarsest scale
        assert!(refit(&mut renderer, &config, 10, 8));
        renderer.set_status(status_line(game.state(), true));
        for _ in 0..3 {
            game.frame(&FrameInput::new());
            draw_frame(&mut renderer, &game.snapshot()).unwrap();
        }

        // Back to a usable size
        assert!(!refit(&mut renderer, &config, 80, 24));
        draw_frame(&mut renderer, &game.snapshot()).unwrap();
    }
}
