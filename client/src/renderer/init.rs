//! Terminal acquisition and teardown

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::ResetColor;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::execute;

use crate::error::ClientError;

pub const WINDOW_TITLE: &str = "Air Hockey";

/// Raw-mode alternate screen, restored when dropped.
///
/// Restoration runs on every exit path that unwinds: normal return, `?`
/// errors and panics.
pub struct TerminalSession {
    release_events: bool,
}

impl TerminalSession {
    pub fn acquire() -> Result<Self, ClientError> {
        enable_raw_mode()?;
        // From here on, a failed step still restores through Drop
        let mut session = Self {
            release_events: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide, SetTitle(WINDOW_TITLE))?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            session.release_events = true;
        }

        tracing::info!(
            release_events = session.release_events,
            "terminal acquired"
        );
        Ok(session)
    }

    /// Whether the terminal reports key release events
    pub fn reports_key_release(&self) -> bool {
        self.release_events
    }

    pub fn size(&self) -> Result<(u16, u16), ClientError> {
        Ok(terminal::size()?)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.release_events {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        restore_terminal();
        tracing::info!("terminal restored");
    }
}

/// Best-effort return to a cooked, visible terminal
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}

/// Restore the terminal before the panic message prints, so it is readable
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}
