//! Keyboard input handling
//!
//! Terminals deliver key events, not key state. When the terminal reports
//! release events the held set is exact; otherwise a key stays held for a
//! short window after its last press or repeat.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{FrameInput, PaddleIntent};

use crate::error::ClientError;

/// How long a key counts as held without a release event
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Start,
    Reset,
}

/// Map a terminal key to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::TopLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::TopRight),
        KeyCode::Left => Some(Key::BottomLeft),
        KeyCode::Right => Some(Key::BottomRight),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Reset),
        _ => None,
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// What the event loop must do after draining pending events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    None,
    Resized,
    Quit,
}

/// Level state of the game keys
#[derive(Debug, Clone)]
pub struct KeyState {
    held: HashMap<Key, Instant>,
    release_events: bool,
}

impl KeyState {
    pub fn new(release_events: bool) -> Self {
        Self {
            held: HashMap::new(),
            release_events,
        }
    }

    /// Apply one key event. Returns true if the event asks to quit.
    pub fn handle(&mut self, event: &KeyEvent, now: Instant) -> bool {
        if event.kind != KeyEventKind::Release && is_quit(event) {
            return true;
        }
        if let Some(key) = map_key(event.code) {
            match event.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.held.insert(key, now);
                }
                KeyEventKind::Release => {
                    self.held.remove(&key);
                }
            }
        }
        false
    }

    pub fn is_down(&self, key: Key, now: Instant) -> bool {
        match self.held.get(&key) {
            Some(_) if self.release_events => true,
            Some(seen) => now.saturating_duration_since(*seen) < HOLD_WINDOW,
            None => false,
        }
    }

    /// Sample every game key once for this frame
    pub fn sample(&self, now: Instant) -> FrameInput {
        FrameInput {
            top: PaddleIntent {
                left: self.is_down(Key::TopLeft, now),
                right: self.is_down(Key::TopRight, now),
            },
            bottom: PaddleIntent {
                left: self.is_down(Key::BottomLeft, now),
                right: self.is_down(Key::BottomRight, now),
            },
            start: self.is_down(Key::Start, now),
            reset: self.is_down(Key::Reset, now),
        }
    }
}

/// Drain every pending terminal event without blocking
pub fn drain_events(keys: &mut KeyState, now: Instant) -> Result<InputSignal, ClientError> {
    let mut signal = InputSignal::None;
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key_event) => {
                if keys.handle(&key_event, now) {
                    return Ok(InputSignal::Quit);
                }
            }
            Event::Resize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
                signal = InputSignal::Resized;
            }
            _ => {}
        }
    }
    Ok(signal)
}
