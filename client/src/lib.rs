//! Terminal client for the Air Hockey game
//!
//! Supplies the collaborators `game_core` leaves out: a renderer, keyboard
//! polling, frame pacing and terminal lifetime.

pub mod app;
pub mod clock;
pub mod error;
pub mod input;
pub mod logging;
pub mod renderer;

pub use error::ClientError;
