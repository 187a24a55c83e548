use glam::IVec2;
use rand::seq::SliceRandom;

use crate::components::{PaddleIntent, Side};

/// One player's score and where it is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
    pub anchor: IVec2,
}

impl Score {
    pub fn new(anchor: IVec2) -> Self {
        Self { value: 0, anchor }
    }

    pub fn increase(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Both players' scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub top: Score,
    pub bottom: Score,
}

impl Scoreboard {
    pub fn new(top_anchor: IVec2, bottom_anchor: IVec2) -> Self {
        Self {
            top: Score::new(top_anchor),
            bottom: Score::new(bottom_anchor),
        }
    }

    pub fn get(&self, side: Side) -> &Score {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Score {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    pub fn reset(&mut self) {
        self.top.reset();
        self.bottom.reset();
    }
}

/// Picks a serve speed from a fixed set of discrete choices
pub trait ServeSource {
    fn pick(&mut self, choices: &[i32]) -> i32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl ServeSource for GameRng {
    fn pick(&mut self, choices: &[i32]) -> i32 {
        choices.choose(&mut self.0).copied().unwrap_or_default()
    }
}

/// Deterministic serve source that replays a script, cycling when exhausted.
///
/// Ignores the offered choices; useful for replays and tests.
#[derive(Debug, Clone)]
pub struct FixedServe {
    script: Vec<i32>,
    next: usize,
}

impl FixedServe {
    pub fn new(script: &[i32]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl ServeSource for FixedServe {
    fn pick(&mut self, choices: &[i32]) -> i32 {
        if self.script.is_empty() {
            return choices.first().copied().unwrap_or_default();
        }
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub top_scored: bool,
    pub bottom_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.top_scored = false;
        self.bottom_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Input sampled once for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub top: PaddleIntent,
    pub bottom: PaddleIntent,
    pub start: bool,
    pub reset: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }
}
