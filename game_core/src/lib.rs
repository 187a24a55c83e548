pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Run one frame of the Air Hockey simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    table: &Table,
    config: &Config,
    fsm: &mut MatchFsm,
    scores: &mut Scoreboard,
    events: &mut Events,
    input: &FrameInput,
    serve: &mut dyn ServeSource,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Start/resume, ignored while already playing
    if input.start && fsm.can_transition(MatchAction::Start) {
        let result = fsm.transition(MatchAction::Start);
        tracing::info!(from = ?result.from_state, to = ?result.to_state, "match started");
    }

    // 2. Reset is level-triggered: holding it re-resets every frame
    if input.reset {
        let result = fsm.transition(MatchAction::Reset);
        scores.reset();
        restart_entities(world, table, config, serve);
        if result.from_state != result.to_state {
            tracing::info!(from = ?result.from_state, to = ?result.to_state, "match reset");
        } else {
            tracing::debug!("match reset while idle");
        }
    }

    // 3. Paddles move in every state
    ingest_inputs(world, input);
    move_paddles(world, table, config);

    if !fsm.is_playing() {
        return;
    }

    // 4. Move ball, reflecting off walls
    move_ball(world, table, events);

    // 5. Ball vs paddles
    check_collisions(world, events);

    // 6. Ball through a goal gap
    check_scoring(world, table, config, scores, events, serve);
}

/// Helper to create a paddle entity at its side's spawn point
pub fn create_paddle(world: &mut World, table: &Table, side: Side, size: IVec2) -> hecs::Entity {
    let paddle = Paddle::new(side, table.paddle_spawn(side), size);
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}
