use glam::IVec2;
use hecs::{Entity, World};

use crate::state::{PaddleView, Snapshot, TableView};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, FrameInput, MatchFsm, MatchState,
    Paddle, Scoreboard, ServeSource, Side, Table,
};

/// A local two-player match: owns every entity and advances one frame at a time
pub struct Match {
    world: World,
    table: Table,
    config: Config,
    scores: Scoreboard,
    events: Events,
    fsm: MatchFsm,
    serve: Box<dyn ServeSource>,
    ball: Entity,
    paddles: [Entity; 2],
    frame: u64,
}

impl Match {
    pub fn new(config: Config, mut serve: Box<dyn ServeSource>) -> Self {
        let table = Table::new(&config);
        let mut world = World::new();

        // Create paddles
        let size = IVec2::new(config.paddle_width, config.paddle_height);
        let top = create_paddle(&mut world, &table, Side::Top, size);
        let bottom = create_paddle(&mut world, &table, Side::Bottom, size);

        // Create ball
        let ball = Ball::spawn(
            &table,
            config.ball_size,
            &config.ball_speeds_x_initial,
            &config.ball_speeds_y_initial,
            serve.as_mut(),
        );
        let ball = create_ball(&mut world, ball.rect, ball.vel);

        let scores = Scoreboard::new(
            table.score_anchor(Side::Top),
            table.score_anchor(Side::Bottom),
        );

        Self {
            world,
            table,
            config,
            scores,
            events: Events::new(),
            fsm: MatchFsm::new(),
            serve,
            ball,
            paddles: [top, bottom],
            frame: 0,
        }
    }

    /// Advance exactly one frame using a single input sample
    pub fn frame(&mut self, input: &FrameInput) -> &Events {
        step(
            &mut self.world,
            &self.table,
            &self.config,
            &mut self.fsm,
            &mut self.scores,
            &mut self.events,
            input,
            self.serve.as_mut(),
        );
        self.frame += 1;
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        let playing = self.fsm.is_playing();
        Snapshot {
            frame: self.frame,
            state: self.fsm.state(),
            table: TableView::from(&self.table),
            ball: playing.then(|| self.ball().rect),
            paddles: [
                PaddleView::from(&self.paddle(Side::Top)),
                PaddleView::from(&self.paddle(Side::Bottom)),
            ],
            scores: self.scores,
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(crate::Rect::new(0, 0, 0, 0), IVec2::ZERO))
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Top => self.paddles[0],
            Side::Bottom => self.paddles[1],
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| {
                Paddle::new(side, self.table.paddle_spawn(side), IVec2::ZERO)
            })
    }
}
