//! Game state and core simulation types

use glam::Vec2;

use super::grid::BrickGrid;
use crate::consts::*;

/// Current phase of gameplay
///
/// `Idle → Running → (Paused ⇄ Running) → GameOver`. GameOver is terminal;
/// a new session goes through `GameState::start` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start command
    Idle,
    /// Active gameplay, one step per animation frame
    Running,
    /// Life lost, waiting for the respawn acknowledgement
    Paused,
    /// Lives exhausted, no further steps mutate state
    GameOver,
}

/// The ball - owned exclusively by the simulation
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the serve position: horizontal center, resting just above the
    /// paddle line, at the fixed serve velocity.
    pub fn at_serve() -> Self {
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0,
                FIELD_HEIGHT - PADDLE_HEIGHT - BALL_RADIUS,
            ),
            vel: Vec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle. Only x moves; y sits on the floor line.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
}

impl Paddle {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    /// Paddle centered in the field
    pub fn centered(width: f32) -> Self {
        Self::new((FIELD_WIDTH - width) / 2.0, width)
    }

    /// Fixed vertical position (top edge of the paddle)
    #[inline]
    pub fn y(&self) -> f32 {
        FIELD_HEIGHT - PADDLE_HEIGHT
    }

    /// Move by `delta`, clamped to the field
    pub fn shift(&mut self, delta: f32) {
        self.x = (self.x + delta).clamp(0.0, FIELD_WIDTH - self.width);
    }
}

/// Events emitted by a simulation step, consumed by the caller's dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    LevelChanged(u32),
    /// A life was lost but lives remain; simulation paused for respawn
    LifeLost { remaining: u32 },
    /// Session ended; no further frames should be scheduled
    GameOver { score: u32, lives: u32, level: u32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
}

impl GameState {
    /// Fresh state in `Idle`, waiting for `start`
    pub fn new(paddle_width: f32) -> Self {
        let width = paddle_width.clamp(PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH);
        Self {
            phase: GamePhase::Idle,
            ball: Ball::at_serve(),
            paddle: Paddle::centered(width),
            bricks: BrickGrid::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
        }
    }

    /// Begin (or fully restart) a session.
    ///
    /// Resets ball, paddle, grid and all counters, enters `Running`, and
    /// returns the initial counter events so the HUD starts in sync.
    pub fn start(&mut self) -> Vec<GameEvent> {
        let width = self.paddle.width;
        self.ball = Ball::at_serve();
        self.paddle = Paddle::centered(width);
        self.bricks.reset();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.phase = GamePhase::Running;

        log::info!("session started (paddle width {})", width);

        vec![
            GameEvent::ScoreChanged(0),
            GameEvent::LivesChanged(STARTING_LIVES),
            GameEvent::LevelChanged(1),
        ]
    }

    /// Acknowledge a lost life: put the ball back on the serve position and
    /// resume. Only meaningful in `Paused`.
    pub fn respawn(&mut self) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.ball = Ball::at_serve();
        self.phase = GamePhase::Running;
    }

    /// Touch input: move the paddle by a horizontal delta, clamped.
    ///
    /// Called from input handlers between frames; the next step sees the
    /// updated position.
    pub fn nudge_paddle(&mut self, delta: f32) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.paddle.shift(delta);
    }

    /// Whether the frame loop should keep scheduling steps
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
