//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! platform-free:
//! - One step per animation frame, no internal scheduling
//! - No rendering or DOM dependencies
//! - Events are returned from `step`, never invoked inline

pub mod collision;
pub mod grid;
pub mod state;
pub mod step;

pub use collision::{catches_ball, hits_ceiling, hits_side_wall, passes_floor};
pub use grid::{Brick, BrickGrid, BrickStatus, Rect};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use step::{FrameInput, step};
