//! Per-frame simulation step
//!
//! One call advances the game by a single animation frame: paddle input,
//! brick collisions, level-clear check, wall/paddle/floor collisions, then
//! the position update. Events describing what changed are returned to the
//! caller; the step never invokes callbacks itself.

use super::collision;
use super::grid::BrickStatus;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Pressed-input flags for a single frame
///
/// Key handlers flip these between frames; the step only reads them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game by one frame.
///
/// Outside `Running` this is a no-op: `Paused` waits for the respawn
/// acknowledgement and `GameOver` is terminal.
pub fn step(state: &mut GameState, input: &FrameInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    // 1. Horizontal input, clamped to the field
    if input.left {
        state.paddle.shift(-PADDLE_STEP);
    }
    if input.right {
        state.paddle.shift(PADDLE_STEP);
    }

    // 2. Brick collisions: ball center against each active brick rectangle.
    // A brick destroyed during this scan still counts toward `remaining`,
    // so the level-clear fires on the frame after the last brick falls.
    let mut remaining = 0usize;
    for brick in state.bricks.iter_mut() {
        if !brick.is_active() {
            continue;
        }
        remaining += 1;
        if brick.rect.contains(state.ball.pos) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.status = BrickStatus::Destroyed;
            state.score += POINTS_PER_BRICK;
            events.push(GameEvent::ScoreChanged(state.score));
        }
    }

    // 3. Level clear: speed up and restore the grid
    if remaining == 0 {
        state.level += 1;
        state.ball.vel *= LEVEL_SPEEDUP;
        state.bricks.reset();
        events.push(GameEvent::LevelChanged(state.level));
    }

    // 4. Walls: reflect before the position advances
    let ball = state.ball;
    if collision::hits_side_wall(ball.pos, ball.vel, ball.radius) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if collision::hits_ceiling(ball.pos, state.ball.vel, ball.radius) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if collision::passes_floor(ball.pos, state.ball.vel, ball.radius) {
        // 5. Floor line: paddle bounce or life loss
        if collision::catches_ball(&state.paddle, ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            state.lives -= 1;
            events.push(GameEvent::LivesChanged(state.lives));
            if state.lives > 0 {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::LifeLost {
                    remaining: state.lives,
                });
            } else {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::GameOver {
                    score: state.score,
                    lives: state.lives,
                    level: state.level,
                });
                log::info!(
                    "game over: score {} level {}",
                    state.score,
                    state.level
                );
                // Terminal: the ball does not advance
                return events;
            }
        }
    }

    // 6. Advance
    state.ball.pos += state.ball.vel;

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(PADDLE_DEFAULT_WIDTH);
        state.start();
        state
    }

    #[test]
    fn test_free_flight_advances_without_events() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(240.0, 160.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.ball.pos, Vec2::new(242.0, 158.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_brick_hit_scores_and_flips_vertical() {
        let mut state = running_state();
        // Inside the row 0 / column 0 brick
        let target = state.bricks.get(0, 0).unwrap().rect;
        state.ball.pos = Vec2::new(target.x + 5.0, target.y + 5.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = step(&mut state, &FrameInput::default());

        assert_eq!(
            state.bricks.get(0, 0).unwrap().status,
            BrickStatus::Destroyed
        );
        assert_eq!(state.score, POINTS_PER_BRICK);
        assert!(events.contains(&GameEvent::ScoreChanged(POINTS_PER_BRICK)));
        // Vertical velocity flipped, position advanced with the new velocity
        assert_eq!(state.ball.vel.y, 2.0);
        // The other 14 bricks are untouched
        assert_eq!(
            state.bricks.active_count(),
            BRICK_COLUMNS * BRICK_ROWS - 1
        );
    }

    #[test]
    fn test_only_one_brick_per_frame() {
        let mut state = running_state();
        let target = state.bricks.get(2, 1).unwrap().rect;
        state.ball.pos = Vec2::new(target.x + 10.0, target.y + 10.0);

        step(&mut state, &FrameInput::default());
        assert_eq!(state.bricks.active_count(), BRICK_COLUMNS * BRICK_ROWS - 1);
        assert_eq!(state.score, POINTS_PER_BRICK);
    }

    #[test]
    fn test_level_clear_speeds_up_and_restores_grid() {
        let mut state = running_state();
        // Park the ball away from bricks, paddle and walls
        state.ball.pos = Vec2::new(240.0, 200.0);
        state.ball.vel = Vec2::new(2.0, -2.0);
        for brick in state.bricks.iter_mut() {
            brick.status = BrickStatus::Destroyed;
        }

        let events = step(&mut state, &FrameInput::default());

        assert_eq!(state.level, 2);
        assert!(events.contains(&GameEvent::LevelChanged(2)));
        assert_eq!(state.bricks.active_count(), BRICK_COLUMNS * BRICK_ROWS);
        assert!((state.ball.vel.x - 2.4).abs() < 1e-5);
        assert!((state.ball.vel.y + 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_level_clear_fires_frame_after_last_brick() {
        let mut state = running_state();
        state.ball.vel = Vec2::new(2.0, -2.0);
        // Leave exactly one brick and put the ball inside it
        let target = state.bricks.get(4, 2).unwrap().rect;
        for brick in state.bricks.iter_mut() {
            if !(brick.column == 4 && brick.row == 2) {
                brick.status = BrickStatus::Destroyed;
            }
        }
        state.ball.pos = Vec2::new(target.x + 5.0, target.y + 5.0);

        // Frame 1: destroys the last brick but does not level up yet
        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.level, 1);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::LevelChanged(_))));

        // Frame 2: grid is empty at scan time, level advances exactly once
        state.ball.pos = Vec2::new(240.0, 200.0);
        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.level, 2);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelChanged(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = running_state();
        state.ball.pos = Vec2::new(FIELD_WIDTH - BALL_RADIUS - 1.0, 160.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        step(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel.x, -2.0);
        assert!(state.ball.pos.x <= FIELD_WIDTH - BALL_RADIUS);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = running_state();
        let paddle_center = state.paddle.x + state.paddle.width / 2.0;
        state.ball.pos = Vec2::new(paddle_center, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(0.0, 2.0);

        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(events.is_empty());
    }

    #[test]
    fn test_floor_miss_pauses_with_life_lost() {
        let mut state = running_state();
        // Ball far from the paddle, about to cross the floor
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(400.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(0.0, 2.0);

        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(
            events,
            vec![
                GameEvent::LivesChanged(STARTING_LIVES - 1),
                GameEvent::LifeLost {
                    remaining: STARTING_LIVES - 1
                },
            ]
        );

        // Paused: further steps are no-ops until respawn
        let pos = state.ball.pos;
        assert!(step(&mut state, &FrameInput::default()).is_empty());
        assert_eq!(state.ball.pos, pos);

        state.respawn();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ball.pos, Ball::at_serve().pos);
    }

    #[test]
    fn test_last_life_ends_session() {
        let mut state = running_state();
        state.lives = 1;
        state.score = 120;
        state.level = 3;
        state.paddle.x = 0.0;
        let miss = Vec2::new(400.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.pos = miss;
        state.ball.vel = Vec2::new(0.0, 2.0);

        let events = step(&mut state, &FrameInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            events,
            vec![
                GameEvent::LivesChanged(0),
                GameEvent::GameOver {
                    score: 120,
                    lives: 0,
                    level: 3
                },
            ]
        );
        // Terminal: ball frozen, later steps mutate nothing
        assert_eq!(state.ball.pos, miss);
        let snapshot = state.clone();
        assert!(step(&mut state, &FrameInput::default()).is_empty());
        assert_eq!(state.score, snapshot.score);
        assert_eq!(state.ball.pos, snapshot.ball.pos);
    }

    #[test]
    fn test_paddle_input_clamped() {
        let mut state = running_state();
        let input = FrameInput {
            left: true,
            right: false,
        };
        for _ in 0..200 {
            step(&mut state, &input);
            // With the paddle pinned to one side the ball will miss; keep
            // the session alive so every frame actually moves the paddle
            if state.phase == GamePhase::Paused {
                state.respawn();
            }
            assert!(state.paddle.x >= 0.0);
        }
        assert_eq!(state.paddle.x, 0.0);

        let input = FrameInput {
            left: false,
            right: true,
        };
        for _ in 0..200 {
            step(&mut state, &input);
            if state.phase == GamePhase::Paused {
                state.respawn();
            }
            assert!(state.paddle.x <= FIELD_WIDTH - state.paddle.width);
        }
        assert_eq!(state.paddle.x, FIELD_WIDTH - state.paddle.width);
    }

    #[test]
    fn test_idle_state_does_not_step() {
        let mut state = GameState::new(PADDLE_DEFAULT_WIDTH);
        let pos = state.ball.pos;
        assert!(step(&mut state, &FrameInput::default()).is_empty());
        assert_eq!(state.ball.pos, pos);
    }
}
