//! Collision predicates for the rectangular playfield
//!
//! All tests are predictive: they look at where the ball center would be
//! next frame and reflect velocity before the position advances, which is
//! what keeps the ball inside the field bounds between frames. Brick hits
//! are the exception - they test the current ball center against the brick
//! rectangle, ignoring the ball radius (a deliberate quirk carried over
//! from the classic loop).

use glam::Vec2;

use super::state::Paddle;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Would the ball center cross either side wall next frame?
#[inline]
pub fn hits_side_wall(ball_pos: Vec2, ball_vel: Vec2, radius: f32) -> bool {
    let next_x = ball_pos.x + ball_vel.x;
    next_x > FIELD_WIDTH - radius || next_x < radius
}

/// Would the ball center cross the ceiling next frame?
#[inline]
pub fn hits_ceiling(ball_pos: Vec2, ball_vel: Vec2, radius: f32) -> bool {
    ball_pos.y + ball_vel.y < radius
}

/// Would the ball center cross the floor line next frame?
#[inline]
pub fn passes_floor(ball_pos: Vec2, ball_vel: Vec2, radius: f32) -> bool {
    ball_pos.y + ball_vel.y > FIELD_HEIGHT - radius
}

/// Is the ball center strictly within the paddle's horizontal span?
///
/// Tested only when the ball is about to pass the floor line. Uses the
/// current x, not the next one.
#[inline]
pub fn catches_ball(paddle: &Paddle, ball_x: f32) -> bool {
    ball_x > paddle.x && ball_x < paddle.x + paddle.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_RADIUS;

    #[test]
    fn test_side_wall_reflection_points() {
        // Heading right into the wall
        let pos = Vec2::new(FIELD_WIDTH - BALL_RADIUS - 1.0, 100.0);
        assert!(hits_side_wall(pos, Vec2::new(2.0, 0.0), BALL_RADIUS));
        // Same spot heading away
        assert!(!hits_side_wall(pos, Vec2::new(-2.0, 0.0), BALL_RADIUS));
        // Left wall
        let pos = Vec2::new(BALL_RADIUS + 1.0, 100.0);
        assert!(hits_side_wall(pos, Vec2::new(-2.0, 0.0), BALL_RADIUS));
    }

    #[test]
    fn test_ceiling() {
        let pos = Vec2::new(240.0, BALL_RADIUS + 1.0);
        assert!(hits_ceiling(pos, Vec2::new(0.0, -2.0), BALL_RADIUS));
        assert!(!hits_ceiling(pos, Vec2::new(0.0, 2.0), BALL_RADIUS));
    }

    #[test]
    fn test_floor() {
        let pos = Vec2::new(240.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        assert!(passes_floor(pos, Vec2::new(0.0, 2.0), BALL_RADIUS));
        assert!(!passes_floor(pos, Vec2::new(0.0, -2.0), BALL_RADIUS));
    }

    #[test]
    fn test_paddle_span_is_strict() {
        let paddle = Paddle::new(100.0, 75.0);
        assert!(catches_ball(&paddle, 101.0));
        assert!(catches_ball(&paddle, 174.0));
        // Exactly on either edge misses
        assert!(!catches_ball(&paddle, 100.0));
        assert!(!catches_ball(&paddle, 175.0));
        assert!(!catches_ball(&paddle, 50.0));
    }
}
