//! Brick grid geometry
//!
//! The playfield carries a fixed columns × rows grid of bricks. Each brick's
//! rectangle is computed once from its row/column slot; only the status
//! changes during play.

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict interior test - points on the edge do not count, matching the
    /// open-interval brick hit test of the simulation.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }
}

/// Whether a brick is still in play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A single destructible brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// The full brick layout, recreated all-Active on game start and level clear
#[derive(Debug, Clone)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out `BRICK_COLUMNS` × `BRICK_ROWS` bricks from the configured
    /// offsets and padding, all Active.
    pub fn new() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_COLUMNS * BRICK_ROWS);
        for column in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                let x = column as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT;
                let y = row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP;
                bricks.push(Brick {
                    column,
                    row,
                    rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
                    status: BrickStatus::Active,
                });
            }
        }
        Self { bricks }
    }

    /// Restore every brick to Active (level clear, game start)
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.status = BrickStatus::Active;
        }
    }

    /// Number of bricks still Active
    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Look up a brick by its grid slot
    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        self.bricks
            .iter()
            .find(|b| b.column == column && b.row == row)
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}
