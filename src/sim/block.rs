//! Obstacle blocks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::BLOCK_SIZE;

/// A block sliding across the play area in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    /// Pixels per millisecond
    pub speed: f32,
    from: Direction,
    moving: Direction,
}

impl Block {
    /// Create a block entering from the `from` edge; it travels the opposite way
    pub fn new(x: f32, y: f32, speed: f32, from: Direction) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed: speed.max(0.0),
            from,
            moving: from.opposite(),
        }
    }

    /// Edge the block was spawned from
    pub fn from(&self) -> Direction {
        self.from
    }

    /// Direction of travel
    pub fn moving(&self) -> Direction {
        self.moving
    }

    /// Advance linearly by `delta_time` milliseconds
    pub fn update(&mut self, delta_time: f32) {
        self.pos += self.moving.unit() * (self.speed * delta_time);
    }

    /// Half the side length
    #[inline]
    pub fn half_size(&self) -> f32 {
        BLOCK_SIZE / 2.0
    }
}
