//! Directions and facing
//!
//! Screen convention: +x is right, +y is down (up is negative y).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four play-area edges / travel directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

/// Unit vectors indexed by `Direction as usize`
const UNIT: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
];

/// Opposites indexed by `Direction as usize`
const OPPOSITE: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    #[inline]
    pub fn unit(self) -> Vec2 {
        UNIT[self as usize]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        OPPOSITE[self as usize]
    }
}

/// Which side of the player shows the facing indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Forward,
    Right,
    Up,
    Left,
    Down,
}

impl From<Direction> for Facing {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Right => Facing::Right,
            Direction::Up => Facing::Up,
            Direction::Left => Facing::Left,
            Direction::Down => Facing::Down,
        }
    }
}

impl Facing {
    /// The direction being faced, `None` when facing forward
    pub fn direction(self) -> Option<Direction> {
        match self {
            Facing::Forward => None,
            Facing::Right => Some(Direction::Right),
            Facing::Up => Some(Direction::Up),
            Facing::Left => Some(Direction::Left),
            Facing::Down => Some(Direction::Down),
        }
    }
}
