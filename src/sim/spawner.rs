//! Random block spawning on the play-area edges

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::block::Block;
use super::bounds::Bounds;
use super::direction::Direction;
use crate::consts::BLOCK_SPEED;

/// Seeded source of new blocks
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
    spawned: u64,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawned: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of blocks created so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Draw one uniform value and turn it into a block
    pub fn create_random_block(&mut self, bounds: &Bounds) -> Block {
        let roll: f32 = self.rng.random();
        self.spawned += 1;
        block_for_roll(roll, bounds)
    }
}

/// Map a roll in `[0, 1)` to an edge in three equal parts: right, top, left.
///
/// The bottom edge is never chosen.
pub fn spawn_edge_for_roll(roll: f32) -> Direction {
    if roll < 1.0 / 3.0 {
        Direction::Right
    } else if roll < 2.0 / 3.0 {
        Direction::Up
    } else {
        Direction::Left
    }
}

/// Build the block for a roll: on the chosen edge, centred on the other axis
pub fn block_for_roll(roll: f32, bounds: &Bounds) -> Block {
    let from = spawn_edge_for_roll(roll);
    let (x, y) = match from {
        Direction::Right => (bounds.right, 0.0),
        Direction::Up => (0.0, bounds.top),
        Direction::Left => (bounds.left, 0.0),
        Direction::Down => (0.0, bounds.bottom),
    };
    log::trace!("Spawning block from {:?} at ({}, {})", from, x, y);
    Block::new(x, y, BLOCK_SPEED, from)
}
