//! Box overlap between the player and blocks

use glam::Vec2;

use super::block::Block;
use super::player::Player;

/// Axis-aligned box given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The player stands on its position: bottom edge at `pos.y`, centred on `pos.x`
pub fn player_box(player: &Player) -> Aabb {
    let half = player.size() / 2.0;
    Aabb {
        min: Vec2::new(player.pos.x - half, player.pos.y - player.size()),
        max: Vec2::new(player.pos.x + half, player.pos.y),
    }
}

/// Blocks are centred on their position
pub fn block_box(block: &Block) -> Aabb {
    let half = Vec2::splat(block.half_size());
    Aabb {
        min: block.pos - half,
        max: block.pos + half,
    }
}

pub fn player_hits_block(player: &Player, block: &Block) -> bool {
    player_box(player).overlaps(&block_box(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::direction::Direction;

    #[test]
    fn test_block_on_ground_hits_idle_player() {
        let player = Player::new();
        let block = Block::new(0.0, 0.0, 0.0, Direction::Right);
        assert!(player_hits_block(&player, &block));
    }

    #[test]
    fn test_far_block_misses() {
        let player = Player::new();
        let block = Block::new(200.0, 0.0, 0.0, Direction::Right);
        assert!(!player_hits_block(&player, &block));
    }

    #[test]
    fn test_jumping_player_clears_low_block() {
        let mut player = Player::new();
        player.pos.y = -80.0;
        let block = Block::new(0.0, 0.0, 0.0, Direction::Right);
        assert!(!player_hits_block(&player, &block));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb { min: Vec2::ZERO, max: Vec2::splat(10.0) };
        let b = Aabb { min: Vec2::new(10.0, 0.0), max: Vec2::new(20.0, 10.0) };
        assert!(!a.overlaps(&b));
    }
}
