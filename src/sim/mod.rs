//! Simulation module
//!
//! Entity kinematics, spawning and bounds. Pure and deterministic:
//! - Time comes in as milliseconds from the clock only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod block;
pub mod bounds;
pub mod collision;
pub mod direction;
pub mod player;
pub mod spawner;

pub use block::Block;
pub use bounds::Bounds;
pub use collision::{Aabb, player_hits_block};
pub use direction::{Direction, Facing};
pub use player::{Player, PlayerHandle, PlayerState, jump_duration_ms, jump_height_at};
pub use spawner::{Spawner, block_for_roll, spawn_edge_for_roll};
