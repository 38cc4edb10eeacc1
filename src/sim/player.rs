//! The player square: jump arc and sticky facing indicator

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Facing;
use crate::clock::Timers;
use crate::consts::{FACING_REVERT_MS, JUMP_HEIGHT, JUMP_TIME_SCALE, PLAYER_SIZE};

/// Jump state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    Jumping,
}

/// Projection from a scheduler context to the player it owns.
///
/// Deferred facing reverts carry this instead of a reference to the player.
pub type PlayerHandle<C> = fn(&mut C) -> &mut Player;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Local position; ground is y = 0, up is negative y
    pub pos: Vec2,
    facing: Facing,
    /// Facing reverts still queued on the clock
    pending_reverts: u32,
    state: PlayerState,
    /// Milliseconds since the current jump started
    jump_elapsed: f32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn pending_reverts(&self) -> u32 {
        self.pending_reverts
    }

    pub fn jump_elapsed(&self) -> f32 {
        self.jump_elapsed
    }

    /// Side length of the player square
    #[inline]
    pub fn size(&self) -> f32 {
        PLAYER_SIZE
    }

    /// Set the facing indicator and queue its revert to `Forward`.
    ///
    /// Every call queues its own revert; facing only returns to `Forward`
    /// once the last outstanding revert has fired.
    pub fn set_facing<C: 'static>(
        &mut self,
        facing: Facing,
        timers: &mut Timers<C>,
        handle: PlayerHandle<C>,
    ) {
        self.facing = facing;
        self.pending_reverts += 1;
        timers.queue(FACING_REVERT_MS, move |ctx: &mut C, _| {
            handle(ctx).release_facing();
            Ok(())
        });
    }

    /// One queued revert has expired
    pub fn release_facing(&mut self) {
        self.pending_reverts = self.pending_reverts.saturating_sub(1);
        if self.pending_reverts == 0 {
            self.facing = Facing::Forward;
        }
    }

    /// Start a jump; ignored while already airborne
    pub fn jump(&mut self) {
        if self.state != PlayerState::Idle {
            return;
        }
        self.state = PlayerState::Jumping;
        self.jump_elapsed = 0.0;
        log::trace!("Jump started");
    }

    /// Advance the jump arc by `delta_time` milliseconds
    pub fn update(&mut self, delta_time: f32) {
        if self.state != PlayerState::Jumping {
            return;
        }
        self.jump_elapsed += delta_time;
        let y = jump_height_at(self.jump_elapsed);
        if y >= 0.0 && self.jump_elapsed > 0.0 {
            self.pos.y = 0.0;
            self.state = PlayerState::Idle;
            log::trace!("Landed after {:.0}ms", self.jump_elapsed);
        } else {
            self.pos.y = y;
        }
    }
}

/// Closed-form jump arc: `y = -(2·√H − T·S)·T·S`.
///
/// Peaks at `-JUMP_HEIGHT` when `T·S = √H` and returns to 0 at `T·S = 2·√H`.
#[inline]
pub fn jump_height_at(elapsed_ms: f32) -> f32 {
    let ts = elapsed_ms * JUMP_TIME_SCALE;
    -(2.0 * JUMP_HEIGHT.sqrt() - ts) * ts
}

/// Total airtime of one jump in milliseconds
pub fn jump_duration_ms() -> f32 {
    2.0 * JUMP_HEIGHT.sqrt() / JUMP_TIME_SCALE
}
