//! BlockBlock game controller
//!
//! Owns the player, the live blocks and the drawing surface, and wires them
//! onto a [`Clock`]:
//! - every frame: draw, advance player, advance blocks, cull, check hits
//! - every `SPAWN_INTERVAL_MS`: spawn one block

use crate::clock::{Clock, Timers};
use crate::config::GameConfig;
use crate::consts::SPAWN_INTERVAL_MS;
use crate::error::ConfigError;
use crate::input::{GameAction, action_for_code};
use crate::renderer::{Surface, draw_scene};
use crate::sim::{Block, Bounds, Facing, Player, Spawner, player_hits_block};

/// Session counters (not persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Blocks that left the play area
    pub dodged: u64,
    /// Frames on which a block first overlapped the player
    pub hits: u64,
}

pub struct BlockBlock {
    width: u32,
    height: u32,
    bounds: Bounds,
    player: Player,
    blocks: Vec<Block>,
    spawner: Spawner,
    surface: Box<dyn Surface>,
    stats: Stats,
    /// Whether the player overlapped a block on the previous frame
    touching: bool,
}

impl BlockBlock {
    /// Build a game and register its frame and spawn intervals on `clock`.
    ///
    /// The spawner is seeded from `config.seed`; `None` seeds it with 0, so
    /// hosts that want varied runs should set a seed (the browser entry uses
    /// the current time).
    pub fn new(
        config: &GameConfig,
        surface: Box<dyn Surface>,
        clock: &mut Clock<BlockBlock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_default();

        clock.add_interval(|game: &mut BlockBlock, _, frame| {
            game.step(frame.delta_time);
            Ok(())
        });
        clock.add_interval_every(SPAWN_INTERVAL_MS, |game: &mut BlockBlock, _| {
            game.spawn_block();
            Ok(())
        });

        log::info!(
            "BlockBlock {}x{} ready (seed {})",
            config.width,
            config.height,
            seed
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            bounds: config.bounds(),
            player: Player::new(),
            blocks: Vec::new(),
            spawner: Spawner::new(seed),
            surface,
            stats: Stats::default(),
            touching: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// One frame: draw the previous state, then advance and cull
    pub fn step(&mut self, delta_time: f32) {
        self.draw();
        self.player.update(delta_time);
        for block in &mut self.blocks {
            block.update(delta_time);
        }
        self.cull_blocks();
        self.check_hits();
    }

    pub fn draw(&mut self) {
        draw_scene(
            self.surface.as_mut(),
            self.width,
            self.height,
            &self.player,
            &self.blocks,
        );
    }

    /// Append one freshly spawned block
    pub fn spawn_block(&mut self) {
        let block = self.spawner.create_random_block(&self.bounds);
        log::debug!(
            "Spawned block from {:?} ({} live)",
            block.from(),
            self.blocks.len() + 1
        );
        self.blocks.push(block);
    }

    /// Insert a block directly (scripted scenarios)
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Drop blocks that have left the play area, keeping order
    pub fn cull_blocks(&mut self) {
        let before = self.blocks.len();
        let bounds = self.bounds;
        self.blocks.retain(|b| bounds.contains_block(b.pos));
        let culled = (before - self.blocks.len()) as u64;
        if culled > 0 {
            self.stats.dodged += culled;
            log::trace!("Culled {} blocks", culled);
        }
    }

    fn check_hits(&mut self) {
        let touching = self
            .blocks
            .iter()
            .any(|b| player_hits_block(&self.player, b));
        if touching && !self.touching {
            self.stats.hits += 1;
            log::debug!("Player hit (total {})", self.stats.hits);
        }
        self.touching = touching;
    }

    /// Handle a key-down by logical code; unknown codes are ignored
    pub fn handle_key(&mut self, code: &str, timers: &mut Timers<BlockBlock>) {
        match action_for_code(code) {
            Some(GameAction::Face(dir)) => self.set_facing(Facing::from(dir), timers),
            Some(GameAction::Jump) => self.player.jump(),
            None => {}
        }
    }

    pub fn set_facing(&mut self, facing: Facing, timers: &mut Timers<BlockBlock>) {
        self.player.set_facing(facing, timers, player_of);
    }
}

fn player_of(game: &mut BlockBlock) -> &mut Player {
    &mut game.player
}
