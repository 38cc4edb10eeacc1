//! Play-area bounds in entity-local coordinates
//!
//! The origin is the player's resting spot: horizontally centred, three
//! quarters of the way down the canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CULL_MARGIN;

/// Visible play area (immutable once built)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub right: f32,
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Derive bounds from canvas size in pixels
    pub fn from_canvas(width: u32, height: u32) -> Self {
        let origin = Self::origin(width, height);
        Self {
            right: width as f32 - origin.x,
            top: -origin.y,
            left: -origin.x,
            bottom: height as f32 - origin.y,
        }
    }

    /// Canvas-space position of the local origin
    pub fn origin(width: u32, height: u32) -> Vec2 {
        Vec2::new(width as f32 * 0.5, height as f32 * 0.75)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether a block at `pos` should survive culling.
    ///
    /// A block is kept until it is a full margin past any edge.
    pub fn contains_block(&self, pos: Vec2) -> bool {
        pos.x < self.right + CULL_MARGIN
            && pos.x > self.left - CULL_MARGIN
            && pos.y > self.top - CULL_MARGIN
            && pos.y < self.bottom + CULL_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_canvas_bounds() {
        let b = Bounds::from_canvas(720, 480);
        assert_eq!(b.right, 360.0);
        assert_eq!(b.left, -360.0);
        assert_eq!(b.top, -360.0);
        assert_eq!(b.bottom, 120.0);
        assert_eq!(b.width(), 720.0);
        assert_eq!(b.height(), 480.0);
    }

    #[test]
    fn test_contains_block_edges() {
        let b = Bounds::from_canvas(720, 480);
        assert!(b.contains_block(Vec2::ZERO));
        assert!(b.contains_block(Vec2::new(b.right + CULL_MARGIN - 1.0, 0.0)));
        assert!(!b.contains_block(Vec2::new(b.right + CULL_MARGIN, 0.0)));
        assert!(b.contains_block(Vec2::new(b.left - CULL_MARGIN + 1.0, 0.0)));
        assert!(!b.contains_block(Vec2::new(b.left - CULL_MARGIN, 0.0)));
        assert!(!b.contains_block(Vec2::new(0.0, b.top - CULL_MARGIN)));
        assert!(!b.contains_block(Vec2::new(0.0, b.bottom + CULL_MARGIN)));
    }

    proptest! {
        #[test]
        fn prop_contains_block_iff_within_margin(
            width in 1u32..2000,
            height in 1u32..2000,
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
        ) {
            let b = Bounds::from_canvas(width, height);
            let inside_x = x > b.left - CULL_MARGIN && x < b.right + CULL_MARGIN;
            let inside_y = y > b.top - CULL_MARGIN && y < b.bottom + CULL_MARGIN;
            prop_assert_eq!(b.contains_block(Vec2::new(x, y)), inside_x && inside_y);
        }

        #[test]
        fn prop_block_past_any_edge_is_dropped(
            overshoot in 0.0f32..500.0,
            along in -100.0f32..100.0,
        ) {
            let b = Bounds::from_canvas(720, 480);
            let m = CULL_MARGIN + overshoot;
            prop_assert!(!b.contains_block(Vec2::new(b.right + m, along)));
            prop_assert!(!b.contains_block(Vec2::new(b.left - m, along)));
            prop_assert!(!b.contains_block(Vec2::new(along, b.top - m)));
            prop_assert!(!b.contains_block(Vec2::new(along, b.bottom + m)));
        }
    }
}
