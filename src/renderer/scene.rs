//! Per-frame scene drawing
//!
//! Fixed order: background, ground line, player, then each block.

use glam::Vec2;

use super::Surface;
use crate::sim::{Block, Bounds, Direction, Player};

const BACKGROUND: &str = "black";
const GROUND: &str = "#444";
const PLAYER: &str = "white";
const FACING: &str = "red";
const BLOCK: &str = "yellow";

/// Draw one frame. `width`/`height` are the canvas size in pixels.
pub fn draw_scene(
    surface: &mut dyn Surface,
    width: u32,
    height: u32,
    player: &Player,
    blocks: &[Block],
) {
    surface.set_fill_style(BACKGROUND);
    surface.fill_rect(0.0, 0.0, width as f64, height as f64);

    let origin = Bounds::origin(width, height);
    let bounds = Bounds::from_canvas(width, height);

    surface.save();
    surface.translate(origin.x as f64, origin.y as f64);

    draw_ground(surface, &bounds);
    draw_player(surface, player);
    for block in blocks {
        draw_block(surface, block);
    }

    surface.restore();
}

fn draw_ground(surface: &mut dyn Surface, bounds: &Bounds) {
    surface.set_stroke_style(GROUND);
    surface.set_line_width(1.0);
    surface.begin_path();
    surface.move_to(bounds.left as f64, 0.0);
    surface.line_to(bounds.right as f64, 0.0);
    surface.stroke();
}

fn draw_player(surface: &mut dyn Surface, player: &Player) {
    let size = player.size() as f64;
    let half = size / 2.0;

    surface.save();
    surface.translate(player.pos.x as f64, player.pos.y as f64);

    surface.set_stroke_style(PLAYER);
    surface.set_line_width(2.0);
    surface.stroke_rect(-half, -size, size, size);

    if let Some(dir) = player.facing().direction() {
        let (a, b) = facing_edge(dir, player.size());
        surface.set_stroke_style(FACING);
        surface.begin_path();
        surface.move_to(a.x as f64, a.y as f64);
        surface.line_to(b.x as f64, b.y as f64);
        surface.close_path();
        surface.stroke();
    }

    surface.restore();
}

/// Endpoints of the player's side facing `dir`, relative to its feet
fn facing_edge(dir: Direction, size: f32) -> (Vec2, Vec2) {
    let half = size / 2.0;
    let centre = Vec2::new(0.0, -half);
    let normal = dir.unit();
    let mid = centre + normal * half;
    let along = normal.perp() * half;
    (mid - along, mid + along)
}

fn draw_block(surface: &mut dyn Surface, block: &Block) {
    let half = block.half_size() as f64;
    surface.set_stroke_style(BLOCK);
    surface.set_line_width(2.0);
    surface.stroke_rect(
        block.pos.x as f64 - half,
        block.pos.y as f64 - half,
        half * 2.0,
        half * 2.0,
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::consts::PLAYER_SIZE;

    /// Every call a [`Recorder`] sees
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        FillStyle(String),
        StrokeStyle(String),
        LineWidth(f64),
        FillRect(f64, f64, f64, f64),
        StrokeRect(f64, f64, f64, f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        ClosePath,
        Stroke,
        Save,
        Restore,
        Translate(f64, f64),
    }

    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<DrawCall>,
    }

    impl Recorder {
        pub fn stroke_rects(&self) -> Vec<(f64, f64, f64, f64)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::StrokeRect(x, y, w, h) => Some((*x, *y, *w, *h)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        fn set_fill_style(&mut self, color: &str) {
            self.calls.push(DrawCall::FillStyle(color.to_string()));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.calls.push(DrawCall::StrokeStyle(color.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(DrawCall::LineWidth(width));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(DrawCall::FillRect(x, y, w, h));
        }
        fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.calls.push(DrawCall::StrokeRect(x, y, w, h));
        }
        fn begin_path(&mut self) {
            self.calls.push(DrawCall::BeginPath);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::LineTo(x, y));
        }
        fn close_path(&mut self) {
            self.calls.push(DrawCall::ClosePath);
        }
        fn stroke(&mut self) {
            self.calls.push(DrawCall::Stroke);
        }
        fn save(&mut self) {
            self.calls.push(DrawCall::Save);
        }
        fn restore(&mut self) {
            self.calls.push(DrawCall::Restore);
        }
        fn translate(&mut self, x: f64, y: f64) {
            self.calls.push(DrawCall::Translate(x, y));
        }
    }

    #[test]
    fn test_draw_order() {
        let mut rec = Recorder::default();
        let player = Player::new();
        let blocks = vec![
            Block::new(100.0, 0.0, 0.0, Direction::Right),
            Block::new(0.0, -200.0, 0.0, Direction::Up),
        ];

        draw_scene(&mut rec, 720, 480, &player, &blocks);

        assert_eq!(rec.calls[0], DrawCall::FillStyle("black".into()));
        assert_eq!(rec.calls[1], DrawCall::FillRect(0.0, 0.0, 720.0, 480.0));
        assert_eq!(rec.calls[2], DrawCall::Save);
        assert_eq!(rec.calls[3], DrawCall::Translate(360.0, 360.0));
        assert_eq!(rec.calls.last(), Some(&DrawCall::Restore));

        // Ground line before the player
        let ground = rec
            .calls
            .iter()
            .position(|c| *c == DrawCall::MoveTo(-360.0, 0.0))
            .unwrap();
        let rects = rec.stroke_rects();
        let player_rect = rec
            .calls
            .iter()
            .position(|c| matches!(c, DrawCall::StrokeRect(..)))
            .unwrap();
        assert!(ground < player_rect);

        let size = PLAYER_SIZE as f64;
        assert_eq!(rects[0], (-size / 2.0, -size, size, size));
        assert_eq!(rects[1], (80.0, -20.0, 40.0, 40.0));
        assert_eq!(rects[2], (-20.0, -220.0, 40.0, 40.0));
    }

    #[test]
    fn test_forward_facing_draws_no_indicator() {
        let mut rec = Recorder::default();
        draw_scene(&mut rec, 720, 480, &Player::new(), &[]);
        assert!(!rec.calls.contains(&DrawCall::StrokeStyle("red".into())));
    }

    #[test]
    fn test_facing_edges() {
        let (a, b) = facing_edge(Direction::Right, 50.0);
        assert_eq!((a.x, b.x), (25.0, 25.0));
        assert_eq!(a.y.min(b.y), -50.0);
        assert_eq!(a.y.max(b.y), 0.0);

        let (a, b) = facing_edge(Direction::Up, 50.0);
        assert_eq!((a.y, b.y), (-50.0, -50.0));

        let (a, b) = facing_edge(Direction::Down, 50.0);
        assert_eq!((a.y, b.y), (0.0, 0.0));
        assert_eq!(a.x.min(b.x), -25.0);
    }
}
