//! Keyboard mapping
//!
//! Keys are matched on their logical `KeyboardEvent.code`, so layout and
//! modifier state do not matter.

use crate::sim::Direction;

/// Things a key press can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Point the facing indicator at an edge
    Face(Direction),
    Jump,
}

/// Map a key code to an action; unmapped keys give `None`
pub fn action_for_code(code: &str) -> Option<GameAction> {
    match code {
        "ArrowRight" => Some(GameAction::Face(Direction::Right)),
        "ArrowUp" => Some(GameAction::Face(Direction::Up)),
        "ArrowLeft" => Some(GameAction::Face(Direction::Left)),
        "ArrowDown" => Some(GameAction::Face(Direction::Down)),
        "Space" => Some(GameAction::Jump),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_face() {
        assert_eq!(
            action_for_code("ArrowLeft"),
            Some(GameAction::Face(Direction::Left))
        );
        assert_eq!(
            action_for_code("ArrowDown"),
            Some(GameAction::Face(Direction::Down))
        );
    }

    #[test]
    fn test_space_jumps() {
        assert_eq!(action_for_code("Space"), Some(GameAction::Jump));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_code("KeyA"), None);
        assert_eq!(action_for_code("Enter"), None);
        assert_eq!(action_for_code(""), None);
    }
}
