use serde::{Deserialize, Serialize};

use super::board::Cell;

/// The two player tokens. Star is player 1, Moon is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Star,
    Moon,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Star => Player::Moon,
            Player::Moon => Player::Star,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Star => Cell::Star,
            Player::Moon => Cell::Moon,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Star => "Star",
            Player::Moon => "Moon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Star.other(), Player::Moon);
        assert_eq!(Player::Moon.other(), Player::Star);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Star.name(), "Star");
        assert_eq!(Player::Moon.name(), "Moon");
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Star.to_cell(), Cell::Star);
        assert_eq!(Player::Moon.to_cell(), Cell::Moon);
    }
}
