use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::Player1,
            Player::Two => Cell::Player2,
        }
    }

    /// Player number as shown to users (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player 1");
        assert_eq!(Player::Two.to_string(), "Player 2");
    }

    #[test]
    fn test_to_cell_roundtrips_owner() {
        for player in [Player::One, Player::Two] {
            assert_eq!(player.to_cell().owner(), Some(player));
            assert_eq!(player.to_cell().code(), player.number());
        }
    }
}
