use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Opponent => Cell::Opponent,
        }
    }

    /// Board symbol
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Opponent => 'O',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Player",
            Player::Opponent => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Opponent);
        assert_eq!(Player::Opponent.other(), Player::Human);
    }

    #[test]
    fn test_player_cell_and_symbol() {
        assert_eq!(Player::Human.to_cell(), Cell::Human);
        assert_eq!(Player::Opponent.to_cell(), Cell::Opponent);
        assert_eq!(Player::Human.symbol(), 'X');
        assert_eq!(Player::Opponent.symbol(), 'O');
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Player");
        assert_eq!(Player::Opponent.name(), "Computer");
    }
}
