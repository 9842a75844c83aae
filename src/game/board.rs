use std::fmt;

use super::player::Player;
use crate::error::MoveError;

/// Side length of the square board.
pub const SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Opponent,
}

impl Cell {
    /// Character used when printing the board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => Player::Human.symbol(),
            Cell::Opponent => Player::Opponent.symbol(),
        }
    }
}

/// The 7x7 grid. Cells only ever go from `Empty` to a mark, through [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, column 0 the left edge.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check whether a position is on the board and still empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.cells[row][col] == Cell::Empty
    }

    /// Put `player`'s mark on an empty cell
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.cells[row][col] = player.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == Cell::Empty)
    }

    /// Row `row` as a slice, left to right
    pub fn row(&self, row: usize) -> &[Cell; SIZE] {
        &self.cells[row]
    }

    /// Column `col`, top to bottom
    pub fn column(&self, col: usize) -> [Cell; SIZE] {
        std::array::from_fn(|row| self.cells[row][col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{i}")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.empty_cells().count(), 49);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(2, 5, Player::Human).unwrap();
        assert_eq!(board.get(2, 5), Cell::Human);

        board.place(6, 0, Player::Opponent).unwrap();
        assert_eq!(board.get(6, 0), Cell::Opponent);
        assert_eq!(board.empty_cells().count(), 47);
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(3, 3, Player::Opponent).unwrap();
        let before = board;

        assert_eq!(
            board.place(3, 3, Player::Human),
            Err(MoveError::CellOccupied { row: 3, col: 3 })
        );
        assert_eq!(board, before);
        assert_eq!(board.get(3, 3), Cell::Opponent);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.place(7, 0, Player::Human),
            Err(MoveError::OutOfBounds { row: 7, col: 0 })
        );
        assert_eq!(
            board.place(0, 9, Player::Human),
            Err(MoveError::OutOfBounds { row: 0, col: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(cells.len(), 49);

        for (i, (row, col)) in cells.into_iter().enumerate() {
            assert!(!board.is_full());
            let player = if i % 2 == 0 { Player::Human } else { Player::Opponent };
            board.place(row, col, player).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(0, 0, Player::Human).unwrap();
        board.place(0, 2, Player::Opponent).unwrap();

        let first: Vec<_> = board.empty_cells().take(3).collect();
        assert_eq!(first, vec![(0, 1), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_column_reads_top_to_bottom() {
        let mut board = Board::new();
        board.place(0, 4, Player::Human).unwrap();
        board.place(6, 4, Player::Opponent).unwrap();

        let column = board.column(4);
        assert_eq!(column[0], Cell::Human);
        assert_eq!(column[6], Cell::Opponent);
        assert_eq!(board.row(0)[4], Cell::Human);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, 0, Player::Human).unwrap();
        board.place(1, 6, Player::Opponent).unwrap();

        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6");
        assert_eq!(lines[1], "0 X . . . . . .");
        assert_eq!(lines[2], "1 . . . . . . O");
    }
}
