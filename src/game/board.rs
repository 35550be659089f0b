use tracing::trace;

use super::Player;
use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    /// Numeric cell code: 0 = empty, 1 = player 1, 2 = player 2
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player1 => 1,
            Cell::Player2 => 2,
        }
    }
}

/// A `(row, column)` coordinate on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Fixed-size grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 6x7 dimensions
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.rows == 0 || self.get(0, col) != Cell::Empty
    }

    /// Columns that can still accept a token, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                columns: self.cols,
            });
        }

        // Lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull { column: col })?;

        self.cells[row * self.cols + col] = player.to_cell();
        trace!(row, col, %player, "token placed");
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
