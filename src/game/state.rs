use tracing::{debug, info, instrument};

use super::win::{self, Outcome, WinningLine};
use super::{Board, Cell, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

/// A single game session: board, whose turn it is, and the game status.
///
/// One instance per game. Start a new game by constructing a new controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl GameController {
    /// Create a game on the standard 6x7 board
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a game on an empty board of the given size
    pub fn with_dimensions(rows: usize, columns: usize) -> Self {
        Self::with_board(Board::with_dimensions(rows, columns))
    }

    fn with_board(board: Board) -> Self {
        GameController {
            board,
            current_player: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// Player whose turn it is. Once the game is over this stays on the
    /// player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `(row, column)`; row 0 is the top.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board, like [`Board::get`].
    pub fn cell_state(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Whether `(row, column)` is part of the winning line. Positions outside
    /// the board are never winning cells.
    pub fn is_winning_cell(&self, row: usize, column: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.iter().any(|p| p.row == row && p.column == column))
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Columns that still accept a move. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Status line for the UI
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn...", self.current_player),
            GameStatus::Won(player) => format!("{player} Wins!!!"),
            GameStatus::Tied => "Tie Game".to_string(),
        }
    }

    /// Drop the current player's token into `column` and resolve the result.
    ///
    /// On error nothing changes, including whose turn it is.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            debug!("move rejected, game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_token(column, player).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        match win::evaluate(&self.board) {
            Outcome::Win { player: winner, line } => {
                info!(winner = %winner, ?line, "game won");
                self.status = GameStatus::Won(winner);
                self.winning_line = Some(line);
            }
            Outcome::NoWinner if self.board.is_full() => {
                info!("game tied");
                self.status = GameStatus::Tied;
            }
            Outcome::NoWinner => {
                self.current_player = player.other();
            }
        }

        debug!(row, status = ?self.status, "move applied");
        Ok(MoveResult {
            column,
            row,
            player,
            status: self.status,
            winning_line: self.winning_line,
        })
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
