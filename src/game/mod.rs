//! Core Connect Four game logic: board representation, player types, win
//! detection, and the game controller state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Position, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameController, GameStatus, MoveResult};
pub use win::{Outcome, WinningLine};
