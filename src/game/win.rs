//! Four-in-a-row detection over a whole board.

use super::{Board, Cell, Player, Position};

/// Number of same-player tokens in a line needed to win.
pub const CONNECT: usize = 4;

/// The four positions of a completed line, in scan order.
pub type WinningLine = [Position; CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoWinner,
    Win { player: Player, line: WinningLine },
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Win { player, .. } => Some(*player),
        }
    }
}

/// Line orientations scanned by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalUpRight,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalUpRight,
    ];

    /// `(row step, column step)` from one cell of a line to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalUpRight => (-1, 1),
        }
    }
}

/// Scan the board for a completed line.
///
/// Orientations are scanned horizontal, vertical, down-right, then up-right,
/// with start positions in row-major order; the first line found is returned.
pub fn evaluate(board: &Board) -> Outcome {
    Direction::ALL
        .into_iter()
        .find_map(|direction| scan(board, direction))
        .unwrap_or(Outcome::NoWinner)
}

fn scan(board: &Board, direction: Direction) -> Option<Outcome> {
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            let Some(line) = line_from(board, row, col, direction) else {
                continue;
            };
            if let Some(player) = owner_of(board, &line) {
                return Some(Outcome::Win { player, line });
            }
        }
    }
    None
}

/// The `CONNECT` positions starting at `(row, col)`, or `None` if the line
/// would leave the board.
fn line_from(board: &Board, row: usize, col: usize, direction: Direction) -> Option<WinningLine> {
    let (dr, dc) = direction.step();
    let mut line = [Position::new(row, col); CONNECT];
    for (i, pos) in line.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * i as isize)?;
        let c = col.checked_add_signed(dc * i as isize)?;
        if r >= board.rows() || c >= board.columns() {
            return None;
        }
        *pos = Position::new(r, c);
    }
    Some(line)
}

fn owner_of(board: &Board, line: &WinningLine) -> Option<Player> {
    let first = board.get(line[0].row, line[0].column);
    if first == Cell::Empty {
        return None;
    }
    line[1..]
        .iter()
        .all(|pos| board.get(pos.row, pos.column) == first)
        .then(|| first.owner())
        .flatten()
}
