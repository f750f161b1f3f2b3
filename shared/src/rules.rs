//! Win detection and pick parsing.

use crate::board::Board;
use crate::BOARD_SIZE;
use thiserror::Error;

/// Outcome of one win evaluation over every player's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoWinner,
    /// Index (in turn order) of the player whose board completed a line.
    SingleWinner(usize),
    AllWinners,
}

impl Verdict {
    /// Whether this verdict ends the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::NoWinner)
    }
}

/// Why a number typed during a turn was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not an unmarked number on the board")]
    NotOnBoard(i32),
}

/// Parses the number a player typed on their turn.
pub fn parse_pick(line: &str) -> Result<i32, PickError> {
    let line = line.trim();
    line.parse::<i32>()
        .map_err(|_| PickError::NotANumber(line.to_string()))
}

/// A board is complete once any row, column or diagonal is fully marked.
pub fn is_complete(board: &Board) -> bool {
    let last = BOARD_SIZE - 1;

    let any_row = (0..BOARD_SIZE).any(|row| (0..BOARD_SIZE).all(|col| board.is_marked(row, col)));
    let any_col = (0..BOARD_SIZE).any(|col| (0..BOARD_SIZE).all(|row| board.is_marked(row, col)));
    let main_diagonal = (0..BOARD_SIZE).all(|i| board.is_marked(i, i));
    let anti_diagonal = (0..BOARD_SIZE).all(|i| board.is_marked(i, last - i));

    any_row || any_col || main_diagonal || anti_diagonal
}

/// Evaluates every board, given in turn order.
///
/// No complete board means no winner, every board complete means everyone
/// wins, and anything in between names the first complete board.
pub fn evaluate<'a, I>(boards: I) -> Verdict
where
    I: IntoIterator<Item = &'a Board>,
{
    let mut total = 0;
    let mut completed = Vec::new();

    for (idx, board) in boards.into_iter().enumerate() {
        total += 1;
        if is_complete(board) {
            completed.push(idx);
        }
    }

    match completed.first() {
        None => Verdict::NoWinner,
        Some(_) if completed.len() == total => Verdict::AllWinners,
        Some(&first) => Verdict::SingleWinner(first),
    }
}
