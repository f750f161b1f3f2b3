//! The 5x5 board each player fills before the game starts.

use crate::{BOARD_SIZE, CELL_COUNT};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

const FONT_BLUE: &str = "\u{1b}[34m";
const FONT_RED: &str = "\u{1b}[31m";
const RESET: &str = "\u{1b}[0m";

const BORDER: &str = " ================";
const OWNER_MARKER: &str = "OO";
const OPPONENT_MARKER: &str = "XX";

/// Who marked a cell, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Unmarked,
    /// Picked by the board's owner, shown in blue.
    Owner,
    /// Picked by another player, shown in red.
    Opponent,
}

/// A single board cell. The placed value survives marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u8,
    pub mark: Mark,
}

impl Cell {
    fn new(value: u8) -> Self {
        Self {
            value,
            mark: Mark::Unmarked,
        }
    }

    pub fn is_marked(&self) -> bool {
        self.mark != Mark::Unmarked
    }
}

/// How marked cells are drawn when a board is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// Markers wrapped in ANSI colour codes.
    #[default]
    Ansi,
    Plain,
}

/// Reasons a board submission is rejected.
///
/// The display text is sent verbatim to the player, who is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Enter exactly {expected} numbers (you entered {found}). Please try again.")]
    WrongCount { expected: usize, found: usize },

    #[error("'{token}' is not a number. Please try again.")]
    NotANumber { token: String },

    #[error("{value} was entered more than once. Please try again.")]
    Duplicate { value: i32 },

    #[error("{value} is outside the range 1-{max}. Please try again.")]
    OutOfRange { value: i32, max: usize },
}

/// A player's grid of numbers 1 through 25, each placed exactly once.
///
/// Cells only ever move from unmarked to marked; nothing clears a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The cell at `row`, `col`. Panics outside the 5x5 grid.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether either player has marked the cell at `row`, `col`.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_marked()
    }

    /// Number of marked cells, owner and opponent marks alike.
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_marked())
            .count()
    }

    /// Finds the unmarked cell holding `number`.
    ///
    /// Numbers that were already picked, or were never on the board, yield
    /// `None`.
    pub fn position_of(&self, number: i32) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|cell| !cell.is_marked() && i32::from(cell.value) == number)
                .map(|col| (row, col))
        })
    }

    /// Marks the unmarked cell holding `number` and returns its position.
    ///
    /// Returns `None` and leaves the board untouched when no unmarked cell
    /// holds the number, or when asked to mark with `Mark::Unmarked`.
    pub fn mark(&mut self, number: i32, mark: Mark) -> Option<(usize, usize)> {
        if mark == Mark::Unmarked {
            return None;
        }

        let (row, col) = self.position_of(number)?;
        self.cells[row][col].mark = mark;
        Some((row, col))
    }

    /// Renders the board as the block of lines sent to its owner.
    pub fn render(&self, style: MarkerStyle) -> Vec<String> {
        let mut lines = Vec::with_capacity(BOARD_SIZE + 2);
        lines.push(BORDER.to_string());

        for row in &self.cells {
            let mut line = String::from("| ");
            for cell in row {
                match (cell.mark, style) {
                    (Mark::Unmarked, _) => line.push_str(&format!("{:02} ", cell.value)),
                    (Mark::Owner, MarkerStyle::Plain) => {
                        line.push_str(&format!("{} ", OWNER_MARKER))
                    }
                    (Mark::Owner, MarkerStyle::Ansi) => {
                        line.push_str(&format!("{}{} {}", FONT_BLUE, OWNER_MARKER, RESET))
                    }
                    (Mark::Opponent, MarkerStyle::Plain) => {
                        line.push_str(&format!("{} ", OPPONENT_MARKER))
                    }
                    (Mark::Opponent, MarkerStyle::Ansi) => {
                        line.push_str(&format!("{}{} {}", FONT_RED, OPPONENT_MARKER, RESET))
                    }
                }
            }
            line.push('|');
            lines.push(line);
        }

        lines.push(BORDER.to_string());
        lines
    }
}

/// Validates a board submission and lays the numbers out row by row.
///
/// Checks run in order: token count, numeric tokens, duplicates, range.
pub fn validate_placement<'a, I>(tokens: I) -> Result<Board, PlacementError>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = tokens.into_iter().collect();
    if tokens.len() != CELL_COUNT {
        return Err(PlacementError::WrongCount {
            expected: CELL_COUNT,
            found: tokens.len(),
        });
    }

    let numbers = tokens
        .iter()
        .map(|token| {
            token.parse::<i32>().map_err(|_| PlacementError::NotANumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i32>, _>>()?;

    let mut seen = HashSet::with_capacity(CELL_COUNT);
    if let Some(&value) = numbers.iter().find(|&&n| !seen.insert(n)) {
        return Err(PlacementError::Duplicate { value });
    }

    let range = 1..=CELL_COUNT as i32;
    if let Some(&value) = numbers.iter().find(|n| !range.contains(n)) {
        return Err(PlacementError::OutOfRange {
            value,
            max: CELL_COUNT,
        });
    }

    let mut cells = [[Cell::new(0); BOARD_SIZE]; BOARD_SIZE];
    for (idx, number) in numbers.into_iter().enumerate() {
        // In range 1..=25 after the check above.
        cells[idx / BOARD_SIZE][idx % BOARD_SIZE] = Cell::new(number as u8);
    }

    Ok(Board { cells })
}

impl FromStr for Board {
    type Err = PlacementError;

    /// Parses a whitespace separated submission line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        validate_placement(line.split_whitespace())
    }
}
