//! Game model shared by the bingo server and client.
//!
//! Holds the pieces of the game that carry no I/O: the 5x5 board and its
//! placement validation, the win detector, and the catalogue of lines the
//! server sends to players.

pub mod board;
pub mod protocol;
pub mod rules;

pub use board::{Board, Cell, Mark, MarkerStyle, PlacementError};
pub use protocol::Message;
pub use rules::{evaluate, is_complete, parse_pick, PickError, Verdict};

/// Width and height of a board.
pub const BOARD_SIZE: usize = 5;
/// Numbers placed on a board, also the highest number a player may place.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Players per game. The server starts a game once this many have joined.
pub const MAX_PLAYERS: usize = 2;
pub const DEFAULT_PORT: u16 = 8081;
