//! Errors that end a bingo session.
//!
//! Bad board submissions and bad picks are not errors at this level: they are
//! answered with a retry prompt and never leave the player's loop.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Failed to bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Read or write failure on a player's connection
    #[error("Transport error with {peer}: {source}")]
    Io {
        peer: String,
        #[source]
        source: std::io::Error,
    },

    /// The player closed the connection
    #[error("{peer} disconnected")]
    Disconnected { peer: String },

    /// A registration arrived after every seat was taken
    #[error("All {capacity} seats are taken")]
    SessionFull { capacity: usize },

    #[error("Players did not join within {0:?}")]
    RegistrationTimeout(Duration),

    #[error("{nickname} has not placed a board")]
    BoardNotPlaced { nickname: String },

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    /// A per-player task panicked or was cancelled
    #[error("Player task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GameError>;
