//! # Bingo Server Library
//!
//! This library hosts a two-player bingo session over plain TCP. Clients are
//! dumb terminals: every line the server writes is meant to be printed as-is,
//! and every line the player types is sent back unchanged. All game state
//! lives here.
//!
//! ## Session Phases
//!
//! ### Registration
//! The server accepts exactly two connections. Each one runs its own
//! prologue concurrently: the player is asked for a nickname, greeted, added
//! to the shared registry and told to wait. Nothing else happens until every
//! seat is filled.
//!
//! ### Placement
//! Every player fills their 5x5 board at the same time by sending the numbers
//! 1 to 25 once each, in row-major order. Invalid submissions are answered
//! with the reason and read again. Play starts only once every board is set.
//!
//! ### Play
//! Turns go round-robin. On their turn a player picks a number still open on
//! their own board; it is marked as theirs there and as an opponent mark on
//! every other board holding it. After each pick every player is sent their
//! own board and the win detector runs. A board wins with any complete row,
//! column or diagonal, whoever marked the cells.
//!
//! ## Module Organization
//!
//! ### Connection Module (`connection`)
//! Line-oriented reads and writes over any async byte stream.
//!
//! ### Registry Module (`registry`)
//! The shared player list and the registration barrier.
//!
//! ### Placement Module (`placement`)
//! Concurrent board entry and the placement barrier.
//!
//! ### Game Module (`game`)
//! Turn assignment and the turn coordinator.
//!
//! ### Network Module (`network`)
//! The TCP listener tying the phases together.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::config::ServerConfig;
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::bind(ServerConfig::default()).await?;
//!
//!     // Runs one session: registration, placement, then turns until a
//!     // verdict is reached.
//!     let verdict = server.run().await?;
//!     println!("{:?}", verdict);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod game;
pub mod network;
pub mod placement;
pub mod player;
pub mod registry;

#[cfg(test)]
mod test_support;
