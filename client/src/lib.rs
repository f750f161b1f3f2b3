//! # Bingo Client Library
//!
//! A thin terminal for the bingo server. The server owns every piece of game
//! state and formats everything the player sees, so the client only moves
//! lines: server output goes to stdout and whatever the player types goes
//! back to the server unchanged.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::network::Client;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let client = Client::connect("127.0.0.1:8081").await?;
//!
//!     // Returns once the server closes the connection.
//!     client.run().await
//! }
//! ```

pub mod network;
