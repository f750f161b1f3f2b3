//! Server configuration.

use clap::ValueEnum;
use shared::{MarkerStyle, DEFAULT_PORT};
use std::time::Duration;

/// How turn indices are handed out once every player has joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TurnOrder {
    /// First to finish registering plays first
    #[default]
    Join,
    /// Shuffled
    Random,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the whole registration phase. `None` waits forever.
    pub join_timeout: Option<Duration>,
    pub turn_order: TurnOrder,
    pub marker_style: MarkerStyle,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            join_timeout: None,
            turn_order: TurnOrder::Join,
            marker_style: MarkerStyle::Ansi,
        }
    }
}
