//! TCP front end: accepts players and drives a session through its phases.

use crate::config::ServerConfig;
use crate::connection::Connection;
use crate::error::{GameError, Result};
use crate::game::{announce_turn_order, assign_turns, Game};
use crate::placement::place_all;
use crate::player::Player;
use crate::registry::Lobby;
use log::{debug, info};
use shared::{Verdict, MAX_PLAYERS};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

/// Listening socket plus the settings for the session it will host.
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
}

impl Server {
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let addr = config.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| GameError::Bind {
                addr: addr.clone(),
                source,
            })?;
        info!("Server listening on {}", addr);

        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(|source| GameError::Io {
            peer: self.config.address(),
            source,
        })
    }

    /// Accepts exactly [`MAX_PLAYERS`] connections and waits for all of them
    /// to register, giving up after the configured join timeout.
    pub async fn accept_players(&self) -> Result<Vec<Player<TcpStream>>> {
        match self.config.join_timeout {
            Some(limit) => timeout(limit, self.register_players())
                .await
                .map_err(|_| GameError::RegistrationTimeout(limit))?,
            None => self.register_players().await,
        }
    }

    async fn register_players(&self) -> Result<Vec<Player<TcpStream>>> {
        let mut lobby = Lobby::new(MAX_PLAYERS);

        for seat in 1..=MAX_PLAYERS {
            let (stream, addr) = self
                .listener
                .accept()
                .await
                .map_err(|source| GameError::Io {
                    peer: self.config.address(),
                    source,
                })?;
            info!("Connection {}/{} from {}", seat, MAX_PLAYERS, addr);
            lobby.admit(Connection::new(stream, addr.to_string()));
        }

        lobby.wait_for_all().await
    }

    /// Hosts one full session and returns how it ended.
    ///
    /// Any transport failure ends the whole session; tasks still running for
    /// other players are aborted.
    pub async fn run(self) -> Result<Verdict> {
        let style = self.config.marker_style;

        let players = self.accept_players().await?;
        info!("All {} players registered", players.len());
        drop(self.listener);

        let mut players = place_all(players, style).await?;
        info!("All boards placed");

        assign_turns(&mut players, self.config.turn_order);
        announce_turn_order(&mut players).await?;

        let mut game = Game::new(players, style)?;
        let verdict = game.play().await?;
        debug!("Session finished after turn {}", game.current_turn());

        Ok(verdict)
    }
}
