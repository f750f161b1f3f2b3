//! Player registration and the barrier that waits for every seat to fill.
//!
//! Each incoming connection runs its own registration prologue in a task:
//! ask for a nickname, greet the player, append them to the shared
//! [`Registry`] and tell them to wait. The [`Lobby`] owns those tasks and
//! releases the players only once every prologue has finished.

use crate::connection::Connection;
use crate::error::{GameError, Result};
use crate::player::Player;
use log::{debug, info};
use shared::Message;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Append-only list of registered players with a fixed capacity.
///
/// Appends are serialized by the mutex, so indices follow the order in which
/// registrations complete, not the order connections were accepted.
#[derive(Debug)]
pub struct Registry<S> {
    players: Mutex<Vec<Player<S>>>,
    capacity: usize,
}

impl<S> Registry<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            players: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends a player and returns their registration index.
    ///
    /// Fails with [`GameError::SessionFull`] once every seat is taken.
    pub async fn register(&self, player: Player<S>) -> Result<usize> {
        let mut players = self.players.lock().await;
        if players.len() >= self.capacity {
            return Err(GameError::SessionFull {
                capacity: self.capacity,
            });
        }

        info!("Registered {} as player {}", player.nickname(), players.len() + 1);
        players.push(player);
        Ok(players.len() - 1)
    }

    /// Removes and returns every registered player in registration order.
    pub async fn take_all(&self) -> Vec<Player<S>> {
        std::mem::take(&mut *self.players.lock().await)
    }
}

/// Runs the registration prologue for one connection.
///
/// Every write happens before the append, so the registry lock is never
/// held across network I/O.
pub async fn join<S>(registry: &Registry<S>, mut conn: Connection<S>) -> Result<usize>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    conn.send(&Message::EnterNickname).await?;
    let nickname = conn.read_line().await?.trim().to_string();
    debug!("{} chose nickname {:?}", conn.peer(), nickname);

    conn.send(&Message::Greeting {
        nickname: nickname.clone(),
    })
    .await?;
    conn.send(&Message::Waiting).await?;

    registry.register(Player::new(nickname, conn)).await
}

/// Registration barrier: one prologue task per admitted connection.
pub struct Lobby<S> {
    registry: Arc<Registry<S>>,
    tasks: JoinSet<Result<usize>>,
}

impl<S> Lobby<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            registry: Arc::new(Registry::new(capacity)),
            tasks: JoinSet::new(),
        }
    }

    /// Starts the registration prologue for a new connection.
    pub fn admit(&mut self, conn: Connection<S>) {
        debug!("Admitting {}", conn.peer());
        let registry = Arc::clone(&self.registry);
        self.tasks.spawn(async move { join(&registry, conn).await });
    }

    /// Waits until every admitted prologue has finished.
    ///
    /// The first failure aborts the remaining prologues and is returned.
    pub async fn wait_for_all(mut self) -> Result<Vec<Player<S>>> {
        while let Some(result) = self.tasks.join_next().await {
            let index = result??;
            debug!("Registration {} complete", index);
        }

        let players = self.registry.take_all().await;
        if players.len() != self.registry.capacity() {
            return Err(GameError::ProtocolViolation(format!(
                "expected {} players, {} registered",
                self.registry.capacity(),
                players.len()
            )));
        }

        Ok(players)
    }
}
