//! Board placement: every player fills their board at the same time.

use crate::error::Result;
use crate::player::Player;
use log::{debug, info};
use shared::{Board, MarkerStyle, Message};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::JoinSet;

/// Prompts one player until they submit a valid board, then shows it to them.
///
/// Every rejected submission is answered with the reason and the player is
/// read again. There is no retry limit.
pub async fn place_board<S>(player: &mut Player<S>, style: MarkerStyle) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    player.send(&Message::EnterBoard).await?;

    let board = loop {
        let line = player.read_line().await?;
        match line.parse::<Board>() {
            Ok(board) => break board,
            Err(reason) => {
                debug!("Rejected board from {}: {}", player.nickname(), reason);
                player.send(&Message::from(reason)).await?;
            }
        }
    };

    player.set_board(board);
    info!("{} placed their board", player.nickname());
    player.send_board(style).await
}

/// Placement barrier: runs [`place_board`] for every player concurrently.
///
/// Returns once every board is set, with players in the order given.
/// The first transport failure aborts the other placements.
pub async fn place_all<S>(players: Vec<Player<S>>, style: MarkerStyle) -> Result<Vec<Player<S>>>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (idx, mut player) in players.into_iter().enumerate() {
        tasks.spawn(async move {
            place_board(&mut player, style).await?;
            Ok::<_, crate::error::GameError>((idx, player))
        });
    }

    let mut placed = Vec::with_capacity(tasks.len());
    while let Some(result) = tasks.join_next().await {
        placed.push(result??);
    }

    placed.sort_by_key(|(idx, _)| *idx);
    Ok(placed.into_iter().map(|(_, player)| player).collect())
}
