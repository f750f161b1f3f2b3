use crate::connection::Connection;
use crate::error::{GameError, Result};
use shared::{Board, MarkerStyle, Message};
use tokio::io::{AsyncRead, AsyncWrite};

/// A registered player and their connection.
#[derive(Debug)]
pub struct Player<S> {
    nickname: String,
    turn: usize,
    board: Option<Board>,
    conn: Connection<S>,
}

impl<S> Player<S> {
    pub fn new(nickname: String, conn: Connection<S>) -> Self {
        Self {
            nickname,
            turn: 0,
            board: None,
            conn,
        }
    }

    /// Name chosen at registration. Never changes afterwards.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Position in the turn order. Zero until turns are assigned.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub(crate) fn set_turn(&mut self, turn: usize) {
        self.turn = turn;
    }

    /// The placed board, `None` until placement succeeds.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub(crate) fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }

    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }
}

impl<S> Player<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Reads the player's next line.
    pub async fn read_line(&mut self) -> Result<String> {
        self.conn.read_line().await
    }

    pub async fn send(&mut self, message: &Message) -> Result<()> {
        self.conn.send(message).await
    }

    /// Sends the player their own board. Nobody else ever sees it.
    pub async fn send_board(&mut self, style: MarkerStyle) -> Result<()> {
        let lines = match &self.board {
            Some(board) => board.render(style),
            None => {
                return Err(GameError::BoardNotPlaced {
                    nickname: self.nickname.clone(),
                })
            }
        };
        self.conn.send_lines(&lines).await
    }
}
