//! Turn coordinator: the single-threaded loop that runs once boards are set.

use crate::config::TurnOrder;
use crate::error::{GameError, Result};
use crate::player::Player;
use log::{debug, info};
use rand::seq::SliceRandom;
use shared::{evaluate, parse_pick, Mark, MarkerStyle, Message, PickError, Verdict};
use std::iter;
use tokio::io::{AsyncRead, AsyncWrite};

/// Hands out turn indices `0..players.len()` and puts the players in that order.
pub fn assign_turns<S>(players: &mut [Player<S>], order: TurnOrder) {
    if order == TurnOrder::Random {
        players.shuffle(&mut rand::thread_rng());
    }

    for (turn, player) in players.iter_mut().enumerate() {
        player.set_turn(turn);
        info!("Turn {}: {}", turn + 1, player.nickname());
    }
}

/// Tells every player the order of play.
pub async fn announce_turn_order<S>(players: &mut [Player<S>]) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let lines: Vec<Message> = players
        .iter()
        .map(|player| Message::TurnOrder {
            position: player.turn() + 1,
            nickname: player.nickname().to_string(),
        })
        .collect();

    for player in players.iter_mut() {
        for line in &lines {
            player.send(line).await?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the player at this index to pick a number.
    AwaitingPick(usize),
    /// A pick was applied; the win detector runs next.
    Resolved,
    Finished(Verdict),
}

/// The playing phase of a session.
///
/// Sole owner of every player once play starts, so marking opponents' boards
/// needs no locking.
pub struct Game<S> {
    players: Vec<Player<S>>,
    current_turn: usize,
    style: MarkerStyle,
}

impl<S> Game<S> {
    /// Starts a game with every board placed, ordered by turn index.
    pub fn new(mut players: Vec<Player<S>>, style: MarkerStyle) -> Result<Self> {
        if players.is_empty() {
            return Err(GameError::ProtocolViolation(
                "a game needs at least one player".to_string(),
            ));
        }
        if let Some(player) = players.iter().find(|player| player.board().is_none()) {
            return Err(GameError::BoardNotPlaced {
                nickname: player.nickname().to_string(),
            });
        }

        players.sort_by_key(|player| player.turn());
        Ok(Self {
            players,
            current_turn: 0,
            style,
        })
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player<S>] {
        &self.players
    }

    /// Index of the player who picks next.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Runs the win detector over every board as it stands.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.players.iter().filter_map(|player| player.board()))
    }

    /// Applies `picker`'s choice of `number` to every board.
    ///
    /// The picker's cell is marked as theirs; every other board holding the
    /// number unmarked gets an opponent mark. Boards without it are left
    /// alone. Nothing changes when the picker has no unmarked cell with it.
    pub fn resolve_pick(&mut self, picker: usize, number: i32) -> std::result::Result<(), PickError> {
        let own = self
            .players
            .get_mut(picker)
            .and_then(|player| player.board_mut())
            .ok_or(PickError::NotOnBoard(number))?;
        own.mark(number, Mark::Owner)
            .ok_or(PickError::NotOnBoard(number))?;

        for (idx, player) in self.players.iter_mut().enumerate() {
            if idx == picker {
                continue;
            }
            let marked = player
                .board_mut()
                .and_then(|board| board.mark(number, Mark::Opponent));
            if marked.is_none() {
                debug!("{} is not open on {}'s board", number, player.nickname());
            }
        }

        Ok(())
    }
}

impl<S> Game<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Runs turns round-robin until the win detector returns a verdict.
    pub async fn play(&mut self) -> Result<Verdict> {
        let mut state = TurnState::AwaitingPick(self.current_turn);

        loop {
            state = match state {
                TurnState::AwaitingPick(picker) => {
                    self.take_turn(picker).await?;
                    TurnState::Resolved
                }
                TurnState::Resolved => {
                    let verdict = self.verdict();
                    if verdict.is_terminal() {
                        self.announce_result(verdict).await?;
                        TurnState::Finished(verdict)
                    } else {
                        TurnState::AwaitingPick(self.current_turn)
                    }
                }
                TurnState::Finished(verdict) => return Ok(verdict),
            };
        }
    }

    /// Prompts `picker` until they choose a number still open on their board,
    /// resolves it and passes the turn on.
    async fn take_turn(&mut self, picker: usize) -> Result<i32> {
        let nickname = self.players[picker].nickname().to_string();

        let number = loop {
            self.broadcast(&Message::TurnAnnounce {
                nickname: nickname.clone(),
            })
            .await?;
            self.players[picker].send(&Message::ChooseNumber).await?;

            let line = self.players[picker].read_line().await?;
            let pick = parse_pick(&line).and_then(|number| {
                self.resolve_pick(picker, number)?;
                Ok(number)
            });

            match pick {
                Ok(number) => break number,
                Err(reason) => {
                    debug!("Rejected pick from {}: {}", nickname, reason);
                    self.players[picker].send(&Message::from(&reason)).await?;
                }
            }
        };

        info!("{} picked {}", nickname, number);
        self.send_boards(picker).await?;
        self.current_turn = (picker + 1) % self.players.len();
        Ok(number)
    }

    /// Sends every player their own board, the picker last.
    async fn send_boards(&mut self, picker: usize) -> Result<()> {
        let style = self.style;
        let order = (0..self.players.len())
            .filter(|&idx| idx != picker)
            .chain(iter::once(picker));

        for idx in order {
            self.players[idx].send_board(style).await?;
        }
        Ok(())
    }

    async fn broadcast(&mut self, message: &Message) -> Result<()> {
        for player in self.players.iter_mut() {
            player.send(message).await?;
        }
        Ok(())
    }

    async fn announce_result(&mut self, verdict: Verdict) -> Result<()> {
        let message = match verdict {
            Verdict::SingleWinner(idx) => Message::SingleWinner {
                nickname: self.players[idx].nickname().to_string(),
            },
            Verdict::AllWinners => Message::AllWinners,
            Verdict::NoWinner => return Ok(()),
        };

        info!("Game over: {}", message);
        self.broadcast(&message).await
    }
}
