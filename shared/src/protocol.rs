//! Lines the server sends to players.
//!
//! The protocol is plain text: every server message is one line, every reply
//! the server waits for is one line. Board renderings are sent separately as
//! a block of lines (see [`crate::Board::render`]).

use crate::board::PlacementError;
use crate::rules::PickError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EnterNickname,
    Greeting { nickname: String },
    Waiting,
    /// One line of the turn order, `position` counting from 1.
    TurnOrder { position: usize, nickname: String },
    EnterBoard,
    InvalidPlacement(PlacementError),
    TurnAnnounce { nickname: String },
    ChooseNumber,
    NumbersOnly,
    InvalidNumber,
    SingleWinner { nickname: String },
    AllWinners,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::EnterNickname => write!(f, "Please enter your nickname"),
            Message::Greeting { nickname } => write!(f, "Hello, {}!", nickname),
            Message::Waiting => write!(f, "Waiting for other players..."),
            Message::TurnOrder { position, nickname } => write!(f, "#{}: {}", position, nickname),
            Message::EnterBoard => write!(
                f,
                "Enter every number from 1 to 25 once, separated by spaces, in the order to place them."
            ),
            Message::InvalidPlacement(reason) => write!(f, "{}", reason),
            Message::TurnAnnounce { nickname } => write!(f, "It is {}'s turn", nickname),
            Message::ChooseNumber => write!(f, "== Choose a number =="),
            Message::NumbersOnly => write!(f, "Numbers only, please."),
            Message::InvalidNumber => write!(f, "Please enter a valid number."),
            Message::SingleWinner { nickname } => write!(f, "{} wins!", nickname),
            Message::AllWinners => write!(f, "Everyone wins!"),
        }
    }
}

impl From<PlacementError> for Message {
    fn from(reason: PlacementError) -> Self {
        Message::InvalidPlacement(reason)
    }
}

impl From<&PickError> for Message {
    fn from(error: &PickError) -> Self {
        match error {
            PickError::NotANumber(_) => Message::NumbersOnly,
            PickError::NotOnBoard(_) => Message::InvalidNumber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_lines() {
        let messages = vec![
            Message::EnterNickname,
            Message::Greeting {
                nickname: "alice".to_string(),
            },
            Message::Waiting,
            Message::TurnOrder {
                position: 1,
                nickname: "alice".to_string(),
            },
            Message::EnterBoard,
            Message::InvalidPlacement(PlacementError::Duplicate { value: 4 }),
            Message::TurnAnnounce {
                nickname: "bob".to_string(),
            },
            Message::ChooseNumber,
            Message::NumbersOnly,
            Message::InvalidNumber,
            Message::SingleWinner {
                nickname: "bob".to_string(),
            },
            Message::AllWinners,
        ];

        for message in messages {
            let text = message.to_string();
            assert!(!text.is_empty());
            assert!(!text.contains('\n'), "multi-line message: {:?}", message);
        }
    }

    #[test]
    fn test_messages_carry_nicknames() {
        let greeting = Message::Greeting {
            nickname: "alice".to_string(),
        };
        assert_eq!(greeting.to_string(), "Hello, alice!");

        let order = Message::TurnOrder {
            position: 2,
            nickname: "bob".to_string(),
        };
        assert_eq!(order.to_string(), "#2: bob");

        let winner = Message::SingleWinner {
            nickname: "bob".to_string(),
        };
        assert_eq!(winner.to_string(), "bob wins!");
    }

    #[test]
    fn test_pick_errors_map_to_retry_prompts() {
        let parse = PickError::NotANumber("x".to_string());
        let missing = PickError::NotOnBoard(30);

        assert_eq!(Message::from(&parse), Message::NumbersOnly);
        assert_eq!(Message::from(&missing), Message::InvalidNumber);
    }

    #[test]
    fn test_placement_error_text_is_forwarded() {
        let reason = PlacementError::WrongCount {
            expected: 25,
            found: 24,
        };
        let message = Message::from(reason.clone());
        assert_eq!(message.to_string(), reason.to_string());
    }
}
