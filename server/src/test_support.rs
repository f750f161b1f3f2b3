//! In-memory players for exercising the barriers and the turn loop.

use crate::connection::Connection;
use crate::player::Player;
use tokio::io::{
    duplex, split, AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf,
    WriteHalf,
};

const PIPE_CAPACITY: usize = 64 * 1024;

/// Layout with 1..=5 scattered so no line of it completes together.
pub(crate) const SCATTERED: [i32; 25] = [
    1, 6, 7, 8, 9, //
    10, 11, 2, 12, 13, //
    14, 15, 16, 17, 3, //
    18, 4, 19, 20, 21, //
    22, 23, 24, 5, 25,
];

/// The player's side of an in-memory connection.
pub(crate) struct TestClient {
    lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
    writer: WriteHalf<DuplexStream>,
}

impl TestClient {
    pub(crate) async fn send(&mut self, line: &str) {
        self.writer
            .write_all(format!("{}\n", line).as_bytes())
            .await
            .unwrap();
    }

    /// Sends bytes as-is, newline included by the caller.
    pub(crate) async fn send_raw(&mut self, bytes: &[u8]) {
        self.writer.write_all(bytes).await.unwrap();
    }

    pub(crate) async fn next_line(&mut self) -> Option<String> {
        self.lines.next_line().await.unwrap()
    }

    /// Reads lines up to and including `expected`.
    pub(crate) async fn read_until(&mut self, expected: &str) -> Vec<String> {
        let mut seen = Vec::new();
        while let Some(line) = self.next_line().await {
            let done = line == expected;
            seen.push(line);
            if done {
                break;
            }
        }
        seen
    }

    /// Everything left until the server side closes.
    pub(crate) async fn transcript(mut self) -> Vec<String> {
        let mut seen = Vec::new();
        while let Some(line) = self.next_line().await {
            seen.push(line);
        }
        seen
    }
}

pub(crate) fn connection_pair(peer: &str) -> (Connection<DuplexStream>, TestClient) {
    let (server_side, client_side) = duplex(PIPE_CAPACITY);
    let (reader, writer) = split(client_side);
    let client = TestClient {
        lines: BufReader::new(reader).lines(),
        writer,
    };
    (Connection::new(server_side, peer), client)
}

pub(crate) fn numbers_line(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn sequential_line() -> String {
    numbers_line(&(1..=25).collect::<Vec<_>>())
}

/// A registered player with a board already placed.
pub(crate) fn placed_player(
    nickname: &str,
    turn: usize,
    board_line: &str,
) -> (Player<DuplexStream>, TestClient) {
    let (conn, client) = connection_pair(nickname);
    let mut player = Player::new(nickname.to_string(), conn);
    player.set_turn(turn);
    player.set_board(board_line.parse().unwrap());
    (player, client)
}
