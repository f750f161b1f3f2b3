//! Line-oriented duplex channel to one player.

use crate::error::{GameError, Result};
use shared::Message;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

/// A player's transport session.
///
/// Reads block until a full line arrives; there is no read timeout. The
/// buffered reader lives as long as the connection, so lines a player sends
/// ahead of a prompt are kept for the next read.
#[derive(Debug)]
pub struct Connection<S> {
    stream: BufReader<S>,
    peer: String,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            stream: BufReader::new(stream),
            peer: peer.into(),
        }
    }

    /// Remote address or label used in logs and errors.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Reads one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line is
    /// handed to the caller's parser like any other bad input. End of stream
    /// is reported as [`GameError::Disconnected`].
    pub async fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        let read = self
            .stream
            .read_until(b'\n', &mut raw)
            .await
            .map_err(|source| self.io_error(source))?;

        if read == 0 {
            return Err(GameError::Disconnected {
                peer: self.peer.clone(),
            });
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Writes a single line and flushes.
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.send_lines(&[line]).await
    }

    /// Writes a message as its display line.
    pub async fn send(&mut self, message: &Message) -> Result<()> {
        self.send_line(&message.to_string()).await
    }

    /// Writes every line, then flushes once.
    pub async fn send_lines<L: AsRef<str>>(&mut self, lines: &[L]) -> Result<()> {
        let mut data = String::new();
        for line in lines {
            data.push_str(line.as_ref());
            data.push('\n');
        }

        self.stream
            .write_all(data.as_bytes())
            .await
            .map_err(|source| self.io_error(source))?;
        self.stream
            .flush()
            .await
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> GameError {
        GameError::Io {
            peer: self.peer.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_read_line_strips_terminators() {
        let mock = Builder::new().read(b"alice\r\nbob\n").build();
        let mut conn = Connection::new(mock, "test");

        assert_eq!(conn.read_line().await.unwrap(), "alice");
        assert_eq!(conn.read_line().await.unwrap(), "bob");
    }

    #[tokio::test]
    async fn test_read_line_keeps_inner_whitespace() {
        let mock = Builder::new().read(b" 1 2  3 \n").build();
        let mut conn = Connection::new(mock, "test");

        assert_eq!(conn.read_line().await.unwrap(), " 1 2  3 ");
    }

    #[tokio::test]
    async fn test_read_line_replaces_invalid_utf8() {
        let mock = Builder::new().read(b"1 2 \xff\xfe 4\r\nbob\n").build();
        let mut conn = Connection::new(mock, "test");

        assert_eq!(conn.read_line().await.unwrap(), "1 2 \u{fffd}\u{fffd} 4");
        assert_eq!(conn.read_line().await.unwrap(), "bob");
    }

    #[tokio::test]
    async fn test_end_of_stream_is_disconnect() {
        let mock = Builder::new().build();
        let mut conn = Connection::new(mock, "127.0.0.1:5000");

        match conn.read_line().await {
            Err(GameError::Disconnected { peer }) => assert_eq!(peer, "127.0.0.1:5000"),
            other => panic!("Expected disconnect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_error_is_transport_error() {
        let mock = Builder::new()
            .read_error(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
            .build();
        let mut conn = Connection::new(mock, "test");

        match conn.read_line().await {
            Err(GameError::Io { peer, source }) => {
                assert_eq!(peer, "test");
                assert_eq!(source.kind(), io::ErrorKind::ConnectionReset);
            }
            other => panic!("Expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_message_appends_newline() {
        let mock = Builder::new()
            .write(b"Please enter your nickname\n")
            .build();
        let mut conn = Connection::new(mock, "test");

        conn.send(&Message::EnterNickname).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_lines_in_order() {
        let mock = Builder::new().write(b"first\nsecond\n").build();
        let mut conn = Connection::new(mock, "test");

        conn.send_lines(&["first", "second"]).await.unwrap();
    }
}
