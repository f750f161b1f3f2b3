use log::{debug, info};
use std::io;
use tokio::io::{
    stdin, stdout, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpStream;

/// A terminal attached to a bingo server.
pub struct Client {
    stream: TcpStream,
}

impl Client {
    pub async fn connect(server_addr: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(server_addr).await?;
        info!("Connected to {}", server_addr);
        Ok(Self { stream })
    }

    /// Relays until the server closes the connection.
    ///
    /// Closing stdin stops sending but keeps printing whatever the server
    /// still has to say.
    pub async fn run(self) -> io::Result<()> {
        let (reader, mut writer) = self.stream.into_split();
        let mut printer = tokio::spawn(async move { relay(BufReader::new(reader), stdout()).await });

        tokio::select! {
            printed = &mut printer => {
                let lines = printed??;
                debug!("Server closed after {} lines", lines);
                return Ok(());
            }
            sent = relay(BufReader::new(stdin()), &mut writer) => {
                debug!("Stdin closed after {} lines", sent?);
            }
        }

        writer.shutdown().await?;
        let lines = printer.await??;
        debug!("Server closed after {} lines", lines);
        Ok(())
    }
}

/// Copies `source` to `sink` one line at a time, flushing after each.
///
/// Returns the number of lines copied once `source` ends.
pub async fn relay<R, W>(mut source: R, mut sink: W) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let mut count = 0;

    loop {
        line.clear();
        if source.read_line(&mut line).await? == 0 {
            return Ok(count);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        line.push('\n');

        sink.write_all(line.as_bytes()).await?;
        sink.flush().await?;
        count += 1;
    }
}
