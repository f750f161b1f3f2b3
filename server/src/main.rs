use clap::Parser;
use log::{error, info};
use server::config::{ServerConfig, TurnOrder};
use server::network::Server;
use shared::{MarkerStyle, Verdict, DEFAULT_PORT};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server IP address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Give up if both players have not joined within this many seconds
    #[arg(long)]
    join_timeout: Option<u64>,

    /// Who plays first
    #[arg(long, value_enum, default_value_t = TurnOrder::Join)]
    turn_order: TurnOrder,

    /// Draw marked cells without ANSI colours
    #[arg(long)]
    plain: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            join_timeout: args.join_timeout.map(Duration::from_secs),
            turn_order: args.turn_order,
            marker_style: if args.plain {
                MarkerStyle::Plain
            } else {
                MarkerStyle::Ansi
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let config = ServerConfig::from(Args::parse());
    let server = Server::bind(config).await?;

    tokio::select! {
        result = server.run() => match result {
            Ok(Verdict::SingleWinner(turn)) => info!("Game over, player {} won", turn + 1),
            Ok(verdict) => info!("Game over: {:?}", verdict),
            Err(e) => {
                error!("Session ended: {}", e);
                return Err(e.into());
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
