//! Santa Room terminal client.
//!
//! Joins a room on the relay server and chats from the terminal.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin santa-room-client -- --room north-pole --name Alice
//! ```

use std::time::Duration;

use clap::Parser;
use santa_room_client::{ClientConfig, config::DEFAULT_SERVER_URL, domain::RoomPath};
use santa_room_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "santa-room-client", version, about = "Santa Room chat client")]
struct Args {
    /// WebSocket URL of the relay server
    #[arg(long, env = "SANTA_ROOM_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Room to join; the root room when omitted
    #[arg(long)]
    room: Option<String>,

    /// Display name announced to the other participants
    #[arg(long, default_value = "")]
    name: String,

    /// Keep-alive period in milliseconds
    #[arg(long, default_value_t = 3000, value_parser = clap::value_parser!(u64).range(1..))]
    keep_alive_ms: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let room = match args.room.as_deref().map(RoomPath::from_room_name) {
        None => RoomPath::root(),
        Some(Ok(room)) => room,
        Some(Err(e)) => {
            tracing::error!("Invalid room: {}", e);
            std::process::exit(1);
        }
    };

    let config = ClientConfig::new(args.server)
        .with_room(room)
        .with_display_name(args.name)
        .with_keep_alive_interval(Duration::from_millis(args.keep_alive_ms));

    // Run the client
    if let Err(e) = santa_room_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
