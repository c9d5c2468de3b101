//! Santa Room relay server.
//!
//! Groups peers into rooms by their WebSocket sub-protocol token and relays
//! frames to the other peers of the same room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin santa-room-server -- --port 8080
//! ```

use clap::Parser;
use santa_room_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "santa-room-server", version, about = "Santa Room relay server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = santa_room_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
