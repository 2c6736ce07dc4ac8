//! Planning poker room coordination server.
//!
//! Keeps every connected client of a room in sync: joins, votes, reveal /
//! reset rounds, story updates, and ephemeral emoji reactions.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin zashiki-server
//! cargo run --bin zashiki-server -- --host 0.0.0.0 --port 3000
//! cargo run --bin zashiki-server -- --single-room ABC123
//! ```

use std::sync::Arc;

use clap::Parser;

use zashiki_server::{
    domain::{RoomCode, RoomStore},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        registry::InMemorySessionRegistry,
        store::{InMemoryRoomStore, SingleRoomStore},
    },
    ui::{AppState, Server},
};
use zashiki_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Planning poker room coordination server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Host exactly one room with the given code instead of a shared room
    /// table (one-unit-per-room deployments)
    #[arg(long)]
    single_room: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock
    // 2. Room Store (backend chosen by --single-room)
    // 3. Session Registry
    // 4. MessagePusher
    // 5. AppState (use case wiring)
    // 6. Server

    // 1. Clock
    let clock = Arc::new(SystemClock);

    // 2. Room Store
    let store: Arc<dyn RoomStore> = match args.single_room {
        Some(code) => {
            let code = match RoomCode::new(code) {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!("Invalid --single-room code: {}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!("Hosting single room '{}'", code.as_str());
            Arc::new(SingleRoomStore::new(code, clock.clone()))
        }
        None => Arc::new(InMemoryRoomStore::new(clock.clone())),
    };

    // 3. Session Registry
    let registry = Arc::new(InMemorySessionRegistry::new());

    // 4. MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 5. AppState (use case wiring)
    let state = AppState::new(store, registry, message_pusher, clock);

    // 6. Create and run the server
    let server = Server::new(state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
