//! WebSocket/HTTP server implementation.

mod handler;
mod server;
mod signal;
pub mod state; // UseCase の組み立てと統合テストからアクセスするため public

pub use server::Server;
pub use state::AppState;
