//! WebSocket and HTTP API handlers.

pub mod http;
pub mod router;
pub mod websocket;
