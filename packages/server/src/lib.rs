//! Planning poker room coordination server.
//!
//! This library synchronizes ephemeral shared state (a planning poker room:
//! the current story, a roster of participants, and their votes) across
//! concurrently connected WebSocket clients in real time.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
