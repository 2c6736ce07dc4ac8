//! Shared utilities for the zashiki workspace.
//!
//! Cross-cutting concerns used by the server crate: time handling with a
//! clock abstraction, and logging setup.

pub mod logger;
pub mod time;
