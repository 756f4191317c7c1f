//! HTTP API module.
//!
//! This module provides the HTTP server, its JSON types and the store
//! change stream for the BantConfirm backend.

pub mod events;
pub mod server;
pub mod types;

pub use server::{router, start_server, AppState, SharedState};
pub use types::*;
