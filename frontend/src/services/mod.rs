//! Backend and browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - JSON calls to the bantconfirm backend
//! - [`events`] - SSE stream of store changes
//! - [`session`] - Signed-in user and admin token in browser storage
//! - [`files`] - Image uploads as data URLs, CSV downloads

pub mod api;
pub mod events;
pub mod files;
pub mod session;

pub use events::{init_store_events, use_store_revision, StoreRevision};
