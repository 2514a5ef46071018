//! Room-based WebRTC signaling relay.
//!
//! Clients join rooms by an opaque id over a WebSocket. The first member of a room
//! becomes its host and initiates signaling. The relay forwards WebRTC signaling
//! blobs to the other members and broadcasts small game events (start, turn state,
//! chat) to everyone in the room.
//!
//! Layers:
//! - [`domain`]: rooms, members, sessions, events and the registry/connection seams
//! - [`usecase`]: join / relay / leave and the command dispatcher
//! - [`infrastructure`]: in-memory room registry, channel connection, wire DTOs
//! - [`ui`]: axum router, WebSocket and HTTP handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
