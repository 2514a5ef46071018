//! Connection seam between the relay and the transport.
//!
//! The relay only ever needs to push events to a client and to ask whether that
//! client is still reachable. Framing and encoding stay in the infrastructure and
//! UI layers.

use thiserror::Error;

use super::event::RoomEvent;

/// Errors returned when an event cannot be handed to a connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The peer side of the connection is gone
    #[error("Connection closed")]
    Closed,

    /// The event could not be turned into a frame
    #[error("Failed to encode event: {0}")]
    Encode(String),
}

/// A handle to one client's duplex message channel.
///
/// Sending is best-effort and must never block: implementations queue the frame
/// and return immediately.
#[cfg_attr(test, mockall::automock)]
pub trait Connection: Send + Sync {
    /// Queue an event for delivery.
    fn send(&self, event: &RoomEvent) -> Result<(), ConnectionError>;

    /// Whether frames can still be delivered.
    fn is_open(&self) -> bool;
}
