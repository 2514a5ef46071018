//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{ConnectionId, RoomId};

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The connection is already a member of the room
    #[error("Connection '{0}' is already a member of the room")]
    DuplicateMember(ConnectionId),
}

/// Errors raised by the room registry.
///
/// These signal programming errors in the relay, never bad client input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Attempted to remove a room that still has members
    #[error("Room '{room_id}' still has {members} member(s) and cannot be removed")]
    RoomNotEmpty { room_id: RoomId, members: usize },

    /// Attempted to remove a room that is not registered
    #[error("Room '{0}' is not registered")]
    RoomNotFound(RoomId),
}
