//! Events the relay pushes to room members.

use serde_json::Value;

use super::value_object::{ConnectionId, DisplayName, TurnState};

/// Outbound event, independent of the wire encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// Sent only to the joiner; `initiator` is true for the earliest member
    InitPeer { initiator: bool },
    /// Roster and host after a join (or after the roster/host changed on leave)
    PlayerList {
        players: Vec<String>,
        host_id: Option<ConnectionId>,
    },
    /// Opaque signaling payload tagged with its sender
    Signal { signal: Value, from: ConnectionId },
    StartGame,
    TurnData(TurnState),
    Chat { message: String, username: String },
    PlayerLeft {
        id: ConnectionId,
        username: Option<DisplayName>,
    },
}
