//! Commands a client can issue to the relay.

use serde_json::Value;

use crate::domain::{DisplayName, RoomId, TurnState};

/// A decoded client request, independent of the wire encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RelayCommand {
    Join {
        room_id: RoomId,
        username: Option<DisplayName>,
    },
    Signal {
        room_id: Option<RoomId>,
        signal: Value,
    },
    StartGame,
    TurnData(TurnState),
    Chat {
        message: String,
        username: Option<String>,
    },
}

impl RelayCommand {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            RelayCommand::Join { .. } => "join",
            RelayCommand::Signal { .. } => "signal",
            RelayCommand::StartGame => "startGame",
            RelayCommand::TurnData(_) => "turnData",
            RelayCommand::Chat { .. } => "chat",
        }
    }
}
