//! WebSocket message DTOs for the relay protocol.
//!
//! Every frame is a JSON object with a camelCase `type` discriminator.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::RoomEvent;

/// Message types a client may send
pub const CLIENT_MESSAGE_TYPES: [&str; 5] = ["join", "signal", "startGame", "turnData", "chat"];

/// Errors produced while decoding an inbound frame
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, or a known type with missing/invalid fields
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// JSON without a string `type` field
    #[error("Message has no type")]
    MissingType,

    /// A `type` this relay does not handle
    #[error("Unsupported message type: {0}")]
    UnsupportedType(String),
}

/// Messages received from clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Join (or create) a room
    Join {
        room_id: String,
        #[serde(default)]
        username: Option<String>,
    },
    /// Opaque WebRTC signaling payload for the other members
    Signal {
        #[serde(default)]
        room_id: Option<String>,
        signal: Value,
    },
    StartGame {},
    TurnData {
        current_index: i64,
        previous_max_volume: f64,
    },
    Chat {
        message: String,
        #[serde(default)]
        username: Option<String>,
    },
}

impl ClientMessage {
    /// Decode a text frame
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` when the frame is not a JSON object with a supported
    /// `type` and the fields that type requires.
    pub fn decode(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingType)?;

        if !CLIENT_MESSAGE_TYPES.contains(&kind) {
            return Err(DecodeError::UnsupportedType(kind.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Wire name of the message type
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::Join { .. } => "join",
            ClientMessage::Signal { .. } => "signal",
            ClientMessage::StartGame {} => "startGame",
            ClientMessage::TurnData { .. } => "turnData",
            ClientMessage::Chat { .. } => "chat",
        }
    }
}

/// Messages sent to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Sent only to the joiner; `initiator` is true for the earliest member
    InitPeer { initiator: bool },
    /// Roster and host, broadcast to every member after a join
    PlayerList {
        players: Vec<String>,
        host_id: Option<String>,
    },
    /// Relayed signaling payload; never echoed to its sender
    Signal { signal: Value, from: String },
    StartGame {},
    TurnData {
        current_index: i64,
        previous_max_volume: f64,
    },
    Chat { message: String, username: String },
    /// Optional departure notice
    PlayerLeft {
        id: String,
        username: Option<String>,
    },
}

impl ServerMessage {
    /// Encode as a JSON text frame
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&RoomEvent> for ServerMessage {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::InitPeer { initiator } => ServerMessage::InitPeer {
                initiator: *initiator,
            },
            RoomEvent::PlayerList { players, host_id } => ServerMessage::PlayerList {
                players: players.clone(),
                host_id: host_id.as_ref().map(|id| id.as_str().to_string()),
            },
            RoomEvent::Signal { signal, from } => ServerMessage::Signal {
                signal: signal.clone(),
                from: from.as_str().to_string(),
            },
            RoomEvent::StartGame => ServerMessage::StartGame {},
            RoomEvent::TurnData(state) => ServerMessage::TurnData {
                current_index: state.current_index,
                previous_max_volume: state.previous_max_volume,
            },
            RoomEvent::Chat { message, username } => ServerMessage::Chat {
                message: message.clone(),
                username: username.clone(),
            },
            RoomEvent::PlayerLeft { id, username } => ServerMessage::PlayerLeft {
                id: id.as_str().to_string(),
                username: username.as_ref().map(|name| name.as_str().to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, DisplayName, TurnState};
    use serde_json::json;

    #[test]
    fn test_decode_join_with_username() {
        // テスト項目: join メッセージをデコードできる
        // when (操作):
        let message =
            ClientMessage::decode(r#"{"type":"join","roomId":"R1","username":"alice"}"#).unwrap();

        // then (期待する結果):
        assert_eq!(
            message,
            ClientMessage::Join {
                room_id: "R1".to_string(),
                username: Some("alice".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_join_without_username() {
        // テスト項目: username なしの join もデコードできる
        let message = ClientMessage::decode(r#"{"type":"join","roomId":"R1"}"#).unwrap();
        assert_eq!(
            message,
            ClientMessage::Join {
                room_id: "R1".to_string(),
                username: None,
            }
        );
    }

    #[test]
    fn test_decode_turn_data() {
        // テスト項目: turnData の camelCase フィールドをデコードできる
        let message = ClientMessage::decode(
            r#"{"type":"turnData","currentIndex":3,"previousMaxVolume":0.7}"#,
        )
        .unwrap();
        assert_eq!(
            message,
            ClientMessage::TurnData {
                current_index: 3,
                previous_max_volume: 0.7,
            }
        );
    }

    #[test]
    fn test_decode_start_game_ignores_extra_fields() {
        // テスト項目: startGame は余分なフィールドがあってもデコードできる
        let message = ClientMessage::decode(r#"{"type":"startGame","roomId":"R1"}"#).unwrap();
        assert_eq!(message, ClientMessage::StartGame {});
    }

    #[test]
    fn test_decode_signal_keeps_payload_opaque() {
        // テスト項目: signal のペイロードはそのまま保持される
        let message =
            ClientMessage::decode(r#"{"type":"signal","signal":{"sdp":"v=0","type":"offer"}}"#)
                .unwrap();
        assert_eq!(
            message,
            ClientMessage::Signal {
                room_id: None,
                signal: json!({"sdp": "v=0", "type": "offer"}),
            }
        );
    }

    #[test]
    fn test_decode_not_json_is_malformed() {
        // テスト項目: JSON でないフレームは Malformed になる
        let result = ClientMessage::decode("hello");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_missing_type() {
        // テスト項目: type がないフレームは MissingType になる
        let result = ClientMessage::decode(r#"{"roomId":"R1"}"#);
        assert!(matches!(result, Err(DecodeError::MissingType)));
    }

    #[test]
    fn test_decode_unknown_type() {
        // テスト項目: 未知の type は UnsupportedType になる
        let result = ClientMessage::decode(r#"{"type":"dance"}"#);
        assert!(matches!(result, Err(DecodeError::UnsupportedType(t)) if t == "dance"));
    }

    #[test]
    fn test_decode_known_type_with_missing_field_is_malformed() {
        // テスト項目: 必須フィールドが欠けた既知の type は Malformed になる
        let result = ClientMessage::decode(r#"{"type":"turnData","currentIndex":1}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_encode_server_messages() {
        // テスト項目: サーバーメッセージが camelCase の JSON にエンコードされる
        // given (前提条件):
        let init = ServerMessage::InitPeer { initiator: true };
        let list = ServerMessage::PlayerList {
            players: vec!["alice".to_string(), "bob".to_string()],
            host_id: Some("c-1".to_string()),
        };
        let start = ServerMessage::StartGame {};

        // when (操作):
        let init_json: Value = serde_json::from_str(&init.encode().unwrap()).unwrap();
        let list_json: Value = serde_json::from_str(&list.encode().unwrap()).unwrap();
        let start_json: Value = serde_json::from_str(&start.encode().unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(init_json, json!({"type": "initPeer", "initiator": true}));
        assert_eq!(
            list_json,
            json!({"type": "playerList", "players": ["alice", "bob"], "hostId": "c-1"})
        );
        assert_eq!(start_json, json!({"type": "startGame"}));
    }

    #[test]
    fn test_room_events_map_to_wire_messages() {
        // テスト項目: ドメインイベントが対応するサーバーメッセージに変換される
        // given (前提条件):
        let left = RoomEvent::PlayerLeft {
            id: ConnectionId::new("c-2"),
            username: Some(DisplayName::new("bob")),
        };
        let signal = RoomEvent::Signal {
            signal: json!({"candidate": "x"}),
            from: ConnectionId::new("c-1"),
        };
        let turn = RoomEvent::TurnData(TurnState::new(3, 0.7));

        // when (操作):
        let left = ServerMessage::from(&left);
        let signal_json: Value =
            serde_json::from_str(&ServerMessage::from(&signal).encode().unwrap()).unwrap();
        let turn_json: Value =
            serde_json::from_str(&ServerMessage::from(&turn).encode().unwrap()).unwrap();

        // then (期待する結果):
        assert_eq!(
            left,
            ServerMessage::PlayerLeft {
                id: "c-2".to_string(),
                username: Some("bob".to_string()),
            }
        );
        assert_eq!(
            signal_json,
            json!({"type": "signal", "signal": {"candidate": "x"}, "from": "c-1"})
        );
        assert_eq!(
            turn_json,
            json!({"type": "turnData", "currentIndex": 3, "previousMaxVolume": 0.7})
        );
    }
}
