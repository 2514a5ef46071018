//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection identifier value object.
///
/// Assigned by the server when a connection is accepted and used wherever
/// membership is tracked, so rooms never rely on handle identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a new ConnectionId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room identifier value object.
///
/// An opaque key chosen by clients. Any string, including the empty one, is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name a client supplies when joining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self(roomcast_shared::time::now_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Last-known turn state of a room.
///
/// `current_index` points at the player whose turn it is and `previous_max_volume`
/// is the loudest volume recorded during the previous turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_index: i64,
    pub previous_max_volume: f64,
}

impl TurnState {
    pub fn new(current_index: i64, previous_max_volume: f64) -> Self {
        Self {
            current_index,
            previous_max_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_equality() {
        // テスト項目: 同じ値を持つ ConnectionId は等価
        // given (前提条件):
        let id1 = ConnectionId::new("c-1");
        let id2 = ConnectionId::new("c-1".to_string());
        let id3 = ConnectionId::new("c-2");

        // then (期待する結果):
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1.as_str(), "c-1");
    }

    #[test]
    fn test_room_id_accepts_any_string() {
        // テスト項目: RoomId は検証を行わず任意の文字列を受け付ける
        // when (操作):
        let empty = RoomId::new("");
        let spaced = RoomId::new("my room / 1");

        // then (期待する結果):
        assert_eq!(empty.as_str(), "");
        assert_eq!(spaced.to_string(), "my room / 1");
    }

    #[test]
    fn test_display_name_as_str() {
        // テスト項目: DisplayName から文字列を取り出せる
        let name = DisplayName::new("alice");
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        // given (前提条件):
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        // then (期待する結果):
        assert!(ts1 < ts2);
        assert_eq!(ts2.value(), 2000);
    }

    #[test]
    fn test_turn_state_default_is_zero() {
        // テスト項目: TurnState の初期値は (0, 0)
        // when (操作):
        let state = TurnState::default();

        // then (期待する結果):
        assert_eq!(state, TurnState::new(0, 0.0));
    }
}
