//! UseCase 層のエラー定義
//!
//! どのエラーもクライアントへは返さず、Dispatcher がログに記録して破棄します。

use thiserror::Error;

use crate::domain::{RegistryError, RoomError, RoomId};

/// メッセージ中継処理のエラー
#[derive(Debug, Error)]
pub enum RelayError {
    /// The session has not joined any room
    #[error("Session has not joined a room")]
    NotInRoom,

    /// The bound room is no longer registered
    #[error("Room '{0}' does not exist")]
    RoomNotFound(RoomId),

    /// The message names a room other than the one the session joined
    #[error("Message targets room '{requested}' but session is in '{bound}'")]
    RoomMismatch { bound: RoomId, requested: RoomId },

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
