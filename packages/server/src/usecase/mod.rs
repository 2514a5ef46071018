//! UseCase 層
//!
//! ルームへの参加・中継・退出のビジネスロジックを実装するレイヤー。
//! UI 層から MessageDispatcher 経由で呼び出され、Domain 層の Model と RoomRegistry trait にのみ依存します。

pub mod broadcast;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod join_room;
pub mod leave_room;
pub mod options;
pub mod relay_message;

#[cfg(test)]
mod test_support;

pub use broadcast::{Audience, broadcast, unicast};
pub use command::RelayCommand;
pub use dispatch::MessageDispatcher;
pub use error::RelayError;
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use leave_room::{LeaveOutcome, LeaveRoomUseCase};
pub use options::RelayOptions;
pub use relay_message::RelayMessageUseCase;
