//! UseCase: ルーム内メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase の signal / start_game / turn_data / chat
//!
//! ### なぜこのテストが必要か
//! - signal だけは送信者に戻してはならない（WebRTC のオファー/アンサーが自分に届くと壊れる）
//! - それ以外の種別は送信者を含む全員に届く
//! - turnData はルームのターン状態を上書きする
//!
//! ### どのような状況を想定しているか
//! - 正常系：各種別の中継
//! - 異常系：未参加のセッション、存在しないルーム、別ルームを指定した signal

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{Room, RoomEvent, RoomId, RoomRegistry, RoomTable, Session, TurnState};

use super::{
    broadcast::{Audience, broadcast},
    error::RelayError,
};

/// ルーム内メッセージ中継のユースケース
///
/// どのメソッドも、送信者のセッションが参加しているルームを対象にします。
/// 戻り値は送信キューに積めたメンバー数です。
pub struct RelayMessageUseCase {
    /// Registry（ルーム管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// WebRTC シグナリングデータを送信者以外の全員へ中継
    ///
    /// `requested_room` が指定され、参加中のルームと異なる場合は中継しない。
    pub async fn signal(
        &self,
        session: &Session,
        requested_room: Option<RoomId>,
        signal: Value,
    ) -> Result<usize, RelayError> {
        let bound = bound_room(session)?;
        if let Some(requested) = requested_room
            && &requested != bound
        {
            return Err(RelayError::RoomMismatch {
                bound: bound.clone(),
                requested,
            });
        }

        let table = self.registry.lock().await;
        let room = find_room(&*table, bound)?;
        let event = RoomEvent::Signal {
            signal,
            from: session.id().clone(),
        };
        Ok(broadcast(room, &event, Audience::AllExcept(session.id())))
    }

    /// ゲーム開始を全員へ通知
    pub async fn start_game(&self, session: &Session) -> Result<usize, RelayError> {
        let bound = bound_room(session)?;
        let table = self.registry.lock().await;
        let room = find_room(&*table, bound)?;
        tracing::info!("Game started in room '{}' by '{}'", room.id, session.id());
        Ok(broadcast(room, &RoomEvent::StartGame, Audience::All))
    }

    /// ターン状態を上書きし、全員へ通知
    pub async fn turn_data(
        &self,
        session: &Session,
        turn_state: TurnState,
    ) -> Result<usize, RelayError> {
        let bound = bound_room(session)?;
        let mut table = self.registry.lock().await;
        let room = table
            .get_mut(bound)
            .ok_or_else(|| RelayError::RoomNotFound(bound.clone()))?;

        room.set_turn_state(turn_state);
        Ok(broadcast(room, &RoomEvent::TurnData(turn_state), Audience::All))
    }

    /// チャットメッセージを全員へ中継
    ///
    /// `username` が省略された場合はセッションの表示名を使う。
    pub async fn chat(
        &self,
        session: &Session,
        message: String,
        username: Option<String>,
    ) -> Result<usize, RelayError> {
        let bound = bound_room(session)?;
        let username = username
            .or_else(|| session.display_name().map(|n| n.as_str().to_string()))
            .unwrap_or_default();

        let table = self.registry.lock().await;
        let room = find_room(&*table, bound)?;
        let event = RoomEvent::Chat { message, username };
        Ok(broadcast(room, &event, Audience::All))
    }
}

fn bound_room(session: &Session) -> Result<&RoomId, RelayError> {
    session.room_id().ok_or(RelayError::NotInRoom)
}

fn find_room<'t>(table: &'t dyn RoomTable, room_id: &RoomId) -> Result<&'t Room, RelayError> {
    table
        .get(room_id)
        .ok_or_else(|| RelayError::RoomNotFound(room_id.clone()))
}
