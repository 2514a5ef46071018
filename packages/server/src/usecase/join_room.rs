//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームの自動作成、ホスト選出、名簿への追加、initPeer / playerList の送信
//!
//! ### なぜこのテストが必要か
//! - 最初の参加者だけが initiator になることを保証する
//! - 参加のたびに全メンバーへ最新の名簿が届くことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：1 人目・2 人目の参加
//! - エッジケース：同じルームへの再参加（名簿は重複、メンバーは重複しない）
//! - エッジケース：username なしの参加

use std::sync::Arc;

use crate::domain::{DisplayName, RoomEvent, RoomId, RoomRegistry, Session, Timestamp};

use super::{
    broadcast::{Audience, broadcast, unicast},
    error::RelayError,
};

/// 参加処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// The joiner is the earliest member and initiates signaling
    pub initiator: bool,
    /// The joiner was recorded as host
    pub became_host: bool,
    /// Members that received the updated player list
    pub notified: usize,
}

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Registry（ルーム管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ルーム参加を実行
    ///
    /// # Arguments
    ///
    /// * `session` - 参加するクライアントのセッション
    /// * `room_id` - 参加先のルーム ID（存在しなければ作成される）
    /// * `username` - 名簿に追加する表示名
    pub async fn execute(
        &self,
        session: &mut Session,
        room_id: RoomId,
        username: Option<DisplayName>,
    ) -> Result<JoinOutcome, RelayError> {
        let mut table = self.registry.lock().await;
        let room = table.get_or_create(&room_id);

        // 1. メンバーに追加（再参加の場合は追加しない）
        let became_host = if room.contains(session.id()) {
            false
        } else {
            room.add_member(session.to_member(Timestamp::now()))?
                .became_host
        };

        // 2. 表示名を名簿に追加
        if let Some(name) = username {
            room.push_player(session.id().clone(), name.clone());
            session.set_display_name(name);
        }
        session.bind_room(room_id.clone());

        // 3. 参加者本人に initPeer を送信
        let initiator = room.is_first_member(session.id());
        unicast(session.connection().as_ref(), &RoomEvent::InitPeer { initiator });

        // 4. 全員に playerList をブロードキャスト
        let player_list = RoomEvent::PlayerList {
            players: room.player_names(),
            host_id: room.host_id().cloned(),
        };
        let notified = broadcast(room, &player_list, Audience::All);

        tracing::info!(
            "Connection '{}' joined room '{}' (members: {}, initiator: {})",
            session.id(),
            room_id,
            room.member_count(),
            initiator
        );

        Ok(JoinOutcome {
            initiator,
            became_host,
            notified,
        })
    }
}
