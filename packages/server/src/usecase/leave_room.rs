//! UseCase: ルーム退出処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveRoomUseCase::execute() メソッド
//! - メンバー削除、空ルームの削除、退出ポリシー（ホスト再割当・名簿整理・退出通知）
//!
//! ### なぜこのテストが必要か
//! - 「メンバーが 1 人以上いる ⇔ Registry に存在する」を保証する
//! - デフォルトではホストと名簿が退出後も残ることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：最後の 1 人の退出でルームが消える
//! - 正常系：ホストが退出してもルームは残り、ホストは変わらない
//! - オプション：reassign_host / prune_roster / notify_on_leave

use std::sync::Arc;

use crate::domain::{RoomEvent, RoomId, RoomRegistry, Session};

use super::{
    broadcast::{Audience, broadcast},
    error::RelayError,
    options::RelayOptions,
};

/// 退出処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// Room the session left
    pub room_id: RoomId,
    /// The room became empty and was removed
    pub room_removed: bool,
    /// Messages queued to the remaining members
    pub notified: usize,
}

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    /// Registry（ルーム管理の抽象化）
    registry: Arc<dyn RoomRegistry>,
    options: RelayOptions,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>, options: RelayOptions) -> Self {
        Self { registry, options }
    }

    /// ルーム退出を実行
    ///
    /// セッションのルーム紐付けは結果に関わらず解除される。
    ///
    /// # Errors
    ///
    /// * `RelayError::NotInRoom` - ルームに参加していない
    /// * `RelayError::RoomNotFound` - 参加中のルームが既に存在しない
    pub async fn execute(&self, session: &mut Session) -> Result<LeaveOutcome, RelayError> {
        let room_id = session.unbind_room().ok_or(RelayError::NotInRoom)?;

        let mut table = self.registry.lock().await;
        let room = table
            .get_mut(&room_id)
            .ok_or_else(|| RelayError::RoomNotFound(room_id.clone()))?;

        // 1. メンバーから削除（ID の完全一致）
        let departure = room.remove_member(session.id(), self.options.leave_policy);

        // 2. 空になったら Registry から削除
        if room.is_empty() {
            table.remove(&room_id)?;
            return Ok(LeaveOutcome {
                room_id,
                room_removed: true,
                notified: 0,
            });
        }

        // 3. 残りのメンバーへ通知
        let mut notified = 0;
        if let Some(departure) = departure {
            if self.options.notify_on_leave {
                let left = RoomEvent::PlayerLeft {
                    id: session.id().clone(),
                    username: session.display_name().cloned(),
                };
                notified += broadcast(room, &left, Audience::All);
            }

            if departure.host_changed || departure.roster_pruned > 0 {
                let player_list = RoomEvent::PlayerList {
                    players: room.player_names(),
                    host_id: room.host_id().cloned(),
                };
                notified += broadcast(room, &player_list, Audience::All);
            }
        }

        tracing::info!(
            "Connection '{}' left room '{}' (remaining: {})",
            session.id(),
            room_id,
            room.member_count()
        );

        Ok(LeaveOutcome {
            room_id,
            room_removed: false,
            notified,
        })
    }
}
