//! ファンアウト（ブロードキャスト）処理
//!
//! 1 つのイベントをルームのメンバーへ順番に送ります。
//! 送信は接続ごとに独立しており、1 つの失敗で残りの送信が止まることはありません。

use crate::domain::{Connection, ConnectionId, Room, RoomEvent};

/// Which members receive a broadcast
#[derive(Debug, Clone, Copy)]
pub enum Audience<'a> {
    /// Every member, the sender included
    All,
    /// Every member except the given connection
    AllExcept(&'a ConnectionId),
}

impl Audience<'_> {
    fn includes(&self, member_id: &ConnectionId) -> bool {
        match self {
            Audience::All => true,
            Audience::AllExcept(excluded) => *excluded != member_id,
        }
    }
}

/// Send `event` to the members of `room` selected by `audience`
///
/// # Returns
///
/// 送信キューに積めたメンバー数
pub fn broadcast(room: &Room, event: &RoomEvent, audience: Audience<'_>) -> usize {
    let mut delivered = 0;

    for member in room.members() {
        if !audience.includes(&member.id) {
            continue;
        }
        if !member.connection.is_open() {
            tracing::debug!("Skipping closed connection '{}'", member.id);
            continue;
        }
        match member.connection.send(event) {
            Ok(()) => delivered += 1,
            Err(e) => {
                tracing::warn!("Failed to send to '{}' in room '{}': {}", member.id, room.id, e);
            }
        }
    }

    delivered
}

/// Send `event` to a single connection
///
/// # Returns
///
/// 送信キューに積めたかどうか
pub fn unicast(connection: &dyn Connection, event: &RoomEvent) -> bool {
    if !connection.is_open() {
        return false;
    }
    match connection.send(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to send unicast message: {}", e);
            false
        }
    }
}
