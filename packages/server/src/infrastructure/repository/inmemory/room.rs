//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! ルーム ID から Room ドメインモデルへの対応表を HashMap で保持します。
//!
//! ## 排他制御
//!
//! 対応表全体を 1 つの `tokio::sync::Mutex` で保護します。UseCase は 1 メッセージの
//! 処理（ルームの作成・変更・ファンアウト・空ルームの削除）を 1 回のロック取得の中で
//! 完結させるため、同じルーム ID に対して 2 つの Room が作られたり、参加処理の途中で
//! Room が削除されたりすることはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{RegistryError, Room, RoomId, RoomRegistry, RoomTable, Timestamp};

/// インメモリ Room Registry 実装
///
/// ドメイン層の RoomRegistry trait を実装します（依存性の逆転）。
#[derive(Debug, Default)]
pub struct InMemoryRoomRegistry {
    /// ルーム ID → Room
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRegistry {
    /// 新しい InMemoryRoomRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn lock<'a>(&'a self) -> Box<dyn RoomTable + 'a> {
        Box::new(InMemoryRoomTable {
            rooms: self.rooms.lock().await,
        })
    }
}

/// ロック中の対応表
///
/// ドロップするとロックが解放されます。
struct InMemoryRoomTable<'a> {
    rooms: MutexGuard<'a, HashMap<RoomId, Room>>,
}

impl RoomTable for InMemoryRoomTable<'_> {
    fn get_or_create(&mut self, room_id: &RoomId) -> &mut Room {
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!("Room '{}' created", room_id);
            Room::new(room_id.clone(), Timestamp::now())
        })
    }

    fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    fn remove(&mut self, room_id: &RoomId) -> Result<Room, RegistryError> {
        let room = self
            .rooms
            .get(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.clone()))?;

        // メンバーが残っている Room の削除は呼び出し側のバグ
        if !room.is_empty() {
            return Err(RegistryError::RoomNotEmpty {
                room_id: room_id.clone(),
                members: room.member_count(),
            });
        }

        let room = self
            .rooms
            .remove(room_id)
            .ok_or_else(|| RegistryError::RoomNotFound(room_id.clone()))?;
        tracing::info!("Room '{}' removed", room_id);
        Ok(room)
    }

    fn rooms(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.values().collect();
        rooms.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        rooms
    }
}
