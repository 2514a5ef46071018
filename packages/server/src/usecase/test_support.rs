//! UseCase テスト用のヘルパー

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    domain::{ConnectionId, RoomRegistry, Session},
    infrastructure::{
        connection::ChannelConnection, dto::websocket::ServerMessage,
        repository::InMemoryRoomRegistry,
    },
};

pub fn create_test_registry() -> Arc<dyn RoomRegistry> {
    Arc::new(InMemoryRoomRegistry::new())
}

/// 登録されているルーム数
pub async fn room_count(registry: &Arc<dyn RoomRegistry>) -> usize {
    registry.lock().await.rooms().len()
}

/// 固定 ID のセッションと、その送信キューの受信側を作る
pub fn connect(id: &str) -> (Session, UnboundedReceiver<String>) {
    let (connection, rx) = ChannelConnection::channel();
    (Session::new(ConnectionId::new(id), Arc::new(connection)), rx)
}

/// 受信済みのフレームを全て取り出してデコードする
pub fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<ServerMessage> {
    let mut messages = Vec::new();
    while let Ok(text) = rx.try_recv() {
        messages.push(serde_json::from_str(&text).expect("server sent invalid JSON"));
    }
    messages
}
