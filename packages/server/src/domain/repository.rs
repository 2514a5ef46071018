//! Room Registry trait.
//!
//! The use cases only see these traits; the storage behind them lives in the
//! infrastructure layer.

use async_trait::async_trait;

use super::{entity::Room, error::RegistryError, value_object::RoomId};

/// Process-wide mapping from room id to Room
///
/// Every read or write goes through the table returned by `lock`, and the table
/// stays exclusive until it is dropped.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Wait for exclusive access to the room table
    async fn lock<'a>(&'a self) -> Box<dyn RoomTable + 'a>;
}

/// Exclusive view over all rooms
pub trait RoomTable: Send {
    /// Existing room, or a fresh empty one registered under `room_id`
    fn get_or_create(&mut self, room_id: &RoomId) -> &mut Room;

    fn get(&self, room_id: &RoomId) -> Option<&Room>;

    fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room>;

    /// Unregister an empty room
    ///
    /// # Errors
    ///
    /// * `RegistryError::RoomNotFound` - not registered
    /// * `RegistryError::RoomNotEmpty` - members remain
    fn remove(&mut self, room_id: &RoomId) -> Result<Room, RegistryError>;

    /// All rooms, oldest first (ties broken by room id)
    fn rooms(&self) -> Vec<&Room>;
}
