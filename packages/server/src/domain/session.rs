//! Per-connection session context.

use std::{fmt, sync::Arc};

use super::{
    connection::Connection,
    entity::Member,
    value_object::{ConnectionId, DisplayName, RoomId, Timestamp},
};

/// State owned by a single connection for its whole lifetime.
///
/// Ties inbound messages to the sender's room without a reverse index in the
/// registry. Dropped when the connection closes.
pub struct Session {
    id: ConnectionId,
    connection: Arc<dyn Connection>,
    room_id: Option<RoomId>,
    display_name: Option<DisplayName>,
}

impl Session {
    pub fn new(id: ConnectionId, connection: Arc<dyn Connection>) -> Self {
        Self {
            id,
            connection,
            room_id: None,
            display_name: None,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    /// Room this session last joined, if any
    pub fn room_id(&self) -> Option<&RoomId> {
        self.room_id.as_ref()
    }

    pub fn display_name(&self) -> Option<&DisplayName> {
        self.display_name.as_ref()
    }

    pub(crate) fn bind_room(&mut self, room_id: RoomId) {
        self.room_id = Some(room_id);
    }

    pub(crate) fn unbind_room(&mut self) -> Option<RoomId> {
        self.room_id.take()
    }

    pub(crate) fn set_display_name(&mut self, name: DisplayName) {
        self.display_name = Some(name);
    }

    /// Build the room membership record for this connection
    pub fn to_member(&self, joined_at: Timestamp) -> Member {
        Member::new(self.id.clone(), self.connection.clone(), joined_at)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("room_id", &self.room_id)
            .field("display_name", &self.display_name)
            .finish()
    }
}
