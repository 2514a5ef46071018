//! Server state shared by all handlers.

use std::sync::Arc;

use crate::{
    domain::RoomRegistry,
    infrastructure::repository::InMemoryRoomRegistry,
    usecase::{MessageDispatcher, RelayOptions},
};

/// Shared application state
pub struct AppState {
    /// Room registry shared by the relay and the HTTP API
    pub registry: Arc<dyn RoomRegistry>,
    /// Relay engine handed to every connection
    pub dispatcher: MessageDispatcher,
}

impl AppState {
    pub fn new(options: RelayOptions) -> Self {
        let registry: Arc<dyn RoomRegistry> = Arc::new(InMemoryRoomRegistry::new());
        let dispatcher = MessageDispatcher::new(registry.clone(), options);
        Self {
            registry,
            dispatcher,
        }
    }
}
