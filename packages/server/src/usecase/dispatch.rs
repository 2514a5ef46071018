//! Relay engine: routes each client command to the matching use case.
//!
//! Client input never produces an error reply. Commands that reference no room or
//! the wrong room are logged at `debug` and dropped, and the connection stays open.

use std::sync::Arc;

use crate::domain::{RoomRegistry, Session};

use super::{
    command::RelayCommand, error::RelayError, join_room::JoinRoomUseCase,
    leave_room::LeaveRoomUseCase, options::RelayOptions, relay_message::RelayMessageUseCase,
};

/// Per-command dispatcher shared by all connections
#[derive(Clone)]
pub struct MessageDispatcher {
    registry: Arc<dyn RoomRegistry>,
    options: RelayOptions,
}

impl MessageDispatcher {
    pub fn new(registry: Arc<dyn RoomRegistry>, options: RelayOptions) -> Self {
        Self { registry, options }
    }

    /// Dispatch a decoded command
    pub async fn dispatch(&self, session: &mut Session, command: RelayCommand) {
        let kind = command.kind();
        if let Err(e) = self.handle(session, command).await {
            tracing::debug!("Ignored '{}' from '{}': {}", kind, session.id(), e);
        }
    }

    /// Remove the session from its room after the connection closed
    pub async fn disconnect(&self, session: &mut Session) {
        if session.room_id().is_none() {
            return;
        }
        match self.leave_room().execute(session).await {
            Ok(outcome) if outcome.room_removed => tracing::info!(
                "Connection '{}' was the last member of room '{}'",
                session.id(),
                outcome.room_id
            ),
            Ok(_) => {}
            Err(e) => tracing::debug!("Cleanup for '{}' skipped: {}", session.id(), e),
        }
    }

    async fn handle(&self, session: &mut Session, command: RelayCommand) -> Result<(), RelayError> {
        match command {
            RelayCommand::Join { room_id, username } => {
                let switching_rooms = session.room_id().is_some_and(|bound| bound != &room_id);
                if switching_rooms && let Err(e) = self.leave_room().execute(session).await {
                    tracing::debug!("Leaving previous room failed for '{}': {}", session.id(), e);
                }
                JoinRoomUseCase::new(self.registry.clone())
                    .execute(session, room_id, username)
                    .await?;
            }
            RelayCommand::Signal { room_id, signal } => {
                self.relay().signal(session, room_id, signal).await?;
            }
            RelayCommand::StartGame => {
                self.relay().start_game(session).await?;
            }
            RelayCommand::TurnData(turn_state) => {
                self.relay().turn_data(session, turn_state).await?;
            }
            RelayCommand::Chat { message, username } => {
                self.relay().chat(session, message, username).await?;
            }
        }
        Ok(())
    }

    fn relay(&self) -> RelayMessageUseCase {
        RelayMessageUseCase::new(self.registry.clone())
    }

    fn leave_room(&self) -> LeaveRoomUseCase {
        LeaveRoomUseCase::new(self.registry.clone(), self.options)
    }
}
