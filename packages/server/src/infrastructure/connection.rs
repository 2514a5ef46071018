//! Connection handle backed by an unbounded mpsc channel.
//!
//! Events are encoded into JSON text frames here, at the infrastructure boundary.
//! The WebSocket handler owns the receiving end and forwards queued frames to the
//! socket from a dedicated writer task, so sending from the relay never waits on
//! network I/O.

use tokio::sync::mpsc;

use crate::{
    domain::{Connection, ConnectionError, RoomEvent},
    infrastructure::dto::websocket::ServerMessage,
};

/// Sender half of a client's outbound frame queue
#[derive(Debug, Clone)]
pub struct ChannelConnection {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelConnection {
    pub fn new(sender: mpsc::UnboundedSender<String>) -> Self {
        Self { sender }
    }

    /// Create a connection together with the receiver its writer task drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Resolves once the writer side has gone away.
    pub async fn closed(&self) {
        self.sender.closed().await;
    }
}

impl Connection for ChannelConnection {
    fn send(&self, event: &RoomEvent) -> Result<(), ConnectionError> {
        let text = ServerMessage::from(event)
            .encode()
            .map_err(|e| ConnectionError::Encode(e.to_string()))?;
        self.sender.send(text).map_err(|_| ConnectionError::Closed)
    }

    fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}
