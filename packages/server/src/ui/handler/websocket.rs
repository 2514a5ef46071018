//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};

use crate::{
    domain::{ConnectionIdFactory, DisplayName, RoomId, Session, TurnState},
    infrastructure::{connection::ChannelConnection, dto::websocket::ClientMessage},
    ui::state::AppState,
    usecase::{MessageDispatcher, RelayCommand},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Every connection gets a fresh identity and an outbound queue
    let (connection, mut rx) = ChannelConnection::channel();
    let liveness = connection.clone();
    let mut session = Session::new(ConnectionIdFactory::generate(), Arc::new(connection));
    tracing::info!("Connection '{}' opened", session.id());

    // Spawn a task to forward queued frames to this client
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Handle inbound frames until the client goes away or the writer stops
    loop {
        tokio::select! {
            incoming = receiver.next() => {
                let msg = match incoming {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error on '{}': {}", session.id(), e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        dispatch_frame(&state.dispatcher, &mut session, text.as_str()).await;
                    }
                    Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                        Ok(text) => dispatch_frame(&state.dispatcher, &mut session, text).await,
                        Err(_) => tracing::debug!("Dropped non UTF-8 binary frame from '{}'", session.id()),
                    },
                    Message::Close(_) => {
                        tracing::info!("Connection '{}' requested close", session.id());
                        break;
                    }
                    // Ping/pong is handled automatically by the WebSocket protocol
                    _ => {}
                }
            }
            _ = liveness.closed() => break,
        }
    }

    send_task.abort();
    state.dispatcher.disconnect(&mut session).await;
    tracing::info!("Connection '{}' closed", session.id());
}

/// Decode one inbound frame and hand it to the relay
///
/// Frames that fail to decode are logged at `debug` and dropped.
async fn dispatch_frame(dispatcher: &MessageDispatcher, session: &mut Session, text: &str) {
    match ClientMessage::decode(text) {
        Ok(message) => dispatcher.dispatch(session, message.into()).await,
        Err(e) => tracing::debug!("Dropped frame from '{}': {}", session.id(), e),
    }
}

impl From<ClientMessage> for RelayCommand {
    fn from(message: ClientMessage) -> Self {
        match message {
            ClientMessage::Join { room_id, username } => RelayCommand::Join {
                room_id: RoomId::new(room_id),
                username: username.map(DisplayName::new),
            },
            ClientMessage::Signal { room_id, signal } => RelayCommand::Signal {
                room_id: room_id.map(RoomId::new),
                signal,
            },
            ClientMessage::StartGame {} => RelayCommand::StartGame,
            ClientMessage::TurnData {
                current_index,
                previous_max_volume,
            } => RelayCommand::TurnData(TurnState::new(current_index, previous_max_volume)),
            ClientMessage::Chat { message, username } => RelayCommand::Chat { message, username },
        }
    }
}
