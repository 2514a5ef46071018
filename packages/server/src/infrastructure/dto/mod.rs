//! Data transfer objects for the WebSocket protocol and the HTTP API.

pub mod http;
pub mod websocket;
