//! WebSocket relay server: routing, handlers and process lifecycle.

pub mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{create_router, run, serve};
