//! Room storage.
//!
//! Rooms live only in process memory; nothing survives a restart.

pub mod inmemory;

pub use inmemory::InMemoryRoomRegistry;
