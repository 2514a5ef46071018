//! Infrastructure layer.
//!
//! Concrete implementations behind the domain seams: the in-memory room
//! registry, the channel-backed connection handle and the wire DTOs.

pub mod connection;
pub mod dto;
pub mod repository;
