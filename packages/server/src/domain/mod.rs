//! Domain layer for the relay.
//!
//! This module contains room and session rules that are independent of
//! the wire format and the transport.

pub mod connection;
pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod repository;
pub mod session;
pub mod value_object;

pub use connection::{Connection, ConnectionError};
pub use entity::{Departure, LeavePolicy, Member, MemberAdded, Room};
pub use error::{RegistryError, RoomError};
pub use event::RoomEvent;
pub use factory::ConnectionIdFactory;
pub use repository::{RoomRegistry, RoomTable};
pub use session::Session;
pub use value_object::{ConnectionId, DisplayName, RoomId, Timestamp, TurnState};
