//! Core domain models for the relay.

use std::{fmt, sync::Arc};

use super::{
    connection::Connection,
    error::RoomError,
    value_object::{ConnectionId, DisplayName, RoomId, Timestamp, TurnState},
};

/// What happens to a room's host and roster when a member leaves.
///
/// Both switches default to off: a departed host stays host and a departed
/// player's name stays on the roster until the room itself is destroyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeavePolicy {
    /// Hand the host role to the earliest remaining member when the host leaves
    pub reassign_host: bool,
    /// Drop the leaving member's names from the roster
    pub prune_roster: bool,
}

/// Represents an active room with members, roster and turn state
#[derive(Debug)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Members in join order
    members: Vec<Member>,
    /// Identity of the host, set by the first join
    host_id: Option<ConnectionId>,
    /// Display names in the order they were supplied
    roster: Vec<RosterEntry>,
    /// Last turn update received
    turn_state: TurnState,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new empty room with the given ID and creation timestamp
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            members: Vec::new(),
            host_id: None,
            roster: Vec::new(),
            turn_state: TurnState::default(),
            created_at,
        }
    }

    /// Add a member to the room
    ///
    /// The first member of an empty room becomes its host, unless a host was
    /// already recorded.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::DuplicateMember` if the connection is already a member
    pub fn add_member(&mut self, member: Member) -> Result<MemberAdded, RoomError> {
        if self.contains(&member.id) {
            return Err(RoomError::DuplicateMember(member.id));
        }

        let became_host = self.members.is_empty() && self.host_id.is_none();
        if became_host {
            self.host_id = Some(member.id.clone());
        }
        self.members.push(member);

        Ok(MemberAdded { became_host })
    }

    /// Remove a member by exact identity, applying `policy` to host and roster
    ///
    /// Returns `None` if the connection was not a member.
    pub fn remove_member(
        &mut self,
        member_id: &ConnectionId,
        policy: LeavePolicy,
    ) -> Option<Departure> {
        let position = self.members.iter().position(|m| &m.id == member_id)?;
        let member = self.members.remove(position);

        let mut host_changed = false;
        if policy.reassign_host && self.host_id.as_ref() == Some(member_id) {
            self.host_id = self.members.first().map(|m| m.id.clone());
            host_changed = true;
        }

        let mut roster_pruned = 0;
        if policy.prune_roster {
            let before = self.roster.len();
            self.roster.retain(|entry| &entry.owner != member_id);
            roster_pruned = before - self.roster.len();
        }

        Some(Departure {
            member,
            host_changed,
            roster_pruned,
        })
    }

    /// Append a display name to the roster on behalf of `owner`
    ///
    /// Repeated joins append repeated names.
    pub fn push_player(&mut self, owner: ConnectionId, name: DisplayName) {
        self.roster.push(RosterEntry { owner, name });
    }

    /// Replace the turn state with the latest update
    pub fn set_turn_state(&mut self, turn_state: TurnState) {
        self.turn_state = turn_state;
    }

    pub fn contains(&self, member_id: &ConnectionId) -> bool {
        self.members.iter().any(|m| &m.id == member_id)
    }

    /// Whether `member_id` is the earliest remaining member.
    ///
    /// That member initiates WebRTC signaling.
    pub fn is_first_member(&self, member_id: &ConnectionId) -> bool {
        self.members.first().is_some_and(|m| &m.id == member_id)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn host_id(&self) -> Option<&ConnectionId> {
        self.host_id.as_ref()
    }

    /// Display names in roster order
    pub fn player_names(&self) -> Vec<String> {
        self.roster
            .iter()
            .map(|entry| entry.name.as_str().to_string())
            .collect()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }
}

/// A connection participating in a room
#[derive(Clone)]
pub struct Member {
    /// Connection identity
    pub id: ConnectionId,
    /// Handle used for fan-out
    pub connection: Arc<dyn Connection>,
    /// Timestamp when the member joined
    pub joined_at: Timestamp,
}

impl Member {
    /// Create a new member
    pub fn new(id: ConnectionId, connection: Arc<dyn Connection>, joined_at: Timestamp) -> Self {
        Self {
            id,
            connection,
            joined_at,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("open", &self.connection.is_open())
            .field("joined_at", &self.joined_at)
            .finish()
    }
}

/// A roster name together with the connection that supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
struct RosterEntry {
    owner: ConnectionId,
    name: DisplayName,
}

/// Result of adding a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberAdded {
    /// The new member was recorded as host
    pub became_host: bool,
}

/// Result of removing a member
#[derive(Debug)]
pub struct Departure {
    /// The member that left
    pub member: Member,
    /// The host moved to another member
    pub host_changed: bool,
    /// Number of roster entries dropped
    pub roster_pruned: usize,
}
