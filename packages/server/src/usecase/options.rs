//! 中継処理の動作オプション

use crate::domain::LeavePolicy;

/// Behaviour switches for the relay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayOptions {
    /// Host and roster handling when a member leaves
    pub leave_policy: LeavePolicy,
    /// Send `playerLeft` to the remaining members
    pub notify_on_leave: bool,
}
