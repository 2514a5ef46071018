//! Command line and environment configuration.

use clap::Parser;

use crate::{domain::LeavePolicy, usecase::RelayOptions};

/// Port used when neither `--port` nor `PORT` is given
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "roomcast-server", version, about = "Room-based WebRTC signaling relay")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Hand the host role to the earliest remaining member when the host leaves
    #[arg(long, env = "REASSIGN_HOST_ON_LEAVE")]
    pub reassign_host_on_leave: bool,

    /// Remove a leaving member's names from the player list
    #[arg(long, env = "PRUNE_ROSTER_ON_LEAVE")]
    pub prune_roster_on_leave: bool,

    /// Send `playerLeft` to the remaining members when someone leaves
    #[arg(long, env = "NOTIFY_ON_LEAVE")]
    pub notify_on_leave: bool,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn relay_options(&self) -> RelayOptions {
        RelayOptions {
            leave_policy: LeavePolicy {
                reassign_host: self.reassign_host_on_leave,
                prune_roster: self.prune_roster_on_leave,
            },
            notify_on_leave: self.notify_on_leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしではデフォルト値が使われる
        // when (操作):
        let config = ServerConfig::try_parse_from(["roomcast-server"]).unwrap();
        assert!(config.bind_address().ends_with(&format!(":{}", config.port)));

        // then (期待する結果):
        assert_eq!(config.relay_options(), RelayOptions::default());
    }

    #[test]
    fn test_flags_map_to_relay_options() {
        // テスト項目: フラグが RelayOptions に反映される
        // when (操作):
        let config = ServerConfig::try_parse_from([
            "roomcast-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--reassign-host-on-leave",
            "--prune-roster-on-leave",
            "--notify-on-leave",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.relay_options(),
            RelayOptions {
                leave_policy: LeavePolicy {
                    reassign_host: true,
                    prune_roster: true,
                },
                notify_on_leave: true,
            }
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        // テスト項目: 範囲外のポートはエラーになる
        let result = ServerConfig::try_parse_from(["roomcast-server", "--port", "70000"]);
        assert!(result.is_err());
    }
}
