//! Command-line interface parsing for the FiveM status CLI
//!
//! This module handles parsing of CLI arguments using clap: the target
//! server address, per-request timeout and cache TTL overrides, and the
//! query subcommand to run.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::client::{StatusClient, DEFAULT_CACHE_TTL_MS, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};

/// FiveM Status CLI - Query a FiveM server's status endpoints
#[derive(Parser, Debug)]
#[command(name = "fivem-status")]
#[command(about = "Query a FiveM server's players, metadata and capacity")]
#[command(version)]
pub struct Cli {
    /// Server hostname or IP address
    pub host: String,

    /// Status query port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// How long responses are cached, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_CACHE_TTL_MS)]
    pub cache_ttl_ms: u64,

    /// Query to run against the server
    #[command(subcommand)]
    pub command: Command,
}

/// Queries the CLI can run
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show online state, player count and capacity
    Status,
    /// List connected players
    Players,
    /// Look up one player by server id
    Player {
        /// Server id of the player
        id: String,
    },
    /// Print decoded server metadata as JSON
    Info,
    /// Check whether a resource is running
    Resource {
        /// Resource name, e.g. "es_extended"
        name: String,
    },
}

impl Cli {
    /// Builds a `StatusClient` from the parsed arguments
    pub fn build_client(&self) -> StatusClient {
        StatusClient::with_address(&self.host, self.port)
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_cache_ttl(Duration::from_millis(self.cache_ttl_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_server_conventions() {
        let cli = Cli::parse_from(["fivem-status", "203.0.113.7", "status"]);
        assert_eq!(cli.host, "203.0.113.7");
        assert_eq!(cli.port, 30120);
        assert_eq!(cli.timeout_ms, 5000);
        assert_eq!(cli.cache_ttl_ms, 60000);
        assert_eq!(cli.command, Command::Status);
    }

    #[test]
    fn test_port_override() {
        let cli = Cli::parse_from(["fivem-status", "203.0.113.7", "--port", "30125", "players"]);
        assert_eq!(cli.port, 30125);
        assert_eq!(cli.command, Command::Players);
    }

    #[test]
    fn test_resource_subcommand_takes_name() {
        let cli = Cli::parse_from(["fivem-status", "h", "resource", "es_extended"]);
        assert_eq!(
            cli.command,
            Command::Resource {
                name: "es_extended".to_string()
            }
        );
    }

    #[test]
    fn test_player_subcommand_takes_raw_id() {
        let cli = Cli::parse_from(["fivem-status", "h", "player", "7"]);
        assert_eq!(
            cli.command,
            Command::Player {
                id: "7".to_string()
            }
        );
    }

    #[test]
    fn test_build_client_uses_overrides() {
        let cli = Cli::parse_from([
            "fivem-status",
            "203.0.113.7",
            "--timeout-ms",
            "250",
            "--cache-ttl-ms",
            "1000",
            "status",
        ]);
        let client = cli.build_client();
        assert_eq!(client.base_url(), "http://203.0.113.7:30120");
        assert_eq!(client.cache().ttl(), Duration::from_millis(1000));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        let result = Cli::try_parse_from(["fivem-status", "203.0.113.7"]);
        assert!(result.is_err());
    }
}
