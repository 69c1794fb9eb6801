//! Integration tests for CLI argument handling
//!
//! Exercises the binary's help output and the clap parsing rules for hosts,
//! ports and subcommands.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fivem-status"))
        .args(args)
        .output()
        .expect("Failed to execute fivem-status")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("fivem-status"),
        "Help should mention fivem-status"
    );
    assert!(stdout.contains("status"), "Help should list subcommands");
}

#[test]
fn test_missing_host_prints_usage_and_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected missing host to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.to_lowercase().contains("usage"),
        "Should print usage on missing arguments: {}",
        stderr
    );
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run_cli(&["203.0.113.7", "frobnicate"]);
    assert!(
        !output.status.success(),
        "Expected unknown subcommand to fail"
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use fivem_status::cli::{Cli, Command};

    #[test]
    fn test_cli_parses_host_and_subcommand() {
        let cli = Cli::parse_from(["fivem-status", "play.example.com", "info"]);
        assert_eq!(cli.host, "play.example.com");
        assert_eq!(cli.command, Command::Info);
    }

    #[test]
    fn test_cli_default_port_is_30120() {
        let cli = Cli::parse_from(["fivem-status", "play.example.com", "status"]);
        assert_eq!(cli.port, 30120);
    }

    #[test]
    fn test_cli_default_timeout_and_ttl() {
        let cli = Cli::parse_from(["fivem-status", "play.example.com", "status"]);
        assert_eq!(cli.timeout_ms, 5000);
        assert_eq!(cli.cache_ttl_ms, 60000);
    }

    #[test]
    fn test_cli_rejects_non_numeric_port() {
        let result = Cli::try_parse_from(["fivem-status", "h", "--port", "lots", "status"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_player_lookup_keeps_id_as_string() {
        // Ids are coerced later so the library can accept "7" and 7 alike
        let cli = Cli::parse_from(["fivem-status", "h", "player", "0042"]);
        assert_eq!(
            cli.command,
            Command::Player {
                id: "0042".to_string()
            }
        );
    }
}
