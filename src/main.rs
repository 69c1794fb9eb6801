//! FiveM Status CLI - Query a FiveM server's status endpoints
//!
//! Parses the target server and query from the command line, runs the query
//! through the cached status client, and prints the result. Exits nonzero
//! when a `status` query finds the server unreachable or a `resource` query
//! finds the resource absent, so the binary is usable from scripts.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fivem_status::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = cli.build_client();

    match &cli.command {
        Command::Status => {
            if !client.is_online().await {
                println!("{} is offline (or unreachable)", cli.host);
                return ExitCode::FAILURE;
            }

            // Both hit "dynamic"; the second call is served from the cache
            let max = client.max_players().await;
            let count = client.player_count().await;

            match max {
                Some(max) => println!("{} is online - {}/{} players", cli.host, count, max),
                None => println!("{} is online - {} players", cli.host, count),
            }
        }
        Command::Players => {
            let players = client.players().await;
            if players.is_empty() {
                println!("no players online (or the server is unreachable)");
            } else {
                for player in &players {
                    println!("{:>4}  {} ({} ms)", player.id, player.name, player.ping);
                }
            }
        }
        Command::Player { id } => match client.player_by_id(id.as_str()).await {
            Some(player) => {
                println!("id:   {}", player.id);
                println!("name: {}", player.name);
                println!("ping: {} ms", player.ping);
                for identifier in &player.identifiers {
                    println!("      {}", identifier);
                }
            }
            None => {
                println!("no player with id {}", id);
                return ExitCode::FAILURE;
            }
        },
        Command::Info => match client.server_info().await {
            Some(info) => match serde_json::to_string_pretty(&info) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("failed to render server info: {}", err);
                    return ExitCode::FAILURE;
                }
            },
            None => {
                println!("server info unavailable");
                return ExitCode::FAILURE;
            }
        },
        Command::Resource { name } => {
            if client.has_resource(name).await {
                println!("{} is running", name);
            } else {
                println!("{} is not running (or the server is unreachable)", name);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
