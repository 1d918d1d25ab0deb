//! Hive CLI - Command-line interface
//!
//! Commands:
//! - new: Create a game and print its starting state
//! - replay: Replay a recorded game
//! - moves: List the legal destinations of one piece
//!
//! Logging goes to stderr and honours RUST_LOG (default: info).

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hive_cli::{moves_cmd, new_cmd, replay_cmd};

#[derive(Parser)]
#[command(name = "hive")]
#[command(about = "Hive rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a game and print its starting state
    New(new_cmd::NewArgs),
    /// Replay a recorded game and print the final state
    Replay(replay_cmd::ReplayArgs),
    /// List where a piece may go after a recorded game
    Moves(moves_cmd::MovesArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => new_cmd::run(args),
        Commands::Replay(args) => replay_cmd::run(args),
        Commands::Moves(args) => moves_cmd::run(args),
    }
}
