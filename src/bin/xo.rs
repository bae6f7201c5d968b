//! xo CLI - Train, compare and play tic-tac-toe agents
//!
//! Set `RUST_LOG=debug` to see per-episode logging.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xo")]
#[command(version, about = "Tic-tac-toe agents: random, minimax and a tabular learner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the learning agent against an opponent
    Train(xo::cli::commands::train::TrainArgs),

    /// Compare two agents head-to-head
    Compare(xo::cli::commands::compare::CompareArgs),

    /// Play against an agent
    Play(xo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => xo::cli::commands::train::execute(args),
        Commands::Compare(args) => xo::cli::commands::compare::execute(args),
        Commands::Play(args) => xo::cli::commands::play::execute(args),
    }
}
