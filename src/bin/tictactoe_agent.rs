//! Tic-Tac-Toe agent CLI
//!
//! This CLI provides a unified interface for:
//! - Playing against the minimax agent in the console
//! - Simulating games between policies
//! - Analyzing positions move by move

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe_agent")]
#[command(version, about = "Optimal Tic-Tac-Toe agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the agent in the console
    Play(tictactoe_agent::cli::commands::play::PlayArgs),

    /// Simulate games between two policies
    Simulate(tictactoe_agent::cli::commands::simulate::SimulateArgs),

    /// Show the minimax value of every legal move in a position
    Analyze(tictactoe_agent::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => tictactoe_agent::cli::commands::play::execute(args),
        Commands::Simulate(args) => tictactoe_agent::cli::commands::simulate::execute(args),
        Commands::Analyze(args) => tictactoe_agent::cli::commands::analyze::execute(args),
    }
}
