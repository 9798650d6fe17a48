//! ttt CLI - Exhaustive minimax solver for Tic-Tac-Toe
//!
//! This CLI provides:
//! - The optimal move and value of any position
//! - Game tree statistics (reachable boards, complete games)
//! - Matches between optimal and random agents

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Log search details (equivalent to RUST_LOG=debug)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    Solve(ttt_minimax::cli::commands::solve::SolveArgs),

    /// Count reachable positions and complete games
    Analyze(ttt_minimax::cli::commands::analyze::AnalyzeArgs),

    /// Play agents against each other
    Play(ttt_minimax::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => ttt_minimax::cli::commands::solve::execute(args),
        Commands::Analyze(args) => ttt_minimax::cli::commands::analyze::execute(args),
        Commands::Play(args) => ttt_minimax::cli::commands::play::execute(args),
    }
}
