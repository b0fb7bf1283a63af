//! noughts CLI - Train, play and inspect tic-tac-toe learning agents
//!
//! This CLI provides a unified interface for:
//! - Training two value-learning agents by self-play
//! - Playing against a trained agent on the console
//! - Evaluating a trained agent against a random player
//! - Inspecting saved policies

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use noughts::cli::commands::{evaluate, inspect, play, train};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with temporal-difference learning agents", long_about = None)]
struct Cli {
    /// Log progress details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two learning agents against each other
    Train(Box<train::TrainArgs>),

    /// Play against a trained agent
    Play(play::PlayArgs),

    /// Evaluate a trained agent against a random player
    Evaluate(evaluate::EvaluateArgs),

    /// Show what a saved policy has learned
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Train(args) => train::execute(*args),
        Commands::Play(args) => play::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
