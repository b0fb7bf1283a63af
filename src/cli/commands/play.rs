//! Play command - A human against a trained agent on the console

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::GridRenderer,
    agents::HumanPlayer,
    app::{AgentConfig, App},
    cli::config::{BoardArgs, Seat},
    tictactoe::GameEngine,
};

#[derive(Parser, Debug)]
#[command(about = "Play against a trained policy")]
pub struct PlayArgs {
    /// Path to the trained policy file
    #[arg(long, short = 'p')]
    pub policy: PathBuf,

    /// Seat taken by the human; player A moves first
    #[arg(long = "as", value_enum, default_value = "a")]
    pub seat: Seat,

    /// Name shown in the move prompt
    #[arg(long, default_value = "You")]
    pub name: String,

    #[command(flatten)]
    pub board: BoardArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let dimensions = args.board.dimensions()?;
    let app = App::for_path(&args.policy)?;
    let config = AgentConfig::default().with_exploration_rate(0.0);
    let mut agent = app
        .load_agent("agent", config, &args.policy)
        .with_context(|| format!("failed to load policy from {}", args.policy.display()))?;
    let mut human = HumanPlayer::stdio(args.name.as_str());

    let engine = match args.seat {
        Seat::A => GameEngine::new(dimensions, &mut human, &mut agent),
        Seat::B => GameEngine::new(dimensions, &mut agent, &mut human),
    };
    let mut engine = engine.with_renderer(Box::new(GridRenderer::stdout()));

    engine.play_episode().context("game aborted")?;
    Ok(())
}
