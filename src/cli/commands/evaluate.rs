//! Evaluate command - Trained agent against the random baseline

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    agents::RandomPlayer,
    app::{AgentConfig, App},
    cli::{
        config::{BoardArgs, Seat},
        output::{format_number, print_kv, print_outcomes, print_section},
    },
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
    tictactoe::Token,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained policy against a random player")]
pub struct EvaluateArgs {
    /// Path to the trained policy file
    #[arg(long, short = 'p')]
    pub policy: PathBuf,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 1_000)]
    pub games: usize,

    /// Seat taken by the trained agent
    #[arg(long = "as", value_enum, default_value = "a")]
    pub seat: Seat,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub board: BoardArgs,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let dimensions = args.board.dimensions()?;
    let app = App::for_path(&args.policy)?;
    let config = AgentConfig::default().with_exploration_rate(0.0);
    let mut agent = app
        .load_agent("trained", config, &args.policy)
        .with_context(|| format!("failed to load policy from {}", args.policy.display()))?;
    let mut opponent = RandomPlayer::new("random");
    let token = Token::from(args.seat);

    print_section("Evaluation Configuration");
    print_kv("Policy", &args.policy.display().to_string());
    print_kv("States", &format_number(agent.value_table().len()));
    print_kv("Agent plays", &token.to_string());
    print_kv("Games", &format_number(args.games));

    let config = TrainingConfig {
        episodes: args.games,
        dimensions,
        seed: args.seed,
        ..TrainingConfig::evaluation(args.games)
    };
    let mut pipeline = TrainingPipeline::new(config);
    if !args.quiet {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = match token {
        Token::A => pipeline.run(&mut agent, &mut opponent)?,
        Token::B => pipeline.run(&mut opponent, &mut agent)?,
    };

    print_section("Evaluation Results");
    print_outcomes(&result, token);
    Ok(())
}
