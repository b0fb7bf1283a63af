//! Train command - Self-play training of two learning agents

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crate::{
    agents::LearningAgent,
    app::{AgentConfig, App},
    cli::{
        config::{AgentArgs, BoardArgs, RewardArgs},
        output::{format_number, print_kv, print_outcomes, print_section},
    },
    pipeline::{MetricsObserver, ProgressObserver, TrainingConfig, TrainingPipeline},
    tictactoe::Token,
};

#[derive(Parser, Debug)]
#[command(
    about = "Train two learning agents against each other",
    allow_negative_numbers = true
)]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub episodes: usize,

    /// Policy file for player A (`.json`, `.msgpack` or `.mpk`)
    #[arg(long, default_value = "policy_a.json")]
    pub out_a: PathBuf,

    /// Policy file for player B (`.json`, `.msgpack` or `.mpk`)
    #[arg(long, default_value = "policy_b.json")]
    pub out_b: PathBuf,

    /// Continue from the existing policy files instead of starting empty
    #[arg(long)]
    pub resume: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the training result as JSON
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub agent: AgentArgs,

    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub rewards: RewardArgs,
}

fn prepare_agent(
    app: &App,
    name: &str,
    config: AgentConfig,
    path: &Path,
    resume: bool,
) -> Result<LearningAgent> {
    if resume && path.exists() {
        info!("resuming {name} from {}", path.display());
        app.load_agent(name, config, path)
            .with_context(|| format!("failed to load policy from {}", path.display()))
    } else {
        Ok(app.create_agent(name, config)?)
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let dimensions = args.board.dimensions()?;
    let config = args.agent.agent_config()?;

    let app_a = App::for_path(&args.out_a)?;
    let app_b = App::for_path(&args.out_b)?;
    let mut agent_a = prepare_agent(&app_a, "agent-a", config.clone(), &args.out_a, args.resume)?;
    let mut agent_b = prepare_agent(&app_b, "agent-b", config, &args.out_b, args.resume)?;

    print_section("Training Configuration");
    print_kv("Episodes", &format_number(args.episodes));
    print_kv("Board", &dimensions.to_string());
    print_kv("Learning rate", &args.agent.learning_rate.to_string());
    print_kv("Discount", &args.agent.discount.to_string());
    print_kv("Exploration", &args.agent.exploration_rate.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let training = TrainingConfig {
        episodes: args.episodes,
        dimensions,
        rewards: args.rewards.scheme()?,
        seed: args.seed,
        learning_enabled: true,
    };

    let metrics = MetricsObserver::new();
    let mut pipeline = TrainingPipeline::new(training).with_observer(Box::new(metrics.clone()));
    if !args.quiet {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut agent_a, &mut agent_b)?;

    print_section("Training Results (player A)");
    print_outcomes(&result, Token::A);
    print_kv(
        "Average length",
        &format!("{:.2} moves", metrics.summary().avg_episode_length),
    );

    app_a
        .save_agent(&agent_a, &args.out_a)
        .with_context(|| format!("failed to save policy to {}", args.out_a.display()))?;
    app_b
        .save_agent(&agent_b, &args.out_b)
        .with_context(|| format!("failed to save policy to {}", args.out_b.display()))?;

    print_section("Saved Policies");
    print_kv(
        "Player A",
        &format!(
            "{} ({} states)",
            args.out_a.display(),
            format_number(agent_a.value_table().len())
        ),
    );
    print_kv(
        "Player B",
        &format!(
            "{} ({} states)",
            args.out_b.display(),
            format_number(agent_b.value_table().len())
        ),
    );

    if let Some(path) = &args.summary {
        result
            .save(path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
