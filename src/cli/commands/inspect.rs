//! Inspect command - Summarize a saved policy

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::{format_grid, repository_for_path},
    cli::output::{format_number, print_kv, print_section},
    tictactoe::StateCodec,
};

#[derive(Parser, Debug)]
#[command(about = "Show the size and best states of a saved policy")]
pub struct InspectArgs {
    /// Path to the policy file
    #[arg(long, short = 'p')]
    pub policy: PathBuf,

    /// Number of highest-valued states to show
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let repository = repository_for_path(&args.policy)?;
    let table = repository
        .load(&args.policy)
        .with_context(|| format!("failed to load policy from {}", args.policy.display()))?;

    print_section("Policy");
    print_kv("File", &args.policy.display().to_string());
    print_kv("States", &format_number(table.len()));

    if table.is_empty() {
        return Ok(());
    }

    print_section(&format!("Top {} States", args.top.min(table.len())));
    for (rank, (key, value)) in table.top(args.top).into_iter().enumerate() {
        let snapshot = StateCodec::decode(key)?;
        println!("\n#{} {key}  value {value:.4}", rank + 1);
        print!("{}", format_grid(&snapshot));
    }
    Ok(())
}
