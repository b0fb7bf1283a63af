//! Output formatting for CLI

use crate::{pipeline::TrainingResult, tictactoe::Token};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n=== {title} ===");
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn count_with_percent(count: usize, total: usize) -> String {
    format!("{} ({:.1}%)", format_number(count), percent(count, total))
}

/// Print win/draw/loss counts from one seat's point of view
pub fn print_outcomes(result: &TrainingResult, token: Token) {
    let total = result.total_episodes;
    print_kv("Episodes", &format_number(total));
    print_kv("Wins", &count_with_percent(result.wins_for(token), total));
    print_kv("Draws", &count_with_percent(result.draws, total));
    print_kv("Losses", &count_with_percent(result.losses_for(token), total));
}
