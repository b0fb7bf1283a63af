//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! the episode loop to specific output formats.

use std::sync::{Arc, Mutex, MutexGuard};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Observer,
    tictactoe::{GameResult, Token},
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    a_wins: usize,
    b_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            a_wins: 0,
            b_wins: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("A:{} B:{} D:{}", self.a_wins, self.b_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, result: GameResult, _moves: usize) -> Result<()> {
        match result {
            GameResult::Win(Token::A) => self.a_wins += 1,
            GameResult::Win(Token::B) => self.b_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_episodes: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub a_win_rate: f64,
    pub b_win_rate: f64,
    pub draw_rate: f64,
    pub avg_episode_length: f64,
}

#[derive(Debug, Default)]
struct Counts {
    a_wins: usize,
    b_wins: usize,
    draws: usize,
    move_counts: Vec<usize>,
}

/// Metrics observer - Tracks running counts.
///
/// Clones share the same counters, so a handle kept by the caller can read the
/// summary after the pipeline (which owns the boxed observer) has finished.
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    counts: Arc<Mutex<Counts>>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    fn counts(&self) -> MutexGuard<'_, Counts> {
        self.counts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        let counts = self.counts();
        let total = counts.move_counts.len();
        let rate = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };
        let avg_episode_length = if total == 0 {
            0.0
        } else {
            counts.move_counts.iter().sum::<usize>() as f64 / total as f64
        };

        MetricsSummary {
            total_episodes: total,
            a_wins: counts.a_wins,
            b_wins: counts.b_wins,
            draws: counts.draws,
            a_win_rate: rate(counts.a_wins),
            b_win_rate: rate(counts.b_wins),
            draw_rate: rate(counts.draws),
            avg_episode_length,
        }
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, result: GameResult, moves: usize) -> Result<()> {
        let mut counts = self.counts();
        counts.move_counts.push(moves);
        match result {
            GameResult::Win(Token::A) => counts.a_wins += 1,
            GameResult::Win(Token::B) => counts.b_wins += 1,
            GameResult::Draw => counts.draws += 1,
            GameResult::InProgress => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_observer() {
        let mut observer = MetricsObserver::new();
        assert_eq!(observer.summary().a_win_rate, 0.0);

        observer.on_episode_end(0, GameResult::Win(Token::A), 5).unwrap();
        observer.on_episode_end(1, GameResult::Draw, 9).unwrap();
        observer.on_episode_end(2, GameResult::Win(Token::A), 7).unwrap();

        let summary = observer.summary();
        assert_eq!(summary.total_episodes, 3);
        assert_eq!(summary.a_wins, 2);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.b_wins, 0);
        assert!((summary.a_win_rate - 0.666).abs() < 0.01);
        assert!((summary.avg_episode_length - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_clones_share_counts() {
        let handle = MetricsObserver::new();
        let mut boxed: Box<dyn Observer> = Box::new(handle.clone());
        boxed.on_episode_end(0, GameResult::Win(Token::B), 6).unwrap();
        assert_eq!(handle.summary().b_wins, 1);
    }

    #[test]
    fn test_progress_observer_runs_without_terminal() {
        let mut observer = ProgressObserver::new();
        observer.on_training_start(2).unwrap();
        observer.on_episode_end(0, GameResult::Draw, 9).unwrap();
        observer.on_episode_end(1, GameResult::Win(Token::A), 5).unwrap();
        observer.on_training_end().unwrap();
        assert_eq!(observer.draws, 1);
        assert_eq!(observer.a_wins, 1);
    }
}
