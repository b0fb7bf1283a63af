//! Training and evaluation pipeline
//!
//! This module provides:
//! - A self-play loop that repeatedly resets, plays and rewards two players
//! - Evaluation runs with learning switched off
//! - Observers recording progress and metrics during the run

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::{ports::Observer, tictactoe::RewardScheme};
