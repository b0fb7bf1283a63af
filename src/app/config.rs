//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hyperparameters for a [`LearningAgent`](crate::agents::LearningAgent).
///
/// This type provides a builder-style API for configuring agents before
/// creation through [`App`](crate::app::App) or directly.
///
/// # Examples
///
/// ```
/// use noughts::app::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_learning_rate(0.1)
///     .with_discount(0.95)
///     .with_exploration_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Step size applied to every value update
    pub learning_rate: f64,
    /// Attenuation of credit passed to earlier states
    pub discount: f64,
    /// Probability of playing a uniformly random move
    pub exploration_rate: f64,
    /// Multiplicative decay of the exploration rate after each episode
    pub exploration_decay: f64,
    /// Floor for the decayed exploration rate
    pub min_exploration: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Set the exploration rate.
    pub fn with_exploration_rate(mut self, exploration_rate: f64) -> Self {
        self.exploration_rate = exploration_rate;
        self
    }

    /// Set the per-episode exploration decay and its floor.
    pub fn with_exploration_decay(mut self, decay: f64, min_exploration: f64) -> Self {
        self.exploration_decay = decay;
        self.min_exploration = min_exploration;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every hyperparameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
            ("exploration_rate", self.exploration_rate),
            ("min_exploration", self.min_exploration),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }

        if !(self.exploration_decay > 0.0 && self.exploration_decay <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exploration_decay must be within (0, 1], got {}",
                    self.exploration_decay
                ),
            });
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.2,
            discount: 0.9,
            exploration_rate: 0.3,
            exploration_decay: 1.0,
            min_exploration: 0.0,
            seed: None,
        }
    }
}
