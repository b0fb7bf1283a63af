//! Shared argument groups for CLI commands

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{
    app::AgentConfig,
    tictactoe::{Dimensions, RewardScheme, Token},
};

/// Board shape flags
#[derive(Args, Debug, Clone, Copy)]
pub struct BoardArgs {
    /// Number of board rows
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 3)]
    pub cols: usize,
}

impl BoardArgs {
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.rows, self.cols).context("invalid board size")
    }
}

/// Learning agent hyperparameters
#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Step size for value updates
    #[arg(long, default_value_t = 0.2)]
    pub learning_rate: f64,

    /// Discount applied to values passed back to earlier states
    #[arg(long, default_value_t = 0.9)]
    pub discount: f64,

    /// Probability of a random exploratory move
    #[arg(long, default_value_t = 0.3)]
    pub exploration_rate: f64,

    /// Multiplicative exploration decay applied after every episode
    #[arg(long, default_value_t = 1.0)]
    pub exploration_decay: f64,

    /// Lower bound for the decayed exploration rate
    #[arg(long, default_value_t = 0.0)]
    pub min_exploration: f64,
}

impl AgentArgs {
    pub fn agent_config(&self) -> Result<AgentConfig> {
        let config = AgentConfig::default()
            .with_learning_rate(self.learning_rate)
            .with_discount(self.discount)
            .with_exploration_rate(self.exploration_rate)
            .with_exploration_decay(self.exploration_decay, self.min_exploration);
        config.validate().context("invalid agent hyperparameters")?;
        Ok(config)
    }
}

/// Terminal reward flags
#[derive(Args, Debug, Clone, Copy)]
pub struct RewardArgs {
    /// Reward for winning an episode
    #[arg(long, default_value_t = 1.0)]
    pub win_reward: f64,

    /// Reward for losing an episode
    #[arg(long, default_value_t = -1.0)]
    pub loss_reward: f64,

    /// Reward for a drawn episode
    #[arg(long, default_value_t = 0.5)]
    pub draw_reward: f64,
}

impl RewardArgs {
    pub fn scheme(&self) -> Result<RewardScheme> {
        let scheme = RewardScheme {
            win: self.win_reward,
            loss: self.loss_reward,
            draw: self.draw_reward,
        };
        scheme.validate().context("invalid rewards")?;
        Ok(scheme)
    }
}

/// Which side of the board a player takes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Player A (x), moves first
    A,
    /// Player B (o), moves second
    B,
}

impl From<Seat> for Token {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::A => Token::A,
            Seat::B => Token::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_args_validate() {
        let args = AgentArgs {
            learning_rate: 0.5,
            discount: 0.9,
            exploration_rate: 0.1,
            exploration_decay: 1.0,
            min_exploration: 0.0,
        };
        let config = args.agent_config().unwrap();
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.seed, None);

        let bad = AgentArgs {
            discount: 1.5,
            ..args
        };
        assert!(bad.agent_config().is_err());
    }

    #[test]
    fn test_board_args_reject_empty_board() {
        let args = BoardArgs { rows: 0, cols: 3 };
        assert!(args.dimensions().is_err());
    }

    #[test]
    fn test_board_args_reject_huge_board() {
        let args = BoardArgs {
            rows: usize::MAX,
            cols: 2,
        };
        assert!(args.dimensions().is_err());
    }

    #[test]
    fn test_reward_args_reject_non_finite() {
        let args = RewardArgs {
            win_reward: f64::NAN,
            loss_reward: -1.0,
            draw_reward: 0.5,
        };
        assert!(args.scheme().is_err());

        let args = RewardArgs {
            win_reward: 1.0,
            loss_reward: f64::NEG_INFINITY,
            draw_reward: 0.5,
        };
        assert!(args.scheme().is_err());
    }
}
