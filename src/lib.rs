//! Tic-tac-toe engine with temporal-difference learning agents
//!
//! This crate provides:
//! - A rectangular board game engine with a pluggable player interface
//! - A console player and a uniform random baseline
//! - A learning agent that estimates state values and back-propagates the
//!   terminal reward through the states it produced
//! - Persistence of learned value tables (JSON and MessagePack)
//! - A self-play training pipeline and the `noughts` command line tool
//!
//! # Example
//!
//! ```
//! use noughts::{
//!     agents::{LearningAgent, RandomPlayer},
//!     app::AgentConfig,
//!     tictactoe::{Dimensions, GameEngine, RewardScheme},
//! };
//!
//! let mut agent = LearningAgent::new("agent", AgentConfig::default().with_seed(1))?;
//! let mut random = RandomPlayer::with_seed("random", 2);
//!
//! let mut engine = GameEngine::new(Dimensions::STANDARD, &mut agent, &mut random);
//! let result = engine.play_episode()?;
//! assert!(result.is_terminal());
//! engine.distribute_rewards(&RewardScheme::default())?;
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod adapters;
pub mod agents;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use types::StateKey;
