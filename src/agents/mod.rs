//! Players that can take a seat at the board
//!
//! - [`HumanPlayer`]: reads moves from a console collaborator
//! - [`LearningAgent`]: greedy one-step lookahead over a learned state-value
//!   table, trained by temporal-difference back-propagation of the terminal reward
//! - [`RandomPlayer`]: uniform random baseline
//!
//! ## Usage Example
//!
//! ```no_run
//! use noughts::{
//!     agents::{LearningAgent, RandomPlayer},
//!     app::AgentConfig,
//!     tictactoe::{Dimensions, GameEngine, RewardScheme},
//! };
//!
//! let mut agent = LearningAgent::new("agent", AgentConfig::default().with_seed(7))?;
//! let mut baseline = RandomPlayer::with_seed("random", 11);
//!
//! let mut engine = GameEngine::new(Dimensions::STANDARD, &mut agent, &mut baseline);
//! for _ in 0..100 {
//!     engine.reset();
//!     engine.play_episode()?;
//!     engine.distribute_rewards(&RewardScheme::default())?;
//! }
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod human;
pub mod learning;
pub mod random;
pub mod value_table;

pub use human::HumanPlayer;
pub use learning::{EpisodePhase, LearningAgent};
pub use random::RandomPlayer;
pub use value_table::{NEUTRAL_VALUE, ValueTable};
