//! Observer port - abstraction for training observation
//!
//! This port lets the training pipeline report progress without coupling the
//! loop to progress bars, metrics or any output format.

use crate::{Result, tictactoe::GameResult};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_episode_end(episode, result, moves)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::Observer, tictactoe::GameResult};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_episode_end(
///         &mut self,
///         _episode: usize,
///         result: GameResult,
///         _moves: usize,
///     ) -> noughts::Result<()> {
///         if result == GameResult::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called before an episode's first move.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after an episode reached its terminal result.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the completed episode (0-based)
    /// * `result` - Terminal result
    /// * `moves` - Number of moves played
    fn on_episode_end(&mut self, _episode: usize, _result: GameResult, _moves: usize) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
