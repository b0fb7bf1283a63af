//! Player port - abstraction for anything that can choose a move
//!
//! This port defines the interface both human and learning players implement,
//! allowing the engine to work with:
//! - Console players (human input)
//! - Value-learning agents
//! - Baselines (random)

use crate::{
    Result,
    tictactoe::{Move, Snapshot, Token},
    types::StateKey,
};

/// Player trait - unified interface for every seat at the board
///
/// The engine only ever talks to players through this trait. Learning hooks
/// have no-op defaults so stateless players implement just
/// [`decide_action`](Player::decide_action) and [`name`](Player::name).
///
/// # Call Sequence
///
/// For each episode the engine calls:
/// 1. `reset()` - once, before the first move
/// 2. `decide_action(...)` then `record_state(...)` - for every move this player makes
/// 3. `back_propagate(reward)` - once, after the game reached a terminal result
///
/// # Examples
///
/// ```
/// use noughts::{
///     Result,
///     ports::Player,
///     tictactoe::{Move, Snapshot, Token},
/// };
///
/// struct FirstFree;
///
/// impl Player for FirstFree {
///     fn decide_action(&mut self, free_cells: &[Move], _: &Snapshot, _: Token) -> Result<Move> {
///         free_cells.first().copied().ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Player {
    /// Choose the next move.
    ///
    /// `free_cells` lists the empty cells in row-major order and is never empty
    /// while the game is in progress. The returned move must be one of them; the
    /// engine treats anything else as a broken player and fails the turn with
    /// [`crate::Error::InvalidMove`].
    fn decide_action(&mut self, free_cells: &[Move], board: &Snapshot, token: Token)
    -> Result<Move>;

    /// Receive the key of the position produced by this player's latest move.
    fn record_state(&mut self, _key: &StateKey) {}

    /// Learn from the terminal reward of the finished episode.
    fn back_propagate(&mut self, _final_reward: f64) {}

    /// Clear per-episode state before a new episode starts.
    fn reset(&mut self) {}

    /// Get the player's name.
    ///
    /// Used for identification in prompts and logging.
    fn name(&self) -> &str;

    /// Seed the player's internal random number generator.
    ///
    /// Training pipelines call this method when supplied with a deterministic
    /// seed. Deterministic players can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
