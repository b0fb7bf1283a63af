//! Temporal-difference state-value learning agent

use std::path::Path;

use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::value_table::ValueTable;
use crate::{
    Error, Result,
    app::AgentConfig,
    ports::{Player, ValueTableRepository},
    tictactoe::{Move, Snapshot, StateCodec, Token},
    types::StateKey,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Where the agent is within an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Reset and waiting for the first move
    Idle,
    /// Has recorded at least one state this episode
    Playing,
    /// Received the terminal reward
    Terminal,
}

/// Learning agent over a state-value table.
///
/// Move selection is ε-greedy: with probability `exploration_rate` a uniformly
/// random free cell, otherwise the free cell whose successor state has the
/// highest value (unknown successors count as neutral, ties go to the first cell
/// in row-major order).
///
/// The episode history holds the key of every position this agent produced, in
/// play order. It is cleared by [`reset`](Player::reset); the value table is
/// kept across episodes.
#[derive(Debug, Clone)]
pub struct LearningAgent {
    name: String,
    config: AgentConfig,
    exploration_rate: f64,
    values: ValueTable,
    history: Vec<StateKey>,
    phase: EpisodePhase,
    rng: StdRng,
}

impl LearningAgent {
    /// Create an agent with an empty value table
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a hyperparameter is out of range.
    pub fn new(name: impl Into<String>, config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            exploration_rate: config.exploration_rate,
            values: ValueTable::new(),
            history: Vec::new(),
            phase: EpisodePhase::Idle,
            rng: build_rng(config.seed),
            config,
        })
    }

    /// Start from previously learned values
    pub fn with_value_table(mut self, values: ValueTable) -> Self {
        self.values = values;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn value_table(&self) -> &ValueTable {
        &self.values
    }

    /// Current estimate for a state
    pub fn value_of(&self, key: &StateKey) -> f64 {
        self.values.get(key)
    }

    /// States visited by this agent's moves in the current episode
    pub fn history(&self) -> &[StateKey] {
        &self.history
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    /// Override the current exploration rate (0 for pure exploitation)
    pub fn set_exploration_rate(&mut self, rate: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::InvalidConfiguration {
                message: format!("exploration_rate must be within [0, 1], got {rate}"),
            });
        }
        self.exploration_rate = rate;
        Ok(())
    }

    /// The value-greedy move: one-step lookahead over the free cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] when `free_cells` is empty, or an invalid
    /// move error if a listed cell is not actually free on `board`.
    pub fn best_action(&self, free_cells: &[Move], board: &Snapshot, token: Token) -> Result<Move> {
        let mut best: Option<(Move, f64)> = None;
        for &mv in free_cells {
            let successor = board.with_move(mv, token)?;
            let value = self.values.get(&StateCodec::encode(&successor));
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv).ok_or(Error::NoValidMoves)
    }

    /// Persist the value table through a repository.
    pub fn save_policy(&self, repository: &dyn ValueTableRepository, path: &Path) -> Result<()> {
        repository.save(&self.values, path)?;
        info!(
            "saved {} state values for {} to {}",
            self.values.len(),
            self.name,
            path.display()
        );
        Ok(())
    }

    /// Replace the value table with one loaded from a repository.
    pub fn load_policy(&mut self, repository: &dyn ValueTableRepository, path: &Path) -> Result<()> {
        self.values = repository.load(path)?;
        info!(
            "loaded {} state values for {} from {}",
            self.values.len(),
            self.name,
            path.display()
        );
        Ok(())
    }

    fn decay_exploration(&mut self) {
        self.exploration_rate =
            (self.exploration_rate * self.config.exploration_decay).max(self.config.min_exploration);
    }
}

impl Player for LearningAgent {
    fn decide_action(&mut self, free_cells: &[Move], board: &Snapshot, token: Token) -> Result<Move> {
        if free_cells.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.rng.random::<f64>() < self.exploration_rate {
            let mv = *free_cells.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            trace!("{} explores {mv}", self.name);
            return Ok(mv);
        }

        self.best_action(free_cells, board, token)
    }

    fn record_state(&mut self, key: &StateKey) {
        self.history.push(key.clone());
        self.phase = EpisodePhase::Playing;
    }

    /// Walk the history from the latest state back to the first.
    ///
    /// The last state moves toward `final_reward`; every earlier state moves
    /// toward the discounted, already-updated value of the state after it:
    ///
    /// ```text
    /// V(s_n) ← V(s_n) + α (r − V(s_n))
    /// V(s_i) ← V(s_i) + α (γ V(s_{i+1}) − V(s_i))     for i = n−1 … 1
    /// ```
    fn back_propagate(&mut self, final_reward: f64) {
        let alpha = self.config.learning_rate;
        let gamma = self.config.discount;

        let mut next_value: Option<f64> = None;
        for key in self.history.iter().rev() {
            let current = self.values.get(key);
            let target = next_value.map_or(final_reward, |v| gamma * v);
            let updated = current + alpha * (target - current);
            trace!("{key}: {current:.4} -> {updated:.4}");
            self.values.set(key.clone(), updated);
            next_value = Some(updated);
        }

        debug!(
            "{} back-propagated reward {final_reward} through {} states",
            self.name,
            self.history.len()
        );
        self.phase = EpisodePhase::Terminal;
        self.decay_exploration();
    }

    fn reset(&mut self) {
        self.history.clear();
        self.phase = EpisodePhase::Idle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
