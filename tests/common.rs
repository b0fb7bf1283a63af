//! Common test utilities for the noughts test suite.
//!
//! Provides a scripted player that replays a fixed move list and records every
//! learning hook the engine calls on it.

#![allow(dead_code)]

use noughts::{
    Result, StateKey,
    ports::Player,
    tictactoe::{Move, Snapshot, Token},
};

/// Plays a fixed list of moves in order, ignoring the offered free cells.
#[derive(Debug, Default)]
pub struct ScriptedPlayer {
    moves: Vec<Move>,
    next: usize,
    pub recorded: Vec<StateKey>,
    pub rewards: Vec<f64>,
    pub resets: usize,
    pub offered: Vec<Vec<Move>>,
}

impl ScriptedPlayer {
    pub fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
            ..Self::default()
        }
    }
}

impl Player for ScriptedPlayer {
    fn decide_action(&mut self, free_cells: &[Move], _board: &Snapshot, _token: Token) -> Result<Move> {
        self.offered.push(free_cells.to_vec());
        let mv = self.moves[self.next];
        self.next += 1;
        Ok(mv)
    }

    fn record_state(&mut self, key: &StateKey) {
        self.recorded.push(key.clone());
    }

    fn back_propagate(&mut self, final_reward: f64) {
        self.rewards.push(final_reward);
    }

    fn reset(&mut self) {
        self.next = 0;
        self.recorded.clear();
        self.resets += 1;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Parse a state key literal
pub fn key(s: &str) -> StateKey {
    StateKey::parse(s).unwrap()
}
