//! Renderer port - display collaborator for the game engine

use crate::{
    Result,
    tictactoe::{GameResult, Move, Snapshot, Token},
};

/// Observes the board as the game progresses.
///
/// Purely observational: the engine consumes nothing a renderer produces
/// beyond I/O failures.
pub trait Renderer {
    /// Show the board. `last_move` is `None` for the initial empty board.
    fn render(&mut self, board: &Snapshot, last_move: Option<(Move, Token)>) -> Result<()>;

    /// Show the final result once the game is over.
    fn announce(&mut self, _result: GameResult) -> Result<()> {
        Ok(())
    }
}
