//! Tic-Tac-Toe game implementation

pub mod board;
pub mod codec;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Dimensions, MAX_CELLS, Move, Snapshot, Token};
pub use codec::StateCodec;
pub use game::{GameEngine, GameResult, RewardScheme};
pub use lines::{LineAnalyzer, WIN_SUM};
