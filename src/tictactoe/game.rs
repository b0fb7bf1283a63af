//! High-level game management

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    StateCodec,
    board::{Board, Dimensions, Move, Token},
};
use crate::{
    Error, Result,
    ports::{Player, Renderer},
};

/// Result of evaluating a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Token),
    Draw,
    InProgress,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Token> {
        match self {
            GameResult::Win(token) => Some(token),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(token) => write!(f, "player {token} wins"),
            GameResult::Draw => write!(f, "draw"),
            GameResult::InProgress => write!(f, "in progress"),
        }
    }
}

/// Terminal rewards handed to each player from its own perspective
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardScheme {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
}

impl RewardScheme {
    /// Check every reward is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first NaN or infinite reward.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("win", self.win), ("loss", self.loss), ("draw", self.draw)] {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} reward must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Reward for `token` given a terminal result; `None` while in progress
    pub fn reward_for(&self, result: GameResult, token: Token) -> Option<f64> {
        match result {
            GameResult::Win(winner) if winner == token => Some(self.win),
            GameResult::Win(_) => Some(self.loss),
            GameResult::Draw => Some(self.draw),
            GameResult::InProgress => None,
        }
    }
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            win: 1.0,
            loss: -1.0,
            draw: 0.5,
        }
    }
}

/// Orchestrates one game between two players.
///
/// The engine owns the board and borrows both players. Player A always opens.
/// Each turn the active player is asked for a move, the move is checked against
/// the free cells it was offered, applied, the resulting state key is handed to
/// the mover through [`Player::record_state`], and the position is evaluated.
pub struct GameEngine<'p> {
    board: Board,
    players: [&'p mut dyn Player; 2],
    to_move: Token,
    result: GameResult,
    moves_played: usize,
    rewarded: bool,
    renderers: Vec<Box<dyn Renderer + 'p>>,
}

impl<'p> GameEngine<'p> {
    /// Create an engine with an empty board and player A to move
    pub fn new(dims: Dimensions, player_a: &'p mut dyn Player, player_b: &'p mut dyn Player) -> Self {
        Self {
            board: Board::new(dims),
            players: [player_a, player_b],
            to_move: Token::A,
            result: GameResult::InProgress,
            moves_played: 0,
            rewarded: false,
            renderers: Vec::new(),
        }
    }

    /// Add a display collaborator that sees the board after every move
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer + 'p>) -> Self {
        self.renderers.push(renderer);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Token {
        self.to_move
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The player seated as `token`
    pub fn player(&self, token: Token) -> &dyn Player {
        &*self.players[token.index()]
    }

    /// Clear the board and reset both players for a new episode
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Token::A;
        self.result = GameResult::InProgress;
        self.moves_played = 0;
        self.rewarded = false;
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Play a single turn and return the position's status afterwards.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has already ended
    /// - [`Error::InvalidMove`] / [`Error::MoveOutOfBounds`] if the player returns a
    ///   move outside the free cells it was offered; the board is left untouched
    /// - any error the player itself reports
    pub fn play_turn(&mut self) -> Result<GameResult> {
        if self.result.is_terminal() {
            return Err(Error::GameOver);
        }

        let token = self.to_move;
        let free: Vec<Move> = self.board.free_cells().collect();
        let snapshot = self.board.snapshot();
        let player = &mut self.players[token.index()];

        let mv = player.decide_action(&free, &snapshot, token)?;
        if !free.contains(&mv) {
            let dims = self.board.dimensions();
            return Err(if dims.contains(mv) {
                Error::InvalidMove {
                    row: mv.row,
                    col: mv.col,
                }
            } else {
                Error::MoveOutOfBounds {
                    row: mv.row,
                    col: mv.col,
                    rows: dims.rows,
                    cols: dims.cols,
                }
            });
        }

        self.board.apply(mv, token)?;
        self.moves_played += 1;

        let after = self.board.snapshot();
        player.record_state(&StateCodec::encode(&after));
        debug!(
            "{} ({token}) played {mv} on move {}",
            player.name(),
            self.moves_played
        );

        for renderer in &mut self.renderers {
            renderer.render(&after, Some((mv, token)))?;
        }

        self.to_move = token.opponent();
        self.result = self.board.result();

        if self.result.is_terminal() {
            debug!("episode finished after {} moves: {}", self.moves_played, self.result);
            for renderer in &mut self.renderers {
                renderer.announce(self.result)?;
            }
        }

        Ok(self.result)
    }

    /// Drive turns until the game ends
    pub fn play_episode(&mut self) -> Result<GameResult> {
        if !self.result.is_terminal() && self.moves_played == 0 {
            let initial = self.board.snapshot();
            for renderer in &mut self.renderers {
                renderer.render(&initial, None)?;
            }
        }

        while !self.result.is_terminal() {
            self.play_turn()?;
        }
        Ok(self.result)
    }

    /// Back-propagate the terminal reward into both players, once per episode.
    ///
    /// # Errors
    ///
    /// - [`Error::EpisodeNotFinished`] while the game is still in progress
    /// - [`Error::RewardsAlreadyDistributed`] on a second call before [`reset`](Self::reset)
    /// - [`Error::InvalidConfiguration`] if a reward is not finite
    pub fn distribute_rewards(&mut self, rewards: &RewardScheme) -> Result<()> {
        if !self.result.is_terminal() {
            return Err(Error::EpisodeNotFinished);
        }
        if self.rewarded {
            return Err(Error::RewardsAlreadyDistributed);
        }
        rewards.validate()?;

        for token in [Token::A, Token::B] {
            let reward = rewards
                .reward_for(self.result, token)
                .ok_or(Error::EpisodeNotFinished)?;
            self.players[token.index()].back_propagate(reward);
        }
        self.rewarded = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Snapshot;

    struct Scripted {
        moves: Vec<Move>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: &[(usize, usize)]) -> Self {
            Self {
                moves: moves.iter().map(|&(r, c)| Move::new(r, c)).collect(),
                next: 0,
            }
        }
    }

    impl Player for Scripted {
        fn decide_action(&mut self, _free: &[Move], _board: &Snapshot, _token: Token) -> Result<Move> {
            let mv = self.moves[self.next % self.moves.len()];
            self.next += 1;
            Ok(mv)
        }

        fn reset(&mut self) {
            self.next = 0;
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut a = Scripted::new(&[(0, 0), (0, 1)]);
        let mut b = Scripted::new(&[(2, 2), (2, 1)]);
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);

        assert_eq!(engine.to_move(), Token::A);
        engine.play_turn().unwrap();
        assert_eq!(engine.to_move(), Token::B);
        engine.play_turn().unwrap();
        assert_eq!(engine.to_move(), Token::A);
        assert_eq!(engine.board().to_string(), "x..\n...\n..o");
    }

    #[test]
    fn test_rewards_require_terminal_state() {
        let mut a = Scripted::new(&[(0, 0)]);
        let mut b = Scripted::new(&[(1, 1)]);
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);
        assert!(matches!(
            engine.distribute_rewards(&RewardScheme::default()),
            Err(Error::EpisodeNotFinished)
        ));
    }

    #[test]
    fn test_rewards_distributed_once_per_episode() {
        let mut a = Scripted::new(&[(0, 0), (0, 1), (0, 2)]);
        let mut b = Scripted::new(&[(1, 0), (1, 1)]);
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);
        let rewards = RewardScheme::default();

        engine.play_episode().unwrap();
        engine.distribute_rewards(&rewards).unwrap();
        assert!(matches!(
            engine.distribute_rewards(&rewards),
            Err(Error::RewardsAlreadyDistributed)
        ));

        engine.reset();
        engine.play_episode().unwrap();
        engine.distribute_rewards(&rewards).unwrap();
    }

    #[test]
    fn test_non_finite_rewards_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let rewards = RewardScheme {
                win: bad,
                ..RewardScheme::default()
            };
            assert!(matches!(
                rewards.validate(),
                Err(Error::InvalidConfiguration { .. })
            ));
        }
        assert!(RewardScheme::default().validate().is_ok());

        let mut a = Scripted::new(&[(0, 0), (0, 1), (0, 2)]);
        let mut b = Scripted::new(&[(1, 0), (1, 1)]);
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);
        engine.play_episode().unwrap();
        let rewards = RewardScheme {
            draw: f64::NAN,
            ..RewardScheme::default()
        };
        assert!(engine.distribute_rewards(&rewards).is_err());
        // A rejected call does not use up the episode's rewards
        engine.distribute_rewards(&RewardScheme::default()).unwrap();
    }

    #[test]
    fn test_reset_restores_setup() {
        let mut a = Scripted::new(&[(0, 0), (0, 1), (0, 2)]);
        let mut b = Scripted::new(&[(1, 0), (1, 1)]);
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);

        assert_eq!(engine.play_episode().unwrap(), GameResult::Win(Token::A));
        engine.reset();

        assert_eq!(engine.result(), GameResult::InProgress);
        assert_eq!(engine.moves_played(), 0);
        assert_eq!(engine.board().occupied_count(), 0);
        assert_eq!(engine.play_episode().unwrap(), GameResult::Win(Token::A));
    }

    #[test]
    fn test_reward_scheme_perspective() {
        let rewards = RewardScheme::default();
        let result = GameResult::Win(Token::B);
        assert_eq!(rewards.reward_for(result, Token::B), Some(1.0));
        assert_eq!(rewards.reward_for(result, Token::A), Some(-1.0));
        assert_eq!(rewards.reward_for(GameResult::Draw, Token::A), Some(0.5));
        assert_eq!(rewards.reward_for(GameResult::InProgress, Token::A), None);
    }
}
