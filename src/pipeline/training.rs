//! Self-play training pipeline

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Observer, Player},
    tictactoe::{Dimensions, GameEngine, GameResult, RewardScheme, Token},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes to play
    pub episodes: usize,

    /// Board shape
    pub dimensions: Dimensions,

    /// Terminal rewards handed to the players
    pub rewards: RewardScheme,

    /// Random seed; player A gets `seed`, player B `seed + 1`
    pub seed: Option<u64>,

    /// When false the players are never back-propagated (evaluation runs)
    pub learning_enabled: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            dimensions: Dimensions::STANDARD,
            rewards: RewardScheme::default(),
            seed: None,
            learning_enabled: true,
        }
    }
}

impl TrainingConfig {
    /// Configuration for a run that plays without updating the players
    pub fn evaluation(episodes: usize) -> Self {
        Self {
            episodes,
            learning_enabled: false,
            ..Self::default()
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes won by player A
    pub a_wins: usize,

    /// Episodes won by player B
    pub b_wins: usize,

    /// Drawn episodes
    pub draws: usize,

    pub a_win_rate: f64,
    pub b_win_rate: f64,
    pub draw_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, a_wins: usize, b_wins: usize, draws: usize) -> Self {
        let rate = |count: usize| {
            if total_episodes > 0 {
                count as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            a_wins,
            b_wins,
            draws,
            a_win_rate: rate(a_wins),
            b_win_rate: rate(b_wins),
            draw_rate: rate(draws),
        }
    }

    /// Wins for `token`
    pub fn wins_for(&self, token: Token) -> usize {
        match token {
            Token::A => self.a_wins,
            Token::B => self.b_wins,
        }
    }

    /// Losses for `token`
    pub fn losses_for(&self, token: Token) -> usize {
        self.wins_for(token.opponent())
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(BufReader::new(file))?;
        Ok(result)
    }
}

/// Plays repeated episodes between two players
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode with `player_a` opening.
    ///
    /// Each episode starts with [`GameEngine::reset`], is played to its end and,
    /// when learning is enabled, finishes with
    /// [`GameEngine::distribute_rewards`].
    pub fn run(
        &mut self,
        player_a: &mut dyn Player,
        player_b: &mut dyn Player,
    ) -> Result<TrainingResult> {
        self.config.rewards.validate()?;

        if let Some(seed) = self.config.seed {
            player_a.set_rng_seed(seed);
            player_b.set_rng_seed(seed.wrapping_add(1));
        }

        info!(
            "starting {} episodes on a {} board: {} vs {}",
            self.config.episodes,
            self.config.dimensions,
            player_a.name(),
            player_b.name()
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut engine = GameEngine::new(self.config.dimensions, player_a, player_b);
        let mut a_wins = 0;
        let mut b_wins = 0;
        let mut draws = 0;

        for episode in 0..self.config.episodes {
            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            engine.reset();
            let result = engine.play_episode()?;
            if self.config.learning_enabled {
                engine.distribute_rewards(&self.config.rewards)?;
            }

            match result {
                GameResult::Win(Token::A) => a_wins += 1,
                GameResult::Win(Token::B) => b_wins += 1,
                GameResult::Draw => draws += 1,
                GameResult::InProgress => return Err(Error::EpisodeNotFinished),
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode, result, engine.moves_played())?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(self.config.episodes, a_wins, b_wins, draws);
        info!(
            "finished: A won {:.1}%, B won {:.1}%, drawn {:.1}%",
            result.a_win_rate * 100.0,
            result.b_win_rate * 100.0,
            result.draw_rate * 100.0
        );
        Ok(result)
    }
}
