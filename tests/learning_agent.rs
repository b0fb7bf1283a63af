//! Learning agent protocol: state recording, back-propagation and exploration.

mod common;

use std::collections::HashMap;

use common::{ScriptedPlayer, key};
use noughts::{
    agents::{EpisodePhase, LearningAgent, RandomPlayer, ValueTable},
    app::AgentConfig,
    ports::Player,
    tictactoe::{Dimensions, GameEngine, GameResult, Move, RewardScheme, Snapshot, Token},
};

fn agent(learning_rate: f64, exploration_rate: f64, seed: u64) -> LearningAgent {
    let config = AgentConfig::default()
        .with_learning_rate(learning_rate)
        .with_discount(0.9)
        .with_exploration_rate(exploration_rate)
        .with_seed(seed);
    LearningAgent::new("agent", config).unwrap()
}

#[test]
fn test_back_propagation_touches_only_history_states() {
    let untouched = key("..o/.../...");
    let values: ValueTable = [(untouched.clone(), 0.7)].into_iter().collect();
    let mut agent = agent(0.5, 0.0, 1).with_value_table(values);

    let s1 = key("x../.../...");
    let s2 = key("x../.o./..x");
    agent.record_state(&s1);
    agent.record_state(&s2);
    agent.back_propagate(-1.0);

    assert!((agent.value_of(&s2) + 0.5).abs() < 1e-12);
    assert!((agent.value_of(&s1) + 0.225).abs() < 1e-12);
    assert_eq!(agent.value_of(&untouched), 0.7);
    assert_eq!(agent.value_table().len(), 3);
}

#[test]
fn test_earlier_states_see_the_updated_successor() {
    let s1 = key("x../.../...");
    let s2 = key("x../.o./..x");
    let values: ValueTable = [(s1.clone(), 0.2), (s2.clone(), 0.4)].into_iter().collect();
    let mut agent = agent(0.5, 0.0, 1).with_value_table(values);

    agent.record_state(&s1);
    agent.record_state(&s2);
    agent.back_propagate(1.0);

    // s2: 0.4 + 0.5 * (1.0 - 0.4) = 0.7
    // s1: 0.2 + 0.5 * (0.9 * 0.7 - 0.2) = 0.415
    assert!((agent.value_of(&s2) - 0.7).abs() < 1e-12);
    assert!((agent.value_of(&s1) - 0.415).abs() < 1e-12);
}

#[test]
fn test_repeated_wins_move_values_toward_reward() {
    let last = key("xxx/oo./...");
    let mut agent = agent(0.2, 0.0, 1);
    let mut previous = 0.0;
    for _ in 0..50 {
        agent.reset();
        agent.record_state(&last);
        agent.back_propagate(1.0);
        let value = agent.value_of(&last);
        assert!(value > previous && value <= 1.0);
        previous = value;
    }
    assert!(previous > 0.99);
}

#[test]
fn test_reset_keeps_values_and_clears_history() {
    let mut agent = agent(0.5, 0.0, 1);
    agent.record_state(&key("x../.../..."));
    assert_eq!(agent.phase(), EpisodePhase::Playing);
    agent.back_propagate(1.0);
    let learned = agent.value_table().clone();

    agent.reset();
    assert!(agent.history().is_empty());
    assert_eq!(agent.phase(), EpisodePhase::Idle);
    assert_eq!(agent.value_table(), &learned);

    // Nothing recorded this episode, so nothing changes
    agent.back_propagate(-1.0);
    assert_eq!(agent.value_table(), &learned);
}

#[test]
fn test_zero_exploration_is_greedy() {
    let values: ValueTable = [(key(".../.../..x"), 0.9), (key(".../.x./..."), 0.4)]
        .into_iter()
        .collect();
    let mut agent = agent(0.2, 0.0, 5).with_value_table(values);
    let board = Snapshot::empty(Dimensions::STANDARD);
    let free: Vec<Move> = board.free_cells().collect();

    for _ in 0..100 {
        assert_eq!(
            agent.decide_action(&free, &board, Token::A).unwrap(),
            Move::new(2, 2)
        );
    }
}

#[test]
fn test_full_exploration_is_uniform() {
    let values: ValueTable = [(key(".../.../..x"), 1.0)].into_iter().collect();
    let mut agent = agent(0.2, 1.0, 11).with_value_table(values);
    let board = Snapshot::empty(Dimensions::STANDARD);
    let free: Vec<Move> = board.free_cells().collect();

    let trials = 9_000;
    let mut counts: HashMap<Move, usize> = HashMap::new();
    for _ in 0..trials {
        let mv = agent.decide_action(&free, &board, Token::A).unwrap();
        assert!(free.contains(&mv));
        *counts.entry(mv).or_default() += 1;
    }

    assert_eq!(counts.len(), 9);
    for count in counts.values() {
        // Expected 1000 per cell
        assert!((800..=1200).contains(count), "count {count} is far from uniform");
    }
}

#[test]
fn test_agent_records_states_through_the_engine() {
    let mut learner = agent(0.5, 0.0, 3);
    let mut opponent = ScriptedPlayer::new(&[(1, 0), (1, 1), (2, 2), (2, 1)]);

    {
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut learner, &mut opponent);
        let result = engine.play_episode().unwrap();
        assert!(result.is_terminal());
        engine.distribute_rewards(&RewardScheme::default()).unwrap();
    }

    // Greedy over an empty table takes the first free cell each turn:
    // (0,0), (0,1), (0,2) completes the top row
    assert_eq!(
        learner.history(),
        &[key("x../.../..."), key("xx./o../..."), key("xxx/oo./...")]
    );
    assert_eq!(learner.phase(), EpisodePhase::Terminal);
    assert!((learner.value_of(&key("xxx/oo./...")) - 0.5).abs() < 1e-12);
    assert_eq!(opponent.rewards, vec![-1.0]);
}

#[test]
fn test_self_play_learns_something() {
    let config = AgentConfig::default().with_seed(1);
    let mut a = LearningAgent::new("a", config.clone()).unwrap();
    let mut b = RandomPlayer::with_seed("random", 2);

    let mut wins = 0;
    {
        let mut engine = GameEngine::new(Dimensions::STANDARD, &mut a, &mut b);
        for _ in 0..200 {
            engine.reset();
            if engine.play_episode().unwrap() == GameResult::Win(Token::A) {
                wins += 1;
            }
            engine.distribute_rewards(&RewardScheme::default()).unwrap();
        }
    }

    assert!(!a.value_table().is_empty());
    assert!(wins > 0);
    assert!(a.value_table().iter().all(|(_, v)| (-1.0..=1.0).contains(&v)));
}
