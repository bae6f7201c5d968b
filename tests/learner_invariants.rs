//! Invariants of the episodic tabular learner after real training games

mod common;

use common::reachable_positions;
use xo::{
    agents::{MinimaxAgent, RandomAgent},
    config::{LearningConfig, OutcomeScores},
    pipeline::Arena,
    ports::Game,
    q_learning::QLearnerAgent,
    tictactoe::TicTacToe,
};

fn trained_learner(games: usize, seed: u64) -> QLearnerAgent<TicTacToe> {
    let config = LearningConfig::default().with_seed(seed);
    let mut learner = QLearnerAgent::new("learner", &config).unwrap();
    let mut opponent = RandomAgent::with_seed("random", seed + 1);
    Arena::new(TicTacToe, OutcomeScores::default())
        .run_series(&mut learner, &mut opponent, games, |_, _| {})
        .unwrap();
    learner
}

#[test]
fn test_state_value_is_max_q_value() {
    let learner = trained_learner(300, 5);
    let mut checked = 0;
    for state in reachable_positions() {
        if !learner.has_state_value(&state, &TicTacToe) {
            continue;
        }
        let value = learner.state_value(&state, &TicTacToe);
        if TicTacToe.is_terminal(&state) {
            assert_eq!(value, 0.0, "terminal {state:?}");
            continue;
        }
        let best = TicTacToe
            .valid_actions(&state)
            .iter()
            .map(|action| learner.q_value(&state, action, &TicTacToe))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(value, best, "state {state:?}");

        let policy = learner.policy_for(&state, &TicTacToe).unwrap();
        assert_eq!(learner.q_value(&state, &policy, &TicTacToe), best);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_rates_never_increase() {
    let config = LearningConfig::default()
        .with_seed(9)
        .with_decay(0.01, 0.05);
    let mut learner: QLearnerAgent<TicTacToe> = QLearnerAgent::new("learner", &config).unwrap();
    let mut opponent = RandomAgent::with_seed("random", 10);
    let arena = Arena::new(TicTacToe, OutcomeScores::default());

    let mut previous = (learner.greedy_eps(), learner.learning_rate());
    for _ in 0..60 {
        arena.play_episode(&mut learner, &mut opponent).unwrap();
        let current = (learner.greedy_eps(), learner.learning_rate());
        assert!(current.0 <= previous.0);
        assert!(current.1 <= previous.1);
        assert!(current.0 >= 0.0 && current.1 >= 0.0);
        previous = current;
    }
    assert_eq!(learner.learning_rate(), 0.0);
    assert_eq!(learner.greedy_eps(), 0.0);
    assert_eq!(learner.episodes_learned(), 60);
}

#[test]
fn test_episode_is_cleared_after_each_game() {
    let mut learner = trained_learner(20, 3);
    assert_eq!(learner.episode_len(), 0);
    assert_eq!(learner.episodes_learned(), 20);

    let mut minimax: MinimaxAgent<TicTacToe> = MinimaxAgent::new("minimax");
    Arena::new(TicTacToe, OutcomeScores::default())
        .play_episode(&mut minimax, &mut learner)
        .unwrap();
    assert_eq!(learner.episode_len(), 0);
    assert_eq!(learner.episodes_learned(), 21);
}

#[test]
fn test_learner_beats_random_after_training() {
    let config = LearningConfig::default().with_seed(17);
    let mut learner: QLearnerAgent<TicTacToe> = QLearnerAgent::new("learner", &config).unwrap();
    let mut opponent = RandomAgent::with_seed("random", 18);
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    arena
        .run_series(&mut learner, &mut opponent, 3000, |_, _| {})
        .unwrap();

    // Exploration has decayed to zero; the greedy policy should dominate.
    let result = arena
        .run_series(&mut learner, &mut opponent, 500, |_, _| {})
        .unwrap();
    assert!(
        result.first_win_rate() > result.second_win_rate(),
        "{result:?}"
    );
}
