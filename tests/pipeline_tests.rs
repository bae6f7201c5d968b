//! Tests for match orchestration between agents

use xo::{
    agents::{MinimaxAgent, RandomAgent},
    config::{LearningConfig, OutcomeScores},
    pipeline::{Arena, SeriesResult},
    ports::{Agent, Game, GameOutcome},
    q_learning::QLearnerAgent,
    tictactoe::{BoardState, Coord, Player, TicTacToe},
};

/// Test random vs random tallies
#[test]
fn test_random_series_tallies_sum() {
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    let mut first = RandomAgent::with_seed("first", 42);
    let mut second = RandomAgent::with_seed("second", 43);

    let mut outcomes = Vec::new();
    let result = arena
        .run_series(&mut first, &mut second, 200, |episode, outcome| {
            outcomes.push((episode, *outcome))
        })
        .unwrap();

    assert_eq!(result.episodes, 200);
    assert_eq!(result.first_wins + result.second_wins + result.draws, 200);
    assert_eq!(outcomes.len(), 200);
    assert!(outcomes.iter().enumerate().all(|(i, &(episode, _))| i == episode));

    let mut replay = SeriesResult::new("first", "second");
    for (_, outcome) in &outcomes {
        replay.record(outcome, &Player::X);
    }
    assert_eq!(replay, result);
}

#[test]
fn test_seeded_series_is_reproducible() {
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    let run = || {
        let mut first = RandomAgent::with_seed("first", 1);
        let mut second = RandomAgent::with_seed("second", 2);
        arena.run_series(&mut first, &mut second, 100, |_, _| {}).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_minimax_vs_minimax_always_draws() {
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    let mut first: MinimaxAgent<TicTacToe> = MinimaxAgent::new("first");
    let mut second: MinimaxAgent<TicTacToe> = MinimaxAgent::new("second");
    let result = arena.run_series(&mut first, &mut second, 20, |_, _| {}).unwrap();
    assert_eq!(result.draws, 20);
    assert_eq!(result.draw_rate(), 1.0);
}

/// Opponent that always takes the lowest free cell and checks its payoffs.
struct Lowest {
    terminal_scores: Vec<f64>,
}

impl Agent<TicTacToe> for Lowest {
    fn observe(
        &mut self,
        state: &BoardState,
        score: f64,
        game: &TicTacToe,
    ) -> xo::Result<Option<Coord>> {
        if game.is_terminal(state) {
            self.terminal_scores.push(score);
            return Ok(None);
        }
        assert_eq!(score, 0.0);
        self.make_action(state, game).map(Some)
    }

    fn make_action(&mut self, state: &BoardState, _game: &TicTacToe) -> xo::Result<Coord> {
        Ok(state.empty_cells()[0])
    }

    fn name(&self) -> &str {
        "lowest"
    }
}

#[test]
fn test_terminal_payoffs_reach_both_seats() {
    let scores = OutcomeScores {
        win: 1.0,
        loss: -1.0,
        draw: 0.5,
    };
    let arena = Arena::new(TicTacToe, scores);
    let mut minimax: MinimaxAgent<TicTacToe> = MinimaxAgent::new("minimax");
    let mut lowest = Lowest {
        terminal_scores: Vec::new(),
    };

    let outcome = arena.play_episode(&mut minimax, &mut lowest).unwrap();
    assert_eq!(outcome, GameOutcome::Win(Player::X));
    assert_eq!(lowest.terminal_scores, vec![-1.0]);
}

#[test]
fn test_terminal_payoff_reaches_learner() {
    let scores = OutcomeScores {
        win: 50.0,
        loss: -50.0,
        draw: 0.0,
    };
    let arena = Arena::new(TicTacToe, scores);
    let config = LearningConfig::default()
        .with_seed(4)
        .with_greedy_eps(0.0)
        .with_learning_rate(1.0)
        .with_decay(0.0, 0.0);
    let mut learner: QLearnerAgent<TicTacToe> = QLearnerAgent::new("learner", &config).unwrap();
    let mut lowest = Lowest {
        terminal_scores: Vec::new(),
    };

    let outcome = arena.play_episode(&mut lowest, &mut learner).unwrap();
    let expected: f64 = match outcome {
        GameOutcome::Win(Player::O) => 50.0,
        GameOutcome::Win(Player::X) => -50.0,
        GameOutcome::Draw => 0.0,
    };
    // With lr = 1 and discount 1 every value on the path is the best of the
    // payoff and the untried actions' 0.
    let opening = BoardState::from_string("X.. ... ..._O").unwrap();
    assert!(learner.has_state_value(&opening, &TicTacToe));
    assert_eq!(learner.state_value(&opening, &TicTacToe), expected.max(0.0));
    assert_eq!(learner.episodes_learned(), 1);
}

/// Takes the lowest free cell once, then fails on its next turn.
struct FailsSecondTurn {
    first_move: Option<(BoardState, Coord)>,
}

impl Agent<TicTacToe> for FailsSecondTurn {
    fn make_action(&mut self, state: &BoardState, _game: &TicTacToe) -> xo::Result<Coord> {
        if self.first_move.is_some() {
            return Err(xo::Error::NoValidMoves);
        }
        let action = state.empty_cells()[0];
        self.first_move = Some((*state, action));
        Ok(action)
    }

    fn name(&self) -> &str {
        "fails-second-turn"
    }
}

/// Always takes the highest free cell.
struct Highest;

impl Agent<TicTacToe> for Highest {
    fn make_action(&mut self, state: &BoardState, _game: &TicTacToe) -> xo::Result<Coord> {
        state.empty_cells().last().copied().ok_or(xo::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "highest"
    }
}

#[test]
fn test_aborted_episode_is_not_learned() {
    let arena = Arena::new(TicTacToe, OutcomeScores::default());
    let config = LearningConfig::default()
        .with_seed(8)
        .with_greedy_eps(0.0)
        .with_learning_rate(1.0);
    let mut learner: QLearnerAgent<TicTacToe> = QLearnerAgent::new("learner", &config).unwrap();
    let mut failing = FailsSecondTurn { first_move: None };

    assert!(arena.play_episode(&mut learner, &mut failing).is_err());
    assert_eq!(learner.episode_len(), 0);
    assert_eq!(learner.episodes_learned(), 0);

    // The position the learner faced on its second turn of the failed game.
    let (seen, reply) = failing.first_move.unwrap();
    let second_turn = TicTacToe.next_state(&seen, reply).unwrap();

    let mut highest = Highest;
    arena.play_episode(&mut learner, &mut highest).unwrap();
    assert_eq!(learner.episodes_learned(), 1);
    assert!(learner.has_state_value(&TicTacToe.initial_state(), &TicTacToe));
    assert!(!learner.has_state_value(&second_turn, &TicTacToe));
}
