//! Match orchestration between two agents
//!
//! The arena owns the game rules and the terminal payoffs. It alternates
//! `observe` calls between the two seats, applies the returned actions, and
//! hands each seat its payoff once the game is over. Seat 0 always plays the
//! mark that moves first in [`Game::initial_state`].

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::OutcomeScores,
    ports::{Agent, Game, GameOutcome},
};

/// Head-to-head tally of a series of episodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub first: String,
    pub second: String,
    pub episodes: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
}

impl SeriesResult {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            episodes: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
        }
    }

    /// Record one outcome; `first_mark` is the mark seat 0 played.
    pub fn record<M: PartialEq>(&mut self, outcome: &GameOutcome<M>, first_mark: &M) {
        self.episodes += 1;
        match outcome {
            GameOutcome::Win(winner) if winner == first_mark => self.first_wins += 1,
            GameOutcome::Win(_) => self.second_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            count as f64 / self.episodes as f64
        }
    }

    pub fn first_win_rate(&self) -> f64 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f64 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }
}

/// Runs episodes of one game between two agents
pub struct Arena<G: Game> {
    game: G,
    scores: OutcomeScores,
}

impl<G: Game> Arena<G> {
    pub fn new(game: G, scores: OutcomeScores) -> Self {
        Self { game, scores }
    }

    /// Play one episode from the initial state to a terminal state.
    ///
    /// Every non-terminal turn the agent to move observes the state with a
    /// score of 0. At the end both agents observe the terminal state with
    /// their own payoff from [`OutcomeScores`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActionReturned`] if an agent answers a non-terminal
    /// state with `None`, and propagates any agent or rule error. Both agents
    /// are told to [abandon](Agent::abandon_episode) the game before the error
    /// is returned.
    pub fn play_episode(
        &self,
        first: &mut dyn Agent<G>,
        second: &mut dyn Agent<G>,
    ) -> Result<GameOutcome<G::Mark>> {
        let result = self.run_episode(first, second);
        if let Err(err) = &result {
            debug!(
                "{} vs {}: episode aborted: {err}",
                first.name(),
                second.name()
            );
            first.abandon_episode();
            second.abandon_episode();
        }
        result
    }

    fn run_episode(
        &self,
        first: &mut dyn Agent<G>,
        second: &mut dyn Agent<G>,
    ) -> Result<GameOutcome<G::Mark>> {
        let mut state = self.game.initial_state();
        let first_mark = self.game.mover(&state);

        let outcome = loop {
            if let Some(outcome) = GameOutcome::of(&self.game, &state) {
                break outcome;
            }

            let agent: &mut dyn Agent<G> = if self.game.mover(&state) == first_mark {
                &mut *first
            } else {
                &mut *second
            };
            let action = agent
                .observe(&state, 0.0, &self.game)?
                .ok_or_else(|| Error::NoActionReturned {
                    agent: agent.name().to_string(),
                })?;
            state = self.game.next_state(&state, action)?;
        };

        let first_score = self.scores.score_for(&outcome, &first_mark);
        let second_score = self.scores.score_against(&outcome, &first_mark);
        let first_reply = first.observe(&state, first_score, &self.game)?;
        let second_reply = second.observe(&state, second_score, &self.game)?;
        debug_assert!(
            first_reply.is_none() && second_reply.is_none(),
            "agents must not act on a terminal state"
        );

        debug!(
            "{} vs {}: {:?} in {:?}",
            first.name(),
            second.name(),
            outcome,
            state
        );
        Ok(outcome)
    }

    /// Play `episodes` games with fixed seats, calling `on_episode` after each.
    ///
    /// # Errors
    ///
    /// Stops at the first failing episode and returns its error.
    pub fn run_series<F>(
        &self,
        first: &mut dyn Agent<G>,
        second: &mut dyn Agent<G>,
        episodes: usize,
        mut on_episode: F,
    ) -> Result<SeriesResult>
    where
        F: FnMut(usize, &GameOutcome<G::Mark>),
    {
        let first_mark = self.game.mover(&self.game.initial_state());
        let mut result = SeriesResult::new(first.name(), second.name());

        for episode in 0..episodes {
            let outcome = self.play_episode(first, second)?;
            result.record(&outcome, &first_mark);
            on_episode(episode, &outcome);
        }

        info!(
            "{} vs {}: {} episodes, {}-{}-{} (W-D-L for {})",
            result.first,
            result.second,
            result.episodes,
            result.first_wins,
            result.draws,
            result.second_wins,
            result.first
        );
        Ok(result)
    }
}
