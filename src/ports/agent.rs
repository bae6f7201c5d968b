//! Agent port - abstraction for the different decision-making strategies
//!
//! The orchestrator drives every agent through [`Agent::observe`] alone, which
//! lets random play, exact search, tabular learning and human input be
//! compared on equal footing.

use crate::{Result, ports::Game};

/// Agent trait - unified interface for all decision makers
///
/// # Turn Protocol
///
/// 1. On its turn the agent receives `observe(state, score, game)` with a
///    non-terminal state and returns `Some(action)`.
/// 2. When the game ends it receives `observe(terminal, payoff, game)` and
///    returns `None`. Learning agents do their end-of-episode bookkeeping
///    here.
///
/// # Examples
///
/// ```
/// use xo::{agents::RandomAgent, ports::{Agent, Game}, tictactoe::TicTacToe};
///
/// let game = TicTacToe;
/// let mut agent = RandomAgent::with_seed("random", 7);
/// let state = game.initial_state();
/// let action = agent.observe(&state, 0.0, &game).unwrap();
/// assert!(action.is_some());
/// ```
pub trait Agent<G: Game> {
    /// Observe the current state and score, returning the next action.
    ///
    /// Returns `Ok(None)` exactly when `state` is terminal.
    ///
    /// # Default Implementation
    ///
    /// Stateless agents only need [`Agent::make_action`]; the default
    /// forwards non-terminal states to it.
    fn observe(&mut self, state: &G::State, _score: f64, game: &G) -> Result<Option<G::Action>> {
        if game.is_terminal(state) {
            return Ok(None);
        }
        self.make_action(state, game).map(Some)
    }

    /// Choose a legal action for a non-terminal `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if `state` is terminal or has no legal actions.
    fn make_action(&mut self, state: &G::State, game: &G) -> Result<G::Action>;

    /// Display name used in tallies and logs.
    fn name(&self) -> &str;

    /// Drop whatever the agent recorded for a game that ended without a
    /// terminal observation.
    ///
    /// The orchestrator calls this on both seats when an episode fails. The
    /// default does nothing.
    fn abandon_episode(&mut self) {}
}
