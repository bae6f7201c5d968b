//! Exact game-tree search with memoization
//!
//! Negamax formulation of minimax: the game is zero-sum, so the value of a
//! position for the player to move is the best over its actions of either the
//! immediate reward (when the action ends the game) or the negated value of
//! the resulting position for the opponent.

use std::collections::HashMap;

use crate::{
    Error, Result,
    ports::{Agent, Game},
};

/// Optimal policy agent (minimax)
///
/// Search results are memoized per canonical state key for the lifetime of
/// the agent. The rules never change during a run, so entries never expire.
pub struct MinimaxAgent<G: Game> {
    name: String,
    memo: HashMap<G::Key, (G::Action, f64)>,
}

impl<G: Game> MinimaxAgent<G> {
    /// Create a new minimax agent with an empty memo
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            memo: HashMap::new(),
        }
    }

    /// Best action for the player to move in `state` and its value.
    ///
    /// Ties go to the first action in [`Game::valid_actions`] order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalState`] if `state` is terminal and
    /// [`Error::NoValidMoves`] if a non-terminal state has no actions.
    pub fn best_action_and_value(
        &mut self,
        state: &G::State,
        game: &G,
    ) -> Result<(G::Action, f64)> {
        if game.is_terminal(state) {
            return Err(Error::TerminalState {
                state: format!("{state:?}"),
            });
        }

        let key = game.key(state);
        if let Some(&entry) = self.memo.get(&key) {
            return Ok(entry);
        }

        let mut best: Option<(G::Action, f64)> = None;
        for action in game.valid_actions(state) {
            let next = game.next_state(state, action)?;
            let value = if game.is_terminal(&next) {
                game.reward(state, action)?
            } else {
                -self.best_action_and_value(&next, game)?.1
            };

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }

        let entry = best.ok_or(Error::NoValidMoves)?;
        self.memo.insert(key, entry);
        Ok(entry)
    }

    /// Number of memoized states
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

impl<G: Game> Agent<G> for MinimaxAgent<G> {
    fn make_action(&mut self, state: &G::State, game: &G) -> Result<G::Action> {
        self.best_action_and_value(state, game)
            .map(|(action, _)| action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
