//! Game port - contract for deterministic, turn-alternating games
//!
//! Any two-player, perfect-information game whose state can be reduced to a
//! canonical hashable key fits this contract. Agents are generic over it, so
//! the search and learning code never sees tic-tac-toe specifics.

use std::{fmt::Debug, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Game trait - rules of a deterministic two-player game
///
/// All operations are pure: they never mutate a state that was handed out,
/// every transition returns a fresh value.
///
/// # Examples
///
/// ```
/// use xo::{ports::Game, tictactoe::{Coord, TicTacToe}};
///
/// let game = TicTacToe;
/// let state = game.initial_state();
/// let next = game.next_state(&state, Coord::new(1, 1)).unwrap();
/// assert!(!game.is_terminal(&next));
/// assert_eq!(game.valid_actions(&next).len(), 8);
/// ```
pub trait Game {
    /// Complete snapshot of the game, including whose turn it is.
    type State: Clone + Eq + Debug;

    /// A move, meaningful only relative to the state it was enumerated from.
    type Action: Copy + Eq + Hash + Debug;

    /// The symbol a player places, reported by [`Game::winner`].
    type Mark: Copy + Eq + Debug;

    /// Canonical lookup key for a state.
    ///
    /// Semantically identical states must produce identical keys.
    type Key: Copy + Eq + Hash + Debug;

    /// The fixed starting state.
    fn initial_state(&self) -> Self::State;

    /// Apply `action` for the player to move in `state` and hand the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if `action` is not among
    /// [`Game::valid_actions`] for `state`, or if `state` is terminal.
    fn next_state(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// True iff the game has a winner or no moves remain.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Reward attributed to the player who makes `action` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TerminalState`] if `state` is already terminal.
    fn reward(&self, state: &Self::State, action: Self::Action) -> Result<f64>;

    /// Every legal action, in a fixed deterministic order.
    fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The winning mark, if any.
    fn winner(&self, state: &Self::State) -> Option<Self::Mark>;

    /// The mark whose turn it is.
    fn mover(&self, state: &Self::State) -> Self::Mark;

    /// Canonical key of `state`.
    fn key(&self, state: &Self::State) -> Self::Key;
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome<M> {
    Win(M),
    Draw,
}

impl<M: Copy + Eq> GameOutcome<M> {
    /// Outcome of a terminal state as reported by `game`.
    pub fn of<G: Game<Mark = M> + ?Sized>(game: &G, state: &G::State) -> Option<Self> {
        if !game.is_terminal(state) {
            return None;
        }
        Some(match game.winner(state) {
            Some(mark) => GameOutcome::Win(mark),
            None => GameOutcome::Draw,
        })
    }

    pub fn winner(self) -> Option<M> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            GameOutcome::Draw => None,
        }
    }
}
