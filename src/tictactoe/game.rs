//! Tic-Tac-Toe rules behind the [`Game`] port

use crate::{Error, Result, ports::Game, types::StateKey};

use super::board::{BoardState, Coord, Player};

/// Reward for the move that completes a line.
pub const WIN_REWARD: f64 = 100.0;

/// Reward for every other move, including the one that fills the board.
pub const NEUTRAL_REWARD: f64 = 0.0;

/// The 3x3 rule set
///
/// Stateless: every operation is a pure function of the [`BoardState`] it is
/// given. X moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = BoardState;
    type Action = Coord;
    type Mark = Player;
    type Key = StateKey;

    fn initial_state(&self) -> BoardState {
        BoardState::new()
    }

    fn next_state(&self, state: &BoardState, action: Coord) -> Result<BoardState> {
        state.make_move(action)
    }

    fn is_terminal(&self, state: &BoardState) -> bool {
        state.is_terminal()
    }

    fn reward(&self, state: &BoardState, action: Coord) -> Result<f64> {
        if state.is_terminal() {
            return Err(Error::TerminalState {
                state: state.encode(),
            });
        }
        let next = state.make_move(action)?;
        if next.winner().is_some() {
            Ok(WIN_REWARD)
        } else {
            Ok(NEUTRAL_REWARD)
        }
    }

    fn valid_actions(&self, state: &BoardState) -> Vec<Coord> {
        if state.is_terminal() {
            return Vec::new();
        }
        state.empty_cells()
    }

    fn winner(&self, state: &BoardState) -> Option<Player> {
        state.winner()
    }

    fn mover(&self, state: &BoardState) -> Player {
        state.to_move
    }

    fn key(&self, state: &BoardState) -> StateKey {
        StateKey::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TicTacToe.initial_state();
        assert_eq!(state, BoardState::new());
        assert_eq!(TicTacToe.mover(&state), Player::X);
        assert_eq!(TicTacToe.valid_actions(&state).len(), 9);
    }

    #[test]
    fn test_reward_for_winning_move() {
        let state = BoardState::from_string("XX. OO. ...").unwrap();
        assert_eq!(TicTacToe.reward(&state, Coord::new(0, 2)).unwrap(), WIN_REWARD);
        assert_eq!(
            TicTacToe.reward(&state, Coord::new(2, 2)).unwrap(),
            NEUTRAL_REWARD
        );
    }

    #[test]
    fn test_reward_for_drawing_move() {
        // X O X / X O O / O X . with X to move: (2,2) fills the board, no line
        let state = BoardState::from_string("XOX XOO OX._X").unwrap();
        let last = Coord::new(2, 2);
        assert!(TicTacToe.is_terminal(&TicTacToe.next_state(&state, last).unwrap()));
        assert_eq!(TicTacToe.reward(&state, last).unwrap(), NEUTRAL_REWARD);
    }

    #[test]
    fn test_reward_rejects_terminal_state() {
        let state = BoardState::from_string("XXX OO. ...").unwrap();
        assert!(matches!(
            TicTacToe.reward(&state, Coord::new(2, 2)),
            Err(Error::TerminalState { .. })
        ));
    }

    #[test]
    fn test_no_valid_actions_after_win() {
        let state = BoardState::from_string("XXX OO. ...").unwrap();
        assert!(TicTacToe.valid_actions(&state).is_empty());
    }
}
