//! Newtype wrappers for canonical table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Cell, Player};

/// Number of distinct 9-cell grids with three symbols per cell.
const GRID_STATES: u32 = 19_683;

/// Canonical lookup key for a tic-tac-toe state.
///
/// Packs the nine cells as base-3 digits (row-major, cell 0 most significant,
/// `Empty = 0`, `X = 1`, `O = 2`) followed by one bit for the player to move
/// (`X = 0`, `O = 1`). Equal states always produce equal keys and the mapping
/// is invertible, so keys can stand in for states in every table.
///
/// # Examples
///
/// ```
/// use xo::{tictactoe::BoardState, types::StateKey};
///
/// let board = BoardState::from_string("X...O...._X").unwrap();
/// let key = StateKey::from_state(&board);
/// assert_eq!(key.decode().unwrap(), board);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(u32);

impl StateKey {
    /// Encode a board state.
    pub fn from_state(state: &BoardState) -> Self {
        let grid = state.cells.iter().fold(0u32, |acc, cell| {
            acc * 3
                + match cell {
                    Cell::Empty => 0,
                    Cell::X => 1,
                    Cell::O => 2,
                }
        });
        let turn = match state.to_move {
            Player::X => 0,
            Player::O => 1,
        };
        StateKey(grid * 2 + turn)
    }

    /// Recover the board state this key was built from.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] for values no board encodes to.
    pub fn decode(self) -> Result<BoardState, crate::Error> {
        let mut grid = self.0 / 2;
        if grid >= GRID_STATES {
            return Err(crate::Error::InvalidStateKey { key: self.0 });
        }

        let mut cells = [Cell::Empty; 9];
        for cell in cells.iter_mut().rev() {
            *cell = match grid % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            grid /= 3;
        }
        let to_move = if self.0 % 2 == 0 { Player::X } else { Player::O };

        Ok(BoardState { cells, to_move })
    }

    /// Get the packed value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<&BoardState> for StateKey {
    fn from(state: &BoardState) -> Self {
        StateKey::from_state(state)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Ok(state) => write!(f, "{}", state.encode()),
            Err(_) => write!(f, "#{}", self.0),
        }
    }
}
