//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate on the 3x3 grid
///
/// Coordinates are the tic-tac-toe action type. Ordering is row-major, which
/// is also the enumeration order of [`BoardState::empty_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Coordinate of a row-major cell index (0-8).
    pub const fn from_index(index: usize) -> Self {
        Coord {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Parse "row col", "row,col" or "(row, col)".
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] if the input does not hold
    /// exactly two numbers in 0..3.
    pub fn parse(input: &str) -> Result<Self, crate::Error> {
        let invalid = || crate::Error::InvalidCoordinate {
            input: input.trim().to_string(),
        };
        let numbers: Vec<usize> = input
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        match numbers.as_slice() {
            &[row, col] if row < 3 && col < 3 => Ok(Coord::new(row, col)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes (9 cells + 1 byte for
/// the player to move), so every transition simply builds a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters (whitespace is ignored) and
    /// may end with `_X` or `_O` to set the player to move. Without the suffix
    /// the player is inferred from the piece counts, assuming X moved first.
    ///
    /// # Examples
    ///
    /// ```
    /// use xo::tictactoe::{BoardState, Player};
    ///
    /// let board = BoardState::from_string("XO. ... ...").unwrap();
    /// assert_eq!(board.to_move, Player::X);
    ///
    /// let explicit = BoardState::from_string("X........_O").unwrap();
    /// assert_eq!(explicit.to_move, Player::O);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the board part is not
    /// 9 valid cells, the suffix is not `X`/`O`, or the turn cannot be
    /// inferred from the counts.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let invalid = |reason: String| crate::Error::InvalidConfiguration {
            message: format!("invalid board '{s}': {reason}"),
        };

        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, turn_part) = match cleaned.split_once('_') {
            Some((board, turn)) => (board, Some(turn)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != 9 {
            return Err(invalid(format!("expected 9 cells, got {}", chars.len())));
        }
        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c)
                .ok_or_else(|| invalid(format!("invalid character '{c}' at position {i}")))?;
        }

        let to_move = match turn_part {
            Some("X") | Some("x") => Player::X,
            Some("O") | Some("o") => Player::O,
            Some(other) => return Err(invalid(format!("invalid player suffix '{other}'"))),
            None => {
                let x = cells.iter().filter(|&&c| c == Cell::X).count();
                let o = cells.iter().filter(|&&c| c == Cell::O).count();
                if x == o {
                    Player::X
                } else if x == o + 1 {
                    Player::O
                } else {
                    return Err(invalid(format!("cannot infer turn from X={x}, O={o}")));
                }
            }
        };

        Ok(BoardState { cells, to_move })
    }

    /// Compact label: 9 cells row-major followed by `_` and the player to move.
    pub fn encode(&self) -> String {
        let mut label: String = self.cells.iter().map(|c| c.to_char()).collect();
        label.push('_');
        label.push(self.to_move.to_cell().to_char());
        label
    }

    /// Get the cell at a coordinate, `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|i| self.cells[i])
    }

    /// Check if a coordinate is on the board and empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Empty)
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// The first completed line's mark, in [`super::WINNING_LINES`] order.
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// True iff someone has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Place the mark of the player to move and hand over the turn.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the coordinate is off the
    /// board, already occupied, or the game is already over.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, coord: Coord) -> Result<BoardState, crate::Error> {
        let index = match coord.index() {
            Some(i) if self.cells[i] == Cell::Empty && !self.is_terminal() => i,
            _ => {
                return Err(crate::Error::InvalidMove {
                    row: coord.row,
                    col: coord.col,
                });
            }
        };

        let mut new_state = *self;
        new_state.cells[index] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "{} to move", self.to_move)
    }
}
