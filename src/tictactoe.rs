//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Coord, Player};
pub use game::{NEUTRAL_REWARD, TicTacToe, WIN_REWARD};
pub use lines::{LineAnalyzer, WINNING_LINES};
