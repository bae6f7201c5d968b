//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order.
///
/// Column i is checked before row i, for i = 0, 1, 2; the two diagonals come
/// last. [`LineAnalyzer::winner`] reports the first complete line in this
/// order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 3, 6], // column 0
    [0, 1, 2], // row 0
    [1, 4, 7], // column 1
    [3, 4, 5], // row 1
    [2, 5, 8], // column 2
    [6, 7, 8], // row 2
    [0, 4, 8],
    [2, 4, 6],
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark of the first line holding three identical non-empty cells
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            if cells[a] == cells[b] && cells[a] == cells[c] {
                cells[a].player()
            } else {
                None
            }
        })
    }
}
