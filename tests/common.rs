//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use xo::{
    ports::Game,
    tictactoe::{BoardState, Coord, TicTacToe},
};

/// Apply `moves` to the empty board, alternating X and O.
pub fn play_moves(moves: &[(usize, usize)]) -> BoardState {
    moves.iter().fold(TicTacToe.initial_state(), |state, &(row, col)| {
        TicTacToe
            .next_state(&state, Coord::new(row, col))
            .unwrap()
    })
}

/// Walk up to `plies` random legal moves from the empty board.
pub fn random_position(seed: u64, plies: usize) -> BoardState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = TicTacToe.initial_state();
    for _ in 0..plies {
        let Some(&action) = TicTacToe.valid_actions(&state).choose(&mut rng) else {
            break;
        };
        state = TicTacToe.next_state(&state, action).unwrap();
    }
    state
}

/// Every position reachable from the empty board, terminal ones included.
pub fn reachable_positions() -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut stack = vec![TicTacToe.initial_state()];
    let mut positions = Vec::new();
    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        positions.push(state);
        for action in TicTacToe.valid_actions(&state) {
            stack.push(TicTacToe.next_state(&state, action).unwrap());
        }
    }
    positions
}
