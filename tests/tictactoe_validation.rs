//! Test suite for the tic-tac-toe rules
//! Validates game-flow invariants through the `Game` port

mod common;

use common::{play_moves, reachable_positions};
use xo::{
    Error,
    ports::{Game, GameOutcome},
    tictactoe::{BoardState, Cell, Coord, Player, TicTacToe, WINNING_LINES},
    types::StateKey,
};

mod game_flow {
    use super::*;

    #[test]
    fn test_first_move_from_empty_board() {
        let state = play_moves(&[(0, 0)]);
        assert_eq!(state.get(Coord::new(0, 0)), Some(Cell::X));
        assert_eq!(TicTacToe.mover(&state), Player::O);
        assert_eq!(state.occupied_count(), 1);
    }

    #[test]
    fn test_top_row_win_for_x() {
        let state = play_moves(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert!(TicTacToe.is_terminal(&state));
        assert_eq!(TicTacToe.winner(&state), Some(Player::X));
        assert_eq!(GameOutcome::of(&TicTacToe, &state), Some(GameOutcome::Win(Player::X)));
        assert!(TicTacToe.valid_actions(&state).is_empty());
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let state = play_moves(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(state.is_full());
        assert!(TicTacToe.is_terminal(&state));
        assert_eq!(TicTacToe.winner(&state), None);
        assert_eq!(GameOutcome::of(&TicTacToe, &state), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let state = play_moves(&[(1, 1)]);
        assert!(matches!(
            TicTacToe.next_state(&state, Coord::new(1, 1)),
            Err(Error::InvalidMove { row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_no_move_after_game_over() {
        let state = play_moves(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert!(TicTacToe.next_state(&state, Coord::new(2, 2)).is_err());
    }
}

mod winning_lines {
    use super::*;

    #[test]
    fn test_each_line_wins_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = player.to_cell();
                }
                let state = BoardState {
                    cells,
                    to_move: player.opponent(),
                };
                assert_eq!(TicTacToe.winner(&state), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(TicTacToe.winner(&BoardState::new()), None);
    }
}

mod state_space {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_reachable_position_count() {
        let positions = reachable_positions();
        assert_eq!(positions.len(), 5478);
        let terminal = positions
            .iter()
            .filter(|state| TicTacToe.is_terminal(state))
            .count();
        assert_eq!(terminal, 958);
    }

    #[test]
    fn test_keys_are_unique_and_decode() {
        let positions = reachable_positions();
        let keys: HashSet<StateKey> = positions.iter().map(|s| TicTacToe.key(s)).collect();
        assert_eq!(keys.len(), positions.len());
        for state in &positions {
            assert_eq!(TicTacToe.key(state).decode().unwrap(), *state);
        }
    }

    #[test]
    fn test_mover_alternates_with_occupancy() {
        for state in reachable_positions() {
            let expected = if state.occupied_count().is_multiple_of(2) {
                Player::X
            } else {
                Player::O
            };
            assert_eq!(TicTacToe.mover(&state), expected);
        }
    }
}
