//! Move selection against a precomputed P-position table.
//!
//! Selection is pure: the engine inspects the board, queries the table, and
//! returns one [`Action`]. Applying the chomp is the caller's job.

use std::collections::HashSet;

use crate::board::{Action, Board};
use crate::state::{State, board_to_state, cell_count};

/// Pick the engine's move for `board` given the P-position table for its
/// dimensions.
///
/// If the current state is an N-position there is at least one chomp whose
/// result is in the table; among those, the one leaving the fewest cells is
/// chosen (ending the game fastest), ties going to the first candidate in
/// row-major order.
///
/// If the current state is itself a P-position no winning move exists, and
/// the engine stalls: it chomps the deepest present cell in the column just
/// inside the first row's edge (`state[0] - 1`). That keeps the loss slow
/// against an opponent who may slip, but changes nothing against correct
/// play.
///
/// Returns `None` only for a board with no cells left, which a caller
/// tracking the poisoned cell never passes in.
pub fn choose_move(board: &Board, p_positions: &HashSet<State>) -> Option<Action> {
    let state = board_to_state(board);
    if state[0] == 0 {
        return None;
    }

    if !p_positions.contains(&state) {
        if let Some(action) = winning_move(board, &state, p_positions) {
            return Some(action);
        }
        // No candidate means the table is incomplete for this board; the
        // stalling fallback still yields a legal move.
    }

    Some(stalling_move(board, &state))
}

/// Scan present cells row-major for chomps landing in the P table, keeping
/// the one whose child state has the smallest remaining cell count.
fn winning_move(board: &Board, state: &State, p_positions: &HashSet<State>) -> Option<Action> {
    let mut best: Option<(Action, usize)> = None;
    for row in 0..board.size_y {
        for col in 0..state[row] {
            let child = board_to_state(&board.truncate((row, col)));
            if !p_positions.contains(&child) {
                continue;
            }
            let remaining = cell_count(&child);
            match best {
                Some((_, fewest)) if remaining >= fewest => {}
                _ => best = Some(((row, col), remaining)),
            }
        }
    }
    best.map(|(action, _)| action)
}

/// Deepest present cell in column `state[0] - 1`. Row 0 always reaches that
/// column, so the move exists whenever the board is non-empty.
fn stalling_move(board: &Board, state: &State) -> Action {
    let col = state[0] - 1;
    let mut deepest = 0;
    for row in 0..board.size_y {
        if board.get(row, col) {
            deepest = row;
        }
    }
    (deepest, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Classifier;
    use crate::state::state_to_board;

    fn p_table(size_x: usize, size_y: usize) -> HashSet<State> {
        let mut classifier = Classifier::new(size_x, size_y).unwrap();
        classifier.run();
        classifier.into_p_lookup()
    }

    #[test]
    fn test_winning_move_on_full_2x2() {
        // From the full 2x2 board the unique winning chomp is (1, 1),
        // leaving the L-shape (2,1).
        let table = p_table(2, 2);
        let board = Board::full(2, 2);
        assert_eq!(choose_move(&board, &table), Some((1, 1)));
    }

    #[test]
    fn test_winning_moves_land_in_p_table() {
        let table = p_table(3, 3);
        let board = Board::full(3, 3);
        let action = choose_move(&board, &table).unwrap();
        let child = board_to_state(&board.truncate(action));
        assert!(table.contains(&child));
    }

    #[test]
    fn test_stalling_move_from_losing_shape() {
        // (2,1) is a P-position on 2x2; the fallback targets column
        // state[0]-1 = 1, whose deepest present cell is row 0.
        let table = p_table(2, 2);
        let board = state_to_board(&[2, 1], 2, 2);
        assert_eq!(choose_move(&board, &table), Some((0, 1)));
    }

    #[test]
    fn test_stalling_move_picks_deepest_row() {
        // (2,2,1) is a P-position on 3x3 (verified by the solver); column 1
        // is present in rows 0 and 1, so the fallback chomps (1, 1).
        let table = p_table(3, 3);
        let state = vec![2, 2, 1];
        assert!(table.contains(&state), "test premise: (2,2,1) losing");
        let board = state_to_board(&state, 3, 3);
        assert_eq!(choose_move(&board, &table), Some((1, 1)));
    }

    #[test]
    fn test_empty_board_has_no_move() {
        let table = p_table(2, 2);
        let board = Board::empty(2, 2);
        assert_eq!(choose_move(&board, &table), None);
    }
}
