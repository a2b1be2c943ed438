//! Compact row-sum encoding of a Chomp board.
//!
//! Every board reachable from a full rectangle has a staircase shape: each
//! row is a prefix of present cells, and row lengths never increase going
//! down. The sequence of row lengths therefore captures the position
//! exactly, and that sequence is what the solver enumerates, the store
//! persists, and the strategy engine looks up.

use crate::board::Board;

/// Row-sum encoding of a board: entry `i` is the number of present cells in
/// row `i`. For any legally reached board the sequence is non-increasing
/// with entries in `[0, size_x]`; this is a derived property of the chomp
/// move, not something the codec enforces.
pub type State = Vec<usize>;

/// Encode a board as its row sums.
pub fn board_to_state(board: &Board) -> State {
    let mut state = Vec::with_capacity(board.size_y);
    for row in 0..board.size_y {
        let mut sum = 0;
        for col in 0..board.size_x {
            if board.get(row, col) {
                sum += 1;
            }
        }
        state.push(sum);
    }
    state
}

/// Rebuild the board for a state: row `i` gets its first `state[i]` cells.
pub fn state_to_board(state: &[usize], size_x: usize, size_y: usize) -> Board {
    let mut board = Board::empty(size_x, size_y);
    for (row, &len) in state.iter().take(size_y).enumerate() {
        for col in 0..len.min(size_x) {
            board.set(row, col, true);
        }
    }
    board
}

/// Total number of present cells in a state.
pub fn cell_count(state: &[usize]) -> usize {
    state.iter().sum()
}
