//! Exhaustive P/N-position classification for a fixed board size.
//!
//! The classifier enumerates every board shape reachable from the full
//! rectangle, in an order where each shape is visited only after everything
//! it can move to, and labels each one:
//!
//! - **P-position**: the player about to move loses with best play. A shape
//!   is a P-position exactly when no move from it reaches another
//!   P-position.
//! - **N-position**: the player about to move can win, by moving to some
//!   P-position.
//!
//! The empty board is the terminal case and is deliberately kept out of
//! both tables: reaching it means you just ate the poisoned cell, so a move
//! there never helps, which is exactly what "not in the P table" means to
//! the classification rule.
//!
//! Enumeration walks the non-increasing row-sum sequences in lexicographic
//! order: seed row 0 with each length from 1 to `size_x`, then recursively
//! grow each following row from 1 up to the row above it. Chomping any cell
//! can only shrink row sums, so every child of a shape sorts strictly
//! earlier and is already classified when the shape itself is tested.

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use crate::constants::MAX_BOARD_SIZE;
use crate::state::{State, board_to_state, state_to_board};

/// Rejected classifier input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Board dimensions outside the supported range.
    BadDimensions { size_x: usize, size_y: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::BadDimensions { size_x, size_y } => write!(
                f,
                "invalid board size {size_x}x{size_y}: both dimensions must be \
                 between 1 and {MAX_BOARD_SIZE}"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Diagnostics from a classifier run.
#[derive(Debug, Clone)]
pub struct SolveSummary {
    /// Number of P-positions found.
    pub p_count: usize,
    /// Number of N-positions found.
    pub n_count: usize,
    /// Total states accounted for: P + N + the empty terminal state.
    pub states_tested: usize,
    /// Closed-form count of valid states for this board size.
    pub theoretical: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl SolveSummary {
    /// Whether the enumeration covered exactly the theoretical state space.
    /// A mismatch means the P table is suspect, though still loadable.
    pub fn is_complete(&self) -> bool {
        self.states_tested as u64 == self.theoretical
    }
}

/// Classifier for one board size. Owns the growing P and N tables; both
/// only grow during [`run`](Classifier::run) and are read-only afterward.
pub struct Classifier {
    size_x: usize,
    size_y: usize,
    /// P-positions in discovery order, for callers that care about it.
    p_positions: Vec<State>,
    /// Same P-positions, hashed for the membership tests classification
    /// does in its inner loop.
    p_lookup: HashSet<State>,
    n_positions: HashSet<State>,
}

impl Classifier {
    /// Create a classifier for a `size_x` x `size_y` board.
    ///
    /// # Errors
    /// Returns [`SolverError::BadDimensions`] if either dimension is zero
    /// or exceeds [`MAX_BOARD_SIZE`].
    pub fn new(size_x: usize, size_y: usize) -> Result<Self, SolverError> {
        if size_x == 0 || size_y == 0 || size_x > MAX_BOARD_SIZE || size_y > MAX_BOARD_SIZE {
            return Err(SolverError::BadDimensions { size_x, size_y });
        }
        Ok(Self {
            size_x,
            size_y,
            p_positions: Vec::new(),
            p_lookup: HashSet::new(),
            n_positions: HashSet::new(),
        })
    }

    /// Enumerate and classify every reachable state, returning run
    /// diagnostics. Running twice is a no-op for the tables (every state is
    /// already known) but recomputes the summary.
    pub fn run(&mut self) -> SolveSummary {
        let start = Instant::now();
        for len in 1..=self.size_x {
            let mut state = vec![0; self.size_y];
            state[0] = len;
            self.extend(&mut state, 0);
        }
        let p_count = self.p_positions.len();
        let n_count = self.n_positions.len();
        SolveSummary {
            p_count,
            n_count,
            // The empty terminal state is never classified but counts as
            // tested, same as the theoretical total includes it.
            states_tested: p_count + n_count + 1,
            theoretical: theoretical_state_count(self.size_x, self.size_y),
            elapsed: start.elapsed(),
        }
    }

    /// Classify the state as currently filled in, then generate every
    /// non-increasing extension of row `row + 1` and recurse. Each distinct
    /// state is visited exactly once, in lexicographic order.
    fn extend(&mut self, state: &mut State, row: usize) {
        self.classify(state);
        if row + 1 >= self.size_y {
            return;
        }
        for len in 1..=state[row] {
            state[row + 1] = len;
            self.extend(state, row + 1);
        }
        state[row + 1] = 0;
    }

    /// Backward-induction step: the state is a P-position iff no present
    /// cell chomps to a known P-position. Every child sorts lexicographically
    /// before the state, so its label is already final.
    fn classify(&mut self, state: &State) {
        let board = state_to_board(state, self.size_x, self.size_y);
        for row in 0..self.size_y {
            for col in 0..state[row] {
                let child = board_to_state(&board.truncate((row, col)));
                if self.p_lookup.contains(&child) {
                    self.n_positions.insert(state.clone());
                    return;
                }
            }
        }
        self.p_positions.push(state.clone());
        self.p_lookup.insert(state.clone());
    }

    /// P-positions in the order they were discovered.
    pub fn p_positions(&self) -> &[State] {
        &self.p_positions
    }

    /// Hash-backed P table, suitable for the strategy engine's lookups.
    pub fn p_lookup(&self) -> &HashSet<State> {
        &self.p_lookup
    }

    pub fn is_p_position(&self, state: &State) -> bool {
        self.p_lookup.contains(state)
    }

    pub fn is_n_position(&self, state: &State) -> bool {
        self.n_positions.contains(state)
    }

    /// Consume the classifier, keeping only the discovery-ordered P list.
    pub fn into_p_positions(self) -> Vec<State> {
        self.p_positions
    }

    /// Consume the classifier, keeping only the hashed P table.
    pub fn into_p_lookup(self) -> HashSet<State> {
        self.p_lookup
    }
}

/// Number of valid non-increasing sequences of length `size_y` with entries
/// in `[0, size_x]`, the all-zero sequence included.
///
/// Counted by the recurrence f(0, v) = 1, f(len, v) = sum over w <= v of
/// f(len - 1, w), evaluated with running prefix sums. Equivalent to the
/// stars-and-bars binomial C(size_x + size_y, size_y).
pub fn theoretical_state_count(size_x: usize, size_y: usize) -> u64 {
    let mut counts = vec![1u64; size_x + 1];
    for _ in 0..size_y {
        let mut acc = 0u64;
        for entry in counts.iter_mut() {
            acc += *entry;
            *entry = acc;
        }
    }
    counts[size_x]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_dimensions_rejected() {
        assert!(matches!(
            Classifier::new(0, 3),
            Err(SolverError::BadDimensions { .. })
        ));
        assert!(matches!(
            Classifier::new(3, 0),
            Err(SolverError::BadDimensions { .. })
        ));
        assert!(Classifier::new(MAX_BOARD_SIZE + 1, 2).is_err());
        assert!(Classifier::new(1, 1).is_ok());
    }

    #[test]
    fn test_theoretical_count_small_cases() {
        // C(x + y, y) in each case.
        assert_eq!(theoretical_state_count(1, 1), 2);
        assert_eq!(theoretical_state_count(2, 1), 3);
        assert_eq!(theoretical_state_count(2, 2), 6);
        assert_eq!(theoretical_state_count(3, 3), 20);
        assert_eq!(theoretical_state_count(12, 12), 2_704_156);
    }

    #[test]
    fn test_single_cell_board() {
        // 1x1: the only reachable state is (1), a forced poisoned bite.
        let mut classifier = Classifier::new(1, 1).unwrap();
        let summary = classifier.run();
        assert_eq!(classifier.p_positions(), &[vec![1]]);
        assert_eq!(summary.p_count, 1);
        assert_eq!(summary.n_count, 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_two_by_one_board() {
        // size_x = 2, size_y = 1: (1) is losing, (2) wins by moving to (1).
        let mut classifier = Classifier::new(2, 1).unwrap();
        let summary = classifier.run();
        assert!(classifier.is_p_position(&vec![1]));
        assert!(classifier.is_n_position(&vec![2]));
        assert_eq!(summary.states_tested, 3);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_two_by_two_board() {
        let mut classifier = Classifier::new(2, 2).unwrap();
        let summary = classifier.run();
        // Known 2x2 classification: (1,0) and (2,1) lose for the mover,
        // everything else wins.
        assert!(classifier.is_p_position(&vec![1, 0]));
        assert!(classifier.is_p_position(&vec![2, 1]));
        assert!(classifier.is_n_position(&vec![1, 1]));
        assert!(classifier.is_n_position(&vec![2, 0]));
        assert!(classifier.is_n_position(&vec![2, 2]));
        assert_eq!(summary.p_count, 2);
        assert_eq!(summary.n_count, 3);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_full_rectangle_is_winning() {
        // Strategy stealing: the full board is never a P-position (except
        // the bare 1x1 poisoned cell).
        for (x, y) in [(2, 2), (3, 2), (4, 3), (5, 5)] {
            let mut classifier = Classifier::new(x, y).unwrap();
            classifier.run();
            let full = vec![x; y];
            assert!(
                classifier.is_n_position(&full),
                "full {x}x{y} board should be an N-position"
            );
        }
    }

    #[test]
    fn test_every_state_labeled_exactly_once() {
        let mut classifier = Classifier::new(4, 3).unwrap();
        let summary = classifier.run();
        assert!(summary.is_complete());
        for state in classifier.p_positions() {
            assert!(
                !classifier.is_n_position(state),
                "{state:?} labeled both P and N"
            );
        }
        assert_eq!(
            summary.p_count + summary.n_count + 1,
            summary.theoretical as usize
        );
    }
}
