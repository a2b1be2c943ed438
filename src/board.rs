//! 2D Chomp board representation.
//!
//! The board is a `size_y` x `size_x` grid of booleans, `true` meaning the
//! cell has not been eaten yet. A move (an [`Action`]) names a present cell
//! and removes the whole rectangle below and to the right of it, the cell
//! itself included. The cell at (0, 0) is the poisoned one: whoever removes
//! it loses.

use std::fmt;

/// A move: (row, column) of the cell being chomped.
pub type Action = (usize, usize);

/// Rectangular Chomp board. Row 0 is the top row, column 0 the left column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size_x: usize,
    pub size_y: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create a full board with every cell present.
    pub fn full(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            cells: vec![true; size_x * size_y],
        }
    }

    /// Create a board with every cell absent.
    pub fn empty(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            cells: vec![false; size_x * size_y],
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size_x + col
    }

    /// Whether the cell at (row, col) is still present. Out-of-range
    /// coordinates read as absent.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size_y || col >= self.size_x {
            return false;
        }
        self.cells[self.idx(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, present: bool) {
        let i = self.idx(row, col);
        self.cells[i] = present;
    }

    /// Number of cells still present.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// The game is over once the poisoned cell (0, 0) is gone.
    pub fn is_finished(&self) -> bool {
        !self.get(0, 0)
    }

    /// Apply a chomp at `action`, returning a new board with every cell at
    /// row >= action.0 and column >= action.1 cleared. The input board is
    /// left untouched.
    pub fn truncate(&self, action: Action) -> Board {
        let (row, col) = action;
        let mut chomped = self.clone();
        for i in row..self.size_y {
            for j in col..self.size_x {
                chomped.set(i, j, false);
            }
        }
        chomped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size_y {
            for col in 0..self.size_x {
                let ch = if self.get(row, col) { '#' } else { '.' };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
