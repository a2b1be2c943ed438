//! Constants for board limits and the position-file layout.
//!
//! Board dimensions are runtime values here (the solver accepts any size up
//! to [`MAX_BOARD_SIZE`]), so this module only fixes the supported range,
//! the reference board used for precomputed tables, and where those tables
//! live on disk.

// =============================================================================
// Board Limits
// =============================================================================

/// Largest supported board dimension in either direction.
///
/// Classification cost grows combinatorially with board size; 12x12 is the
/// largest board for which a full solve is still practical, and it doubles
/// as the reference table that all smaller boards project from.
pub const MAX_BOARD_SIZE: usize = 12;

/// Reference board dimension. The precomputed P-position table for this
/// board serves every smaller board via projection.
pub const REFERENCE_SIZE: usize = 12;

// =============================================================================
// Persistence Layout
// =============================================================================

/// Directory holding precomputed P-position tables.
pub const DATA_DIR: &str = "data";

/// File name for the P-position table of a `size_x` x `size_y` board.
pub fn p_positions_file_name(size_x: usize, size_y: usize) -> String {
    format!("p_positions_{size_x}x{size_y}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_convention() {
        assert_eq!(p_positions_file_name(12, 12), "p_positions_12x12.txt");
        assert_eq!(p_positions_file_name(3, 5), "p_positions_3x5.txt");
    }
}
