//! Chomp-Rust: an exhaustive solver and move engine for the game of Chomp.
//!
//! Chomp is played on a rectangular bar of cells; each move "chomps" a cell
//! together with everything below and to the right of it, and whoever eats
//! the poisoned top-left cell loses. This crate classifies every reachable
//! board shape as losing (P-position) or winning (N-position) for the
//! player to move, persists the losing shapes, and picks moves from that
//! table.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and data-file layout
//! - [`board`] - Occupancy grid and the chomp (truncation) move
//! - [`state`] - Compact row-sum encoding of boards
//! - [`solver`] - Exhaustive P/N classification for a board size
//! - [`store`] - Table persistence and reference-board projection
//! - [`strategy`] - Move selection against a P-position table
//!
//! ## Example
//!
//! ```
//! use chomp_rust::board::Board;
//! use chomp_rust::solver::Classifier;
//! use chomp_rust::strategy::choose_move;
//!
//! // Classify every 3x3 shape once...
//! let mut classifier = Classifier::new(3, 3).unwrap();
//! let summary = classifier.run();
//! assert!(summary.is_complete());
//!
//! // ...then pick a winning opening move from the full board.
//! let table = classifier.into_p_lookup();
//! let board = Board::full(3, 3);
//! let action = choose_move(&board, &table).unwrap();
//! assert!(table.contains(&chomp_rust::state::board_to_state(&board.truncate(action))));
//! ```

pub mod board;
pub mod constants;
pub mod solver;
pub mod state;
pub mod store;
pub mod strategy;
