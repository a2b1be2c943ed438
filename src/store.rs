//! Persistence for P-position tables.
//!
//! Tables are flat UTF-8 text: one state per line, row sums separated by
//! commas, no trailing delimiter. A table solved once for the reference
//! board can be narrowed to any smaller board with
//! [`project_to_smaller_board`], so play never pays the classification
//! cost.

use std::collections::HashSet;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::{DATA_DIR, p_positions_file_name};
use crate::state::{State, cell_count};

/// Store failures with a meaning beyond the raw I/O error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested table file does not exist. The caller must generate it
    /// with the solver first; recomputing on the fly is too expensive for
    /// interactive use.
    DataMissing(PathBuf),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DataMissing(path) => {
                write!(f, "AI data missing: {} (run solve first)", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Conventional path of the table for a `size_x` x `size_y` board.
pub fn data_file_path(size_x: usize, size_y: usize) -> PathBuf {
    Path::new(DATA_DIR).join(p_positions_file_name(size_x, size_y))
}

/// Write positions to `path`, one comma-separated line each, creating the
/// parent directory if needed. Lines come out in slice order; sort with
/// [`sort_by_cell_count`] first if downstream tooling wants
/// smallest-positions-first.
pub fn save(positions: &[State], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("creating position file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for state in positions {
        let line = state
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")
            .with_context(|| format!("writing position file {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing position file {}", path.display()))?;
    Ok(())
}

/// Read positions from `path`. Lines with fewer than two comma-separated
/// fields (blank lines included) are skipped, not errors; a field that is
/// not an integer is an error.
///
/// # Errors
/// [`StoreError::DataMissing`] if the file does not exist.
pub fn load(path: &Path) -> Result<Vec<State>> {
    if !path.exists() {
        return Err(StoreError::DataMissing(path.to_path_buf()).into());
    }
    let file = File::open(path)
        .with_context(|| format!("opening position file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut positions = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading position file {}", path.display()))?;
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() < 2 {
            continue;
        }
        let state = fields
            .iter()
            .map(|f| f.trim().parse::<usize>())
            .collect::<Result<State, _>>()
            .with_context(|| format!("malformed line {line:?} in {}", path.display()))?;
        positions.push(state);
    }
    Ok(positions)
}

/// Sort positions by ascending total cell count. Stable, so discovery order
/// is kept within each count.
pub fn sort_by_cell_count(positions: &mut [State]) {
    positions.sort_by_key(|s| cell_count(s));
}

/// Narrow a reference-board table to a smaller board.
///
/// A reference state is valid for the smaller board iff no row sum exceeds
/// `target_x` and every row at index `target_y` or beyond is zero; valid
/// states are cut down to their first `target_y` rows.
pub fn project_to_smaller_board(
    positions: &[State],
    target_x: usize,
    target_y: usize,
) -> Vec<State> {
    let mut projected = Vec::new();
    for state in positions {
        let fits_x = state.iter().all(|&n| n <= target_x);
        let fits_y = state.iter().skip(target_y).all(|&n| n == 0);
        if fits_x && fits_y {
            let mut narrowed: State = state.iter().copied().take(target_y).collect();
            narrowed.resize(target_y, 0);
            projected.push(narrowed);
        }
    }
    projected
}

/// Load the table at `path` and project it for a `size_x` x `size_y` board,
/// hashed for strategy lookups. This is the play-time entry point.
pub fn load_for_board(path: &Path, size_x: usize, size_y: usize) -> Result<HashSet<State>> {
    let positions = load(path)?;
    Ok(project_to_smaller_board(&positions, size_x, size_y)
        .into_iter()
        .collect())
}
