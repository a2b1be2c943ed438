//! Chomp-Rust command line driver.
//!
//! ## Usage
//!
//! - `chomp-rust solve <SIZE_X> <SIZE_Y>` - classify a board and write its
//!   P-position table under `data/`
//! - `chomp-rust play <SIZE_X> <SIZE_Y>` - play the engine against a random
//!   opponent using a stored table (the 12x12 reference by default)
//! - `chomp-rust demo` (or no subcommand) - solve a 6x6 board in memory and
//!   show a game

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chomp_rust::board::{Action, Board};
use chomp_rust::constants::REFERENCE_SIZE;
use chomp_rust::solver::Classifier;
use chomp_rust::state::State;
use chomp_rust::store;
use chomp_rust::strategy::choose_move;

/// Chomp-Rust: exhaustive Chomp solver and move engine
#[derive(Parser)]
#[command(name = "chomp-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every position of a board and save its P-position table
    Solve {
        /// Number of columns
        size_x: usize,
        /// Number of rows
        size_y: usize,
    },
    /// Play the engine against a random opponent using a stored table
    Play {
        /// Number of columns
        size_x: usize,
        /// Number of rows
        size_y: usize,
        /// Table file to load (default: the 12x12 reference table)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Solve a small board in memory and show a game
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { size_x, size_y }) => run_solve(size_x, size_y),
        Some(Commands::Play {
            size_x,
            size_y,
            data_file,
        }) => run_play(size_x, size_y, data_file),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_solve(size_x: usize, size_y: usize) -> Result<()> {
    let mut classifier = Classifier::new(size_x, size_y)?;
    println!("Solving {size_x}x{size_y} Chomp...");
    let summary = classifier.run();

    println!("Time used: {:.3}s", summary.elapsed.as_secs_f64());
    println!("Number of states tested: {}", summary.states_tested);
    println!(
        "Theoretical number of states to be tested: {}",
        summary.theoretical
    );
    if summary.is_complete() {
        println!("All states have been explored.");
    } else {
        eprintln!("Warning: some states have not been explored.");
    }

    let mut positions = classifier.into_p_positions();
    store::sort_by_cell_count(&mut positions);
    let path = store::data_file_path(size_x, size_y);
    store::save(&positions, &path)?;
    println!("Saved {} P-positions to {}", positions.len(), path.display());
    Ok(())
}

fn run_play(size_x: usize, size_y: usize, data_file: Option<PathBuf>) -> Result<()> {
    // Dimension validation only; the table itself comes from disk.
    Classifier::new(size_x, size_y)?;
    let path = data_file.unwrap_or_else(|| store::data_file_path(REFERENCE_SIZE, REFERENCE_SIZE));
    let table = store::load_for_board(&path, size_x, size_y)?;
    println!(
        "Loaded {} P-positions for {size_x}x{size_y} from {}",
        table.len(),
        path.display()
    );
    play_game(size_x, size_y, &table);
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Chomp-Rust demo: engine vs. random opponent on 6x6\n");
    let mut classifier = Classifier::new(6, 6)?;
    let summary = classifier.run();
    println!(
        "Classified {} positions in {:.3}s ({} losing shapes)\n",
        summary.states_tested,
        summary.elapsed.as_secs_f64(),
        summary.p_count
    );
    play_game(6, 6, &classifier.into_p_lookup());
    Ok(())
}

/// Run one game to completion, engine moving first. The opponent chomps a
/// uniformly random present cell.
fn play_game(size_x: usize, size_y: usize, table: &HashSet<State>) {
    let mut board = Board::full(size_x, size_y);
    let mut engine_to_move = true;
    println!("{board}");

    while !board.is_finished() {
        let mover = if engine_to_move { "engine" } else { "random" };
        let action = if engine_to_move {
            match choose_move(&board, table) {
                Some(action) => action,
                None => break,
            }
        } else {
            random_move(&board)
        };

        board = board.truncate(action);
        println!("{mover} chomps ({}, {})", action.0, action.1);
        println!("{board}");

        if board.is_finished() {
            println!("{mover} ate the poisoned cell and loses!");
        }
        engine_to_move = !engine_to_move;
    }
}

/// Uniformly random present cell.
fn random_move(board: &Board) -> Action {
    let mut cells = Vec::new();
    for row in 0..board.size_y {
        for col in 0..board.size_x {
            if board.get(row, col) {
                cells.push((row, col));
            }
        }
    }
    cells[fastrand::usize(..cells.len())]
}
