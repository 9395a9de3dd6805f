//! Sliding Tile Puzzle Solver
//!
//! Solves the classic 3x3 eight-puzzle: eight numbered tiles and one blank
//! cell, rearranged one slide at a time into the solved order. The solver
//! finds a minimum-length move sequence with A* search and prints the board
//! after each slide.

use std::process;

use clap::{Parser, Subcommand};

use slider::board::Board;
use slider::shuffle;
use slider::solver::{self, SolveError};

/// Solves the 3x3 sliding tile puzzle optimally.
#[derive(Parser)]
#[command(name = "slider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Find a minimum-length solution for the given board.
    ///
    /// Boards are 9 cell values in row-major order, comma or space
    /// separated, with 0 (or `.`) for the blank: "1,2,3,4,5,6,0,7,8".
    Solve { board: String },
    /// Report whether the given board can reach the solved arrangement.
    Check { board: String },
    /// Print a random solvable board.
    Shuffle,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { board }) => run_solve(parse_board(&board)),
        Some(Command::Check { board }) => run_check(parse_board(&board)),
        Some(Command::Shuffle) => run_shuffle(),
        None => {
            // default: shuffle a board and solve it
            let board = shuffle::random_solvable(&mut rand::thread_rng());
            run_solve(board);
        }
    }
}

fn parse_board(text: &str) -> Board {
    match text.parse() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid board: {}", e);
            process::exit(2);
        }
    }
}

/// Solves the board and prints the move sequence.
fn run_solve(board: Board) {
    println!("Start:\n{}\n", board);

    match solver::solve(board) {
        Ok(path) => {
            println!("Solved in {} moves", path.len() - 1);
            if path.len() > 1 {
                println!();
                print!("{}", solver::format_steps(&path));
            }
        }
        Err(SolveError::Unsolvable) => {
            println!("This board cannot reach the solved arrangement. Reshuffle and try again.");
        }
        Err(e @ SolveError::NoPath) => {
            eprintln!("Internal error: {}", e);
            process::exit(1);
        }
    }
}

/// Prints the board's solvability verdict.
fn run_check(board: Board) {
    println!("{}\n", board);
    if board.is_solvable() {
        println!("Solvable");
    } else {
        println!("Not solvable");
    }
}

/// Generates and prints a random solvable board.
fn run_shuffle() {
    let board = shuffle::random_solvable(&mut rand::thread_rng());
    let cells: Vec<String> = board.cells().iter().map(u8::to_string).collect();
    println!("{}\n", cells.join(","));
    println!("{}", board);
}
