//! Sliding Tile Puzzle Solver Library
//!
//! Provides the core solving functionality for the classic 3x3 eight-puzzle:
//! the board model, the inversion-parity solvability test, and an optimal
//! A* search that returns the full board sequence from start to goal.

pub mod board;
pub mod frontier;
pub mod heuristic;
pub mod shuffle;
pub mod solver;

pub use board::{Board, InvalidBoard};
pub use solver::{solve, solve_to, SolveError};
