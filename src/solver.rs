//! Optimal sliding-puzzle search.
//!
//! Classic A* over the implicit move graph, one unit of cost per slide:
//! - Parity check up front so unsolvable boards fail before any search work
//! - Lazy relaxation: duplicate frontier entries instead of decrease-key,
//!   with stale pops skipped against the closed set
//! - FxHashMap/FxHashSet keyed directly by `Board` for score, predecessor
//!   and closed-set bookkeeping
//! - Path rebuilt by walking the predecessor map back from the goal
//!
//! The Manhattan heuristic is consistent, so the first pop of any board
//! carries its optimal cost and nothing is ever re-expanded.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::board::Board;
use crate::frontier::{Frontier, OpenEntry};
use crate::heuristic::{manhattan_toward, tile_targets};

/// Why a search returned no solution sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Start and goal lie in different parity classes; no sequence of
    /// slides connects them. Expected for half of all permutations.
    #[error("board parity does not match the goal; no sequence of slides can solve it")]
    Unsolvable,
    /// The frontier drained before the goal was popped. The solvable half
    /// of the state graph is connected, so this indicates a solver bug.
    #[error("search frontier drained before reaching the goal; this is a solver bug")]
    NoPath,
}

/// Finds a minimum-length slide sequence from `start` to [`Board::GOAL`].
///
/// Returns the visited boards in order, start and goal inclusive; the number
/// of moves is `len() - 1`. A solved start yields a single-element sequence.
pub fn solve(start: Board) -> Result<Vec<Board>, SolveError> {
    solve_to(start, Board::GOAL)
}

/// Finds a minimum-length slide sequence between two arbitrary boards.
pub fn solve_to(start: Board, goal: Board) -> Result<Vec<Board>, SolveError> {
    if start.is_solvable() != goal.is_solvable() {
        return Err(SolveError::Unsolvable);
    }

    let targets = tile_targets(&goal);

    // per-call search state, dropped on return
    let mut g_score: FxHashMap<Board, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Board, Board> = FxHashMap::default();
    let mut closed: FxHashSet<Board> = FxHashSet::default();
    let mut open = Frontier::new();

    g_score.insert(start, 0);
    open.push(OpenEntry {
        board: start,
        f: manhattan_toward(&start, &targets),
        g: 0,
    });

    while let Some(entry) = open.pop() {
        let current = entry.board;
        if current == goal {
            return Ok(reconstruct(&came_from, current));
        }
        if !closed.insert(current) {
            // stale duplicate left behind by a later relaxation
            continue;
        }

        // first pop of a board carries its final cost (consistent heuristic)
        let tentative_g = entry.g + 1;
        for next in current.neighbors() {
            if closed.contains(&next) {
                continue;
            }
            match g_score.get(&next) {
                Some(&best) if best <= tentative_g => {}
                _ => {
                    g_score.insert(next, tentative_g);
                    came_from.insert(next, current);
                    open.push(OpenEntry {
                        board: next,
                        f: tentative_g + manhattan_toward(&next, &targets),
                        g: tentative_g,
                    });
                }
            }
        }
    }

    Err(SolveError::NoPath)
}

/// Walks the predecessor map back from the goal and reverses the result
/// into a start-to-goal sequence.
fn reconstruct(came_from: &FxHashMap<Board, Board>, goal: Board) -> Vec<Board> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Renders a solution sequence as numbered slide steps.
pub fn format_steps(path: &[Board]) -> String {
    let mut output = String::new();
    for (step, window) in path.windows(2).enumerate() {
        if let Some(tile) = window[0].moved_tile(&window[1]) {
            output.push_str(&format!("step {}: slide tile {}\n", step + 1, tile));
        }
        output.push_str(&format!("{}\n\n", window[1]));
    }
    output
}
