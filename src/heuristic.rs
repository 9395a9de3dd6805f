//! Admissible distance estimate for the search.
//!
//! The estimate is the sum of Manhattan distances from each tile to the cell
//! it occupies in the goal. Every unit of that distance costs at least one
//! slide, so the estimate never overshoots the true remaining cost, and a
//! single slide moves exactly one tile by one cell, so the estimate changes
//! by at most one per move.

use crate::board::{Board, DIM, GRID_SIZE};

/// Goal cell index for each value, indexed by value.
///
/// Computed once per search so the hot loop is a table lookup.
pub(crate) fn tile_targets(goal: &Board) -> [usize; GRID_SIZE] {
    let mut targets = [0usize; GRID_SIZE];
    for (pos, &value) in goal.cells().iter().enumerate() {
        targets[value as usize] = pos;
    }
    targets
}

/// Sum of tile Manhattan distances toward the given target table.
pub(crate) fn manhattan_toward(board: &Board, targets: &[usize; GRID_SIZE]) -> u32 {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(pos, &value)| {
            let target = targets[value as usize];
            let dx = (pos % DIM).abs_diff(target % DIM);
            let dy = (pos / DIM).abs_diff(target / DIM);
            (dx + dy) as u32
        })
        .sum()
}

/// Manhattan distance from `board` to the solved arrangement.
pub fn manhattan(board: &Board) -> u32 {
    manhattan_toward(board, &tile_targets(&Board::GOAL))
}
