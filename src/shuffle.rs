//! Random board generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;

/// Draws a uniformly random solvable board that is not already solved.
///
/// Reshuffles the goal permutation until it lands in the solvable parity
/// class; half of all permutations qualify, so the loop is short.
pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut cells = *Board::GOAL.cells();
    loop {
        cells.shuffle(rng);
        let board = Board::new(cells).expect("shuffling preserves the permutation");
        if board.is_solvable() && board != Board::GOAL {
            return board;
        }
    }
}
