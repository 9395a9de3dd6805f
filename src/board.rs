//! Board representation and operations for the sliding tile puzzle.
//!
//! The board is a flat array of 9 cells in row-major order, where each cell
//! holds a tile number 1-8 or 0 for the blank. Position `p` maps to grid
//! coordinates `(p % 3, p / 3)`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Total number of cells on the board.
pub const GRID_SIZE: usize = 9;

/// Blank offsets to the four orthogonal neighbour cells, as (dx, dy).
const SLIDES: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// A board that is not a permutation of the values 0-8, or text that does
/// not describe one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidBoard {
    #[error("cell value {0} is outside 0..=8")]
    ValueOutOfRange(u8),
    #[error("cell value {0} appears more than once")]
    DuplicateValue(u8),
    #[error("expected 9 cell values, got {0}")]
    WrongCellCount(usize),
    #[error("cell {0:?} is not a tile number or the blank")]
    UnparsableCell(String),
}

/// One arrangement of the 9 puzzle cells.
///
/// Every `Board` in circulation is a permutation of 0-8: `new` and `FromStr`
/// are the only public constructors and both validate. Boards are immutable
/// values; sliding a tile produces a new `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; GRID_SIZE],
}

impl Board {
    /// The solved arrangement: tiles 1-8 in order, blank in the last cell.
    pub const GOAL: Board = Board {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Creates a board from row-major cell values, rejecting anything that
    /// is not a permutation of 0-8.
    pub fn new(cells: [u8; GRID_SIZE]) -> Result<Self, InvalidBoard> {
        let mut seen = [false; GRID_SIZE];
        for &value in &cells {
            if value as usize >= GRID_SIZE {
                return Err(InvalidBoard::ValueOutOfRange(value));
            }
            if seen[value as usize] {
                return Err(InvalidBoard::DuplicateValue(value));
            }
            seen[value as usize] = true;
        }
        Ok(Self { cells })
    }

    /// The row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[u8; GRID_SIZE] {
        &self.cells
    }

    /// Index of the cell holding `value`.
    ///
    /// `value` must be in 0..=8; every such value is present in a valid board.
    pub fn position_of(&self, value: u8) -> usize {
        debug_assert!((value as usize) < GRID_SIZE);
        self.cells
            .iter()
            .position(|&v| v == value)
            .expect("a valid board holds every value 0-8")
    }

    /// Index of the blank cell.
    #[inline]
    pub fn blank_pos(&self) -> usize {
        self.position_of(0)
    }

    /// True iff cells `i` and `j` share an edge on the 3x3 grid.
    pub fn are_adjacent(i: usize, j: usize) -> bool {
        let dx = (i % DIM).abs_diff(j % DIM);
        let dy = (i / DIM).abs_diff(j / DIM);
        dx + dy == 1
    }

    /// Whether this board can reach [`Board::GOAL`] by legal slides.
    ///
    /// On an odd-width grid a slide never changes the parity of the
    /// inversion count, so exactly the even-parity half of the permutations
    /// is reachable from the goal.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Number of out-of-order tile pairs, ignoring the blank.
    fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// Returns 2 boards when the blank is in a corner, 3 on an edge and 4 in
    /// the center.
    pub fn neighbors(&self) -> Vec<Board> {
        let blank = self.blank_pos();
        let x = (blank % DIM) as isize;
        let y = (blank / DIM) as isize;

        let mut out = Vec::with_capacity(4);
        for (dx, dy) in SLIDES {
            let nx = x + dx;
            let ny = y + dy;
            if (0..DIM as isize).contains(&nx) && (0..DIM as isize).contains(&ny) {
                let mut cells = self.cells;
                cells.swap(blank, ny as usize * DIM + nx as usize);
                out.push(Board { cells });
            }
        }
        out
    }

    /// The tile that slid between `self` and `next`, if the two boards are
    /// exactly one legal move apart.
    pub fn moved_tile(&self, next: &Board) -> Option<u8> {
        let from = self.blank_pos();
        let to = next.blank_pos();
        if from == to || !Self::are_adjacent(from, to) {
            return None;
        }
        if self.cells[to] != next.cells[from] {
            return None;
        }
        // every cell outside the swapped pair must be untouched
        for i in 0..GRID_SIZE {
            if i != from && i != to && self.cells[i] != next.cells[i] {
                return None;
            }
        }
        Some(self.cells[to])
    }
}

impl FromStr for Board {
    type Err = InvalidBoard;

    /// Parses comma- or whitespace-separated cell values; `.` and `_` are
    /// accepted for the blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.len() != GRID_SIZE {
            return Err(InvalidBoard::WrongCellCount(tokens.len()));
        }

        let mut cells = [0u8; GRID_SIZE];
        for (cell, token) in cells.iter_mut().zip(&tokens) {
            *cell = match *token {
                "." | "_" => 0,
                digits => digits
                    .parse()
                    .map_err(|_| InvalidBoard::UnparsableCell(digits.to_string()))?,
            };
        }
        Board::new(cells)
    }
}

impl fmt::Display for Board {
    /// Three rows of cell values with the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..DIM {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..DIM {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * DIM + col] {
                    0 => write!(f, ".")?,
                    tile => write!(f, "{}", tile)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    use super::*;

    #[test]
    fn test_goal_is_valid_and_solvable() {
        let goal = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(goal, Board::GOAL);
        assert!(goal.is_solvable());
        assert_eq!(goal.blank_pos(), 8);
    }

    #[test]
    fn test_rejects_value_out_of_range() {
        let result = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(result, Err(InvalidBoard::ValueOutOfRange(9)));
    }

    #[test]
    fn test_rejects_duplicate_value() {
        let result = Board::new([1, 2, 3, 4, 5, 6, 7, 1, 0]);
        assert_eq!(result, Err(InvalidBoard::DuplicateValue(1)));
    }

    #[test]
    fn test_parse_accepts_commas_whitespace_and_blank_marker() {
        let from_commas: Board = "1,2,3,4,5,6,7,8,0".parse().unwrap();
        let from_spaces: Board = "1 2 3 4 5 6 7 8 .".parse().unwrap();
        assert_eq!(from_commas, Board::GOAL);
        assert_eq!(from_spaces, Board::GOAL);
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let result = "1,2,3".parse::<Board>();
        assert_eq!(result, Err(InvalidBoard::WrongCellCount(3)));
    }

    #[test]
    fn test_parse_rejects_garbage_cell() {
        let result = "1,2,3,4,x,6,7,8,0".parse::<Board>();
        assert_eq!(result, Err(InvalidBoard::UnparsableCell("x".to_string())));
    }

    #[test]
    fn test_display_parse_round_trip() {
        let rendered = Board::GOAL.to_string();
        assert_eq!(rendered.parse::<Board>().unwrap(), Board::GOAL);
    }

    #[test]
    fn test_display_goal() {
        insta::assert_snapshot!(Board::GOAL.to_string(), @r"
        1 2 3
        4 5 6
        7 8 .
        ");
    }

    #[test]
    fn test_adjacency() {
        // corner cell 0 touches only its row and column neighbours
        assert!(Board::are_adjacent(0, 1));
        assert!(Board::are_adjacent(0, 3));
        assert!(!Board::are_adjacent(0, 4));
        assert!(!Board::are_adjacent(0, 2));
        assert!(!Board::are_adjacent(4, 4));
        // center cell 4 touches all four edge cells
        for cell in [1, 3, 5, 7] {
            assert!(Board::are_adjacent(4, cell));
        }
    }

    #[test]
    fn test_position_of_finds_every_value() {
        let board: Board = "8,6,7,2,5,4,3,0,1".parse().unwrap();
        for value in 0..GRID_SIZE as u8 {
            let pos = board.position_of(value);
            assert_eq!(board.cells()[pos], value);
        }
    }

    #[test]
    fn test_neighbor_count_matches_blank_position() {
        for blank in 0..GRID_SIZE {
            let mut cells = [0u8; GRID_SIZE];
            let mut next = 1;
            for (pos, cell) in cells.iter_mut().enumerate() {
                if pos != blank {
                    *cell = next;
                    next += 1;
                }
            }
            let board = Board::new(cells).unwrap();
            let expected = match blank {
                4 => 4,
                1 | 3 | 5 | 7 => 3,
                _ => 2,
            };
            assert_eq!(board.neighbors().len(), expected, "blank at {blank}");
        }
    }

    #[test]
    fn test_neighbors_are_one_slide_away() {
        let board: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
        for neighbor in board.neighbors() {
            let tile = board.moved_tile(&neighbor).expect("one move apart");
            assert_ne!(tile, 0);
        }
    }

    #[test]
    fn test_moved_tile_rejects_distant_boards() {
        assert_eq!(Board::GOAL.moved_tile(&Board::GOAL), None);
        let far: Board = "8,6,7,2,5,4,3,0,1".parse().unwrap();
        assert_eq!(Board::GOAL.moved_tile(&far), None);
    }

    #[test]
    fn test_parity_is_invariant_under_slides() {
        let mut rng = thread_rng();
        let mut board = Board::GOAL;
        for _ in 0..100 {
            board = *board
                .neighbors()
                .choose(&mut rng)
                .expect("every board has neighbours");
            assert!(board.is_solvable());
        }

        // the same walk from an odd-parity board never becomes solvable
        let mut board: Board = "2,1,3,4,5,6,7,8,0".parse().unwrap();
        assert!(!board.is_solvable());
        for _ in 0..100 {
            board = *board
                .neighbors()
                .choose(&mut rng)
                .expect("every board has neighbours");
            assert!(!board.is_solvable());
        }
    }

    #[test]
    fn test_single_inversion_is_unsolvable() {
        let board: Board = "2,1,3,4,5,6,7,8,0".parse().unwrap();
        assert!(!board.is_solvable());
    }
}
