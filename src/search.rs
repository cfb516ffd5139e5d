//! Candidate search: every start cell and direction a word could be written at.
//!
//! For each enabled direction the grid is scanned row-major. Cells where the word cannot
//! fit are jumped over with [`Direction::advance`] instead of being tested one by one,
//! which keeps large, sparse grids cheap.
//!
//! # Tie-break policy
//!
//! A running maximum overlap is kept across all directions and positions in scan order.
//!
//! - With `optional_overlap` on, a candidate is kept when its overlap is at least the
//!   running maximum seen so far; after the scan the kept list is cut down to those equal
//!   to the final maximum. The word is therefore always placed where it shares the most
//!   letters with what is already on the grid.
//! - With `optional_overlap` off, every non-conflicting candidate is kept and nothing is
//!   filtered afterwards, so sparse placements stay as likely as overlapping ones.

use crate::direction::Direction;
use crate::grid::Grid;
use crate::overlap;

/// A proposed placement and the overlap it would score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub overlap: usize,
}

/// Start cells in a `height × width` grid where a word of `length` fits in `direction`,
/// in row-major order.
pub(crate) struct FitPositions {
    direction: Direction,
    height: usize,
    width: usize,
    length: usize,
    x: usize,
    y: usize,
}

impl FitPositions {
    pub(crate) fn new(direction: Direction, height: usize, width: usize, length: usize) -> Self {
        FitPositions { direction, height, width, length, x: 0, y: 0 }
    }
}

impl Iterator for FitPositions {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 {
            return None;
        }
        while self.y < self.height {
            if self.x >= self.width {
                self.x = 0;
                self.y += 1;
                continue;
            }
            let here = (self.x, self.y);
            if self.direction.fits(self.x, self.y, self.height, self.width, self.length) {
                self.x += 1;
                return Some(here);
            }
            (self.x, self.y) = self.direction.advance(self.x, self.y, self.length);
        }
        None
    }
}

/// All placements of `word` worth choosing from; empty if the word cannot be placed.
#[must_use]
pub fn search(word: &[char], grid: &Grid, directions: &[Direction], optional_overlap: bool) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut max_overlap = 0;

    for &direction in directions {
        for (x, y) in FitPositions::new(direction, grid.height(), grid.width(), word.len()) {
            let Some(overlap) = overlap::evaluate(word, grid, x, y, direction) else {
                continue;
            };
            if !optional_overlap || overlap >= max_overlap {
                max_overlap = max_overlap.max(overlap);
                candidates.push(Candidate { x, y, direction, overlap });
            }
        }
    }

    if optional_overlap {
        candidates.retain(|c| c.overlap == max_overlap);
    }
    candidates
}
