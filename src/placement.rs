//! Writing words onto the grid.
//!
//! Words are placed one at a time, longest first. Each word goes to a candidate chosen
//! uniformly at random from what [`search`](crate::search::search) offers. If any word has
//! nowhere to go the whole attempt is abandoned; a partial grid is never patched up.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::search::{self, Candidate};

/// Where a word was written: its first letter's cell and the direction it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    /// Letter count of the placed word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).filter_map(move |i| self.direction.step(self.x, self.y, i))
    }

    /// Cell holding the last letter.
    #[must_use]
    pub fn end(&self) -> Option<(usize, usize)> {
        self.direction.step(self.x, self.y, self.len().checked_sub(1)?)
    }
}

fn write_word(grid: &mut Grid, word: &[char], candidate: &Candidate) {
    for (i, &letter) in word.iter().enumerate() {
        if let Some((x, y)) = candidate.direction.step(candidate.x, candidate.y, i) {
            grid.set(x, y, letter);
        }
    }
}

/// Place one word on `grid`. Returns `None`, leaving the grid untouched, when no
/// candidate exists.
pub fn place_word<R: Rng + ?Sized>(
    word: &str,
    grid: &mut Grid,
    directions: &[Direction],
    optional_overlap: bool,
    rng: &mut R,
) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    let candidates = search::search(&letters, grid, directions, optional_overlap);
    let chosen = candidates.choose(rng)?;
    write_word(grid, &letters, chosen);
    Some(Placement { word: word.to_string(), x: chosen.x, y: chosen.y, direction: chosen.direction })
}

/// Place every word, in order, on `grid`. Returns `None` as soon as one word cannot be
/// placed; the grid is then only partly written and must be thrown away.
pub fn place_all<'a, R, I>(
    words: I,
    grid: &mut Grid,
    directions: &[Direction],
    optional_overlap: bool,
    rng: &mut R,
) -> Option<Vec<Placement>>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a String>,
{
    words
        .into_iter()
        .map(|word| place_word(word, grid, directions, optional_overlap, rng))
        .collect()
}
