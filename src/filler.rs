//! Filling the cells no word uses.

use std::fmt;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::puzzle_char::{to_cell_letter, FILLER_ALPHABET};

/// Where filler letters come from.
#[derive(Default)]
pub enum FillerSource {
    /// Uniform draw from [`FILLER_ALPHABET`] for every empty cell.
    #[default]
    Alphabet,
    /// Letters taken from the end of the string, one per empty cell in row-major order.
    /// Once the string runs out the remaining cells stay empty.
    Letters(String),
    /// Called once per empty cell; `None` leaves the cell empty.
    Custom(Box<dyn FnMut() -> Option<char>>),
}

impl FillerSource {
    /// Wrap a closure as a custom source.
    pub fn custom(f: impl FnMut() -> Option<char> + 'static) -> Self {
        FillerSource::Custom(Box::new(f))
    }
}

impl fmt::Debug for FillerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillerSource::Alphabet => f.write_str("Alphabet"),
            FillerSource::Letters(s) => f.debug_tuple("Letters").field(s).finish(),
            FillerSource::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Fill every empty cell of `grid` from `source`. Cells that already hold a letter are
/// left alone. Returns how many cells were filled.
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, source: &mut FillerSource, rng: &mut R) -> usize {
    let alphabet: Vec<char> = FILLER_ALPHABET.chars().collect();
    let mut letters: Vec<char> = match source {
        FillerSource::Letters(s) => s.chars().map(to_cell_letter).collect(),
        _ => Vec::new(),
    };

    let mut filled = 0;
    for cell in grid.cells_mut().filter(|c| c.is_none()) {
        let letter = match source {
            FillerSource::Alphabet => alphabet.choose(rng).copied(),
            FillerSource::Letters(_) => letters.pop(),
            FillerSource::Custom(f) => f().map(to_cell_letter),
        };
        if let Some(letter) = letter {
            *cell = Some(letter);
            filled += 1;
        }
    }

    let left_empty = grid.empty_count();
    if left_empty > 0 {
        warn!("filler ran out: {left_empty} cells left empty");
    }
    debug!("filled {filled} cells");
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_alphabet_fills_every_empty_cell() {
        let mut grid = Grid::new(5, 6);
        grid.set(1, 1, 'Q');
        let filled = fill(&mut grid, &mut FillerSource::Alphabet, &mut rng());
        assert_eq!(filled, 29);
        assert!(grid.is_full());
        assert_eq!(grid.get(1, 1), Some('Q'));
        for y in 0..5 {
            for x in 0..6 {
                if (x, y) != (1, 1) {
                    assert!(FILLER_ALPHABET.contains(grid.get(x, y).unwrap()));
                }
            }
        }
    }

    #[test]
    fn test_letters_consumed_from_end_in_row_major_order() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, 'Z');
        let mut source = FillerSource::Letters("abc".to_string());
        let filled = fill(&mut grid, &mut source, &mut rng());
        assert_eq!(filled, 3);
        assert_eq!(grid.rows(), vec!["CZ".to_string(), "BA".to_string()]);
    }

    #[test]
    fn test_letters_exhausted_leave_cells_empty() {
        let mut grid = Grid::new(2, 3);
        let mut source = FillerSource::Letters("xy".to_string());
        assert_eq!(fill(&mut grid, &mut source, &mut rng()), 2);
        assert_eq!(grid.rows(), vec!["YX.".to_string(), "...".to_string()]);
        assert_eq!(grid.empty_count(), 4);
    }

    #[test]
    fn test_custom_called_once_per_empty_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, 'A');
        grid.set(2, 2, 'B');
        let mut calls = 0;
        let mut next = b'a';
        let mut source = FillerSource::custom(move || {
            calls += 1;
            assert!(calls <= 7);
            let c = next as char;
            next += 1;
            Some(c)
        });
        assert_eq!(fill(&mut grid, &mut source, &mut rng()), 7);
        assert_eq!(grid.rows(), vec!["ABC".to_string(), "DEF".to_string(), "GHB".to_string()]);
    }

    #[test]
    fn test_custom_none_leaves_cell_empty() {
        let mut grid = Grid::new(1, 4);
        let mut toggle = false;
        let mut source = FillerSource::custom(move || {
            toggle = !toggle;
            toggle.then_some('k')
        });
        assert_eq!(fill(&mut grid, &mut source, &mut rng()), 2);
        assert_eq!(grid.rows(), vec!["K.K.".to_string()]);
    }

    #[test]
    fn test_seeded_alphabet_fill_is_reproducible() {
        let mut a = Grid::new(4, 4);
        let mut b = Grid::new(4, 4);
        fill(&mut a, &mut FillerSource::Alphabet, &mut rng());
        fill(&mut b, &mut FillerSource::Alphabet, &mut rng());
        assert_eq!(a, b);
    }
}
