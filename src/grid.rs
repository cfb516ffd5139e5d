//! The letter grid a puzzle is built on.
//!
//! A [`Grid`] is a `height × width` array of cells, each either empty or holding one
//! uppercase letter. It is created empty for every placement attempt, mutated in place
//! while words are written and filler is added, and handed to the renderer read-only.

use std::fmt;

use crate::direction::Direction;
use crate::puzzle_char::EMPTY_CELL_GLYPH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major cells; `None` is the empty marker.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// An empty grid of the given size.
    ///
    /// # Panics
    ///
    /// If `height * width` overflows. Generation never gets here with such a size: settings
    /// resolution and growth both keep grids within
    /// [`MAX_GRID_CELLS`](crate::sizing::MAX_GRID_CELLS).
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Grid { height, width, cells: vec![None; height * width] }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Contents of cell `(x, y)`; `None` if it is empty or off the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Write `letter` into `(x, y)`. Returns `false` if the cell is off the grid.
    pub fn set(&mut self, x: usize, y: usize, letter: char) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Mutable access to every cell in row-major order, for the filler.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Option<char>> {
        self.cells.iter_mut()
    }

    /// Number of cells still empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Read `length` letters starting at `(x, y)` in `direction`.
    ///
    /// Returns `None` if the span leaves the grid or crosses an empty cell.
    #[must_use]
    pub fn read_along(&self, x: usize, y: usize, direction: Direction, length: usize) -> Option<String> {
        (0..length)
            .map(|i| {
                let (cx, cy) = direction.step(x, y, i)?;
                self.get(cx, cy)
            })
            .collect()
    }

    /// First `(x, y, direction)` (row-major, then [`Direction::ALL`] order) where `word`
    /// can be read from the grid.
    #[must_use]
    pub fn find_word(&self, word: &str) -> Option<(usize, usize, Direction)> {
        let letters: Vec<char> = word.chars().collect();
        let first = *letters.first()?;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) != Some(first) {
                    continue;
                }
                for direction in Direction::ALL {
                    if !direction.fits(x, y, self.height, self.width, letters.len()) {
                        continue;
                    }
                    let matches = letters.iter().enumerate().all(|(i, &c)| {
                        direction.step(x, y, i).and_then(|(cx, cy)| self.get(cx, cy)) == Some(c)
                    });
                    if matches {
                        return Some((x, y, direction));
                    }
                }
            }
        }
        None
    }

    /// Each row as a string, empty cells rendered as `.`.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|c| c.unwrap_or(EMPTY_CELL_GLYPH)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    /// One row per line, cells separated by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let mut first = true;
            for c in row.chars() {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c != '.' {
                    grid.set(x, y, c);
                }
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.empty_count(), 15);
        assert!(!grid.is_full());
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(2, 3);
        assert!(grid.set(2, 1, 'Q'));
        assert_eq!(grid.get(2, 1), Some('Q'));
        assert!(!grid.set(3, 0, 'Q'));
        assert!(!grid.set(0, 2, 'Q'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.empty_count(), 5);
    }

    #[test]
    fn test_read_along() {
        let grid = grid_from_rows(&["CAT.", "O...", "D...", "E..."]);
        assert_eq!(grid.read_along(0, 0, Direction::Horizontal, 3).as_deref(), Some("CAT"));
        assert_eq!(grid.read_along(0, 3, Direction::VerticalUp, 4).as_deref(), Some("EDOC"));
        // crosses an empty cell
        assert_eq!(grid.read_along(0, 0, Direction::Horizontal, 4), None);
        // leaves the grid
        assert_eq!(grid.read_along(0, 0, Direction::HorizontalBack, 2), None);
    }

    #[test]
    fn test_find_word() {
        let grid = grid_from_rows(&["CAT.", "O.O.", "D..G", "E..."]);
        assert_eq!(grid.find_word("CODE"), Some((0, 0, Direction::Vertical)));
        assert_eq!(grid.find_word("TAC"), Some((2, 0, Direction::HorizontalBack)));
        assert_eq!(grid.find_word("DOG"), None);
        assert_eq!(grid.find_word("AOG"), Some((1, 0, Direction::Diagonal)));
        assert_eq!(grid.find_word(""), None);
    }

    #[test]
    fn test_rows_and_display() {
        let grid = grid_from_rows(&["AB", ".C"]);
        assert_eq!(grid.rows(), vec!["AB".to_string(), ".C".to_string()]);
        assert_eq!(grid.to_string(), "A B\n. C");
    }

    #[test]
    fn test_is_full() {
        let grid = grid_from_rows(&["AB", "CD"]);
        assert!(grid.is_full());
        assert_eq!(grid.empty_count(), 0);
    }
}
