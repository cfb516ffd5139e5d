//! The eight directions a word can run in, and the grid geometry for each.
//!
//! Every direction carries three pure functions of grid coordinates:
//!
//! - [`Direction::step`]: where the `i`-th letter of a word starting at `(x, y)` lands.
//! - [`Direction::fits`]: whether a word of a given length starting at `(x, y)` stays on the grid.
//! - [`Direction::advance`]: the next start cell worth testing when `fits` fails, so a scan can
//!   jump over regions where no start cell can fit.
//!
//! This is the only place orientation-specific geometry lives; the search and placement code
//! is written once and parametrized over [`Direction`].
//!
//! Coordinates are `(x, y)` = `(column, row)`, with `y` growing downward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Right to left.
    HorizontalBack,
    /// Top to bottom.
    Vertical,
    /// Bottom to top.
    VerticalUp,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    DiagonalBack,
    /// Up and to the right.
    DiagonalUp,
    /// Up and to the left.
    DiagonalUpBack,
}

impl Direction {
    /// All directions, in the order they are scanned when none are configured.
    pub const ALL: [Direction; 8] = [
        Direction::Horizontal,
        Direction::HorizontalBack,
        Direction::Vertical,
        Direction::VerticalUp,
        Direction::Diagonal,
        Direction::DiagonalUp,
        Direction::DiagonalBack,
        Direction::DiagonalUpBack,
    ];

    /// Unit step `(dx, dy)` between consecutive letters.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::HorizontalBack => (-1, 0),
            Direction::Vertical => (0, 1),
            Direction::VerticalUp => (0, -1),
            Direction::Diagonal => (1, 1),
            Direction::DiagonalBack => (-1, 1),
            Direction::DiagonalUp => (1, -1),
            Direction::DiagonalUpBack => (-1, -1),
        }
    }

    /// Coordinate of the `i`-th letter of a word starting at `(x, y)`.
    ///
    /// Returns `None` only when the step would leave the grid on the negative side;
    /// callers that have checked [`Direction::fits`] always get `Some`.
    #[must_use]
    pub fn step(self, x: usize, y: usize, i: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        // `i` is bounded by a word length, far below isize::MAX
        let i = i as isize;
        Some((x.checked_add_signed(dx * i)?, y.checked_add_signed(dy * i)?))
    }

    /// Does a word of `length` starting at `(x, y)` stay inside a `height × width` grid?
    ///
    /// Assumes `(x, y)` itself is on the grid.
    #[must_use]
    pub fn fits(self, x: usize, y: usize, height: usize, width: usize, length: usize) -> bool {
        let right = || width >= x + length;
        let left = || x + 1 >= length;
        let down = || height >= y + length;
        let up = || y + 1 >= length;
        match self {
            Direction::Horizontal => right(),
            Direction::HorizontalBack => left(),
            Direction::Vertical => down(),
            Direction::VerticalUp => up(),
            Direction::Diagonal => right() && down(),
            Direction::DiagonalBack => left() && down(),
            Direction::DiagonalUp => right() && up(),
            Direction::DiagonalUpBack => left() && up(),
        }
    }

    /// Next start cell to test after `fits` failed at `(x, y)` for a word of `length`.
    ///
    /// The result is always strictly later than `(x, y)` in row-major order, and no start
    /// cell in between can fit. The returned `x` may lie past the right edge; the scan wraps
    /// it onto the next row. A returned `y` past the bottom edge ends the scan.
    #[must_use]
    pub fn advance(self, x: usize, y: usize, length: usize) -> (usize, usize) {
        let last = length.saturating_sub(1);
        match self {
            // The rest of this row is too far right.
            Direction::Horizontal | Direction::Diagonal => (0, y + 1),
            // Too close to the left edge; the first fitting column is `length - 1`.
            Direction::HorizontalBack => (last, y),
            // Every later row is even closer to the bottom.
            Direction::Vertical => (0, y + length),
            // Rows above `length - 1` can never fit.
            Direction::VerticalUp => (0, last),
            Direction::DiagonalBack => {
                if x < last {
                    (last, y)
                } else {
                    (last, y + length)
                }
            }
            Direction::DiagonalUp => {
                if y < last {
                    (0, last)
                } else {
                    (0, y + 1)
                }
            }
            Direction::DiagonalUpBack => (last, y.max(last)),
        }
    }

    /// Direction and letter count of the straight span from `from` to `to`.
    ///
    /// Returns `None` when the two cells are equal or do not lie on a common row,
    /// column or diagonal.
    #[must_use]
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<(Direction, usize)> {
        let dx = to.0 as isize - from.0 as isize;
        let dy = to.1 as isize - from.1 as isize;
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let unit = (dx.signum(), dy.signum());
        let direction = Direction::ALL.into_iter().find(|d| d.delta() == unit)?;
        let span = dx.abs().max(dy.abs()) as usize + 1;
        Some((direction, span))
    }

    /// The camelCase name used in settings and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::HorizontalBack => "horizontalBack",
            Direction::Vertical => "vertical",
            Direction::VerticalUp => "verticalUp",
            Direction::Diagonal => "diagonal",
            Direction::DiagonalBack => "diagonalBack",
            Direction::DiagonalUp => "diagonalUp",
            Direction::DiagonalUpBack => "diagonalUpBack",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Box<InputError>;

    /// Case-insensitive; `-` and `_` are ignored, so `diagonal-up-back` works too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().to_ascii_lowercase() == key)
            .ok_or_else(|| Box::new(InputError::UnknownDirection { name: s.to_string() }))
    }
}

/// Parse a comma-separated orientation list such as `"horizontal,vertical"`.
///
/// # Errors
///
/// Returns [`InputError::UnknownDirection`] for the first name that is not recognized and
/// [`InputError::NoOrientations`] if the list is empty.
pub fn parse_direction_list(s: &str) -> Result<Vec<Direction>, Box<InputError>> {
    let directions = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Direction>, _>>()?;
    if directions.is_empty() {
        return Err(Box::new(InputError::NoOrientations));
    }
    Ok(directions)
}
