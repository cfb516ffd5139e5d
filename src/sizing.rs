//! Grid sizing and the attempt/growth state machine.
//!
//! ```text
//! Attempting --success--------------------------> Succeeded
//! Attempting --budget at this size spent--------> Growing
//! Growing ----growths <= max_grid_growth--------> Attempting (one row and column bigger)
//! Growing ----growths >  max_grid_growth--------> Failed
//! ```
//!
//! Both loops are bounded: at most `max_grid_generation_attempts` attempts per size and
//! `max_grid_growth + 1` sizes in total. Growth also stops once the next size would
//! exceed [`MAX_GRID_CELLS`].

use log::debug;

/// Largest grid, in cells, the generator will allocate (1024 × 1024).
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// `height * width` if it is within [`MAX_GRID_CELLS`].
#[must_use]
pub fn checked_cell_count(height: usize, width: usize) -> Option<usize> {
    height.checked_mul(width).filter(|&cells| cells <= MAX_GRID_CELLS)
}

/// Initial `(height, width)` for a word list.
///
/// Without explicit dimensions the grid is square, sized to the larger of the longest word
/// and the number of words. When only one dimension is given the grid stays square on that
/// value; when both are given they are used as-is.
#[must_use]
pub fn initial_dimensions(
    longest_word_len: usize,
    word_count: usize,
    grid_height: Option<usize>,
    grid_width: Option<usize>,
) -> (usize, usize) {
    let derived = longest_word_len.max(word_count);
    match (grid_height, grid_width) {
        (Some(h), Some(w)) => (h, w),
        (Some(side), None) | (None, Some(side)) => (side, side),
        (None, None) => (derived, derived),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthState {
    /// Ready to run a placement attempt at the current size.
    Attempting,
    /// Every attempt at the current size failed; the grid must grow.
    Growing,
    /// An attempt placed every word.
    Succeeded,
    /// The growth budget ran out.
    Failed,
}

#[derive(Debug, Clone)]
pub struct GrowthController {
    height: usize,
    width: usize,
    max_attempts: usize,
    max_growth: usize,
    attempts_at_size: usize,
    total_attempts: usize,
    growths: usize,
    state: GrowthState,
}

impl GrowthController {
    #[must_use]
    pub fn new(height: usize, width: usize, max_attempts: usize, max_growth: usize) -> Self {
        GrowthController {
            height,
            width,
            max_attempts,
            max_growth,
            attempts_at_size: 0,
            total_attempts: 0,
            growths: 0,
            state: if max_attempts == 0 { GrowthState::Growing } else { GrowthState::Attempting },
        }
    }

    #[must_use]
    pub fn state(&self) -> GrowthState {
        self.state
    }

    /// Current `(height, width)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[must_use]
    pub fn growths(&self) -> usize {
        self.growths
    }

    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    /// Record the outcome of one attempt. Only meaningful in [`GrowthState::Attempting`].
    pub fn record_attempt(&mut self, succeeded: bool) -> GrowthState {
        if self.state != GrowthState::Attempting {
            return self.state;
        }
        self.attempts_at_size += 1;
        self.total_attempts += 1;
        self.state = if succeeded {
            GrowthState::Succeeded
        } else if self.attempts_at_size >= self.max_attempts {
            debug!(
                "no valid {}x{} grid found after {} attempts",
                self.height, self.width, self.attempts_at_size
            );
            GrowthState::Growing
        } else {
            GrowthState::Attempting
        };
        self.state
    }

    /// Grow the grid by one row and one column, or fail once the growth budget is spent.
    /// Only meaningful in [`GrowthState::Growing`].
    pub fn grow(&mut self) -> GrowthState {
        if self.state != GrowthState::Growing {
            return self.state;
        }
        self.growths += 1;
        let next = self
            .height
            .checked_add(1)
            .zip(self.width.checked_add(1))
            .filter(|&(h, w)| checked_cell_count(h, w).is_some());
        let Some((height, width)) = next.filter(|_| self.growths <= self.max_growth) else {
            self.state = GrowthState::Failed;
            return self.state;
        };
        self.height = height;
        self.width = width;
        self.attempts_at_size = 0;
        debug!("growing grid to {}x{} (growth {})", self.height, self.width, self.growths);
        self.state = if self.max_attempts == 0 { GrowthState::Growing } else { GrowthState::Attempting };
        self.state
    }
}
