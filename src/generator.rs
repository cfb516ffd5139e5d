//! Puzzle generation: from a word list and settings to a finished grid.
//!
//! # Error Handling
//!
//! The generator uses [`GeneratorError`] with two variants:
//!
//! - G001: `InvalidInput` (Word list or settings rejected (wraps [`InputError`]))
//! - G002: `GenerationExhausted` (No grid found within the growth budget)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordsearch::generator;
//! use wordsearch::settings::PuzzleOptions;
//!
//! let puzzle = generator::generate(&["cat", "dog", "code"], PuzzleOptions::default())?;
//!
//! println!("{}", puzzle.grid);
//! for placement in &puzzle.placements {
//!     println!("{} at ({}, {}) {}", placement.word, placement.x, placement.y, placement.direction);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reproducible Puzzles
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordsearch::generator;
//! use wordsearch::settings::PuzzleOptions;
//!
//! let a = generator::generate_with_rng(&["rust", "crab"], PuzzleOptions::default(), &mut StdRng::seed_from_u64(9))?;
//! let b = generator::generate_with_rng(&["rust", "crab"], PuzzleOptions::default(), &mut StdRng::seed_from_u64(9))?;
//! assert_eq!(a.grid, b.grid);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use wordsearch::generator::{self, GeneratorError};
//! use wordsearch::settings::PuzzleOptions;
//!
//! let empty: [&str; 0] = [];
//! match generator::generate(&empty, PuzzleOptions::default()) {
//!     Ok(puzzle) => println!("{}", puzzle.grid),
//!     Err(e) => {
//!         // Error code: G001, caused by E001
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```

use std::time::Duration;

use instant::Instant;
use log::{debug, info};
use rand::Rng;

use crate::direction::Direction;
use crate::errors::InputError;
use crate::filler;
use crate::grid::Grid;
use crate::placement::{self, Placement};
use crate::settings::{PuzzleOptions, Settings};
use crate::sizing::{GrowthController, GrowthState};
use crate::word_list::WordList;

/// Unified error type for puzzle generation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The word list or settings were rejected before any grid work began.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Box<InputError>),

    /// The grid grew past `maxGridGrowth` without any attempt placing every word.
    #[error("no valid grid found; gave up at {height}x{width} after {growths} growths and {attempts} attempts")]
    GenerationExhausted {
        height: usize,
        width: usize,
        growths: usize,
        attempts: usize,
    },
}

impl GeneratorError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GeneratorError::InvalidInput(_) => "G001",
            GeneratorError::GenerationExhausted { .. } => "G002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GeneratorError::InvalidInput(_) => "Word list or settings rejected",
            GeneratorError::GenerationExhausted { .. } => "No grid found within the growth budget",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GeneratorError::InvalidInput(_) => "The input was rejected before any grid was built. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            GeneratorError::GenerationExhausted { .. } => "Every placement attempt failed at every grid size up to the growth limit. The generator does not relax settings on its own.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GeneratorError::GenerationExhausted { .. } => Some("Try a larger starting grid, more orientations, a higher --max-growth, or fewer/shorter words"),
            GeneratorError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GeneratorError::InvalidInput(ie) => {
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            GeneratorError::GenerationExhausted { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// How much work a successful generation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Placement attempts across all sizes, including the successful one.
    pub attempts: usize,
    /// How many times the grid grew.
    pub growths: usize,
    pub elapsed: Duration,
}

/// A finished puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// One entry per word, in placement (longest-first) order.
    pub placements: Vec<Placement>,
    pub stats: GenerationStats,
}

impl Puzzle {
    /// The hidden words, in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.word.as_str())
    }

    /// The hidden word a player selected by dragging from `from` to `to`.
    ///
    /// Matching is on letters: the selection counts if the letters read from `from` to
    /// `to` spell any placed word, wherever that word was written. A palindrome selected
    /// backwards, or a second copy formed by crossings or filler, is still a find.
    #[must_use]
    pub fn word_at_selection(&self, from: (usize, usize), to: (usize, usize)) -> Option<&str> {
        let (direction, span) = Direction::between(from, to)?;
        let selected = self.grid.read_along(from.0, from.1, direction, span)?;
        self.words().find(|w| *w == selected)
    }
}

/// Generate a puzzle using the thread-local random number generator.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate<S: AsRef<str>>(words: &[S], options: PuzzleOptions) -> Result<Puzzle, GeneratorError> {
    generate_with_rng(words, options, &mut rand::thread_rng())
}

/// Generate a puzzle, drawing every random choice from `rng`.
///
/// # Errors
///
/// - [`GeneratorError::InvalidInput`] if the word list or options are rejected.
/// - [`GeneratorError::GenerationExhausted`] if no grid is found within the growth budget.
pub fn generate_with_rng<S, R>(words: &[S], options: PuzzleOptions, rng: &mut R) -> Result<Puzzle, GeneratorError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let word_list = WordList::new(words)?;
    let settings = Settings::resolve(options, &word_list)?;
    generate_from_list(&word_list, settings, rng)
}

/// Generate a puzzle from an already validated word list and resolved settings.
///
/// # Errors
///
/// Returns [`GeneratorError::GenerationExhausted`] if no grid is found within the growth budget.
pub fn generate_from_list<R: Rng + ?Sized>(
    word_list: &WordList,
    mut settings: Settings,
    rng: &mut R,
) -> Result<Puzzle, GeneratorError> {
    let started = Instant::now();
    let mut controller = GrowthController::new(
        settings.grid_height,
        settings.grid_width,
        settings.max_grid_generation_attempts,
        settings.max_grid_growth,
    );
    debug!(
        "placing {} words on {}x{} grid, orientations {:?}",
        word_list.len(),
        settings.grid_height,
        settings.grid_width,
        settings.orientations
    );

    let (mut grid, placements) = loop {
        match controller.state() {
            GrowthState::Attempting => {
                let (height, width) = controller.dimensions();
                let mut grid = Grid::new(height, width);
                let placed = placement::place_all(
                    word_list,
                    &mut grid,
                    &settings.orientations,
                    settings.optional_overlap,
                    rng,
                );
                controller.record_attempt(placed.is_some());
                if let Some(placements) = placed {
                    break (grid, placements);
                }
            }
            GrowthState::Growing => {
                controller.grow();
            }
            // a successful attempt breaks out above, so only Failed reaches here
            GrowthState::Succeeded | GrowthState::Failed => {
                let (height, width) = controller.dimensions();
                return Err(GeneratorError::GenerationExhausted {
                    height,
                    width,
                    growths: controller.growths(),
                    attempts: controller.total_attempts(),
                });
            }
        }
    };

    if settings.fill_empty_square_spaces {
        filler::fill(&mut grid, &mut settings.filler, rng);
    }

    let stats = GenerationStats {
        attempts: controller.total_attempts(),
        growths: controller.growths(),
        elapsed: started.elapsed(),
    };
    info!(
        "generated {}x{} puzzle with {} words in {} attempts ({} growths, {:.3}s)",
        grid.height(),
        grid.width(),
        placements.len(),
        stats.attempts,
        stats.growths,
        stats.elapsed.as_secs_f64()
    );

    Ok(Puzzle { grid, placements, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn assert_all_words_traceable(puzzle: &Puzzle) {
        for placement in &puzzle.placements {
            assert_eq!(
                puzzle.grid.read_along(placement.x, placement.y, placement.direction, placement.len()).as_deref(),
                Some(placement.word.as_str()),
                "{placement:?}"
            );
        }
    }

    #[test]
    fn test_generate_basic() {
        let puzzle = generate_with_rng(&["cat", "dog", "code"], PuzzleOptions::default(), &mut rng(1)).unwrap();
        assert_eq!((puzzle.grid.height(), puzzle.grid.width()), (4, 4));
        assert_eq!(puzzle.words().collect::<Vec<_>>(), vec!["CODE", "CAT", "DOG"]);
        assert!(puzzle.grid.is_full());
        assert_all_words_traceable(&puzzle);
    }

    #[test]
    fn test_single_long_word_first_attempt() {
        let word = "A".repeat(20);
        let puzzle = generate_with_rng(&[word.as_str()], PuzzleOptions::default(), &mut rng(2)).unwrap();
        assert_eq!((puzzle.grid.height(), puzzle.grid.width()), (20, 20));
        assert_eq!(puzzle.stats.attempts, 1);
        assert_eq!(puzzle.stats.growths, 0);
        assert_all_words_traceable(&puzzle);
    }

    #[test]
    fn test_empty_word_list() {
        let empty: [&str; 0] = [];
        let err = generate_with_rng(&empty, PuzzleOptions::default(), &mut rng(0)).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput(ref ie) if matches!(**ie, InputError::EmptyWordList)));
        assert_eq!(err.code(), "G001");
        assert!(err.display_detailed().contains("E001"));
    }

    #[test]
    fn test_numeric_word() {
        let err = generate_with_rng(&["42"], PuzzleOptions::default(), &mut rng(0)).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput(ref ie) if matches!(**ie, InputError::NumericEntry { .. })));
    }

    #[test]
    fn test_exhausted() {
        // a 10-letter word can never fit a grid that starts at 2x2 and may grow only 3 times
        let options = PuzzleOptions {
            grid_height: Some(2),
            max_grid_growth: Some(3),
            max_grid_generation_attempts: Some(2),
            ..Default::default()
        };
        let err = generate_with_rng(&["strawberry"], options, &mut rng(0)).unwrap_err();
        match err {
            GeneratorError::GenerationExhausted { height, width, growths, attempts } => {
                assert_eq!((height, width), (5, 5));
                assert_eq!(growths, 4);
                assert_eq!(attempts, 8);
            }
            other => panic!("expected GenerationExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let options = PuzzleOptions {
            grid_height: Some(usize::MAX / 2),
            grid_width: Some(usize::MAX / 2),
            ..Default::default()
        };
        let err = generate_with_rng(&["cat"], options, &mut rng(0)).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInput(ref ie) if matches!(**ie, InputError::GridTooLarge { .. })));
        assert!(err.display_detailed().contains("E010"));
    }

    #[test]
    fn test_exhausted_error_detail() {
        let err = GeneratorError::GenerationExhausted { height: 5, width: 5, growths: 4, attempts: 8 };
        assert_eq!(err.code(), "G002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("5x5"));
        assert!(detailed.contains("(G002)"));
        assert!(detailed.contains("--max-growth"));
    }

    #[test]
    fn test_grows_when_explicit_size_too_small() {
        let options = PuzzleOptions { grid_height: Some(3), ..Default::default() };
        let puzzle = generate_with_rng(&["keyboard"], options, &mut rng(4)).unwrap();
        assert_eq!((puzzle.grid.height(), puzzle.grid.width()), (8, 8));
        assert_eq!(puzzle.stats.growths, 5);
        assert_eq!(puzzle.stats.attempts, 5 * 20 + 1);
        assert_all_words_traceable(&puzzle);
    }

    #[test]
    fn test_no_fill_leaves_blanks() {
        let options = PuzzleOptions { fill_empty_square_spaces: Some(false), ..Default::default() };
        let puzzle = generate_with_rng(&["cat"], options, &mut rng(5)).unwrap();
        assert_eq!(puzzle.grid.empty_count(), 9 - 3);
    }

    #[test]
    fn test_custom_filler() {
        let options = PuzzleOptions {
            grid_height: Some(5),
            custom_filler: Some(crate::filler::FillerSource::custom(|| Some('#'))),
            ..Default::default()
        };
        let puzzle = generate_with_rng(&["cat"], options, &mut rng(6)).unwrap();
        let hashes = puzzle.grid.rows().iter().flat_map(|r| r.chars()).filter(|&c| c == '#').count();
        assert_eq!(hashes, 25 - 3);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let words = ["alpha", "beta", "gamma", "delta"];
        let a = generate_with_rng(&words, PuzzleOptions::default(), &mut rng(42)).unwrap();
        let b = generate_with_rng(&words, PuzzleOptions::default(), &mut rng(42)).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
    }

    #[test]
    fn test_word_at_selection() {
        let puzzle = generate_with_rng(&["cat", "dog", "code"], PuzzleOptions::default(), &mut rng(8)).unwrap();
        for placement in &puzzle.placements {
            let end = placement.end().unwrap();
            assert_eq!(puzzle.word_at_selection((placement.x, placement.y), end), Some(placement.word.as_str()));
        }
        assert_eq!(puzzle.word_at_selection((0, 0), (0, 0)), None);
    }

    fn puzzle_with_row(row: &str) -> Puzzle {
        let mut grid = Grid::new(1, row.chars().count());
        for (x, c) in row.chars().enumerate() {
            grid.set(x, 0, c);
        }
        Puzzle {
            grid,
            placements: vec![Placement { word: row.to_string(), x: 0, y: 0, direction: Direction::Horizontal }],
            stats: GenerationStats { attempts: 1, growths: 0, elapsed: Duration::ZERO },
        }
    }

    #[test]
    fn test_palindrome_selected_backwards() {
        let puzzle = puzzle_with_row("LEVEL");
        assert_eq!(puzzle.word_at_selection((0, 0), (4, 0)), Some("LEVEL"));
        assert_eq!(puzzle.word_at_selection((4, 0), (0, 0)), Some("LEVEL"));
        assert_eq!(puzzle.word_at_selection((1, 0), (3, 0)), None);
    }

    #[test]
    fn test_reversed_selection_of_plain_word() {
        let puzzle = puzzle_with_row("CODE");
        assert_eq!(puzzle.word_at_selection((0, 0), (3, 0)), Some("CODE"));
        assert_eq!(puzzle.word_at_selection((3, 0), (0, 0)), None);
        // past the edge
        assert_eq!(puzzle.word_at_selection((0, 0), (4, 0)), None);
    }
}
