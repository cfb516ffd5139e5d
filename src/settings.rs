//! Puzzle settings: what a settings provider may ask for, and the resolved values a
//! generation run actually uses.

use serde::Deserialize;

use crate::direction::Direction;
use crate::errors::InputError;
use crate::filler::FillerSource;
use crate::sizing;
use crate::word_list::WordList;

pub const DEFAULT_MAX_GRID_GROWTH: usize = 20;
pub const DEFAULT_MAX_GRID_GENERATION_ATTEMPTS: usize = 20;

/// Preferences from a settings provider. Every field is optional; anything left out
/// falls back to a default when the options are resolved into [`Settings`].
///
/// Field names follow the camelCase JSON a browser front end sends, e.g.
/// `{"gridHeight": 12, "orientations": ["horizontal", "vertical"], "optionalOverlap": false}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PuzzleOptions {
    pub grid_height: Option<usize>,
    pub grid_width: Option<usize>,
    #[serde(alias = "orientation")]
    pub orientations: Option<Vec<Direction>>,
    pub max_grid_growth: Option<usize>,
    pub max_grid_generation_attempts: Option<usize>,
    pub fill_empty_square_spaces: Option<bool>,
    pub optional_overlap: Option<bool>,
    /// Explicit filler letters, see [`FillerSource::Letters`].
    pub fill_letters: Option<String>,
    /// Custom filler; takes precedence over `fill_letters`. Not settable from JSON.
    #[serde(skip)]
    pub custom_filler: Option<FillerSource>,
}

impl PuzzleOptions {
    /// Parse options from the JSON a settings provider sends.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] for malformed JSON, unknown fields or unknown
    /// orientation names.
    pub fn from_json(json: &str) -> Result<Self, Box<InputError>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay `other` on top of `self`: every field `other` sets wins.
    #[must_use]
    pub fn merged_with(self, other: PuzzleOptions) -> PuzzleOptions {
        PuzzleOptions {
            grid_height: other.grid_height.or(self.grid_height),
            grid_width: other.grid_width.or(self.grid_width),
            orientations: other.orientations.or(self.orientations),
            max_grid_growth: other.max_grid_growth.or(self.max_grid_growth),
            max_grid_generation_attempts: other.max_grid_generation_attempts.or(self.max_grid_generation_attempts),
            fill_empty_square_spaces: other.fill_empty_square_spaces.or(self.fill_empty_square_spaces),
            optional_overlap: other.optional_overlap.or(self.optional_overlap),
            fill_letters: other.fill_letters.or(self.fill_letters),
            custom_filler: other.custom_filler.or(self.custom_filler),
        }
    }
}

/// Resolved configuration for one generation run.
#[derive(Debug)]
pub struct Settings {
    pub grid_height: usize,
    pub grid_width: usize,
    pub orientations: Vec<Direction>,
    pub max_grid_growth: usize,
    pub max_grid_generation_attempts: usize,
    pub fill_empty_square_spaces: bool,
    pub optional_overlap: bool,
    pub filler: FillerSource,
}

impl Settings {
    /// Resolve `options` against the word list: fill in defaults, derive the initial grid
    /// size, and validate.
    ///
    /// # Errors
    ///
    /// - [`InputError::NoOrientations`] if an explicit orientation list is empty.
    /// - [`InputError::InvalidSetting`] for a zero grid dimension or attempt budget.
    /// - [`InputError::GridTooLarge`] if the starting grid exceeds
    ///   [`MAX_GRID_CELLS`](sizing::MAX_GRID_CELLS).
    pub fn resolve(options: PuzzleOptions, words: &WordList) -> Result<Settings, Box<InputError>> {
        let (grid_height, grid_width) = sizing::initial_dimensions(
            words.longest_len(),
            words.len(),
            options.grid_height,
            options.grid_width,
        );
        for (name, value) in [("gridHeight", grid_height), ("gridWidth", grid_width)] {
            if value == 0 {
                return Err(Box::new(InputError::InvalidSetting { name, value }));
            }
        }
        if sizing::checked_cell_count(grid_height, grid_width).is_none() {
            return Err(Box::new(InputError::GridTooLarge { height: grid_height, width: grid_width }));
        }

        let orientations = match options.orientations {
            Some(list) if list.is_empty() => return Err(Box::new(InputError::NoOrientations)),
            Some(mut list) => {
                // keep the first occurrence of each direction
                let mut seen = Vec::with_capacity(list.len());
                list.retain(|d| {
                    let fresh = !seen.contains(d);
                    seen.push(*d);
                    fresh
                });
                list
            }
            None => Direction::ALL.to_vec(),
        };

        let max_grid_generation_attempts = options
            .max_grid_generation_attempts
            .unwrap_or(DEFAULT_MAX_GRID_GENERATION_ATTEMPTS);
        if max_grid_generation_attempts == 0 {
            return Err(Box::new(InputError::InvalidSetting {
                name: "maxGridGenerationAttempts",
                value: 0,
            }));
        }

        let filler = match (options.custom_filler, options.fill_letters) {
            (Some(custom), _) => custom,
            (None, Some(letters)) => FillerSource::Letters(letters),
            (None, None) => FillerSource::Alphabet,
        };

        Ok(Settings {
            grid_height,
            grid_width,
            orientations,
            max_grid_growth: options.max_grid_growth.unwrap_or(DEFAULT_MAX_GRID_GROWTH),
            max_grid_generation_attempts,
            fill_empty_square_spaces: options.fill_empty_square_spaces.unwrap_or(true),
            optional_overlap: options.optional_overlap.unwrap_or(true),
            filler,
        })
    }
}
