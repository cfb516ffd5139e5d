//! Error types for validating the word list and puzzle settings, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E010) for documentation lookup:
//!
//! - E001: `EmptyWordList` (No words supplied)
//! - E002: `EmptyWord` (Blank entry in the word list)
//! - E003: `NumericEntry` (Entry is a number, not a word)
//! - E004: `NonTextEntry` (Entry is an object, array, boolean or null)
//! - E005: `InvalidCharacter` (Word contains a non-letter)
//! - E006: `UnknownDirection` (Unrecognized orientation name)
//! - E007: `NoOrientations` (Orientation list is empty)
//! - E008: `InvalidSetting` (Numeric setting out of range)
//! - E009: `Json` (Malformed JSON input)
//! - E010: `GridTooLarge` (Grid exceeds the cell limit)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::InputError;
//!
//! fn check(words: &[&str]) -> Result<(), Box<InputError>> {
//!     if words.is_empty() {
//!         return Err(Box::new(InputError::EmptyWordList));
//!     }
//!     Ok(())
//! }
//!
//! match check(&[]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

use crate::sizing::MAX_GRID_CELLS;

/// Custom error type for rejected puzzle input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Word list is empty")]
    EmptyWordList,

    #[error("Word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("Word list entry \"{entry}\" is a number, not a word")]
    NumericEntry { entry: String },

    #[error("Word list entry #{index} is {kind}, not text")]
    NonTextEntry { index: usize, kind: &'static str },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}'")]
    InvalidCharacter { word: String, invalid_char: char },

    #[error("Unknown orientation \"{name}\"")]
    UnknownDirection { name: String },

    #[error("No orientations enabled")]
    NoOrientations,

    #[error("Invalid setting {name}={value} (must be at least 1)")]
    InvalidSetting { name: &'static str, value: usize },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid {height}x{width} is too large (at most {max} cells)", max = MAX_GRID_CELLS)]
    GridTooLarge { height: usize, width: usize },
}

impl From<InputError> for io::Error {
    fn from(ie: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ie.to_string())
    }
}

impl From<serde_json::Error> for Box<InputError> {
    fn from(e: serde_json::Error) -> Self {
        Box::new(InputError::Json(e))
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "E001",
            InputError::EmptyWord { .. } => "E002",
            InputError::NumericEntry { .. } => "E003",
            InputError::NonTextEntry { .. } => "E004",
            InputError::InvalidCharacter { .. } => "E005",
            InputError::UnknownDirection { .. } => "E006",
            InputError::NoOrientations => "E007",
            InputError::InvalidSetting { .. } => "E008",
            InputError::Json(_) => "E009",
            InputError::GridTooLarge { .. } => "E010",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "No words supplied",
            InputError::EmptyWord { .. } => "Blank entry in the word list",
            InputError::NumericEntry { .. } => "Entry is a number, not a word",
            InputError::NonTextEntry { .. } => "Entry is an object, array, boolean or null",
            InputError::InvalidCharacter { .. } => "Word contains a non-letter",
            InputError::UnknownDirection { .. } => "Unrecognized orientation name",
            InputError::NoOrientations => "Orientation list is empty",
            InputError::InvalidSetting { .. } => "Numeric setting out of range",
            InputError::Json(_) => "Malformed JSON input",
            InputError::GridTooLarge { .. } => "Grid exceeds the cell limit",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyWordList => "A puzzle needs at least one word. The list was empty, or every line of the word-list file was blank or a comment.",
            InputError::EmptyWord { .. } => "One of the entries is empty or only whitespace after trimming. Every word must contain at least one letter.",
            InputError::NumericEntry { .. } => "The word list contains a number. Word lists must contain only words; numbers cannot be hidden in a letter grid.",
            InputError::NonTextEntry { .. } => "A JSON word list must be an array of strings. Nested objects, arrays, booleans and nulls are rejected before any grid is built.",
            InputError::InvalidCharacter { .. } => "Words may only contain letters. Spaces, digits, hyphens and punctuation cannot be placed in a grid cell.",
            InputError::UnknownDirection { .. } => "Orientation names are: horizontal, horizontalBack, vertical, verticalUp, diagonal, diagonalBack, diagonalUp, diagonalUpBack.",
            InputError::NoOrientations => "An explicit orientation list was supplied but it was empty, so no word could ever be placed.",
            InputError::InvalidSetting { .. } => "Grid dimensions and the per-size attempt budget must be positive.",
            InputError::Json(_) => "The settings or word-list JSON could not be parsed.",
            InputError::GridTooLarge { .. } => "The starting grid, from explicit dimensions or from the longest word and word count, has more cells than the generator will allocate.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyWordList => Some("Example: wordsearch CAT DOG CODE"),
            InputError::EmptyWord { .. } => Some("Remove blank entries from the word list"),
            InputError::NumericEntry { .. } => Some("Spell numbers out as words (e.g. 'FORTYTWO' instead of '42')"),
            InputError::NonTextEntry { .. } => Some("Use a flat JSON array of strings, e.g. [\"CAT\", \"DOG\"]"),
            InputError::InvalidCharacter { .. } => Some("Remove spaces and punctuation (e.g. 'ICECREAM' instead of 'ICE CREAM')"),
            InputError::UnknownDirection { .. } => Some("Example: --orientations horizontal,vertical,diagonal"),
            InputError::NoOrientations => Some("Enable at least one orientation, or omit the list to use all eight"),
            InputError::InvalidSetting { .. } => Some("Use a value of 1 or more, or leave the setting out to use the default"),
            InputError::Json(_) => None,
            InputError::GridTooLarge { .. } => Some("Use smaller --height/--width values, or split very long word lists into several puzzles"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<String>>("[\"CAT\",").unwrap_err()
    }

    fn all_variants() -> Vec<InputError> {
        vec![
            InputError::EmptyWordList,
            InputError::EmptyWord { index: 2 },
            InputError::NumericEntry { entry: "42".to_string() },
            InputError::NonTextEntry { index: 0, kind: "an object" },
            InputError::InvalidCharacter { word: "ICE CREAM".to_string(), invalid_char: ' ' },
            InputError::UnknownDirection { name: "sideways".to_string() },
            InputError::NoOrientations,
            InputError::InvalidSetting { name: "gridHeight", value: 0 },
            InputError::Json(json_error()),
            InputError::GridTooLarge { height: 5000, width: 5000 },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = InputError::EmptyWordList;
        assert_eq!(err.code(), "E001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E001"));
        assert!(detailed.contains("Example"));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('E'), "Error code '{}' should start with 'E'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_numeric_entry_message_includes_value() {
        let err = InputError::NumericEntry { entry: "42".to_string() };
        let detailed = err.display_detailed();
        assert!(detailed.contains("42"));
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("FORTYTWO"));
    }

    #[test]
    fn test_json_error_has_no_help() {
        let err = InputError::Json(json_error());
        assert!(err.help().is_none());
        assert!(err.display_detailed().ends_with("(E009)"));
    }

    #[test]
    fn test_grid_too_large_names_limit() {
        let err = InputError::GridTooLarge { height: 5000, width: 5000 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("5000x5000"));
        assert!(detailed.contains(&MAX_GRID_CELLS.to_string()));
        assert!(detailed.contains("(E010)"));
    }
}
