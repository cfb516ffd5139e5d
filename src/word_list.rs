//! Validating and normalizing the words a puzzle hides.
//!
//! A word list can come from Rust directly ([`WordList::new`]), from a text file with one
//! word per line ([`WordList::parse_from_str`], [`WordList::load_from_path`]), or from a JSON
//! array such as a browser front end sends ([`WordList::parse_json`],
//! [`WordList::from_json_values`]). Every path ends in the same checks:
//!
//! - The list must not be empty.
//! - Each entry must be text: JSON numbers, objects, arrays, booleans and nulls are
//!   rejected, and so is text that reads as a number (`"42"`).
//! - Each word is trimmed, must be non-empty, and may only contain letters.
//! - Words are uppercased; repeated words are dropped so each appears once.
//! - The list is sorted by descending length (stable, so equal-length words keep their
//!   input order). Long words have the fewest valid positions and are placed first.
//!
//! All of this happens before any grid is allocated.

use log::warn;
use serde_json::Value;

use crate::errors::InputError;
use crate::puzzle_char::{to_cell_letter, PuzzleChar};

/// A validated word list, longest word first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    /// Uppercase words, sorted by descending length.
    /// Example: `["CODE", "CAT", "DOG"]`
    pub words: Vec<String>,
}

impl WordList {
    /// Validate and normalize a list of words.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for an empty list, a blank entry, a numeric entry or a
    /// word containing a non-letter.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Result<WordList, Box<InputError>> {
        if entries.is_empty() {
            return Err(Box::new(InputError::EmptyWordList));
        }

        let mut words: Vec<String> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let word = normalize(entry.as_ref(), index)?;
            if words.contains(&word) {
                warn!("dropping repeated word {word}");
            } else {
                words.push(word);
            }
        }

        // stable: equal lengths keep input order
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

        Ok(WordList { words })
    }

    /// Validate an untyped list, e.g. one decoded from JSON.
    ///
    /// # Errors
    ///
    /// As [`WordList::new`], plus [`InputError::NumericEntry`] for numbers and
    /// [`InputError::NonTextEntry`] for objects, arrays, booleans and nulls.
    pub fn from_json_values(values: &[Value]) -> Result<WordList, Box<InputError>> {
        let entries = values
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::String(s) => Ok(s.as_str()),
                Value::Number(n) => Err(Box::new(InputError::NumericEntry { entry: n.to_string() })),
                other => Err(Box::new(InputError::NonTextEntry { index, kind: json_kind(other) })),
            })
            .collect::<Result<Vec<&str>, _>>()?;
        WordList::new(&entries)
    }

    /// Parse a JSON array of words.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Json`] if `json` is not a JSON array, otherwise as
    /// [`WordList::from_json_values`].
    pub fn parse_json(json: &str) -> Result<WordList, Box<InputError>> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        WordList::from_json_values(&values)
    }

    /// Parse a word list with one word per line. Blank lines and lines starting with `#`
    /// are skipped.
    ///
    /// # Errors
    ///
    /// As [`WordList::new`]; a file with no words gives [`InputError::EmptyWordList`].
    pub fn parse_from_str(contents: &str) -> Result<WordList, Box<InputError>> {
        let entries: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        WordList::new(&entries)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// Files ending in `.json` are parsed as a JSON array, anything else as one word per line.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path` or if its contents are not
    /// a valid word list.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        let is_json = path_ref.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json { Self::parse_json(&data) } else { Self::parse_from_str(&data) };
        parsed.map_err(|e| std::io::Error::from(*e))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in letters of the longest word.
    #[must_use]
    pub fn longest_len(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

fn normalize(raw: &str, index: usize) -> Result<String, Box<InputError>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Box::new(InputError::EmptyWord { index }));
    }
    // "inf" and "nan" parse as floats but are fine words
    if trimmed.chars().any(|c| c.is_ascii_digit()) && trimmed.parse::<f64>().is_ok() {
        return Err(Box::new(InputError::NumericEntry { entry: trimmed.to_string() }));
    }
    if let Some(invalid_char) = trimmed.chars().find(|c| !c.is_word_letter()) {
        return Err(Box::new(InputError::InvalidCharacter { word: trimmed.to_string(), invalid_char }));
    }
    Ok(trimmed.chars().map(to_cell_letter).collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
