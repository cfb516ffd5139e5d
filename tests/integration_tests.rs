//! Integration tests for the word-search generator.
//!
//! These tests drive the public API end to end: word lists from files and JSON, settings
//! from JSON, generation with a seeded RNG, and checks against the finished grid.

use std::collections::HashSet;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::direction::Direction;
use wordsearch::errors::InputError;
use wordsearch::generator::{generate_from_list, generate_with_rng, GeneratorError, Puzzle};
use wordsearch::settings::{PuzzleOptions, Settings};
use wordsearch::word_list::WordList;
use wordsearch::FILLER_ALPHABET;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Cells covered by at least one placed word
fn covered_cells(puzzle: &Puzzle) -> HashSet<(usize, usize)> {
    puzzle.placements.iter().flat_map(|p| p.cells()).collect()
}

/// Every placement reads back its word, in bounds, along its direction
fn assert_traceable(puzzle: &Puzzle) {
    for p in &puzzle.placements {
        assert_eq!(
            puzzle.grid.read_along(p.x, p.y, p.direction, p.len()).as_deref(),
            Some(p.word.as_str()),
            "{p:?}\n{}",
            puzzle.grid
        );
    }
}

/// Every cell not covered by a word holds a letter from the default filler alphabet
fn assert_filled_from_alphabet(puzzle: &Puzzle) {
    let covered = covered_cells(puzzle);
    for y in 0..puzzle.grid.height() {
        for x in 0..puzzle.grid.width() {
            if covered.contains(&(x, y)) {
                continue;
            }
            let c = puzzle.grid.get(x, y).unwrap_or_else(|| panic!("({x}, {y}) left empty"));
            assert!(FILLER_ALPHABET.contains(c), "({x}, {y}) holds {c:?}");
        }
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_cat_dog_code_on_fixed_4x4() {
        let options = PuzzleOptions {
            grid_height: Some(4),
            grid_width: Some(4),
            orientations: Some(vec![Direction::Horizontal, Direction::Vertical]),
            optional_overlap: Some(false),
            max_grid_growth: Some(0),
            ..Default::default()
        };
        let puzzle = generate_with_rng(&["CAT", "DOG", "CODE"], options, &mut rng(7)).unwrap();

        assert_eq!((puzzle.grid.height(), puzzle.grid.width()), (4, 4));
        assert_eq!(puzzle.stats.growths, 0);
        assert_eq!(puzzle.placements.len(), 3);
        for p in &puzzle.placements {
            assert!(matches!(p.direction, Direction::Horizontal | Direction::Vertical));
        }
        assert_traceable(&puzzle);
        assert!(puzzle.grid.is_full());
        assert_filled_from_alphabet(&puzzle);
    }

    #[test]
    fn test_twenty_letter_word_default_sizing() {
        let word = "A".repeat(20);
        let puzzle = generate_with_rng(&[word], PuzzleOptions::default(), &mut rng(3)).unwrap();
        assert_eq!((puzzle.grid.height(), puzzle.grid.width()), (20, 20));
        assert_eq!(puzzle.stats.attempts, 1);
        assert_traceable(&puzzle);
    }

    #[test]
    fn test_empty_word_list_is_invalid_input() {
        let empty: Vec<String> = Vec::new();
        let err = generate_with_rng(&empty, PuzzleOptions::default(), &mut rng(0)).unwrap_err();
        assert_eq!(err.code(), "G001");
        assert!(matches!(err, GeneratorError::InvalidInput(ref ie) if matches!(**ie, InputError::EmptyWordList)));
    }

    #[test]
    fn test_numeric_json_entry_is_invalid_input() {
        let err = GeneratorError::from(WordList::parse_json("[42]").unwrap_err());
        assert_eq!(err.code(), "G001");
        assert!(matches!(err, GeneratorError::InvalidInput(ref ie) if matches!(**ie, InputError::NumericEntry { .. })));
        assert!(err.display_detailed().contains("(E003)"));
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    const WORDS: &[&str] = &["puzzle", "grid", "letter", "search", "hidden", "word", "cross", "find"];

    #[test]
    fn test_words_traceable_across_seeds() {
        for seed in 0..25 {
            let puzzle = generate_with_rng(WORDS, PuzzleOptions::default(), &mut rng(seed)).unwrap();
            assert_eq!(puzzle.placements.len(), WORDS.len());
            assert_traceable(&puzzle);
            assert_filled_from_alphabet(&puzzle);
        }
    }

    #[test]
    fn test_dimensions_at_least_longest_and_count() {
        for seed in 0..10 {
            let puzzle = generate_with_rng(WORDS, PuzzleOptions::default(), &mut rng(seed)).unwrap();
            // longest word is 6 letters, 8 words
            assert!(puzzle.grid.height() >= 8);
            assert!(puzzle.grid.width() >= 8);
        }
    }

    #[test]
    fn test_restricted_orientations_respected() {
        for seed in 0..10 {
            let options = PuzzleOptions {
                orientations: Some(vec![Direction::DiagonalUp, Direction::HorizontalBack]),
                ..Default::default()
            };
            let puzzle = generate_with_rng(WORDS, options, &mut rng(seed)).unwrap();
            for p in &puzzle.placements {
                assert!(matches!(p.direction, Direction::DiagonalUp | Direction::HorizontalBack), "{p:?}");
            }
            assert_traceable(&puzzle);
        }
    }

    #[test]
    fn test_find_word_locates_every_word() {
        let puzzle = generate_with_rng(WORDS, PuzzleOptions::default(), &mut rng(99)).unwrap();
        for word in puzzle.words() {
            assert!(puzzle.grid.find_word(word).is_some(), "{word} not found in\n{}", puzzle.grid);
        }
    }

    #[test]
    fn test_selection_matches_placements() {
        let puzzle = generate_with_rng(WORDS, PuzzleOptions::default(), &mut rng(5)).unwrap();
        for p in &puzzle.placements {
            let end = p.end().unwrap();
            assert_eq!(puzzle.word_at_selection((p.x, p.y), end), Some(p.word.as_str()));
        }
    }

    #[test]
    fn test_no_fill_blanks_exactly_uncovered() {
        let options = PuzzleOptions { fill_empty_square_spaces: Some(false), ..Default::default() };
        let puzzle = generate_with_rng(WORDS, options, &mut rng(12)).unwrap();
        let total = puzzle.grid.height() * puzzle.grid.width();
        assert_eq!(puzzle.grid.empty_count(), total - covered_cells(&puzzle).len());
    }
}

#[cfg(test)]
mod fixtures {
    use super::*;

    #[test]
    fn test_text_word_list() {
        let list = WordList::load_from_path(fixture("animals.txt")).unwrap();
        assert_eq!(list.len(), 12);
        assert_eq!(list.longest_len(), 8);
        assert!(list.iter().all(|w| w.chars().all(|c| c.is_ascii_uppercase())));

        let settings = Settings::resolve(PuzzleOptions::default(), &list).unwrap();
        let puzzle = generate_from_list(&list, settings, &mut rng(21)).unwrap();
        assert_eq!(puzzle.placements.len(), 12);
        assert_traceable(&puzzle);
    }

    #[test]
    fn test_json_word_list() {
        let list = WordList::load_from_path(fixture("fruits.json")).unwrap();
        assert_eq!(list.len(), 10);
        assert_eq!(list.words[0], "ELDERBERRY");
        let settings = Settings::resolve(PuzzleOptions::default(), &list).unwrap();
        let puzzle = generate_from_list(&list, settings, &mut rng(4)).unwrap();
        assert_traceable(&puzzle);
    }

    #[test]
    fn test_json_word_list_with_object_rejected() {
        let err = WordList::load_from_path(fixture("bad_entries.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("#1"));
    }

    #[test]
    fn test_settings_file_with_overrides() {
        let json = std::fs::read_to_string(fixture("settings.json")).unwrap();
        let from_file = PuzzleOptions::from_json(&json).unwrap();
        let flags = PuzzleOptions { grid_width: Some(14), ..Default::default() };
        let list = WordList::load_from_path(fixture("animals.txt")).unwrap();

        let settings = Settings::resolve(from_file.merged_with(flags), &list).unwrap();
        assert_eq!(settings.grid_height, 12);
        assert_eq!(settings.grid_width, 14);
        assert_eq!(settings.orientations, vec![Direction::Horizontal, Direction::Vertical, Direction::Diagonal]);
        assert!(!settings.optional_overlap);
        assert_eq!(settings.max_grid_growth, 5);

        let puzzle = generate_from_list(&list, settings, &mut rng(8)).unwrap();
        assert!(puzzle.grid.height() >= 12);
        assert_eq!(puzzle.grid.width() - puzzle.grid.height(), 2);
        assert_traceable(&puzzle);
    }

    #[test]
    fn test_missing_fixture_reports_path() {
        let err = WordList::load_from_path(fixture("no_such_list.txt")).unwrap_err();
        assert!(err.to_string().contains("no_such_list.txt"));
    }
}
