// Character-set constants
/// Letters drawn by the default filler. Q, X and Z are left out so that
/// filler cells rarely form awkward false leads.
pub const FILLER_ALPHABET: &str = "ABCDEFGHIJKLMNOPRSTUVWY";

/// Rendered in place of an empty cell.
pub const EMPTY_CELL_GLYPH: char = '.';

pub(crate) trait PuzzleChar {
    fn is_word_letter(&self) -> bool;
}

impl PuzzleChar for char {
    fn is_word_letter(&self) -> bool {
        self.is_alphabetic()
    }
}

/// Uppercase a single letter, keeping it a single `char`.
///
/// Letters whose uppercase form expands to several characters (e.g. `ß`)
/// are returned unchanged so a cell always holds exactly one character.
pub(crate) fn to_cell_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
