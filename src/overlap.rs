use crate::direction::Direction;
use crate::grid::Grid;

/// Count how many letters of `word`, written from `(x, y)` in `direction`, land on
/// cells that already hold the same letter.
///
/// Returns `None` (a conflict) as soon as one target cell holds a different letter,
/// or if the span leaves the grid. Empty cells are free and score nothing.
/// The grid is never modified.
#[must_use]
pub fn evaluate(word: &[char], grid: &Grid, x: usize, y: usize, direction: Direction) -> Option<usize> {
    let mut overlap = 0;
    for (i, &letter) in word.iter().enumerate() {
        let (cx, cy) = direction.step(x, y, i)?;
        if cx >= grid.width() || cy >= grid.height() {
            return None;
        }
        match grid.get(cx, cy) {
            None => {}
            Some(existing) if existing == letter => overlap += 1,
            Some(_) => return None,
        }
    }
    Some(overlap)
}
