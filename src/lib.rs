// Library API shared by the CLI, the helper bins and the wasm build
pub mod direction;
pub mod errors;
pub mod filler;
pub mod generator;
pub mod grid;
pub mod log;
pub mod overlap;
pub mod placement;
mod puzzle_char;
pub mod search;
pub mod settings;
pub mod sizing;
pub mod word_list;

pub use puzzle_char::{EMPTY_CELL_GLYPH, FILLER_ALPHABET};

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
