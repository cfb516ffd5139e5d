use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use wordsearch::direction;
use wordsearch::generator::{self, GeneratorError, Puzzle};
use wordsearch::placement::Placement;
use wordsearch::settings::{PuzzleOptions, Settings};
use wordsearch::word_list::WordList;

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Words to hide (e.g., "cat dog code")
    words: Vec<String>,

    /// Read words from a file instead (one per line, or a JSON array if the name ends in .json)
    #[arg(short, long, conflicts_with = "words")]
    word_list: Option<String>,

    /// JSON settings file (e.g., {"gridHeight": 12, "optionalOverlap": false}); flags override it
    #[arg(short, long)]
    settings: Option<String>,

    /// Grid height; the grid is square unless --width is also given
    #[arg(long)]
    height: Option<usize>,

    /// Grid width; the grid is square unless --height is also given
    #[arg(long)]
    width: Option<usize>,

    /// Comma-separated orientations (e.g., "horizontal,vertical,diagonal"); default all eight
    #[arg(short, long)]
    orientations: Option<String>,

    /// Accept any non-conflicting position instead of preferring overlaps
    #[arg(long)]
    loose: bool,

    /// Leave unused cells empty
    #[arg(long)]
    no_fill: bool,

    /// Fill unused cells from these letters (taken from the end) instead of at random
    #[arg(long, conflicts_with = "no_fill")]
    fill_letters: Option<String>,

    /// How many times the grid may grow by one row and column
    #[arg(long)]
    max_growth: Option<usize>,

    /// Placement attempts per grid size before growing
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzle as JSON for a renderer
    #[arg(long)]
    json: bool,

    /// Also print where each word was placed
    #[arg(long)]
    solution: bool,
}

/// What a renderer needs: the grid rows and the word list, plus the answer key.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleReport<'a> {
    height: usize,
    width: usize,
    rows: Vec<String>,
    words: Vec<&'a str>,
    placements: &'a [Placement],
    attempts: usize,
    growths: usize,
}

impl<'a> From<&'a Puzzle> for PuzzleReport<'a> {
    fn from(puzzle: &'a Puzzle) -> Self {
        PuzzleReport {
            height: puzzle.grid.height(),
            width: puzzle.grid.width(),
            rows: puzzle.grid.rows(),
            words: puzzle.words().collect(),
            placements: &puzzle.placements,
            attempts: puzzle.stats.attempts,
            growths: puzzle.stats.growths,
        }
    }
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    wordsearch::log::init_logger(wordsearch::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(gen_err) = e.downcast_ref::<GeneratorError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the word-search CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list and settings, CLI flags taking precedence.
/// 3. Generate the puzzle.
/// 4. Print the grid (or JSON) on stdout.
/// 5. Print timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Word list
    let word_list = match &cli.word_list {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::new(&cli.words).map_err(GeneratorError::from)?,
    };

    // 2. Settings: file first, then flags
    let file_options = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read settings from '{path}': {e}"))?;
            PuzzleOptions::from_json(&json).map_err(GeneratorError::from)?
        }
        None => PuzzleOptions::default(),
    };
    let orientations = cli
        .orientations
        .as_deref()
        .map(direction::parse_direction_list)
        .transpose()
        .map_err(GeneratorError::from)?;
    let flag_options = PuzzleOptions {
        grid_height: cli.height,
        grid_width: cli.width,
        orientations,
        max_grid_growth: cli.max_growth,
        max_grid_generation_attempts: cli.max_attempts,
        fill_empty_square_spaces: cli.no_fill.then_some(false),
        optional_overlap: cli.loose.then_some(false),
        fill_letters: cli.fill_letters.clone(),
        custom_filler: None,
    };
    let settings = Settings::resolve(file_options.merged_with(flag_options), &word_list)
        .map_err(GeneratorError::from)?;

    // 3. Generate
    let t_generate = Instant::now();
    let puzzle = match cli.seed {
        Some(seed) => generator::generate_from_list(&word_list, settings, &mut StdRng::seed_from_u64(seed))?,
        None => generator::generate_from_list(&word_list, settings, &mut rand::thread_rng())?,
    };
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 4. Output
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&PuzzleReport::from(&puzzle))?);
    } else {
        println!("{}", puzzle.grid);
        println!();
        let mut words: Vec<&str> = puzzle.words().collect();
        words.sort_unstable();
        println!("{}", words.join(" • "));
        if cli.solution {
            println!();
            for p in &puzzle.placements {
                println!("{:<20} ({}, {}) {}", p.word, p.x, p.y, p.direction);
            }
        }
    }

    // 5. Diagnostics
    eprintln!(
        "Placed {} words on a {}x{} grid in {:.3}s ({} attempts, {} growths).",
        puzzle.placements.len(),
        puzzle.grid.height(),
        puzzle.grid.width(),
        generate_secs,
        puzzle.stats.attempts,
        puzzle.stats.growths
    );

    Ok(())
}
