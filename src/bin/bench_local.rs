//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of generation workloads on *your* machine.
//! - Each case is run several times from a fixed seed and the median is reported.
//! - Cases cover large grids, long word lists, and restricted orientations.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the grid from each case:  `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Cases live in `get_cases()` below.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::direction::Direction;
use wordsearch::generator::{self, Puzzle};
use wordsearch::settings::PuzzleOptions;

/// Simple local benchmark runner for puzzle generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Base seed; repeat `i` uses `seed + i`
    #[arg(short, long, default_value_t = 2024)]
    seed: u64,

    /// Print the grid produced by the last run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// A benchmark case: a name, the words, and the options to generate with.
struct Case {
    name: &'static str,
    words: Vec<String>,
    options: fn() -> PuzzleOptions,
}

const ANIMALS: &[&str] = &[
    "aardvark", "albatross", "alligator", "antelope", "armadillo", "badger", "barracuda", "beaver",
    "bison", "buffalo", "camel", "caribou", "cheetah", "chimpanzee", "chinchilla", "cobra",
    "cougar", "coyote", "crocodile", "dolphin", "donkey", "elephant", "falcon", "ferret",
    "flamingo", "gazelle", "gecko", "giraffe", "gorilla", "hamster", "hedgehog", "hippopotamus",
    "hyena", "iguana", "jackal", "jaguar", "kangaroo", "koala", "leopard", "lobster",
];

/// Edit/add cases here.
fn get_cases() -> Vec<Case> {
    let animals: Vec<String> = ANIMALS.iter().map(|w| (*w).to_string()).collect();
    vec![
        Case { name: "40 animals, all orientations", words: animals.clone(), options: PuzzleOptions::default },
        Case {
            name: "40 animals, loose overlap",
            words: animals.clone(),
            options: || PuzzleOptions { optional_overlap: Some(false), ..Default::default() },
        },
        Case {
            name: "40 animals, horizontal + vertical",
            words: animals,
            options: || PuzzleOptions {
                orientations: Some(vec![Direction::Horizontal, Direction::Vertical]),
                ..Default::default()
            },
        },
        Case {
            name: "120 x 4-letter words on 60x60",
            words: (0..120).map(four_letter_word).collect(),
            options: || PuzzleOptions { grid_height: Some(60), ..Default::default() },
        },
        Case {
            name: "one 100-letter word",
            words: vec!["AB".repeat(50)],
            options: PuzzleOptions::default,
        },
    ]
}

/// Deterministic pronounceable-ish words: "BABA", "CABO", ... Distinct for the first
/// 16 * 5 * 16 = 1280 values of `i`.
fn four_letter_word(i: usize) -> String {
    const CONSONANTS: &[u8] = b"BCDFGHKLMNPRSTVW";
    const VOWELS: &[u8] = b"AEIOU";
    let c1 = CONSONANTS[i % CONSONANTS.len()];
    let v1 = VOWELS[(i / CONSONANTS.len()) % VOWELS.len()];
    let c2 = CONSONANTS[(i / (CONSONANTS.len() * VOWELS.len())) % CONSONANTS.len()];
    let v2 = VOWELS[(i * 3) % VOWELS.len()];
    [c1, v1, c2, v2].iter().map(|&b| char::from(b)).collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 36;

fn main() {
    /// One row in the benchmark summary: (case name, median seconds, grid side, attempts).
    type SummaryRow = (&'static str, f64, String, usize);

    let cli = Cli::parse();
    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({} words)", idx + 1, case.name, case.words.len());

        // One warm-up execution per case; its timing is ignored.
        if let Err(e) = generator::generate_with_rng(&case.words, (case.options)(), &mut StdRng::seed_from_u64(cli.seed)) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last: Option<Puzzle> = None;

        for rep in 0..cli.num_repeats {
            let mut rng = StdRng::seed_from_u64(cli.seed + rep as u64);
            let options = (case.options)();

            // Keep only the *core* operation inside the timed region.
            let t_generate = Instant::now();
            let result = generator::generate_with_rng(black_box(&case.words), options, &mut rng);
            let secs = t_generate.elapsed().as_secs_f64();

            let puzzle = match result {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e);
                    continue;
                }
            };
            times.push(secs);

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({}x{}, {} {}, {} {})",
                rep + 1,
                cli.num_repeats,
                secs,
                puzzle.grid.height(),
                puzzle.grid.width(),
                puzzle.stats.attempts,
                pluralizer(puzzle.stats.attempts, "attempt".into(), None),
                puzzle.stats.growths,
                pluralizer(puzzle.stats.growths, "growth".into(), None),
            );
            last = Some(puzzle);
        }

        let med = median(times);
        let Some(puzzle) = last else { continue };

        if cli.print_grid {
            println!("{}\n", puzzle.grid);
        }

        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((
            case.name,
            med,
            format!("{}x{}", puzzle.grid.height(), puzzle.grid.width()),
            puzzle.stats.attempts,
        ));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9} | {:>8}", "case", "median (s)", "grid", "attempts");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}-+-{:-<8}", "", "", "", "");
    for (name, med, grid, attempts) in &summary {
        eprintln!("{name:<MAX_NAME_LEN$} | {med:>10.3} | {grid:>9} | {attempts:>8}");
    }
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
