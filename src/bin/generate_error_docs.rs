//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `InputError` and `GeneratorError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use wordsearch::errors::InputError;
use wordsearch::generator::GeneratorError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**");
                let _ = writeln!($out, "```");
                let _ = writeln!($out, "{}", help_text);
                let _ = writeln!($out, "```\n");
            }

            let _ = writeln!($out, "**Example error message:**");
            let _ = writeln!($out, "```");
            let _ = writeln!($out, "{}", error);
            let _ = writeln!($out, "```\n");

            let _ = writeln!($out, "**Detailed format:**");
            let _ = writeln!($out, "```");
            let _ = writeln!($out, "{}", error.display_detailed());
            let _ = writeln!($out, "```\n");

            let _ = writeln!($out, "---\n");
        }
    };
}

/// One of each `InputError` variant, with representative field values
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::EmptyWordList,
        InputError::EmptyWord { index: 3 },
        InputError::NumericEntry { entry: "42".to_string() },
        InputError::NonTextEntry { index: 2, kind: "an object" },
        InputError::InvalidCharacter { word: "ICE CREAM".to_string(), invalid_char: ' ' },
        InputError::UnknownDirection { name: "sideways".to_string() },
        InputError::NoOrientations,
        InputError::InvalidSetting { name: "gridHeight", value: 0 },
        // Json--create by parsing truncated input
        InputError::Json(serde_json::from_str::<Vec<String>>("[\"CAT\",").unwrap_err()),
        InputError::GridTooLarge { height: 5000, width: 5000 },
    ]
}

/// One of each `GeneratorError` variant
fn all_generator_error_variants() -> Vec<GeneratorError> {
    vec![
        GeneratorError::InvalidInput(Box::new(InputError::EmptyWordList)),
        GeneratorError::GenerationExhausted { height: 25, width: 25, growths: 21, attempts: 420 },
    ]
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Generator Errors (G001–G002)](#generator-errors)");
    let _ = writeln!(out, "- [Input Errors (E001–E010)](#input-errors)");
    let _ = writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(out, "## Generator Errors\n");
    let _ = writeln!(out, "Top-level errors from puzzle generation. These wrap input errors or report that no grid could be found.\n");
    generate_error_docs!(out, all_generator_error_variants());

    let _ = writeln!(out, "## Input Errors\n");
    let _ = writeln!(out, "Errors raised while validating the word list and settings, before any grid is built.\n");
    generate_error_docs!(out, all_input_error_variants());

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "Error: G001");
    let _ = writeln!(out, "  caused by: Word list entry \"42\" is a number, not a word (E003)");
    let _ = writeln!(out, "Spell numbers out as words (e.g. 'FORTYTWO' instead of '42')");
    let _ = writeln!(out, "```\n");
    let _ = writeln!(out, "1. Note the innermost error code (e.g., `E003`)");
    let _ = writeln!(out, "2. Look it up in this document for a detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps\n");

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format");
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "Error: <message>");
    let _ = writeln!(out, "```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)");
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "<message> (<code>)");
    let _ = writeln!(out, "<help text if available>");
    let _ = writeln!(out, "```");
    out
}

fn main() {
    print!("{}", render_docs());
}
