use crate::errors::InputError;
use crate::filler::FillerSource;
use crate::generator::{generate_from_list, GeneratorError, Puzzle};
use crate::log::init_logger;
use crate::placement::Placement;
use crate::settings::{PuzzleOptions, Settings};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

/// Error payload handed to the page: the code to show plus the text behind it.
struct WasmError {
    code: String,
    message: String,
    details: String,
    help: Option<String>,
}

impl From<&InputError> for WasmError {
    fn from(e: &InputError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<GeneratorError> for WasmError {
    fn from(e: GeneratorError) -> Self {
        // report the input error itself, not the G001 wrapper
        if let GeneratorError::InvalidInput(ie) = &e {
            return WasmError::from(ie.as_ref());
        }
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl WasmError {
    /// `[E005] message`, then details and the suggestion as separate paragraphs.
    fn to_message(&self) -> String {
        let mut paragraphs = vec![format!("[{}] {}", self.code, self.message)];
        paragraphs.extend((!self.details.is_empty()).then(|| self.details.clone()));
        paragraphs.extend(self.help.as_ref().map(|h| format!("Suggestion: {h}")));
        paragraphs.join("\n\n")
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let error = js_sys::Error::new(&e.to_message());
        error.set_name(&format!("WordSearchError {}", e.code));
        error.into()
    }
}

fn internal_error(code: &str, message: String, details: &str) -> WasmError {
    WasmError {
        code: code.to_string(),
        message,
        details: details.to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();

    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmPuzzle<'a> {
    /// One string per row; empty cells are '.'
    rows: Vec<String>,
    words: Vec<&'a str>,
    placements: &'a [Placement],
    attempts: usize,
    growths: usize,
}

impl<'a> From<&'a Puzzle> for WasmPuzzle<'a> {
    fn from(puzzle: &'a Puzzle) -> Self {
        WasmPuzzle {
            rows: puzzle.grid.rows(),
            words: puzzle.words().collect(),
            placements: &puzzle.placements,
            attempts: puzzle.stats.attempts,
            growths: puzzle.stats.growths,
        }
    }
}

/// JS entry: (words: any[], options: object | undefined, filler?: () => string)
///
/// `words` may contain anything JSON can hold; non-text entries are rejected with
/// the matching input error. `options` uses the camelCase settings names
/// (`gridHeight`, `orientations`, `optionalOverlap`, ...). When `filler` is given it is
/// called once per empty cell and the first character of its result is used.
#[wasm_bindgen]
pub fn generate_puzzle_wasm(
    words: JsValue,
    options: JsValue,
    filler: Option<js_sys::Function>,
) -> Result<JsValue, JsValue> {
    let values: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be an array: {e}"),
        details: "The words parameter must be a JavaScript array.".to_string(),
        help: Some("Pass an array of strings, e.g., ['cat', 'dog', 'code']".to_string()),
    })?;

    let mut options: PuzzleOptions = if options.is_undefined() || options.is_null() {
        PuzzleOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| WasmError {
            code: "WASM002".to_string(),
            message: format!("invalid options: {e}"),
            details: "The options parameter must use the documented camelCase setting names.".to_string(),
            help: Some("Check spelling, e.g., { gridHeight: 12, orientations: ['horizontal'] }".to_string()),
        })?
    };

    if let Some(f) = filler {
        options.custom_filler = Some(FillerSource::custom(move || {
            f.call0(&JsValue::NULL).ok()?.as_string()?.chars().next()
        }));
    }

    let word_list = WordList::from_json_values(&values).map_err(|e| WasmError::from(e.as_ref()))?;
    let settings = Settings::resolve(options, &word_list).map_err(|e| WasmError::from(e.as_ref()))?;
    let puzzle = generate_from_list(&word_list, settings, &mut rand::thread_rng()).map_err(WasmError::from)?;

    serde_wasm_bindgen::to_value(&WasmPuzzle::from(&puzzle)).map_err(|e| {
        internal_error(
            "WASM003",
            format!("serialization failed: {e}"),
            "The generated puzzle could not be converted to JavaScript format.",
        )
        .into()
    })
}

/// Parse a newline-separated word list (`#` starts a comment line) into an array of
/// normalized words.
///
/// # Errors
/// Returns a `JsValue` error if any word is invalid.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text).map_err(|e| WasmError::from(e.as_ref()))?;
    serde_wasm_bindgen::to_value(&word_list.words).map_err(|e| {
        internal_error(
            "WASM004",
            format!("serialization failed: {e}"),
            "The word list could not be converted to JavaScript format.",
        )
        .into()
    })
}

/// Append a `## title` section, one line per entry, followed by a blank line.
fn push_section(report: &mut String, title: &str, lines: &[String]) {
    report.push_str("## ");
    report.push_str(title);
    report.push('\n');
    for line in lines {
        report.push_str(line);
        report.push('\n');
    }
    report.push('\n');
}

fn environment_lines() -> Vec<String> {
    let Some(window) = web_sys::window() else {
        return vec!["(no window)".to_string()];
    };
    let user_agent = window.navigator().user_agent().unwrap_or_else(|_| "unknown".to_string());
    let location = window.location().href().unwrap_or_else(|_| "unknown".to_string());
    vec![format!("User Agent: {user_agent}"), format!("Location: {location}")]
}

/// Build a plain-text report a player can paste into a bug report: version, the error
/// they saw, what they asked for, and the browser they asked in.
#[wasm_bindgen]
pub fn get_debug_info(words: &str, error_message: &str, options_json: &str) -> String {
    let generated = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string());

    let mut report = String::from("=== WORDSEARCH DEBUG REPORT ===\n");
    report.push_str(&format!("Version: {} ({})\n", env!("CARGO_PKG_VERSION"), env!("GIT_HASH")));
    report.push_str(&format!("Generated: {generated}\n\n"));

    push_section(&mut report, "Error", &error_message.lines().map(str::to_string).collect::<Vec<_>>());
    push_section(&mut report, "Input", &[format!("Words: {words}"), format!("Options: {options_json}")]);
    push_section(&mut report, "Environment", &environment_lines());

    report.push_str("=== END DEBUG REPORT ===\n");
    report
}
