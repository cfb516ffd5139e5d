//! Logger setup shared by the CLI, the helper binaries and the browser build.
//!
//! Library code only talks to the `log` facade; nothing is printed until a binary
//! calls [`init_logger`].

use log::LevelFilter;

/// Environment variable that turns on debug logging in the CLI tools.
pub const DEBUG_ENV_VAR: &str = "WORDSEARCH_DEBUG";

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger for this target. Later calls are ignored.
///
/// Natively this is `env_logger` writing bare `LEVEL message` lines to stderr; a
/// `RUST_LOG` filter, when set, is applied on top of the chosen level. In the browser
/// messages go to the devtools console.
pub fn init_logger(debug_enabled: bool) {
    let level = level_for(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    {
        let console_level = level.to_level().unwrap_or(log::Level::Info);
        if let Err(e) = console_log::init_with_level(console_level) {
            web_sys::console::error_1(&format!("console logger unavailable: {e}").into());
            return;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        if builder.try_init().is_err() {
            return;
        }
    }

    log::debug!("logger ready at {level}");
}

/// Whether [`DEBUG_ENV_VAR`] is set.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}
