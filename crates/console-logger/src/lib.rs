//! Console Logger
//!
//! A `log` backend for WASM frontends. Records are forwarded to the matching
//! `console.*` method so they show up with the right severity in devtools.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Level used when `LOG_LEVEL` is unset or unparsable
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger, reading the level from the build-time
/// `LOG_LEVEL` variable.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(parse_level(option_env!("LOG_LEVEL")))
}

/// Install the console logger with an explicit maximum level.
///
/// Fails if another logger was already installed.
pub fn init_with_level(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`),
/// case-insensitively, falling back to [`DEFAULT_LEVEL`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Render a record as `[target] message`
fn format_record(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}
