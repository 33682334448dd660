//! Console logger for the `log` facade.
//!
//! Every record goes to stderr as
//!
//! ```text
//! LEVEL [module] [file.rs:42] message
//! ```
//!
//! colored by level. The level comes from the `LOG` environment variable
//! (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`) and defaults to `WARN`.

use std::env;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // filtering is left to log::set_max_level
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => 31,
            Level::Warn => 93,
            Level::Info => 34,
            Level::Debug => 32,
            Level::Trace => 90,
        };

        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                let file_name = file.rsplit('/').next().unwrap_or(file);
                eprintln!(
                    "\u{1B}[{}m{:>5} [{}] [{}:{}] {}\u{1B}[0m",
                    color,
                    record.level(),
                    record.target(),
                    file_name,
                    line,
                    record.args()
                );
            }
            _ => {
                eprintln!(
                    "\u{1B}[{}m{:>5} [{}] [unknown] {}\u{1B}[0m",
                    color,
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

fn level_from(value: Option<&str>) -> LevelFilter {
    match value {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        Some("OFF") => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Installs the logger; must run before the first log macro
pub fn init() -> Result<(), SetLoggerError> {
    static LOGGER: SimpleLogger = SimpleLogger;

    log::set_logger(&LOGGER)?;
    log::set_max_level(level_from(env::var("LOG").ok().as_deref()));

    Ok(())
}
