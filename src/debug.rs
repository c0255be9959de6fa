//! File logging for hosts embedding the tab strip
//!
//! `init_log_bridge` routes the `log` facade to a file so tab strip
//! diagnostics never interfere with the host's own stdout/stderr.
//! The level comes from the caller, else the DEBUG_LEVEL environment variable:
//! - 0 or unset: No logging
//! - 1: Errors only
//! - 2: Info level (inserts, closes, detaches)
//! - 3: Debug level (selection, moves, pin changes)
//! - 4: Trace level (every notification round)
//!
//! Output goes to tab_strip_debug.log in the system temp directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a DEBUG_LEVEL value. Anything unrecognised is `Off`.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    pub fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .map(|val| Self::parse(&val))
            .unwrap_or(DebugLevel::Off)
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Path of the log file written by the bridge.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("tab_strip_debug.log")
}

/// `log` backend appending to the debug log file
struct FileLogger {
    level: LevelFilter,
    file: Mutex<Option<std::fs::File>>,
}

impl FileLogger {
    fn open(level: LevelFilter) -> Self {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            // Silently fail if the log file can't be opened
            .ok();

        let logger = FileLogger {
            level,
            file: Mutex::new(file),
        };
        logger.write_raw(&format!(
            "\n{}\ntab-strip debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            level,
            "=".repeat(80)
        ));
        logger
    }

    fn write_raw(&self, msg: &str) {
        if let Some(ref mut file) = *self.file.lock() {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_raw(&format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {
        if let Some(ref mut file) = *self.file.lock() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Install the file logger as the global `log` backend.
///
/// `level` overrides DEBUG_LEVEL when given. Does nothing when the resulting
/// level is off or another logger is already installed. Returns the level
/// in effect.
pub fn init_log_bridge(level: Option<LevelFilter>) -> LevelFilter {
    let level = level.unwrap_or_else(|| DebugLevel::from_env().to_level_filter());
    if level == LevelFilter::Off {
        return LevelFilter::Off;
    }

    let logger = LOGGER.get_or_init(|| FileLogger::open(level));
    if log::set_logger(logger).is_err() {
        return log::max_level();
    }
    log::set_max_level(logger.level);
    logger.level
}
