//! Leveled logger with a file or stderr sink.
//!
//! File logging writes to `~/.config/overlap/logs/overlap.log` and rotates
//! to `overlap.log.1` once the configured size is reached. The stderr sink
//! is used for `--verbose` runs. Until one of the `init` functions is
//! called, every log macro is a no-op.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "overlap.log";
const BACKUP_FILE_NAME: &str = "overlap.log.1";

/// Logging configuration, the `[logging]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name, falling back to `Info` for unknown names.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

enum Sink {
    Stderr,
    File {
        file: File,
        path: PathBuf,
        max_bytes: u64,
        written: u64,
    },
}

struct Logger {
    sink: Sink,
    min_level: Level,
}

/// Starts file logging as described by `config`.
///
/// Does nothing if `config.enabled` is `false`, if the log directory
/// can't be created, or if a logger is already installed.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    if fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let path = log_dir.join(LOG_FILE_NAME);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    install(Logger {
        sink: Sink::File {
            file,
            path,
            max_bytes: config.max_file_mb.saturating_mul(1024 * 1024),
            written,
        },
        min_level: Level::parse(&config.level),
    });
}

/// Starts logging to stderr at the given minimum level.
pub fn init_stderr(level: Level) {
    install(Logger {
        sink: Sink::Stderr,
        min_level: level,
    });
}

fn install(logger: Logger) {
    // First initialisation wins.
    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());
    logger.emit(&line);
}

impl Logger {
    fn emit(&mut self, line: &str) {
        match &mut self.sink {
            Sink::Stderr => {
                let _ = std::io::stderr().write_all(line.as_bytes());
            }
            Sink::File {
                file,
                path,
                max_bytes,
                written,
            } => {
                let _ = file.write_all(line.as_bytes());
                *written += line.len() as u64;
                if *max_bytes > 0 && *written >= *max_bytes {
                    let backup = path.with_file_name(BACKUP_FILE_NAME);
                    let _ = fs::rename(&*path, backup);
                    if let Ok(f) = OpenOptions::new().create(true).append(true).open(&*path) {
                        *file = f;
                    }
                    *written = 0;
                }
            }
        }
    }
}

/// UTC wall-clock time as `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
