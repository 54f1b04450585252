//! Custom logging module.
//!
//! Log records are captured into an in-memory buffer instead of stderr,
//! which would corrupt the alternate screen. The footer shows the latest
//! entry and `--verbose` prints the buffer once the terminal is restored.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared handle to captured log entries.
///
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Return the most recent entry, if any.
    ///
    pub fn latest(&self) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

/// Logger that captures records into a `LogBuffer`.
///
pub struct CaptureLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CaptureLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CaptureLogger { level, buffer }
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install the capture logger globally and return its buffer.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(CaptureLogger::new(level, buffer.clone())))
        .map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}
