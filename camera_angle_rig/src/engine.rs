/// Engine - process-wide services shared by every camera rig
///
/// The only global state is the logger. Rigs, scenes and controllers are
/// plain values owned by the host; nothing else lives behind a singleton.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Global services entry point
///
/// # Example
///
/// ```no_run
/// use camera_angle_rig::camera_angle::{Engine, log::{Logger, LogEntry}};
///
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}", entry.message);
///     }
/// }
///
/// Engine::set_logger(ConsoleLogger);
/// ```
pub struct Engine;

impl Engine {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by rig_trace!, rig_debug!, rig_info! and rig_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Internal logging method with file:line information
    ///
    /// Used by rig_error! (and therefore rig_err!/rig_bail!).
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
