//! Internal logging system for the camera angle rig
//!
//! This module provides:
//! - A replaceable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs
//!
//! Hosts that already own a log sink (an editor console, a status bar)
//! install their own Logger with `Engine::set_logger`.

use colored::*;
use std::fmt;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use camera_angle_rig::camera_angle::log::{Logger, LogEntry};
///
/// struct StatusBarLogger;
///
/// impl Logger for StatusBarLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host status bar...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "camera_angle::RigCoordinator")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (per-recompute angle dumps)
    Trace,

    /// Development information
    Debug,

    /// Important events (anchor created, target command succeeded)
    Info,

    /// Recoverable user mistakes (no camera selected)
    Warn,

    /// Rejected input and invalid objects, with file:line details
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry without colors (used by tests and plain sinks)
    pub fn format_plain(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-step detail, usually filtered out)
///
/// # Example
///
/// ```no_run
/// camera_angle_rig::rig_trace!("camera_angle::RigCoordinator", "Adopted anchor '{}'", "Camera_Target");
/// ```
#[macro_export]
macro_rules! rig_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::camera_angle::Engine::log(
            $crate::camera_angle::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (computed poses and intermediate values)
///
/// # Example
///
/// ```no_run
/// camera_angle_rig::rig_debug!("camera_angle::RigCoordinator", "Camera placed at {:?}", (0.577, 0.577, 0.577));
/// ```
#[macro_export]
macro_rules! rig_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::camera_angle::Engine::log(
            $crate::camera_angle::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (scene changes the user should know about)
///
/// # Example
///
/// ```no_run
/// camera_angle_rig::rig_info!("camera_angle::RigCoordinator", "Anchor '{}' created", "Camera_Target");
/// ```
#[macro_export]
macro_rules! rig_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::camera_angle::Engine::log(
            $crate::camera_angle::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (ignored commands, recoverable issues)
///
/// # Example
///
/// ```no_run
/// camera_angle_rig::rig_warn!("camera_angle::Controller", "Parameter change ignored: {}", "Select a camera first");
/// ```
#[macro_export]
macro_rules! rig_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::camera_angle::Engine::log(
            $crate::camera_angle::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// camera_angle_rig::rig_error!("camera_angle::Controller", "Parameter change rejected: {}", "bad slot");
/// ```
#[macro_export]
macro_rules! rig_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::camera_angle::Engine::log_detailed(
            $crate::camera_angle::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an error and evaluate to it
///
/// # Example
///
/// ```ignore
/// let obj = scene.object(key)
///     .ok_or_else(|| rig_err!("camera_angle::Scene", Error::InvalidObject("stale key".into())))?;
/// ```
#[macro_export]
macro_rules! rig_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::camera_angle::Error = $err;
        $crate::rig_error!($source, "{}", err);
        err
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```ignore
/// if !(distance > 0.0) {
///     rig_bail!("camera_angle::RigCoordinator",
///         Error::InvalidParameter(format!("distance must be positive, got {}", distance)));
/// }
/// ```
#[macro_export]
macro_rules! rig_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::rig_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
