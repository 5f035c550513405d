/// User-facing notices returned by rig commands.

use std::fmt;

/// Severity shown by the host next to the notice text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

/// Short message for the host status bar or report area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: NoticeSeverity::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: NoticeSeverity::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: NoticeSeverity::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == NoticeSeverity::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
