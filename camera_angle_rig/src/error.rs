//! Error types for the camera angle rig
//!
//! This module defines the error types used throughout the crate,
//! including slot lookup, parameter validation, and scene object access.

use std::fmt;

/// Result type for camera angle rig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera angle rig errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// View slot outside the angle table domain (horizontal 1..=8, vertical 1..=5)
    InvalidSlot {
        /// Requested horizontal slot
        horizontal: i32,
        /// Requested vertical slot
        vertical: i32,
    },

    /// Invalid numeric parameter (non-positive distance, bad config value, etc.)
    InvalidParameter(String),

    /// Command invoked without an active camera
    NoSelection(String),

    /// Unknown or stale scene object key, or an illegal parenting request
    InvalidObject(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSlot { horizontal, vertical } => write!(
                f,
                "Invalid view slot: horizontal {} (expected 1-8), vertical {} (expected 1-5)",
                horizontal, vertical
            ),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::NoSelection(msg) => write!(f, "No selection: {}", msg),
            Error::InvalidObject(msg) => write!(f, "Invalid object: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
