//! Error types for plist-tools
//!
//! This module defines all error types used throughout the library.

use std::fmt;
use thiserror::Error;

/// Result type alias using plist-tools Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plist-tools operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes do not form a valid property list
    #[error("invalid property list: {0}")]
    Parse(plist::Error),

    /// A key path segment does not resolve
    #[error("{0}")]
    PathNotFound(#[from] PathError),

    /// Sort keys of two elements are not mutually ordered
    #[error("cannot compare {lhs} value with {rhs} value")]
    Incomparable {
        /// Kind of the left-hand comparison key
        lhs: &'static str,
        /// Kind of the right-hand comparison key
        rhs: &'static str,
    },

    /// The sort target is not a dictionary or an array
    #[error("cannot sort {0} value")]
    Unsortable(&'static str),

    /// A value could not be rendered in the output format
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Resource loading or storing error
    #[error("resource error: {0}")]
    Resource(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key path resolution error with context
#[derive(Debug, Clone)]
pub struct PathError {
    /// The full key path being resolved
    pub path: String,
    /// The segment that failed to resolve
    pub segment: Option<String>,
    /// Why the segment failed to resolve
    pub reason: Option<String>,
}

impl PathError {
    /// Create a new path error
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            segment: None,
            reason: None,
        }
    }

    /// Set the segment that failed to resolve
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path '{}' not found", self.path)?;

        if let Some(ref segment) = self.segment {
            write!(f, " at segment '{}'", segment)?;
        }

        if let Some(ref reason) = self.reason {
            write!(f, ": {}", reason)?;
        }

        Ok(())
    }
}

impl std::error::Error for PathError {}
