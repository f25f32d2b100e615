//! Error types for task-sorter.
//!
//! Line-level failures are [`ParseError`] values that ingestion recovers
//! from locally. Everything a caller has to act on is a [`TaskError`].

use std::path::PathBuf;
use thiserror::Error;

/// Why a candidate checklist line could not become a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `(` follows the task name
    #[error("missing '(' before the date and priority")]
    MissingDetails,

    /// Nothing left of the name once the marker is removed
    #[error("task name is empty")]
    EmptyName,

    /// First detail field is not a `YYYY-MM-DD` date
    #[error("invalid due date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Only one detail field was given
    #[error("missing priority after the due date")]
    MissingPriority,
}

/// Main error type for task-sorter operations
#[derive(Error, Debug)]
pub enum TaskError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// The input file could not be opened for reading
    #[error("Cannot open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed after the file was opened
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate line was malformed
    #[error("Error parsing line '{line}': {reason}")]
    Parse {
        line: String,
        #[source]
        reason: ParseError,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid run configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TaskError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error for the given line
    pub fn parse(line: impl Into<String>, reason: ParseError) -> Self {
        Self::Parse {
            line: line.into(),
            reason,
        }
    }

    /// Check if processing can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }

    /// Check if the output side was closed by the reader, e.g. `| head`
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Parse { .. } => 0,
            Self::Config { .. } => 2,
            _ => 1,
        }
    }
}

/// Type alias for task-sorter results
pub type Result<T> = std::result::Result<T, TaskError>;
