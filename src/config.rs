//! Run configuration for the task-sorter binary.

use std::path::PathBuf;

use crate::error::{Result, TaskError};

/// Environment variable consulted when no input path is given on the CLI.
pub const INPUT_ENV_VAR: &str = "TASK_SORTER_FILE";

/// How a single run reads and prints tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Checklist file to read
    pub input: PathBuf,
    /// Print in ingestion order instead of grouped order
    pub raw: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl RunConfig {
    /// Create a configuration with default flags for an input file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            raw: false,
            verbose: false,
        }
    }

    /// Keep ingestion order when printing
    #[must_use]
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Set verbose logging
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log filter directive for `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "task_sorter=debug,info"
        } else {
            "task_sorter=info,warn"
        }
    }

    /// Reject configurations that cannot name a readable file.
    ///
    /// Whether the file exists is left to ingestion, which reports it as a
    /// file-open failure.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(TaskError::config("input path is empty"));
        }
        Ok(())
    }
}
