//! task-sorter - checklist priority grouping
//!
//! Reads unchecked markdown checklist items of the form
//! `- [ ] <name> (<YYYY-MM-DD>, <priority>)`, groups them by priority and
//! orders each group by due date.
//!
//! # Architecture
//!
//! - [`task`] - The immutable task record and its display line
//! - [`parser`] - Line-level parsing of checklist items
//! - [`collection`] - Ingestion, grouping/sorting and rendering
//! - [`config`] - Run configuration for the binary
//! - [`error`] - Custom error types
//!
//! # Example
//!
//! ```
//! use task_sorter::TaskCollection;
//!
//! let mut tasks = TaskCollection::new();
//! tasks.ingest_lines([
//!     "- [ ] Write report (2024-05-10, High)",
//!     "- [ ] Clean desk (2024-05-01, Low)",
//!     "- [ ] Submit taxes (2024-04-15, High)",
//! ]);
//! tasks.reorder();
//!
//! let lines: Vec<String> = tasks.render().collect();
//! assert_eq!(lines[0], "Task: Submit taxes, Due Date: 2024-04-15, Priority: High");
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod parser;
pub mod task;

// Re-export commonly used types
pub use collection::{IngestReport, TaskCollection};
pub use config::RunConfig;
pub use error::{ParseError, Result, TaskError};
pub use parser::parse_line;
pub use task::Task;
