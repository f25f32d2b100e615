//! Task collection: ingestion, grouping and rendering.
//!
//! A [`TaskCollection`] owns one ordered sequence of tasks. Ingestion only
//! ever appends, [`TaskCollection::reorder`] replaces the sequence with a
//! grouped and date-sorted permutation of itself, and rendering follows
//! whatever order the sequence currently has.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, TaskError};
use crate::parser::parse_line;
use crate::task::Task;

// ============================================================================
// Ingest Report
// ============================================================================

/// Line counters for one or more ingestion calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Lines handed to the parser
    pub lines_read: usize,
    /// Lines that became tasks
    pub tasks_added: usize,
    /// Lines without the unchecked marker
    pub non_task_lines: usize,
    /// Candidate lines that failed to parse
    pub malformed_lines: usize,
}

impl IngestReport {
    /// Fold another report into this one.
    pub fn merge(&mut self, other: &IngestReport) {
        self.lines_read += other.lines_read;
        self.tasks_added += other.tasks_added;
        self.non_task_lines += other.non_task_lines;
        self.malformed_lines += other.malformed_lines;
    }
}

// ============================================================================
// Task Collection
// ============================================================================

/// Ordered collection of parsed tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in current sequence order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Parse lines in order and append every task found.
    ///
    /// Lines without the unchecked marker are skipped silently. Malformed
    /// candidates are logged with their content and skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use task_sorter::TaskCollection;
    ///
    /// let mut tasks = TaskCollection::new();
    /// let report = tasks.ingest_lines([
    ///     "# Groceries",
    ///     "- [ ] Buy milk (2024-03-01, High)",
    ///     "- [ ] Buy eggs (someday, Low)",
    /// ]);
    /// assert_eq!(tasks.len(), 1);
    /// assert_eq!(report.malformed_lines, 1);
    /// ```
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = IngestReport::default();
        for line in lines {
            self.ingest_line(line.as_ref(), &mut report);
        }
        debug!(
            lines = report.lines_read,
            added = report.tasks_added,
            malformed = report.malformed_lines,
            "Ingested lines"
        );
        report
    }

    /// Ingest every line of a reader.
    ///
    /// Bytes that are not valid UTF-8 are decoded as U+FFFD, so one badly
    /// encoded line never ends ingestion. An I/O error does: tasks appended
    /// before it stay in the collection.
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        source: &Path,
    ) -> Result<IngestReport> {
        let mut report = IngestReport::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| TaskError::Read {
                    path: source.to_path_buf(),
                    source: e,
                })?;
            if read == 0 {
                break;
            }
            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let line = String::from_utf8_lossy(bytes);
            self.ingest_line(&line, &mut report);
        }
        debug!(
            path = %source.display(),
            lines = report.lines_read,
            added = report.tasks_added,
            malformed = report.malformed_lines,
            "Ingested file"
        );
        Ok(report)
    }

    /// Open a file and ingest its lines.
    ///
    /// The file handle is released when this returns, on success or error.
    /// If the file cannot be opened the collection is left untouched.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<IngestReport> {
        let path = path.as_ref();
        let open_error = |source| TaskError::FileOpen {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            )));
        }
        self.ingest_reader(BufReader::new(file), path)
    }

    fn ingest_line(&mut self, line: &str, report: &mut IngestReport) {
        report.lines_read += 1;
        match parse_line(line) {
            Ok(Some(task)) => {
                report.tasks_added += 1;
                self.tasks.push(task);
            }
            Ok(None) => report.non_task_lines += 1,
            Err(reason) => {
                report.malformed_lines += 1;
                warn!("{}", TaskError::parse(line, reason));
            }
        }
    }

    /// Group tasks by priority and sort each group by due date.
    ///
    /// Groups are emitted in ascending priority order. The in-group sort is
    /// stable, so tasks sharing a due date keep their current relative
    /// order. Running this twice gives the same sequence as running it once.
    pub fn reorder(&mut self) {
        let mut grouped: BTreeMap<String, Vec<Task>> = BTreeMap::new();
        for task in std::mem::take(&mut self.tasks) {
            grouped
                .entry(task.priority().to_string())
                .or_default()
                .push(task);
        }

        for (_, mut group) in grouped {
            group.sort_by_key(Task::due_date);
            self.tasks.extend(group);
        }
    }

    /// Current tasks keyed by priority, in ascending key order.
    ///
    /// Within a group, tasks appear in current sequence order.
    #[must_use]
    pub fn groups(&self) -> BTreeMap<&str, Vec<&Task>> {
        let mut grouped: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
        for task in &self.tasks {
            grouped.entry(task.priority()).or_default().push(task);
        }
        grouped
    }

    /// Rendered display lines in current sequence order.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks.iter().map(Task::render)
    }

    /// Write one rendered line per task.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        for task in &self.tasks {
            writeln!(out, "{task}")?;
        }
        out.flush()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
