//! Checklist line parsing.
//!
//! A line is a task candidate when it contains the unchecked marker
//! `- [ ]` anywhere. Candidates have the shape
//!
//! ```text
//! - [ ] <name> (<YYYY-MM-DD>, <priority>)
//! ```
//!
//! Everything after the first `(` is the detail segment. One trailing `)`
//! is stripped from it, the rest is split on commas, and only the first two
//! fields are read.

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::task::Task;

/// Marker identifying an unchecked checklist item.
pub const UNCHECKED_MARKER: &str = "- [ ]";

/// Check whether a line is a task candidate.
#[must_use]
pub fn is_candidate(line: &str) -> bool {
    line.contains(UNCHECKED_MARKER)
}

/// Parse one line into a task.
///
/// Returns `Ok(None)` for lines without the unchecked marker. Candidate
/// lines either produce a fully formed [`Task`] or a [`ParseError`].
///
/// # Example
///
/// ```
/// use task_sorter::parser::parse_line;
///
/// let task = parse_line("- [ ] Buy milk (2024-03-01, High)").unwrap().unwrap();
/// assert_eq!(task.name(), "Buy milk");
/// assert_eq!(task.priority(), "High");
///
/// assert!(parse_line("# Notes").unwrap().is_none());
/// ```
pub fn parse_line(line: &str) -> Result<Option<Task>, ParseError> {
    if !is_candidate(line) {
        return Ok(None);
    }

    let (name_segment, detail_segment) =
        line.split_once('(').ok_or(ParseError::MissingDetails)?;

    let name = name_segment.replace(UNCHECKED_MARKER, "");
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    let details = detail_segment.trim_end();
    let details = details.strip_suffix(')').unwrap_or(details);
    let mut fields = details.split(',');

    let date_field = fields.next().unwrap_or_default().trim();
    let due_date = parse_due_date(date_field)?;

    let priority = fields.next().ok_or(ParseError::MissingPriority)?.trim();

    Ok(Some(Task::new(name, due_date, priority)))
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts single-digit months and days, so the shape is
/// checked first.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

// ============================================================================
// Tests
// ============================================================================
