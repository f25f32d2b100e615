//! The task record produced by the line parser.

use chrono::NaiveDate;
use std::fmt;

/// One unchecked checklist item.
///
/// Fields are only reachable through accessors, so a `Task` never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    due_date: NaiveDate,
    priority: String,
}

impl Task {
    /// Create a task from already validated parts.
    pub fn new(name: impl Into<String>, due_date: NaiveDate, priority: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date,
            priority: priority.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Priority label used as the grouping key.
    #[must_use]
    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Render the display line for this task.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use task_sorter::Task;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let task = Task::new("Buy milk", date, "High");
    /// assert_eq!(
    ///     task.render(),
    ///     "Task: Buy milk, Due Date: 2024-03-01, Priority: High"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task: {}, Due Date: {}, Priority: {}",
            self.name,
            self.due_date.format("%Y-%m-%d"),
            self.priority
        )
    }
}
