//! Pure aggregation over an owner's task set.
//!
//! These functions back the dashboard and list views. Each one is a
//! deterministic function of its inputs: the caller reads the owner's full
//! task set from the repository and hands it in together with any date the
//! calculation needs, so no function here touches a clock or a store.

use super::{ParseStatusFilterError, Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-status task counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Count of all tasks.
    pub total: usize,
    /// Count of tasks with status `pending`.
    pub pending: usize,
    /// Count of tasks with status `in_progress`.
    pub in_progress: usize,
    /// Count of tasks with status `completed`.
    pub completed: usize,
}

/// List-view status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// No filtering; every task matches.
    #[default]
    All,
    /// Only tasks with the given status match.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns whether a task with the given status passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    /// Parses the list view's query-string values: a status name or `all`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TaskStatus::try_from(value)
            .map(Self::Only)
            .map_err(|err| ParseStatusFilterError(err.0))
    }
}

/// Computes per-status counts over the given tasks.
///
/// Statuses form a closed enumeration, so `total` always equals
/// `pending + in_progress + completed`. Empty input yields all zeros.
#[must_use]
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status() {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
    }
    stats
}

/// Counts incomplete tasks whose due date is strictly before `today`.
///
/// Tasks without a due date never contribute, and a task due exactly on
/// `today` is not overdue.
#[must_use]
pub fn count_overdue(tasks: &[Task], today: NaiveDate) -> usize {
    tasks.iter().filter(|task| task.is_overdue(today)).count()
}

/// Counts incomplete tasks whose due date falls on `today`.
#[must_use]
pub fn count_due_today(tasks: &[Task], today: NaiveDate) -> usize {
    tasks.iter().filter(|task| task.is_due_on(today)).count()
}

/// Returns up to `limit` tasks, most recently created first.
///
/// Tasks sharing a creation timestamp keep their relative input order, so
/// repeated calls over the same store snapshot return the same page.
#[must_use]
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    sort_newest_first(&mut ordered);
    ordered.truncate(limit);
    ordered
}

/// Returns the tasks passing the filter, most recently created first.
///
/// [`StatusFilter::All`] returns every task; the input is never mutated and
/// equal-timestamp tasks keep their relative input order.
#[must_use]
pub fn list_tasks(tasks: &[Task], filter: StatusFilter) -> Vec<Task> {
    let mut matching: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches(task.status()))
        .cloned()
        .collect();
    sort_newest_first(&mut matching);
    matching
}

/// Stable descending sort on creation timestamp.
fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}
