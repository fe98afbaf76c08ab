//! Service layer for the dashboard overview.

use crate::task::{
    domain::{OwnerId, Task, TaskStats, compute_stats, count_due_today, count_overdue, recent_tasks},
    ports::TaskRepository,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{TaskServiceError, TaskServiceResult};

/// Number of recently created tasks shown on the dashboard.
pub const RECENT_TASK_LIMIT: usize = 6;

/// Derived dashboard data for one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Up to [`RECENT_TASK_LIMIT`] most recently created tasks.
    pub recent_tasks: Vec<Task>,
    /// Per-status counts.
    pub stats: TaskStats,
    /// Incomplete tasks whose due date has passed.
    pub overdue_tasks: usize,
    /// Incomplete tasks due on the current date.
    pub tasks_due_today: usize,
}

/// Dashboard orchestration service.
///
/// Reads the owner's full task set once and derives every view from that
/// snapshot, so the counts and the recent-task page are mutually consistent.
#[derive(Clone)]
pub struct DashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Builds the dashboard overview for one owner.
    ///
    /// Due-date comparisons use the calendar date of the UTC clock reading;
    /// a task due on the current UTC date counts as due today, not overdue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn overview(&self, owner_id: OwnerId) -> TaskServiceResult<DashboardOverview> {
        let tasks = self
            .repository
            .list_by_owner(owner_id)
            .await
            .map_err(TaskServiceError::Repository)?;
        let today = self.clock.utc().date_naive();

        Ok(DashboardOverview {
            recent_tasks: recent_tasks(&tasks, RECENT_TASK_LIMIT),
            stats: compute_stats(&tasks),
            overdue_tasks: count_overdue(&tasks, today),
            tasks_due_today: count_due_today(&tasks, today),
        })
    }
}
