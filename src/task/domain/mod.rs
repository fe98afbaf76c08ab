//! Domain model for owner-scoped task tracking.
//!
//! The task domain models task creation, full-field updates, and the pure
//! dashboard aggregation over an owner's task set while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod overview;
mod task;

pub use error::{
    ParseStatusFilterError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::{OwnerId, TaskId, TaskTitle};
pub use overview::{
    StatusFilter, TaskStats, compute_stats, count_due_today, count_overdue, list_tasks,
    recent_tasks,
};
pub use task::{PersistedTaskData, Task, TaskAttributes, TaskPriority, TaskStatus};
