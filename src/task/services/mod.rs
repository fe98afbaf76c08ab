//! Application services for task management and dashboard views.

mod dashboard;
mod workspace;

pub use dashboard::{DashboardOverview, DashboardService, RECENT_TASK_LIMIT};
pub use workspace::{TaskForm, TaskService, TaskServiceError, TaskServiceResult};
