//! Repository port for owner-scoped task persistence and retrieval.

use crate::task::domain::{OwnerId, StatusFilter, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Sort orders a repository listing can request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskSort {
    /// Most recently created first.
    #[default]
    CreatedAtDesc,
    /// Oldest first.
    CreatedAtAsc,
}

/// Typed query descriptor for owner-scoped task listings.
///
/// Listings are always scoped to one owner; filter, sort, and paging are
/// explicit fields rather than ad hoc query-builder chains, so the contract
/// between services and adapters stays independent of any one query
/// mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskQuery {
    /// Owner whose tasks are listed.
    pub owner_id: OwnerId,
    /// Status filter applied before paging.
    pub status: StatusFilter,
    /// Sort order.
    pub sort: TaskSort,
    /// Maximum number of tasks returned, unbounded when `None`.
    pub limit: Option<usize>,
    /// Number of tasks skipped after filtering and sorting.
    pub offset: usize,
}

impl TaskQuery {
    /// Creates a query for an owner's complete task set, newest first.
    #[must_use]
    pub const fn all(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            status: StatusFilter::All,
            sort: TaskSort::CreatedAtDesc,
            limit: None,
            offset: 0,
        }
    }

    /// Restricts the query to one status.
    #[must_use]
    pub const fn with_status(mut self, filter: StatusFilter) -> Self {
        self.status = filter;
        self
    }

    /// Caps the number of returned tasks.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Task persistence contract.
///
/// Every operation is scoped to an owner: a task that exists but belongs to
/// a different owner is indistinguishable from a missing one.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (full-row replacement).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with the same
    /// ID and owner exists.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task with that ID
    /// is owned by `owner_id`.
    async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier, scoped to the owner.
    ///
    /// Returns `None` when the task does not exist or belongs to another
    /// owner.
    async fn find_by_id(&self, id: TaskId, owner_id: OwnerId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks matching the query descriptor.
    ///
    /// Tasks sharing a creation timestamp are returned in a stable order
    /// across calls against an unchanged store.
    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns an owner's complete task set, newest first.
    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        self.list(&TaskQuery::all(owner_id)).await
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found for the requesting owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
