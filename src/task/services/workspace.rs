//! Service layer for owner-scoped task CRUD.

use crate::task::{
    domain::{
        OwnerId, StatusFilter, Task, TaskAttributes, TaskDomainError, TaskId, TaskPriority,
        TaskStatus, TaskTitle, list_tasks,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Submitted task form fields, as received from a create or edit page.
///
/// Title, status, and priority are required; description and due date are
/// optional. Values arrive as raw strings and are validated when the form is
/// turned into domain attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    status: String,
    priority: String,
    description: Option<String>,
    due_date: Option<String>,
}

impl TaskForm {
    /// Creates a form with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            priority: priority.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date as an ISO `YYYY-MM-DD` string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Validates the form and converts it into domain attributes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is empty or too long, the
    /// status or priority is not an enumerated value, or the due date is not
    /// a valid calendar date.
    pub fn into_attributes(self) -> Result<TaskAttributes, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let status = TaskStatus::try_from(self.status.as_str())?;
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        let due_date = match self.due_date {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| TaskDomainError::InvalidDueDate(raw))?,
            ),
            None => None,
        };

        Ok(TaskAttributes {
            title,
            description: self.description,
            status,
            priority,
            due_date,
        })
    }
}

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Owner-scoped task CRUD orchestration service.
///
/// The request handler resolves the authenticated user to an [`OwnerId`] and
/// passes it explicitly on every call; the service holds no ambient user
/// state.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task from submitted form fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when form validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, owner_id: OwnerId, form: TaskForm) -> TaskServiceResult<Task> {
        let attributes = form.into_attributes()?;
        let task = Task::new(owner_id, attributes, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Replaces every editable field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when form validation fails, or with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist or is
    /// not owned by `owner_id`.
    pub async fn update(
        &self,
        id: TaskId,
        owner_id: OwnerId,
        form: TaskForm,
    ) -> TaskServiceResult<Task> {
        let attributes = form.into_attributes()?;
        let mut task = self
            .repository
            .find_by_id(id, owner_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        task.apply_update(attributes, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist or is not owned by `owner_id`.
    pub async fn remove(&self, id: TaskId, owner_id: OwnerId) -> TaskServiceResult<()> {
        self.repository.delete(id, owner_id).await?;
        Ok(())
    }

    /// Retrieves a task for the detail view.
    ///
    /// Returns `Ok(None)` when the task does not exist or is not owned by
    /// `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find(&self, id: TaskId, owner_id: OwnerId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id, owner_id).await?)
    }

    /// Lists the owner's tasks for the list view, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(
        &self,
        owner_id: OwnerId,
        filter: StatusFilter,
    ) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.list_by_owner(owner_id).await?;
        Ok(list_tasks(&tasks, filter))
    }
}
