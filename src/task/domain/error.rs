//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {0} characters long, maximum is 255")]
    TitleTooLong(usize),

    /// The status value is not one of the enumerated statuses.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// The priority value is not one of the enumerated priorities.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// The due date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl From<ParseTaskStatusError> for TaskDomainError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

impl From<ParseTaskPriorityError> for TaskDomainError {
    fn from(err: ParseTaskPriorityError) -> Self {
        Self::InvalidPriority(err.0)
    }
}

/// Error returned while parsing a list-view status filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter '{0}', expected pending, in_progress, completed, or all")]
pub struct ParseStatusFilterError(pub String);
