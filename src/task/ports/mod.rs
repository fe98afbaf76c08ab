//! Port contracts for task persistence.

mod repository;

pub use repository::{
    TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskSort,
};
