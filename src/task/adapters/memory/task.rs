//! In-memory repository for task persistence tests and local flows.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{OwnerId, Task, TaskId},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TaskSort},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Per-owner IDs in insertion order, so listings stay reproducible when
    // creation timestamps collide.
    owner_index: HashMap<OwnerId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Removes a task ID from an owner's index, cleaning up the entry if empty.
fn remove_from_index(index: &mut HashMap<OwnerId, Vec<TaskId>>, owner_id: OwnerId, id: TaskId) {
    if let Some(ids) = index.get_mut(&owner_id) {
        ids.retain(|existing| *existing != id);
        if ids.is_empty() {
            index.remove(&owner_id);
        }
    }
}

/// Collects an owner's tasks in insertion order.
fn owner_tasks(state: &InMemoryTaskState, owner_id: OwnerId) -> Vec<Task> {
    state
        .owner_index
        .get(&owner_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.tasks.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .owner_index
            .entry(task.owner_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        let owned = state
            .tasks
            .get(&task.id())
            .is_some_and(|existing| existing.owner_id() == task.owner_id());
        if !owned {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        let owned = state
            .tasks
            .get(&id)
            .is_some_and(|existing| existing.owner_id() == owner_id);
        if !owned {
            return Err(TaskRepositoryError::NotFound(id));
        }

        state.tasks.remove(&id);
        remove_from_index(&mut state.owner_index, owner_id, id);
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let task = state
            .tasks
            .get(&id)
            .filter(|task| task.owner_id() == owner_id)
            .cloned();
        Ok(task)
    }

    async fn list(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;

        let mut tasks: Vec<Task> = owner_tasks(&state, query.owner_id)
            .into_iter()
            .filter(|task| query.status.matches(task.status()))
            .collect();
        // Stable sort keeps insertion order for equal creation timestamps.
        match query.sort {
            TaskSort::CreatedAtDesc => tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            TaskSort::CreatedAtAsc => tasks.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        }

        let paged = tasks.into_iter().skip(query.offset);
        Ok(match query.limit {
            Some(limit) => paged.take(limit).collect(),
            None => paged.collect(),
        })
    }
}
