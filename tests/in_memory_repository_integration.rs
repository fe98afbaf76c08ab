//! Behavioural integration tests for [`InMemoryTaskRepository`].
//!
//! These tests exercise the in-memory repository in realistic higher-level
//! flows, verifying that it correctly implements the repository contract
//! when used for owner-scoped task tracking.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        OwnerId, PersistedTaskData, StatusFilter, Task, TaskAttributes, TaskId, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn new_task(owner_id: OwnerId, title: &str, status: TaskStatus) -> Task {
    Task::new(
        owner_id,
        TaskAttributes {
            title: TaskTitle::new(title).expect("valid title"),
            description: None,
            status,
            priority: TaskPriority::Medium,
            due_date: None,
        },
        &DefaultClock,
    )
}

fn stored_task(owner_id: OwnerId, title: &str, created_at: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        owner_id,
        attributes: TaskAttributes {
            title: TaskTitle::new(title).expect("valid title"),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
        },
        created_at,
        updated_at: created_at,
    })
}

/// Walks a task through its lifecycle against the repository: create, edit,
/// retrieve, and delete, verifying owner scoping at each step.
#[test]
fn task_lifecycle_through_repository() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let owner_id = OwnerId::new();

    let mut task = new_task(owner_id, "Plan sprint review", TaskStatus::Pending);
    rt.block_on(repo.store(&task)).expect("store task");

    // Storing the same ID twice is rejected.
    let duplicate = rt.block_on(repo.store(&task));
    assert!(matches!(
        duplicate,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));

    // Work starts on the task.
    task.apply_update(
        TaskAttributes {
            title: TaskTitle::new("Plan sprint review").expect("valid title"),
            description: Some("Collect demo topics first".to_owned()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: None,
        },
        &DefaultClock,
    );
    rt.block_on(repo.update(&task)).expect("update task");

    let fetched = rt
        .block_on(repo.find_by_id(task.id(), owner_id))
        .expect("lookup task")
        .expect("task exists");
    assert_eq!(fetched.status(), TaskStatus::InProgress);
    assert_eq!(fetched.description(), Some("Collect demo topics first"));

    // Another owner sees nothing and cannot delete.
    let intruder = OwnerId::new();
    let hidden = rt
        .block_on(repo.find_by_id(task.id(), intruder))
        .expect("scoped lookup");
    assert!(hidden.is_none());
    let denied = rt.block_on(repo.delete(task.id(), intruder));
    assert!(matches!(denied, Err(TaskRepositoryError::NotFound(_))));

    // The owner can.
    rt.block_on(repo.delete(task.id(), owner_id))
        .expect("delete task");
    let gone = rt
        .block_on(repo.find_by_id(task.id(), owner_id))
        .expect("lookup after delete");
    assert!(gone.is_none());
}

/// Verifies the typed query descriptor: status filtering, sorting, and
/// paging over one owner's tasks without leaking another owner's records.
#[test]
fn query_descriptor_filters_sorts_and_pages() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let owner_id = OwnerId::new();
    let neighbour = OwnerId::new();

    let statuses = [
        TaskStatus::Pending,
        TaskStatus::Completed,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Pending,
    ];
    for (index, status) in statuses.into_iter().enumerate() {
        let task = new_task(owner_id, &format!("Task {index}"), status);
        rt.block_on(repo.store(&task)).expect("store task");
    }
    let foreign = new_task(neighbour, "Someone else's errand", TaskStatus::Pending);
    rt.block_on(repo.store(&foreign)).expect("store foreign task");

    let everything = rt
        .block_on(repo.list_by_owner(owner_id))
        .expect("list all");
    assert_eq!(everything.len(), 5);
    assert!(everything.iter().all(|task| task.owner_id() == owner_id));
    for pair in everything.windows(2) {
        assert!(pair[0].created_at() >= pair[1].created_at());
    }

    let pending_only = TaskQuery::all(owner_id).with_status(StatusFilter::Only(TaskStatus::Pending));
    let pending = rt.block_on(repo.list(&pending_only)).expect("list pending");
    assert_eq!(pending.len(), 3);
    assert!(
        pending
            .iter()
            .all(|task| task.status() == TaskStatus::Pending)
    );

    let first_page = TaskQuery::all(owner_id).with_limit(2);
    let page = rt.block_on(repo.list(&first_page)).expect("list page");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0], everything[0]);
    assert_eq!(page[1], everything[1]);

    let mut second_page = TaskQuery::all(owner_id).with_limit(2);
    second_page.offset = 2;
    let next = rt.block_on(repo.list(&second_page)).expect("list next page");
    assert_eq!(next.len(), 2);
    assert_eq!(next[0], everything[2]);
}

/// Tasks stored with an identical creation timestamp come back in storage
/// order, and repeated listings return the same page.
#[test]
fn listing_keeps_storage_order_for_equal_timestamps() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let owner_id = OwnerId::new();
    let shared = Utc
        .with_ymd_and_hms(2026, 8, 30, 9, 0, 0)
        .single()
        .expect("valid timestamp");

    for title in ["First", "Second", "Third"] {
        let task = stored_task(owner_id, title, shared);
        rt.block_on(repo.store(&task)).expect("store task");
    }

    let first_pass = rt
        .block_on(repo.list_by_owner(owner_id))
        .expect("first listing");
    let second_pass = rt
        .block_on(repo.list_by_owner(owner_id))
        .expect("second listing");

    let titles: Vec<&str> = first_pass
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
    assert_eq!(first_pass, second_pass);
}

/// Updating or deleting a task that was never stored reports `NotFound`.
#[test]
fn missing_tasks_report_not_found() {
    let rt = test_runtime();
    let repo = InMemoryTaskRepository::new();
    let owner_id = OwnerId::new();

    let phantom = new_task(owner_id, "Never stored", TaskStatus::Pending);
    let update_result = rt.block_on(repo.update(&phantom));
    assert!(matches!(
        update_result,
        Err(TaskRepositoryError::NotFound(id)) if id == phantom.id()
    ));

    let missing = TaskId::new();
    let delete_result = rt.block_on(repo.delete(missing, owner_id));
    assert!(matches!(
        delete_result,
        Err(TaskRepositoryError::NotFound(id)) if id == missing
    ));
}
