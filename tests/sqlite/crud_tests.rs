//! Basic CRUD operations against the `SQLite` data source.

use super::helpers::local_store;
use rstest::rstest;
use todo_sync::task::{
    domain::{Task, TaskId},
    ports::{TasksDataSource, TasksError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_task_retrieves_task() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let new_task = Task::new("title", "description");

    store.save_task(&new_task).await?;
    let fetched = store.get_task(new_task.id()).await?;

    eyre::ensure!(fetched.title() == "title", "title mismatch");
    eyre::ensure!(fetched.description() == "description", "description mismatch");
    eyre::ensure!(!fetched.is_completed(), "new task should be active");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_task_retrieved_task_is_complete() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let task = Task::new("title", "description");
    store.save_task(&task).await?;

    store.complete_task(task.id()).await?;
    let fetched = store.get_task(task.id()).await?;

    eyre::ensure!(fetched.is_completed(), "task should be completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activate_task_clears_completion() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let task = Task::new("title", "description").completed();
    store.save_task(&task).await?;

    store.activate_task(task.id()).await?;
    let fetched = store.get_task(task.id()).await?;

    eyre::ensure!(fetched.is_active(), "task should be active");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_task_replaces_existing_row() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let original = Task::new("draft", "first");
    store.save_task(&original).await?;

    let edited = Task::with_id(original.id(), "final", "second", true);
    store.save_task(&edited).await?;

    let tasks = store.get_tasks().await?;
    eyre::ensure!(tasks == vec![edited], "expected the edited task only, got {tasks:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_reports_not_found() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let id = TaskId::new();

    let fetched = store.get_task(id).await;
    let completed = store.complete_task(id).await;

    eyre::ensure!(
        matches!(fetched, Err(TasksError::NotFound(missing)) if missing == id),
        "expected NotFound from get_task, got {fetched:?}"
    );
    eyre::ensure!(
        matches!(completed, Err(TasksError::NotFound(_))),
        "expected NotFound from complete_task, got {completed:?}"
    );
    store.delete_task(id).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_tasks_orders_by_id() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let mut tasks: Vec<Task> = (0..6).map(|n| Task::new(format!("task{n}"), "d")).collect();
    for task in &tasks {
        store.save_task(task).await?;
    }

    let fetched = store.get_tasks().await?;

    tasks.sort_by_key(Task::id);
    eyre::ensure!(fetched == tasks, "tasks should be ordered by identifier");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clear_and_delete_remove_rows() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let active = Task::new("active", "keep");
    let done = Task::new("done", "clear").completed();
    let doomed = Task::new("doomed", "delete");
    for task in [&active, &done, &doomed] {
        store.save_task(task).await?;
    }

    store.clear_completed_tasks().await?;
    store.delete_task(doomed.id()).await?;
    eyre::ensure!(
        store.get_tasks().await? == vec![active],
        "only the active task should remain"
    );

    store.delete_all_tasks().await?;
    eyre::ensure!(store.get_tasks().await?.is_empty(), "store should be empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replace_all_swaps_contents_atomically() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let stale = Task::new("stale", "old");
    store.save_task(&stale).await?;
    let mut snapshot = vec![Task::new("one", "a"), Task::new("two", "b").completed()];

    store.replace_all_tasks(&snapshot).await?;

    snapshot.sort_by_key(Task::id);
    eyre::ensure!(
        store.get_tasks().await? == snapshot,
        "store should hold exactly the snapshot"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn migrations_are_idempotent() -> Result<(), eyre::Report> {
    let store = local_store().await?;
    let task = Task::new("kept", "across migrations");
    store.save_task(&task).await?;

    store.migrate().await?;

    eyre::ensure!(store.get_task(task.id()).await? == task, "task should survive");
    Ok(())
}
