//! Two-tier synchronisation with an `SQLite` cache.

use super::helpers::sync_context;
use rstest::rstest;
use todo_sync::task::{
    domain::Task,
    ports::{TasksDataSource, TasksError, TasksRepository},
};

fn remote_tasks() -> Vec<Task> {
    let mut tasks = vec![
        Task::new("Title1", "Description1"),
        Task::new("Title2", "Description2").completed(),
    ];
    tasks.sort_by_key(Task::id);
    tasks
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn forced_load_copies_remote_snapshot_into_sqlite() -> Result<(), eyre::Report> {
    let expected = remote_tasks();
    let context = sync_context(expected.clone()).await?;

    let loaded = context.repository.get_tasks(true).await?;
    let cached = context.local.get_tasks().await?;

    eyre::ensure!(loaded == expected, "repository should return the remote snapshot");
    eyre::ensure!(cached == expected, "cache should mirror the remote snapshot");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cached_read_comes_from_sqlite() -> Result<(), eyre::Report> {
    let context = sync_context(remote_tasks()).await?;
    context.repository.refresh_tasks().await?;
    let local_only = Task::new("Local", "Only in the cache");
    context.local.save_task(&local_only).await?;

    let cached = context.repository.get_tasks(false).await?;

    eyre::ensure!(
        cached.contains(&local_only),
        "valid cache should be served from SQLite"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_through_reaches_sqlite() -> Result<(), eyre::Report> {
    let context = sync_context(remote_tasks()).await?;
    let task = Task::new("New", "Written through");

    context.repository.save_task(&task).await?;
    context.repository.complete_task(&task).await?;

    let cached = context.local.get_task(task.id()).await?;
    eyre::ensure!(cached.is_completed(), "cached copy should be completed");
    let remote = context
        .remote
        .peek(task.id())?
        .ok_or_else(|| eyre::eyre!("task missing from remote tier"))?;
    eyre::ensure!(remote.is_completed(), "remote copy should be completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_outage_keeps_sqlite_cache() -> Result<(), eyre::Report> {
    let context = sync_context(remote_tasks()).await?;
    context.repository.refresh_tasks().await?;
    context.remote.set_unavailable(true);

    let result = context.repository.refresh_tasks().await;

    eyre::ensure!(
        matches!(result, Err(TasksError::Unavailable(_))),
        "expected Unavailable, got {result:?}"
    );
    eyre::ensure!(
        context.local.get_tasks().await?.len() == 2,
        "cache should keep the last snapshot"
    );
    Ok(())
}
