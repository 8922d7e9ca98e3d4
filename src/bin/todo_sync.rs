//! Assembles the two-tier task stack and reports the synchronised tasks.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=todo_sync=debug todo_sync
//! ```
//!
//! The simulated remote tier is seeded from configuration, the local tier is
//! the `SQLite` database named by `TODO_SYNC_DATABASE_URL`. A forced refresh
//! copies the remote snapshot into the local cache; the task list and the
//! completion statistics are then logged.

use std::sync::Arc;

use todo_sync::config::SyncConfig;
use todo_sync::task::{
    adapters::{memory::InMemoryTasksDataSource, sqlite::SqliteTasksDataSource},
    domain::TasksFilter,
    services::{CachedTasksRepository, StatisticsService, TaskListService},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SyncConfig::load()?;
    info!(
        database_url = %config.database_url,
        remote_latency_ms = config.remote_latency_ms,
        seed_tasks = config.seed_tasks.len(),
        "configuration loaded"
    );

    let mut remote = InMemoryTasksDataSource::with_tasks(config.seed_tasks.iter().cloned());
    if let Some(latency) = config.remote_latency() {
        remote = remote.with_latency(latency);
    }
    let local = SqliteTasksDataSource::connect(&config.database_url, config.pool_size).await?;
    let repository = Arc::new(CachedTasksRepository::new(
        Arc::new(remote),
        Arc::new(local),
    ));

    let task_list = TaskListService::new(Arc::clone(&repository));
    let tasks = task_list.load_tasks(true, TasksFilter::All).await?;
    for task in &tasks {
        info!(
            task_id = %task.id(),
            title = task.title_for_list(),
            completed = task.is_completed(),
            "task"
        );
    }

    let statistics = StatisticsService::new(repository).refresh().await;
    info!(
        empty = statistics.empty,
        active_percent = f64::from(statistics.stats.active_percent()),
        completed_percent = f64::from(statistics.stats.completed_percent()),
        "completion statistics"
    );
    Ok(())
}
