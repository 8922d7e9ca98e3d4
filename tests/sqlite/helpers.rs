//! Shared test helpers for `SQLite` integration tests.

use std::sync::Arc;

use todo_sync::task::{
    adapters::{memory::InMemoryTasksDataSource, sqlite::SqliteTasksDataSource},
    domain::Task,
    services::CachedTasksRepository,
};

/// Repository with an in-memory remote tier and an `SQLite` cache.
pub type SqliteBackedRepository =
    CachedTasksRepository<InMemoryTasksDataSource, SqliteTasksDataSource>;

/// Opens a fresh in-memory database with the schema applied.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn local_store() -> Result<SqliteTasksDataSource, eyre::Report> {
    Ok(SqliteTasksDataSource::connect(":memory:", 1).await?)
}

/// Bundles both tiers with the repository mediating between them.
pub struct SyncContext {
    /// Simulated remote tier.
    pub remote: Arc<InMemoryTasksDataSource>,
    /// `SQLite` cache tier.
    pub local: Arc<SqliteTasksDataSource>,
    /// Repository under test.
    pub repository: SqliteBackedRepository,
}

/// Builds a repository over a remote tier holding `remote_tasks` and an
/// empty `SQLite` cache.
///
/// # Errors
///
/// Returns an error if the local database cannot be prepared.
pub async fn sync_context(
    remote_tasks: impl IntoIterator<Item = Task>,
) -> Result<SyncContext, eyre::Report> {
    let remote = Arc::new(InMemoryTasksDataSource::with_tasks(remote_tasks));
    let local = Arc::new(local_store().await?);
    let repository = CachedTasksRepository::new(Arc::clone(&remote), Arc::clone(&local));
    Ok(SyncContext {
        remote,
        local,
        repository,
    })
}
