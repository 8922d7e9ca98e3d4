//! Shared world state for repository synchronisation BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todo_sync::task::{
    adapters::memory::InMemoryTasksDataSource,
    domain::Task,
    ports::TasksResult,
    services::CachedTasksRepository,
};

/// Repository type used by the BDD world.
pub type TestRepository = CachedTasksRepository<InMemoryTasksDataSource, InMemoryTasksDataSource>;

/// Scenario world for repository synchronisation behaviour tests.
pub struct RepositorySyncWorld {
    pub remote: Arc<InMemoryTasksDataSource>,
    pub local: Arc<InMemoryTasksDataSource>,
    pub repository: TestRepository,
    pub stale_task: Option<Task>,
    pub late_task: Option<Task>,
    pub tracked_task: Option<Task>,
    pub last_load: Option<TasksResult<Vec<Task>>>,
}

impl RepositorySyncWorld {
    /// Creates a world with two empty tiers.
    #[must_use]
    pub fn new() -> Self {
        let remote = Arc::new(InMemoryTasksDataSource::new());
        let local = Arc::new(InMemoryTasksDataSource::new());
        let repository = CachedTasksRepository::new(Arc::clone(&remote), Arc::clone(&local));

        Self {
            remote,
            local,
            repository,
            stale_task: None,
            late_task: None,
            tracked_task: None,
            last_load: None,
        }
    }
}

impl Default for RepositorySyncWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RepositorySyncWorld {
    RepositorySyncWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
