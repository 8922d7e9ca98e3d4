//! Thread-safe in-memory data source, usable as a simulated remote tier.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::task::{
    domain::{Task, TaskId},
    ports::{TasksDataSource, TasksError, TasksResult},
};

/// Title and description of the sample tasks held by
/// [`InMemoryTasksDataSource::seeded`].
pub const SEEDED_TASKS: [(&str, &str); 2] = [
    (
        "Build tower in Pisa",
        "Ground looks good, no foundation work required.",
    ),
    (
        "Finish bridge in Tacoma",
        "Found awesome girders at half the cost!",
    ),
];

/// In-memory task storage.
///
/// Clones share the same underlying map. Optional latency and an outage
/// switch make it stand in for a remote service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTasksDataSource {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    unavailable: Arc<AtomicBool>,
    latency: Option<Duration>,
}

impl InMemoryTasksDataSource {
    /// Creates an empty data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data source holding the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let map = tasks.into_iter().map(|task| (task.id(), task)).collect();
        Self {
            tasks: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Creates a data source holding the sample tasks.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_tasks(
            SEEDED_TASKS
                .iter()
                .map(|(title, description)| Task::new(*title, *description)),
        )
    }

    /// Delays every call by `latency` before touching the store.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes every subsequent call fail with [`TasksError::Unavailable`]
    /// while `unavailable` is set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Adds tasks directly, bypassing latency and availability checks.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] if the lock is poisoned.
    pub fn insert_tasks(&self, tasks: impl IntoIterator<Item = Task>) -> TasksResult<()> {
        let mut map = self.write()?;
        map.extend(tasks.into_iter().map(|task| (task.id(), task)));
        Ok(())
    }

    /// Returns a copy of the stored task, bypassing latency and availability
    /// checks.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] if the lock is poisoned.
    pub fn peek(&self, id: TaskId) -> TasksResult<Option<Task>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] if the lock is poisoned.
    pub fn len(&self) -> TasksResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::Persistence`] if the lock is poisoned.
    pub fn is_empty(&self) -> TasksResult<bool> {
        Ok(self.read()?.is_empty())
    }

    async fn enter(&self) -> TasksResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(TasksError::Unavailable(
                "in-memory data source is offline".to_owned(),
            ));
        }
        Ok(())
    }

    fn read(&self) -> TasksResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks
            .read()
            .map_err(|err| TasksError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TasksResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks
            .write()
            .map_err(|err| TasksError::persistence(std::io::Error::other(err.to_string())))
    }

    fn set_completion(&self, id: TaskId, completed: bool) -> TasksResult<()> {
        let mut map = self.write()?;
        let stored = map.remove(&id).ok_or(TasksError::NotFound(id))?;
        map.insert(id, stored.with_completion(completed));
        Ok(())
    }
}

#[async_trait]
impl TasksDataSource for InMemoryTasksDataSource {
    async fn get_tasks(&self) -> TasksResult<Vec<Task>> {
        self.enter().await?;
        let mut tasks: Vec<Task> = self.read()?.values().cloned().collect();
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }

    async fn get_task(&self, id: TaskId) -> TasksResult<Task> {
        self.enter().await?;
        self.read()?.get(&id).cloned().ok_or(TasksError::NotFound(id))
    }

    async fn save_task(&self, task: &Task) -> TasksResult<()> {
        self.enter().await?;
        self.write()?.insert(task.id(), task.clone());
        Ok(())
    }

    async fn complete_task(&self, id: TaskId) -> TasksResult<()> {
        self.enter().await?;
        self.set_completion(id, true)
    }

    async fn activate_task(&self, id: TaskId) -> TasksResult<()> {
        self.enter().await?;
        self.set_completion(id, false)
    }

    async fn clear_completed_tasks(&self) -> TasksResult<()> {
        self.enter().await?;
        self.write()?.retain(|_, task| task.is_active());
        Ok(())
    }

    async fn delete_all_tasks(&self) -> TasksResult<()> {
        self.enter().await?;
        self.write()?.clear();
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> TasksResult<()> {
        self.enter().await?;
        self.write()?.remove(&id);
        Ok(())
    }

    async fn replace_all_tasks(&self, tasks: &[Task]) -> TasksResult<()> {
        self.enter().await?;
        let mut map = self.write()?;
        map.clear();
        map.extend(tasks.iter().map(|task| (task.id(), task.clone())));
        Ok(())
    }
}
