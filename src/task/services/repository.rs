//! Two-tier task repository: an authoritative remote tier fronted by a local
//! cache.

use crate::task::{
    domain::{Task, TaskId},
    ports::{
        Outcome, TasksDataSource, TasksError, TasksObserver, TasksRepository, TasksResult,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

/// Repository that reads through and writes through a local cache.
///
/// Reads are served from the local tier while the cache is valid. A forced
/// read, or any read after the cache was invalidated, fetches the full
/// snapshot from the remote tier and overwrites the local tier with it.
///
/// Mutations go to the remote tier first and then to the local tier, and
/// always invalidate the cache. A remote failure aborts the mutation before
/// the local tier is touched.
pub struct CachedTasksRepository<R, L>
where
    R: TasksDataSource,
    L: TasksDataSource,
{
    remote: Arc<R>,
    local: Arc<L>,
    cache_valid: AtomicBool,
    sync_lock: Mutex<()>,
    observers: watch::Sender<Outcome<Vec<Task>>>,
}

impl<R, L> CachedTasksRepository<R, L>
where
    R: TasksDataSource,
    L: TasksDataSource,
{
    /// Creates a repository over the given tiers. The cache starts invalid.
    #[must_use]
    pub fn new(remote: Arc<R>, local: Arc<L>) -> Self {
        let (observers, _) = watch::channel(Outcome::Loading);
        Self {
            remote,
            local,
            cache_valid: AtomicBool::new(false),
            sync_lock: Mutex::new(()),
            observers,
        }
    }

    /// Returns `true` while reads may be served from the local tier.
    #[must_use]
    pub fn is_cache_valid(&self) -> bool {
        self.cache_valid.load(Ordering::SeqCst)
    }

    /// Forces the next read to go to the remote tier.
    pub fn invalidate_cache(&self) {
        self.cache_valid.store(false, Ordering::SeqCst);
    }

    async fn load_tasks(&self, force_update: bool) -> TasksResult<Vec<Task>> {
        if force_update || !self.is_cache_valid() {
            debug!(force_update, "loading tasks from remote tier");
            return self.sync_from_remote().await;
        }
        debug!("serving tasks from local cache");
        self.local.get_tasks().await
    }

    async fn sync_from_remote(&self) -> TasksResult<Vec<Task>> {
        let snapshot = self
            .remote
            .get_tasks()
            .await
            .inspect_err(|err| warn!(error = %err, "remote task fetch failed"))?;
        self.local
            .replace_all_tasks(&snapshot)
            .await
            .inspect_err(|err| warn!(error = %err, "overwriting local cache failed"))?;
        self.cache_valid.store(true, Ordering::SeqCst);
        info!(count = snapshot.len(), "local cache overwritten from remote tier");
        self.observers.send_replace(Outcome::Success(snapshot.clone()));
        Ok(snapshot)
    }

    async fn publish_local(&self) {
        match self.local.get_tasks().await {
            Ok(tasks) => {
                self.observers.send_replace(Outcome::Success(tasks));
            }
            Err(err) => {
                warn!(error = %err, "reading local tier for observers failed");
                self.observers.send_replace(Outcome::Error(Arc::new(err)));
            }
        }
    }

    async fn set_completion(&self, task: &Task, completed: bool) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        let id = task.id();
        let operation = if completed { "complete_task" } else { "activate_task" };

        let remote_result = if completed {
            self.remote.complete_task(id).await
        } else {
            self.remote.activate_task(id).await
        };
        remote_result.inspect_err(remote_write_failed(operation))?;

        let local_result = if completed {
            self.local.complete_task(id).await
        } else {
            self.local.activate_task(id).await
        };
        match local_result {
            Err(err) if err.is_not_found() => {
                debug!(task_id = %id, operation, "task not cached locally yet");
            }
            other => other.inspect_err(local_write_failed(operation))?,
        }

        self.publish_local().await;
        Ok(())
    }
}

#[async_trait]
impl<R, L> TasksRepository for CachedTasksRepository<R, L>
where
    R: TasksDataSource,
    L: TasksDataSource,
{
    async fn get_tasks(&self, force_update: bool) -> TasksResult<Vec<Task>> {
        let _guard = self.sync_lock.lock().await;
        self.load_tasks(force_update).await
    }

    async fn refresh_tasks(&self) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        self.observers.send_replace(Outcome::Loading);
        match self.sync_from_remote().await {
            Ok(_) => Ok(()),
            Err(err) => {
                self.observers.send_replace(Outcome::Error(Arc::new(err.clone())));
                Err(err)
            }
        }
    }

    async fn get_task(&self, id: TaskId, force_update: bool) -> TasksResult<Task> {
        let _guard = self.sync_lock.lock().await;
        if force_update || !self.is_cache_valid() {
            debug!(task_id = %id, force_update, "loading task from remote tier");
            let task = self
                .remote
                .get_task(id)
                .await
                .inspect_err(|err| {
                    warn!(task_id = %id, error = %err, "remote task fetch failed");
                })?;
            self.local
                .save_task(&task)
                .await
                .inspect_err(local_write_failed("get_task"))?;
            self.publish_local().await;
            return Ok(task);
        }
        self.local.get_task(id).await
    }

    async fn refresh_task(&self, id: TaskId) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        let task = self
            .remote
            .get_task(id)
            .await
            .inspect_err(|err| warn!(task_id = %id, error = %err, "remote task fetch failed"))?;
        self.local
            .save_task(&task)
            .await
            .inspect_err(local_write_failed("refresh_task"))?;
        self.publish_local().await;
        Ok(())
    }

    async fn save_task(&self, task: &Task) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        self.remote
            .save_task(task)
            .await
            .inspect_err(remote_write_failed("save_task"))?;
        self.local
            .save_task(task)
            .await
            .inspect_err(local_write_failed("save_task"))?;
        self.publish_local().await;
        Ok(())
    }

    async fn complete_task(&self, task: &Task) -> TasksResult<()> {
        self.set_completion(task, true).await
    }

    async fn activate_task(&self, task: &Task) -> TasksResult<()> {
        self.set_completion(task, false).await
    }

    async fn clear_completed_tasks(&self) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        self.remote
            .clear_completed_tasks()
            .await
            .inspect_err(remote_write_failed("clear_completed_tasks"))?;
        self.local
            .clear_completed_tasks()
            .await
            .inspect_err(local_write_failed("clear_completed_tasks"))?;
        self.publish_local().await;
        Ok(())
    }

    async fn delete_all_tasks(&self) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        self.remote
            .delete_all_tasks()
            .await
            .inspect_err(remote_write_failed("delete_all_tasks"))?;
        self.local
            .delete_all_tasks()
            .await
            .inspect_err(local_write_failed("delete_all_tasks"))?;
        self.publish_local().await;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> TasksResult<()> {
        let _guard = self.sync_lock.lock().await;
        self.invalidate_cache();
        self.remote
            .delete_task(id)
            .await
            .inspect_err(remote_write_failed("delete_task"))?;
        self.local
            .delete_task(id)
            .await
            .inspect_err(local_write_failed("delete_task"))?;
        self.publish_local().await;
        Ok(())
    }

    fn observe_tasks(&self) -> TasksObserver {
        self.observers.subscribe()
    }
}

fn remote_write_failed(operation: &'static str) -> impl Fn(&TasksError) {
    move |err| warn!(operation, error = %err, "remote write failed, local tier left unchanged")
}

fn local_write_failed(operation: &'static str) -> impl Fn(&TasksError) {
    move |err| warn!(operation, error = %err, "local write failed after remote write")
}
