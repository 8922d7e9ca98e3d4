//! Repository port consumed by task services.

use super::{Outcome, TasksResult};
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use tokio::sync::watch;

/// Receiver of task list updates.
pub type TasksObserver = watch::Receiver<Outcome<Vec<Task>>>;

/// Task access as seen by application services.
///
/// Implementations decide where tasks come from; callers only choose
/// whether a read may be served from a cache.
#[async_trait]
pub trait TasksRepository: Send + Sync {
    /// Returns every task, refreshing from the authoritative source when
    /// `force_update` is set or the cache is not valid.
    async fn get_tasks(&self, force_update: bool) -> TasksResult<Vec<Task>>;

    /// Discards cached tasks and reloads them from the authoritative source,
    /// publishing the result to observers.
    async fn refresh_tasks(&self) -> TasksResult<()>;

    /// Returns a single task, fetching it from the authoritative source when
    /// `force_update` is set or the cache is not valid.
    async fn get_task(&self, id: TaskId, force_update: bool) -> TasksResult<Task>;

    /// Reloads a single task from the authoritative source into the cache.
    async fn refresh_task(&self, id: TaskId) -> TasksResult<()>;

    /// Stores a new or edited task.
    async fn save_task(&self, task: &Task) -> TasksResult<()>;

    /// Marks the task as completed.
    async fn complete_task(&self, task: &Task) -> TasksResult<()>;

    /// Marks the task as active.
    async fn activate_task(&self, task: &Task) -> TasksResult<()>;

    /// Deletes every completed task.
    async fn clear_completed_tasks(&self) -> TasksResult<()>;

    /// Deletes every task.
    async fn delete_all_tasks(&self) -> TasksResult<()>;

    /// Deletes a single task.
    async fn delete_task(&self, id: TaskId) -> TasksResult<()>;

    /// Subscribes to task list updates.
    ///
    /// The receiver starts with the latest published value, which is
    /// [`Outcome::Loading`] until the first load completes.
    fn observe_tasks(&self) -> TasksObserver;
}
