//! Data source port: one tier of task storage.

use super::TasksResult;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;

/// Task storage contract shared by the remote and local tiers.
#[async_trait]
pub trait TasksDataSource: Send + Sync {
    /// Returns every stored task ordered by identifier.
    async fn get_tasks(&self) -> TasksResult<Vec<Task>>;

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::NotFound`](super::TasksError::NotFound) when no
    /// task has the identifier.
    async fn get_task(&self, id: TaskId) -> TasksResult<Task>;

    /// Inserts the task, replacing any stored task with the same identifier.
    async fn save_task(&self, task: &Task) -> TasksResult<()>;

    /// Marks a stored task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::NotFound`](super::TasksError::NotFound) when no
    /// task has the identifier.
    async fn complete_task(&self, id: TaskId) -> TasksResult<()>;

    /// Marks a stored task as active.
    ///
    /// # Errors
    ///
    /// Returns [`TasksError::NotFound`](super::TasksError::NotFound) when no
    /// task has the identifier.
    async fn activate_task(&self, id: TaskId) -> TasksResult<()>;

    /// Deletes every completed task.
    async fn clear_completed_tasks(&self) -> TasksResult<()>;

    /// Deletes every task.
    async fn delete_all_tasks(&self) -> TasksResult<()>;

    /// Deletes a task. Deleting an unknown identifier succeeds.
    async fn delete_task(&self, id: TaskId) -> TasksResult<()>;

    /// Overwrites the whole store with `tasks`.
    ///
    /// The default implementation deletes everything and saves each task in
    /// turn; adapters with transactions should override it.
    async fn replace_all_tasks(&self, tasks: &[Task]) -> TasksResult<()> {
        self.delete_all_tasks().await?;
        for task in tasks {
            self.save_task(task).await?;
        }
        Ok(())
    }
}
