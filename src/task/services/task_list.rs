//! Service behind the task list: filtered loading and bulk operations.

use super::{TaskMessage, TaskServiceResult};
use crate::task::{
    domain::{Task, TaskId, TasksFilter},
    ports::TasksRepository,
};
use std::sync::Arc;
use tracing::debug;

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskListService<P>
where
    P: TasksRepository,
{
    repository: Arc<P>,
}

impl<P> TaskListService<P>
where
    P: TasksRepository,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Loads tasks and keeps those matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the repository cannot provide tasks.
    pub async fn load_tasks(
        &self,
        force_update: bool,
        filter: TasksFilter,
    ) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.get_tasks(force_update).await?;
        let total = tasks.len();
        let shown = filter.apply(tasks);
        debug!(?filter, total, shown = shown.len(), "task list loaded");
        Ok(shown)
    }

    /// Marks the task as completed or active.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the repository rejects the change.
    pub async fn complete_task(
        &self,
        task: &Task,
        completed: bool,
    ) -> TaskServiceResult<TaskMessage> {
        if completed {
            self.repository.complete_task(task).await?;
            Ok(TaskMessage::MarkedComplete)
        } else {
            self.repository.activate_task(task).await?;
            Ok(TaskMessage::MarkedActive)
        }
    }

    /// Removes every completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the repository rejects the change.
    pub async fn clear_completed(&self) -> TaskServiceResult<TaskMessage> {
        self.repository.clear_completed_tasks().await?;
        Ok(TaskMessage::CompletedTasksCleared)
    }

    /// Deletes a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the repository rejects the change.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<TaskMessage> {
        self.repository.delete_task(id).await?;
        Ok(TaskMessage::Deleted)
    }
}
