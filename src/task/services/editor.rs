//! Service behind task creation and editing.

use super::{TaskMessage, TaskServiceResult};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::TasksRepository,
};
use std::sync::Arc;

/// Task editing service.
#[derive(Clone)]
pub struct TaskEditorService<P>
where
    P: TasksRepository,
{
    repository: Arc<P>,
}

impl<P> TaskEditorService<P>
where
    P: TasksRepository,
{
    /// Creates a new task editing service.
    #[must_use]
    pub const fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Loads a task for editing, preferring the local cache.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the task cannot be loaded.
    pub async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        Ok(self.repository.get_task(id, false).await?)
    }

    /// Creates and stores a new active task, reporting
    /// [`TaskMessage::Added`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when the title or description is
    /// blank, or a repository error when storing fails.
    pub async fn create_task(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> TaskServiceResult<(Task, TaskMessage)> {
        let task = Task::new(title, description);
        if task.is_empty() {
            return Err(TaskDomainError::EmptyTask.into());
        }
        self.repository.save_task(&task).await?;
        Ok((task, TaskMessage::Added))
    }

    /// Replaces the title and description of an existing task, keeping its
    /// completion state, and reports [`TaskMessage::Saved`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTask`] when the title or description is
    /// blank, or a repository error when the task cannot be loaded or stored.
    pub async fn update_task(
        &self,
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> TaskServiceResult<(Task, TaskMessage)> {
        let existing = self.repository.get_task(id, false).await?;
        let updated = Task::with_id(id, title, description, existing.is_completed());
        if updated.is_empty() {
            return Err(TaskDomainError::EmptyTask.into());
        }
        self.repository.save_task(&updated).await?;
        Ok((updated, TaskMessage::Saved))
    }
}
