//! Task value type.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A to-do item.
///
/// Tasks are immutable once constructed. The completion flag is changed by
/// consuming the task through [`Task::completed`] or [`Task::activated`],
/// which return a new value with the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl Task {
    /// Creates a new active task with a freshly generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title, description, false)
    }

    /// Reconstructs a task with a known identifier and completion state.
    #[must_use]
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    /// Returns `true` when either the title or the description is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() || self.description.trim().is_empty()
    }

    /// Returns the text shown for this task in a list: the title, or the
    /// description when the title is empty.
    #[must_use]
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }

    /// Consumes the task and returns it marked as completed.
    #[must_use]
    pub fn completed(self) -> Self {
        self.with_completion(true)
    }

    /// Consumes the task and returns it marked as active.
    #[must_use]
    pub fn activated(self) -> Self {
        self.with_completion(false)
    }

    /// Consumes the task and returns it with the given completion flag.
    #[must_use]
    pub fn with_completion(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}
