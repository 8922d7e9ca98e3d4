//! User-facing outcomes of task operations and filter presentation.

use crate::task::domain::TasksFilter;
use std::fmt;

/// Notification produced by a completed task operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskMessage {
    /// A new task was stored.
    Added,
    /// An edited task was stored.
    Saved,
    /// A task was deleted.
    Deleted,
    /// A task was marked as completed.
    MarkedComplete,
    /// A task was marked as active.
    MarkedActive,
    /// All completed tasks were removed.
    CompletedTasksCleared,
}

impl TaskMessage {
    /// Returns the message text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Added => "Task added",
            Self::Saved => "Task saved",
            Self::Deleted => "Task was deleted",
            Self::MarkedComplete => "Task marked complete",
            Self::MarkedActive => "Task marked active",
            Self::CompletedTasksCleared => "Completed tasks cleared",
        }
    }
}

impl fmt::Display for TaskMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// How a task list presents a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterView {
    /// Heading for the filtered list.
    pub label: &'static str,
    /// Text shown when the filtered list is empty.
    pub no_tasks_label: &'static str,
    /// Whether adding a task is offered alongside the list.
    pub add_task_visible: bool,
}

impl FilterView {
    /// Returns the presentation for `filter`.
    #[must_use]
    pub const fn for_filter(filter: TasksFilter) -> Self {
        match filter {
            TasksFilter::All => Self {
                label: "All Tasks",
                no_tasks_label: "You have no TO-DOs!",
                add_task_visible: true,
            },
            TasksFilter::Active => Self {
                label: "Active Tasks",
                no_tasks_label: "You have no active TO-DOs!",
                add_task_visible: false,
            },
            TasksFilter::Completed => Self {
                label: "Completed Tasks",
                no_tasks_label: "You have no completed TO-DOs!",
                add_task_visible: false,
            },
        }
    }
}
