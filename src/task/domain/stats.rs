//! Completion statistics over a set of tasks.

use super::Task;

/// Percentages of active and completed tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionStats {
    active_percent: f32,
    completed_percent: f32,
}

impl CompletionStats {
    /// Computes statistics for the given tasks.
    ///
    /// An empty slice yields zero for both percentages.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "percentages are inherently fractional and task counts stay far below f32 precision limits"
    )]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            return Self::default();
        }
        let total = tasks.len() as f32;
        let completed = tasks.iter().filter(|task| task.is_completed()).count() as f32;
        let active = total - completed;

        Self {
            active_percent: 100.0 * active / total,
            completed_percent: 100.0 * completed / total,
        }
    }

    /// Returns the share of active tasks, from 0 to 100.
    #[must_use]
    pub const fn active_percent(self) -> f32 {
        self.active_percent
    }

    /// Returns the share of completed tasks, from 0 to 100.
    #[must_use]
    pub const fn completed_percent(self) -> f32 {
        self.completed_percent
    }
}
