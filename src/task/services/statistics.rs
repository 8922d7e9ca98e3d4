//! Service behind the statistics view.

use crate::task::{domain::CompletionStats, ports::TasksRepository};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Result of a statistics refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatisticsView {
    /// Loading tasks failed.
    pub error: bool,
    /// There are no tasks to summarise.
    pub empty: bool,
    /// Active and completed percentages.
    pub stats: CompletionStats,
}

/// Statistics service.
pub struct StatisticsService<P>
where
    P: TasksRepository,
{
    repository: Arc<P>,
    loading: watch::Sender<bool>,
}

impl<P> StatisticsService<P>
where
    P: TasksRepository,
{
    /// Creates a new statistics service.
    #[must_use]
    pub fn new(repository: Arc<P>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            repository,
            loading,
        }
    }

    /// Reloads every task from the authoritative source and summarises it.
    ///
    /// Failures are reported through [`StatisticsView::error`] rather than
    /// returned.
    pub async fn refresh(&self) -> StatisticsView {
        self.loading.send_replace(true);
        let view = match self.repository.get_tasks(true).await {
            Ok(tasks) => StatisticsView {
                error: false,
                empty: tasks.is_empty(),
                stats: CompletionStats::from_tasks(&tasks),
            },
            Err(err) => {
                warn!(error = %err, "loading tasks for statistics failed");
                StatisticsView {
                    error: true,
                    empty: true,
                    stats: CompletionStats::default(),
                }
            }
        };
        self.loading.send_replace(false);
        view
    }

    /// Subscribes to the loading flag, `true` while a refresh is running.
    #[must_use]
    pub fn observe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}
