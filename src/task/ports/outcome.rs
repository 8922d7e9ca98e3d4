//! Tagged outcome delivered to task observers.

use super::TasksError;
use std::fmt;
use std::sync::Arc;

/// Success, failure, or in-flight state of a task query.
///
/// Direct calls return [`Result`]; `Outcome` adds the `Loading` state so
/// that observers can tell a pending refresh apart from its result.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The query completed with data.
    Success(T),
    /// The query failed.
    Error(Arc<TasksError>),
    /// The query is still running.
    Loading,
}

impl<T> Outcome<T> {
    /// Returns `true` only for [`Outcome::Success`].
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Loading`].
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data when the outcome is a success.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) | Self::Loading => None,
        }
    }

    /// Returns the error when the outcome is a failure.
    #[must_use]
    pub fn error(&self) -> Option<&TasksError> {
        match self {
            Self::Error(err) => Some(err.as_ref()),
            Self::Success(_) | Self::Loading => None,
        }
    }

    /// Maps the success value, keeping error and loading states.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Error(err) => Outcome::Error(err),
            Self::Loading => Outcome::Loading,
        }
    }
}

impl<T> From<Result<T, TasksError>> for Outcome<T> {
    fn from(result: Result<T, TasksError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(Arc::new(err)),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(data) => write!(f, "Success[data={data:?}]"),
            Self::Error(err) => write!(f, "Error[exception={err}]"),
            Self::Loading => f.write_str("Loading"),
        }
    }
}
