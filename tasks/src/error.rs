//! Error types for task list operations.

use serde::{Deserialize, Serialize};
use tasklist_runtime::StoreError;
use thiserror::Error;

/// A command rejected by the task reducer
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskError {
    /// The submitted text was empty or whitespace only
    #[error("task text cannot be blank")]
    BlankInput,

    /// A row index outside the current list was used
    ///
    /// Callers only ever pass indices from the list they just rendered, so
    /// this indicates a contract violation rather than a user mistake.
    #[error("task index {index} is out of range for a list of {len}")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// Length of the list at the time
        len: usize,
    },
}

impl TaskError {
    /// Returns true if this error should be shown to the user as a notice
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::BlankInput)
    }
}

/// Error returned by [`TaskListStore`](crate::store::TaskListStore) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The reducer rejected the command; state was left unchanged
    #[error(transparent)]
    Rejected(#[from] TaskError),

    /// The store did not accept the action
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DispatchError {
    /// The task error behind this failure, if the reducer rejected the command
    #[must_use]
    pub const fn task_error(&self) -> Option<&TaskError> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Store(_) => None,
        }
    }
}
