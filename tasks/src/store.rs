//! Task list store: the operations the view dispatches.
//!
//! [`TaskListStore`] wraps the generic runtime [`Store`] and turns each
//! operation into a [`TaskAction`]. The outcome is read under the same lock
//! that applied the action, so a rejection is always reported to the caller
//! that caused it.

use crate::error::DispatchError;
use crate::reducer::{TaskEnvironment, TaskReducer};
use crate::types::{TaskAction, TaskState};
use std::time::Duration;
use tasklist_runtime::Store;
use tokio::sync::{broadcast, watch};

/// Runtime store specialised to the task list
pub type TaskStore = Store<TaskState, TaskAction, TaskEnvironment, TaskReducer>;

/// Task list store handed to the presentation layer
#[derive(Clone)]
pub struct TaskListStore {
    store: TaskStore,
}

impl TaskListStore {
    /// Creates an empty store
    #[must_use]
    pub fn new(env: TaskEnvironment) -> Self {
        Self::with_state(TaskState::new(), env)
    }

    /// Creates a store starting from `state`
    #[must_use]
    pub fn with_state(state: TaskState, env: TaskEnvironment) -> Self {
        Self {
            store: Store::new(state, TaskReducer::new(), env),
        }
    }

    /// Replaces the pending input text
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Store`] if the store is shutting down.
    pub async fn edit_input(&self, text: impl Into<String>) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::EditInput { text: text.into() }).await
    }

    /// Appends a task with `input` as its text and clears the pending input
    ///
    /// # Errors
    ///
    /// Returns `TaskError::BlankInput` if `input` is empty or whitespace
    /// only; tasks and pending input are then left as they were and a
    /// notice is raised.
    pub async fn submit_new_task(&self, input: impl Into<String>) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::SubmitTask {
            input: input.into(),
        })
        .await
    }

    /// Submits the current pending input (the add button)
    ///
    /// # Errors
    ///
    /// Same as [`TaskListStore::submit_new_task`].
    pub async fn submit_pending(&self) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::SubmitPending).await
    }

    /// Marks the task at `index` as completed
    ///
    /// Completing an already completed task succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::IndexOutOfRange` if `index` is not a valid position.
    pub async fn complete_task(&self, index: usize) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::CompleteTask { index }).await
    }

    /// Removes the task at `index`; later tasks shift down by one
    ///
    /// # Errors
    ///
    /// Returns `TaskError::IndexOutOfRange` if `index` is not a valid position.
    pub async fn delete_task(&self, index: usize) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::DeleteTask { index }).await
    }

    /// Hides the current notice before it expires
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Store`] if the store is shutting down.
    pub async fn dismiss_notice(&self) -> Result<(), DispatchError> {
        self.dispatch(TaskAction::DismissNotice).await
    }

    /// Number of completed tasks
    pub async fn completed_count(&self) -> usize {
        self.store.state(TaskState::completed_count).await
    }

    /// Copy of the current state, for rendering
    pub async fn snapshot(&self) -> TaskState {
        self.store.state(Clone::clone).await
    }

    /// Change notifications: the value increases after every applied action
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    /// Actions produced by effects, such as notice expiry
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<TaskAction> {
        self.store.subscribe_actions()
    }

    /// Stops accepting actions and waits for pending notice timers
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Store`] if timers are still pending after `timeout`.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), DispatchError> {
        Ok(self.store.shutdown(timeout).await?)
    }

    async fn dispatch(&self, action: TaskAction) -> Result<(), DispatchError> {
        let rejected = self
            .store
            .send_and_inspect(action, |state| state.last_error.clone())
            .await?;

        match rejected {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
