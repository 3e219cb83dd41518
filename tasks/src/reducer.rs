//! Reducer logic for the task list.
//!
//! Commands are validated, turned into events, and events are applied to
//! state in one place (`apply_event`).

use crate::error::TaskError;
use crate::types::{Notice, NoticeKind, Task, TaskAction, TaskState};
use std::time::Duration;
use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// How long a notice stays visible unless configured otherwise
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Environment dependencies for the task reducer
#[derive(Clone, Debug)]
pub struct TaskEnvironment {
    /// How long a notice stays visible before it expires
    pub notice_duration: Duration,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub const fn new(notice_duration: Duration) -> Self {
        Self { notice_duration }
    }
}

impl Default for TaskEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates submitted text. Only blankness is checked; the text is
    /// stored exactly as submitted.
    fn validate_submission(input: &str) -> Result<(), TaskError> {
        if input.trim().is_empty() {
            return Err(TaskError::BlankInput);
        }

        Ok(())
    }

    /// Validates a row index against the current list
    fn validate_index(state: &TaskState, index: usize) -> Result<(), TaskError> {
        if index >= state.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: state.len(),
            });
        }

        Ok(())
    }

    /// Turns a submission into its event, plus the notice expiry effect when rejected
    fn submit(
        state: &mut TaskState,
        input: String,
        env: &TaskEnvironment,
    ) -> SmallVec<[Effect<TaskAction>; 4]> {
        if let Err(error) = Self::validate_submission(&input) {
            tracing::debug!(%error, "Submission rejected");

            let notice_id = state.next_notice_id;
            Self::apply_event(state, &TaskAction::InputRejected { notice_id });

            return smallvec![Effect::delay(
                env.notice_duration,
                TaskAction::NoticeExpired { notice_id },
            )];
        }

        Self::apply_event(state, &TaskAction::TaskAdded { text: input });
        SmallVec::new()
    }

    /// Validates an index command and applies `event` if it passes
    fn indexed(state: &mut TaskState, index: usize, event: &TaskAction) {
        match Self::validate_index(state, index) {
            Ok(()) => Self::apply_event(state, event),
            Err(error) => {
                tracing::error!(%error, command = event.name(), "Rejected command with invalid index");
                Self::apply_event(state, &TaskAction::CommandRejected { error });
            },
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut TaskState, action: &TaskAction) {
        match action {
            TaskAction::InputEdited { text } => {
                state.pending_input.clone_from(text);
            },
            TaskAction::TaskAdded { text } => {
                state.tasks.push(Task::new(text.clone()));
                state.pending_input.clear();
                state.notice = None;
            },
            TaskAction::TaskCompleted { index } => {
                if let Some(task) = state.tasks.get_mut(*index) {
                    if task.done {
                        tracing::debug!(index, "Task already completed");
                    }
                    task.complete();
                }
            },
            TaskAction::TaskDeleted { index } => {
                if *index < state.tasks.len() {
                    state.tasks.remove(*index);
                }
            },
            TaskAction::InputRejected { notice_id } => {
                state.notice = Some(Notice {
                    id: *notice_id,
                    kind: NoticeKind::BlankInput,
                });
                state.next_notice_id = state.next_notice_id.max(notice_id.saturating_add(1));
                state.last_error = Some(TaskError::BlankInput);
            },
            TaskAction::CommandRejected { error } => {
                state.last_error = Some(error.clone());
            },
            TaskAction::NoticeExpired { notice_id } => {
                if state.notice.is_some_and(|notice| notice.id == *notice_id) {
                    state.notice = None;
                }
            },
            // Commands are not applied to state
            TaskAction::EditInput { .. }
            | TaskAction::SubmitTask { .. }
            | TaskAction::SubmitPending
            | TaskAction::CompleteTask { .. }
            | TaskAction::DeleteTask { .. }
            | TaskAction::DismissNotice => {},
        }
    }
}

impl Default for TaskReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskReducer {
    type State = TaskState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // last_error always describes the most recent command
        if action.is_command() {
            state.last_error = None;
        }

        match action {
            // ========== Commands ==========
            TaskAction::EditInput { text } => {
                Self::apply_event(state, &TaskAction::InputEdited { text });
                SmallVec::new()
            },

            TaskAction::SubmitTask { input } => Self::submit(state, input, env),

            TaskAction::SubmitPending => {
                let input = state.pending_input.clone();
                Self::submit(state, input, env)
            },

            TaskAction::CompleteTask { index } => {
                Self::indexed(state, index, &TaskAction::TaskCompleted { index });
                SmallVec::new()
            },

            TaskAction::DeleteTask { index } => {
                Self::indexed(state, index, &TaskAction::TaskDeleted { index });
                SmallVec::new()
            },

            TaskAction::DismissNotice => {
                if let Some(notice) = state.notice {
                    Self::apply_event(state, &TaskAction::NoticeExpired { notice_id: notice.id });
                }
                SmallVec::new()
            },

            // ========== Events ==========
            TaskAction::InputEdited { .. }
            | TaskAction::TaskAdded { .. }
            | TaskAction::TaskCompleted { .. }
            | TaskAction::TaskDeleted { .. }
            | TaskAction::InputRejected { .. }
            | TaskAction::CommandRejected { .. }
            | TaskAction::NoticeExpired { .. } => {
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}
