//! Domain types for the task list.
//!
//! A task list is an ordered sequence of tasks plus the text of the input
//! field that has not been submitted yet. Tasks have no identity beyond
//! their position.

use crate::error::TaskError;
use serde::{Deserialize, Serialize};
use tasklist_macros::Action;

/// A single to-do entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Display text, fixed at creation
    pub text: String,
    /// Whether the task is completed
    pub done: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Marks the task as completed. Completing twice changes nothing.
    pub const fn complete(&mut self) {
        self.done = true;
    }
}

/// What a notice is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// A blank submission was rejected
    BlankInput,
}

/// Transient message shown to the user until it expires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Sequence number, so a stale expiry cannot clear a newer notice
    pub id: u64,
    /// What the notice reports
    pub kind: NoticeKind,
}

/// State of the task list screen
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    /// All tasks in insertion order
    pub tasks: Vec<Task>,
    /// Text typed into the input field but not submitted yet
    pub pending_input: String,
    /// Notice currently displayed, if any
    pub notice: Option<Notice>,
    /// Why the most recent command was rejected (if it was)
    pub last_error: Option<TaskError>,
    /// Id given to the next notice
    #[serde(default)]
    pub(crate) next_notice_id: u64,
}

impl TaskState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding the given tasks
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks
    ///
    /// Always recounted from the list, never cached.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Returns the task at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }
}

/// Actions representing commands and events for the task list
///
/// Commands are what the view dispatches. The reducer validates them and
/// applies the matching event. Events may also be sent directly, in which
/// case they are applied as-is.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    // ========== Commands ==========
    /// Command: Replace the text of the input field
    #[command]
    EditInput {
        /// New content of the field
        text: String,
    },

    /// Command: Add a task with the given text
    #[command]
    SubmitTask {
        /// Text as typed by the user
        input: String,
    },

    /// Command: Add a task from the current input field
    #[command]
    SubmitPending,

    /// Command: Mark a task as completed
    #[command]
    CompleteTask {
        /// Position of the task
        index: usize,
    },

    /// Command: Delete a task
    #[command]
    DeleteTask {
        /// Position of the task
        index: usize,
    },

    /// Command: Hide the current notice
    #[command]
    DismissNotice,

    // ========== Events ==========
    /// Event: Input field text changed
    #[event]
    InputEdited {
        /// New content of the field
        text: String,
    },

    /// Event: Task was appended
    #[event]
    TaskAdded {
        /// Text of the new task
        text: String,
    },

    /// Event: Task was completed
    #[event]
    TaskCompleted {
        /// Position of the task
        index: usize,
    },

    /// Event: Task was removed
    #[event]
    TaskDeleted {
        /// Position the task had
        index: usize,
    },

    /// Event: Blank submission rejected, notice raised
    #[event]
    InputRejected {
        /// Id of the raised notice
        notice_id: u64,
    },

    /// Event: Command rejected without a notice
    #[event]
    CommandRejected {
        /// Why the command was rejected
        error: TaskError,
    },

    /// Event: Notice display time elapsed (or notice dismissed)
    #[event]
    NoticeExpired {
        /// Id of the notice to clear
        notice_id: u64,
    },
}
