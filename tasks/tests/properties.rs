//! Property tests for the task reducer.
//!
//! Each property runs the reducer directly against arbitrary task lists and
//! operation sequences.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use proptest::prelude::*;
use tasklist_core::reducer::Reducer;
use tasks::{Task, TaskAction, TaskEnvironment, TaskError, TaskReducer, TaskState};

fn reduce(state: &mut TaskState, action: TaskAction) {
    let _effects = TaskReducer::new().reduce(state, action, &TaskEnvironment::default());
}

fn arb_task() -> impl Strategy<Value = Task> {
    ("[a-z ]{0,12}", any::<bool>()).prop_map(|(text, done)| Task { text, done })
}

fn arb_state() -> impl Strategy<Value = TaskState> {
    (prop::collection::vec(arb_task(), 0..8), "[a-z ]{0,8}").prop_map(|(tasks, pending)| {
        let mut state = TaskState::with_tasks(tasks);
        state.pending_input = pending;
        state
    })
}

fn arb_whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

#[derive(Clone, Debug)]
enum Op {
    Edit(String),
    Submit(String),
    SubmitPending,
    Complete(usize),
    Delete(usize),
    Dismiss,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,6}".prop_map(Op::Edit),
        "[a-z ]{0,6}".prop_map(Op::Submit),
        Just(Op::SubmitPending),
        (0usize..10).prop_map(Op::Complete),
        (0usize..10).prop_map(Op::Delete),
        Just(Op::Dismiss),
    ]
}

impl From<Op> for TaskAction {
    fn from(op: Op) -> Self {
        match op {
            Op::Edit(text) => Self::EditInput { text },
            Op::Submit(input) => Self::SubmitTask { input },
            Op::SubmitPending => Self::SubmitPending,
            Op::Complete(index) => Self::CompleteTask { index },
            Op::Delete(index) => Self::DeleteTask { index },
            Op::Dismiss => Self::DismissNotice,
        }
    }
}

proptest! {
    #[test]
    fn blank_submission_changes_neither_tasks_nor_input(
        state in arb_state(),
        blank in arb_whitespace(),
    ) {
        let mut after = state.clone();
        reduce(&mut after, TaskAction::SubmitTask { input: blank });

        prop_assert_eq!(&after.tasks, &state.tasks);
        prop_assert_eq!(&after.pending_input, &state.pending_input);
        prop_assert_eq!(after.last_error, Some(TaskError::BlankInput));
        prop_assert!(after.notice.is_some());
    }

    #[test]
    fn non_blank_submission_appends_one_active_task(
        state in arb_state(),
        text in "[ ]{0,2}[a-z][a-z ]{0,10}",
    ) {
        let mut after = state.clone();
        reduce(&mut after, TaskAction::SubmitTask { input: text.clone() });

        prop_assert_eq!(after.len(), state.len() + 1);
        prop_assert_eq!(&after.tasks[..state.len()], &state.tasks[..]);
        prop_assert_eq!(after.tasks.last(), Some(&Task::new(text)));
        prop_assert!(after.pending_input.is_empty());
        prop_assert_eq!(after.last_error, None);
    }

    #[test]
    fn complete_changes_only_the_target_flag(
        state in arb_state().prop_filter("needs a task", |s| !s.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(state.len());
        let mut after = state.clone();
        reduce(&mut after, TaskAction::CompleteTask { index });

        prop_assert_eq!(after.len(), state.len());
        for (i, (before, now)) in state.tasks.iter().zip(&after.tasks).enumerate() {
            prop_assert_eq!(&before.text, &now.text);
            if i == index {
                prop_assert!(now.done);
            } else {
                prop_assert_eq!(before.done, now.done);
            }
        }
    }

    #[test]
    fn delete_removes_exactly_one_and_shifts(
        state in arb_state().prop_filter("needs a task", |s| !s.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(state.len());
        let mut after = state.clone();
        reduce(&mut after, TaskAction::DeleteTask { index });

        let mut expected = state.tasks.clone();
        expected.remove(index);
        prop_assert_eq!(after.tasks, expected);
    }

    #[test]
    fn out_of_range_index_leaves_tasks_unchanged(
        state in arb_state(),
        offset in 0usize..5,
        delete in any::<bool>(),
    ) {
        let index = state.len() + offset;
        let action = if delete {
            TaskAction::DeleteTask { index }
        } else {
            TaskAction::CompleteTask { index }
        };

        let mut after = state.clone();
        reduce(&mut after, action);

        prop_assert_eq!(&after.tasks, &state.tasks);
        prop_assert_eq!(
            after.last_error,
            Some(TaskError::IndexOutOfRange { index, len: state.len() })
        );
    }

    #[test]
    fn completed_count_matches_recount(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut state = TaskState::new();

        for op in ops {
            reduce(&mut state, op.into());
            let recount = state.tasks.iter().filter(|task| task.done).count();
            prop_assert_eq!(state.completed_count(), recount);
        }
    }
}
