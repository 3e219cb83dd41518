//! # Task List Testing
//!
//! Testing utilities for reducers built on `tasklist-core`.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then harness for reducers
//! - [`assertions`]: helpers for checking returned effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TaskReducer::new())
//!     .with_env(TaskEnvironment::default())
//!     .given_state(TaskState::new())
//!     .when_action(TaskAction::SubmitTask { input: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};
