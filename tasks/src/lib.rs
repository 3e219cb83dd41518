//! Single-screen task list built on the reducer architecture.
//!
//! The list is an ordered collection of tasks addressed by position. Every
//! change goes through [`TaskReducer`]; [`TaskListStore`] is the only way the
//! presentation layer mutates state, and it publishes a change notification
//! after every applied action. Rendering is a pure function of the state.
//!
//! # Quick Start
//!
//! ```no_run
//! use tasks::{render, Locale, Strings, TaskEnvironment, TaskListStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TaskListStore::new(TaskEnvironment::default());
//!
//! store.submit_new_task("Buy milk").await?;
//! store.submit_new_task("Walk the dog").await?;
//! store.complete_task(0).await?;
//!
//! let state = store.snapshot().await;
//! assert_eq!(state.completed_count(), 1);
//! print!("{}", render(&state, &Strings::new(Locale::En)));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod reducer;
pub mod store;
pub mod strings;
pub mod types;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use error::{DispatchError, TaskError};
pub use input::{parse, ParseError, UiEvent};
pub use reducer::{TaskEnvironment, TaskReducer};
pub use store::TaskListStore;
pub use strings::{Locale, StringKey, Strings};
pub use types::{Notice, NoticeKind, Task, TaskAction, TaskState};
pub use view::{render, Row, Screen};
