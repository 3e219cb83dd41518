//! User events for the terminal front end.
//!
//! Each input line is parsed into a [`UiEvent`], which [`dispatch`] turns
//! into a store operation. Row numbers are 1-based on screen and converted
//! to 0-based indices here.

use crate::error::DispatchError;
use crate::store::TaskListStore;
use thiserror::Error;

/// Command summary printed for `help`
pub const HELP: &str = "\
commands:
  type <text>   set the input field (empty clears it)
  add           add the input field as a task
  add <text>    add <text> as a task
  done <n>      mark row n as completed
  rm <n>        delete row n
  dismiss       hide the current notice
  help          show this help
  quit          exit";

/// An interaction with the screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Typing into the input field
    Type(String),
    /// Pressing the add button
    Add,
    /// Typing `text` and pressing add in one step
    AddText(String),
    /// Pressing the complete icon of a row (0-based index)
    Complete(usize),
    /// Pressing the delete icon of a row (0-based index)
    Delete(usize),
    /// Closing the current notice
    Dismiss,
    /// Showing the command summary
    Help,
    /// Leaving the application
    Quit,
}

/// Why an input line could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first word is not a known command
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    /// A row command without a valid 1-based row number
    #[error("`{command}` expects a row number starting at 1, got `{given}`")]
    InvalidRow {
        /// Command word
        command: String,
        /// Text given as the row number
        given: String,
    },
}

/// Parses one input line
///
/// The text after `type` and `add` is kept verbatim, including spaces, so
/// a blank submission can be expressed as `add` followed by spaces.
///
/// # Errors
///
/// Returns [`ParseError`] for unknown commands and bad row numbers.
pub fn parse(line: &str) -> Result<UiEvent, ParseError> {
    let line = line.trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command.to_ascii_lowercase().as_str() {
        "type" => Ok(UiEvent::Type(rest.to_string())),
        "add" if rest.is_empty() => Ok(UiEvent::Add),
        "add" => Ok(UiEvent::AddText(rest.to_string())),
        "done" | "x" => parse_row(command, rest).map(UiEvent::Complete),
        "rm" | "del" => parse_row(command, rest).map(UiEvent::Delete),
        "dismiss" => Ok(UiEvent::Dismiss),
        "help" | "?" => Ok(UiEvent::Help),
        "quit" | "exit" | "q" => Ok(UiEvent::Quit),
        _ => Err(ParseError::UnknownCommand(command.to_string())),
    }
}

fn parse_row(command: &str, given: &str) -> Result<usize, ParseError> {
    given
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| ParseError::InvalidRow {
            command: command.to_string(),
            given: given.trim().to_string(),
        })
}

/// Applies a user event to the store
///
/// `Help` and `Quit` are handled by the caller and do nothing here.
///
/// # Errors
///
/// Returns the store's [`DispatchError`] for rejected operations.
pub async fn dispatch(store: &TaskListStore, event: UiEvent) -> Result<(), DispatchError> {
    match event {
        UiEvent::Type(text) => store.edit_input(text).await,
        UiEvent::Add => store.submit_pending().await,
        UiEvent::AddText(text) => store.submit_new_task(text).await,
        UiEvent::Complete(index) => store.complete_task(index).await,
        UiEvent::Delete(index) => store.delete_task(index).await,
        UiEvent::Dismiss => store.dismiss_notice().await,
        UiEvent::Help | UiEvent::Quit => Ok(()),
    }
}
