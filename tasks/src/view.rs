//! View renderer.
//!
//! [`render`] is a pure function of the store state and the string table.
//! The resulting [`Screen`] is drawn to a terminal through its `Display`
//! implementation.

use crate::strings::{StringKey, Strings};
use crate::types::{NoticeKind, TaskState};
use std::fmt;

const STRIKE_ON: &str = "\x1b[9m";
const STYLE_OFF: &str = "\x1b[0m";

/// One rendered task row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Position of the task in the list
    pub index: usize,
    /// Task text
    pub text: String,
    /// Whether the task is drawn as completed
    pub done: bool,
    /// Label of the complete action
    pub complete_label: &'static str,
    /// Label of the delete action
    pub delete_label: &'static str,
}

impl Row {
    /// 1-based row number shown to the user
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index.saturating_add(1)
    }
}

/// Everything the screen shows, already localized
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Banner title
    pub title: &'static str,
    /// Current content of the input field
    pub input: String,
    /// Placeholder shown while the input field is empty
    pub placeholder: &'static str,
    /// Add button label
    pub button: &'static str,
    /// Completed tasks counter
    pub counter: String,
    /// Task rows in list order
    pub rows: Vec<Row>,
    /// Transient notice text
    pub toast: Option<&'static str>,
    /// Use ANSI escapes (strikethrough for completed rows)
    pub ansi: bool,
}

impl Screen {
    /// Enables or disables ANSI styling
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Renders the screen for `state`
#[must_use]
pub fn render(state: &TaskState, strings: &Strings) -> Screen {
    let rows = state
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| Row {
            index,
            text: task.text.clone(),
            done: task.done,
            complete_label: strings.get(StringKey::CompleteTaskDescription),
            delete_label: strings.get(StringKey::DeleteTaskDescription),
        })
        .collect();

    let toast = state.notice.map(|notice| match notice.kind {
        NoticeKind::BlankInput => strings.get(StringKey::BlankInputError),
    });

    Screen {
        title: strings.get(StringKey::AppTitle),
        input: state.pending_input.clone(),
        placeholder: strings.get(StringKey::InputHint),
        button: strings.get(StringKey::AddButton),
        counter: strings.completed_counter(state.completed_count()),
        rows,
        toast,
        ansi: false,
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(self.title.chars().count() + 8);
        writeln!(f, "{rule}")?;
        writeln!(f, "    {}", self.title)?;
        writeln!(f, "{rule}")?;

        if self.input.is_empty() {
            writeln!(f, "> ({})  [{}]", self.placeholder, self.button)?;
        } else {
            writeln!(f, "> {}  [{}]", self.input, self.button)?;
        }

        writeln!(f, "{}", self.counter)?;

        for row in &self.rows {
            let mark = if row.done { 'x' } else { ' ' };
            if row.done && self.ansi {
                writeln!(f, "{:>3}. [{mark}] {STRIKE_ON}{}{STYLE_OFF}", row.number(), row.text)?;
            } else if row.done {
                writeln!(f, "{:>3}. [{mark}] ~{}~", row.number(), row.text)?;
            } else {
                writeln!(f, "{:>3}. [{mark}] {}", row.number(), row.text)?;
            }
        }

        if let Some(toast) = self.toast {
            writeln!(f, "! {toast}")?;
        }

        Ok(())
    }
}
