//! Localizable string resources.
//!
//! The store never looks at these; only the view renderer does.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder replaced by the number of completed tasks
const COUNT_PLACEHOLDER: &str = "{count}";

/// Supported display languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Spanish (default)
    #[default]
    Es,
    /// English
    En,
}

/// Returned when parsing an unsupported locale tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale `{0}` (expected `es` or `en`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region tags such as `es-MX` or `en_US`
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Es => write!(f, "es"),
            Self::En => write!(f, "en"),
        }
    }
}

/// Keys of every user-visible string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Banner title
    AppTitle,
    /// Placeholder shown in the empty input field
    InputHint,
    /// Label of the add button
    AddButton,
    /// Notice shown for a blank submission
    BlankInputError,
    /// Completed counter, contains `{count}`
    CompletedCounter,
    /// Accessibility label of the complete action
    CompleteTaskDescription,
    /// Accessibility label of the delete action
    DeleteTaskDescription,
}

/// String table for one locale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Strings {
    locale: Locale,
}

impl Strings {
    /// Creates the string table for `locale`
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Locale of this table
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Looks up a string
    #[must_use]
    pub const fn get(&self, key: StringKey) -> &'static str {
        match self.locale {
            Locale::Es => match key {
                StringKey::AppTitle => "Lista de Tareas",
                StringKey::InputHint => "Nueva tarea",
                StringKey::AddButton => "Agregar",
                StringKey::BlankInputError => "Por favor, escribe una tarea",
                StringKey::CompletedCounter => "Tareas completadas: {count}",
                StringKey::CompleteTaskDescription => "Marcar como completada",
                StringKey::DeleteTaskDescription => "Eliminar tarea",
            },
            Locale::En => match key {
                StringKey::AppTitle => "Task List",
                StringKey::InputHint => "New task",
                StringKey::AddButton => "Add",
                StringKey::BlankInputError => "Please enter a task",
                StringKey::CompletedCounter => "Completed tasks: {count}",
                StringKey::CompleteTaskDescription => "Mark as completed",
                StringKey::DeleteTaskDescription => "Delete task",
            },
        }
    }

    /// Formats the completed counter
    #[must_use]
    pub fn completed_counter(&self, count: usize) -> String {
        self.get(StringKey::CompletedCounter)
            .replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_tags() {
        assert_eq!("es".parse(), Ok(Locale::Es));
        assert_eq!("EN".parse(), Ok(Locale::En));
        assert_eq!("es-MX".parse(), Ok(Locale::Es));
        assert_eq!("en_US".parse(), Ok(Locale::En));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn counter_substitutes_count() {
        assert_eq!(
            Strings::new(Locale::Es).completed_counter(3),
            "Tareas completadas: 3"
        );
        assert_eq!(
            Strings::new(Locale::En).completed_counter(0),
            "Completed tasks: 0"
        );
    }

    #[test]
    fn default_table_is_spanish() {
        let strings = Strings::default();
        assert_eq!(strings.locale(), Locale::Es);
        assert_eq!(strings.get(StringKey::AddButton), "Agregar");
    }
}
