//! Validation rules shared by the task form and the subtask composer.

use super::TitleError;
use serde::{Deserialize, Serialize};

/// Returns `true` for characters allowed in task and subtask titles.
///
/// The allow-list covers ASCII letters and digits, German umlauts and `ß`,
/// the space character and the punctuation `. , : ; ! ? ( ) _ / # + ' & " @ -`.
#[must_use]
pub const fn is_allowed_title_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            'Ä' | 'Ö'
                | 'Ü'
                | 'ä'
                | 'ö'
                | 'ü'
                | 'ß'
                | ' '
                | '.'
                | ','
                | ':'
                | ';'
                | '!'
                | '?'
                | '('
                | ')'
                | '_'
                | '/'
                | '#'
                | '+'
                | '\''
                | '&'
                | '"'
                | '@'
                | '-'
        )
}

/// Length and character rules for titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRules {
    /// Minimum trimmed length in characters.
    pub min_len: usize,
    /// Maximum trimmed length in characters.
    pub max_len: usize,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 100,
        }
    }
}

impl TitleRules {
    /// Validates a title and returns it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TitleError::Empty`] for blank input, [`TitleError::Length`]
    /// when the trimmed length is outside the bounds and
    /// [`TitleError::InvalidCharacter`] for characters outside the
    /// allow-list.
    ///
    /// # Examples
    ///
    /// ```
    /// use join_board::task::domain::{TitleError, TitleRules};
    ///
    /// let rules = TitleRules::default();
    /// assert_eq!(rules.validate("  Fix login  "), Ok("Fix login".to_owned()));
    /// assert_eq!(rules.validate("ok"), Err(TitleError::Length { min: 3, max: 100, actual: 2 }));
    /// assert_eq!(rules.validate("50%"), Err(TitleError::InvalidCharacter('%')));
    /// ```
    pub fn validate(&self, raw: &str) -> Result<String, TitleError> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(TitleError::Empty);
        }

        let actual = title.chars().count();
        if actual < self.min_len || actual > self.max_len {
            return Err(TitleError::Length {
                min: self.min_len,
                max: self.max_len,
                actual,
            });
        }

        if let Some(invalid) = title.chars().find(|c| !is_allowed_title_char(*c)) {
            return Err(TitleError::InvalidCharacter(invalid));
        }

        Ok(title.to_owned())
    }

    /// Returns `true` when [`TitleRules::validate`] accepts the title.
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }
}

/// How many subtasks a submitted task may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubtaskRule {
    /// Zero or at least two subtasks; a single subtask is rejected.
    #[default]
    AnyButOne,
    /// At least two subtasks.
    AtLeastTwo,
    /// Any number of subtasks.
    Any,
}

impl SubtaskRule {
    /// Returns `true` when `count` subtasks satisfy the rule.
    #[must_use]
    pub const fn permits(self, count: usize) -> bool {
        match self {
            Self::AnyButOne => count != 1,
            Self::AtLeastTwo => count >= 2,
            Self::Any => true,
        }
    }
}

/// Rules applied by the task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormRules {
    /// Title rules, shared with subtask titles.
    pub title: TitleRules,
    /// Subtask count rule.
    pub subtasks: SubtaskRule,
}
