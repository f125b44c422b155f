//! Calendar due dates entered as `YYYY/MM/DD`.

use super::TaskDomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due date of a task.
///
/// Stored as `YYYY-MM-DD`; parsed from either `YYYY/MM/DD` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a due date, rejecting impossible dates such as `2025/02/30`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the value does not
    /// consist of three numeric parts forming a real calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use join_board::task::domain::DueDate;
    ///
    /// let date = DueDate::parse("2025-3-7").expect("valid date");
    /// assert_eq!(date.to_input_string(), "2025/03/07");
    /// assert!(DueDate::parse("2025/02/30").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidDueDate(value.to_owned());
        let parts: Vec<&str> = value.trim().split(['/', '-']).collect();
        let [year_text, month_text, day_text] = parts.as_slice() else {
            return Err(invalid());
        };
        let year = year_text.trim().parse::<i32>().map_err(|_| invalid())?;
        let month = month_text.trim().parse::<u32>().map_err(|_| invalid())?;
        let day = day_text.trim().parse::<u32>().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Wraps a calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Formats the date the way the form input expects it.
    #[must_use]
    pub fn to_input_string(self) -> String {
        format!(
            "{:04}/{:02}/{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl TryFrom<String> for DueDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
