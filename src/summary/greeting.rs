//! Time-of-day greeting.

use chrono::Timelike;
use mockable::Clock;
use std::fmt;

/// Greeting matching the local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 16:59.
    Day,
    /// 17:00 to 21:59.
    Evening,
    /// 22:00 to 04:59.
    Night,
}

impl Greeting {
    /// Picks the greeting for an hour of the day.
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Day,
            17..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Picks the greeting for the clock's local time.
    #[must_use]
    pub fn now(clock: &impl Clock) -> Self {
        Self::for_hour(clock.local().hour())
    }

    /// Returns the greeting text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Day => "Good day",
            Self::Evening => "Good evening",
            Self::Night => "Good night",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
