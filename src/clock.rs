//! Source of "today" for temporal field checks.

use chrono::{Local, NaiveDate, Utc};

/// Where the current calendar date is read from.
///
/// Birthday checks compare against the date returned by [`Clock::today`],
/// read once per validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Host local time zone
    #[default]
    Local,

    /// UTC
    Utc,

    /// A pinned date, used by tests and replays
    Fixed(NaiveDate),
}

impl Clock {
    /// Today's date according to this clock.
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Utc => Utc::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    /// Parse the `CONTACTS_CLOCK` setting (`local` or `utc`, case-insensitive).
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Clock::Local),
            "utc" => Some(Clock::Utc),
            _ => None,
        }
    }
}
