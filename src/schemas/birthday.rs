//! Query parameters for the "upcoming birthdays" lookup.

use super::fields::{self, FieldReader};
use crate::error::{ValidationError, ValidationResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use validator::Validate;

/// Largest accepted look-ahead window, a leap year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u16 = 366;

const QUERY_FIELDS: &[&str] = &["days"];

/// How many days ahead to search for birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BirthdayQuery {
    /// Window size in days, 0 to 366 inclusive
    #[schemars(range(min = 0, max = 366))]
    pub days: u16,
}

#[derive(Debug, Validate)]
struct BirthdayQueryDraft {
    #[validate(range(min = 0, max = 366, message = "Input should be between 0 and 366"))]
    days: Option<i64>,
}

impl BirthdayQuery {
    /// Build from an already typed integer.
    pub fn new(days: i64) -> ValidationResult<Self> {
        Self::from_draft(BirthdayQueryDraft { days: Some(days) })
    }

    /// Validate untyped input such as a parsed query string or JSON body.
    pub fn from_json(raw: &Value) -> ValidationResult<Self> {
        let mut reader = FieldReader::new(raw)?;
        let draft = BirthdayQueryDraft {
            days: reader.required_int("days"),
        };
        if let Err(err) = reader.finish(QUERY_FIELDS) {
            debug!(fields = ?err.fields(), "Birthday query validation failed");
            return Err(err);
        }
        Self::from_draft(draft)
    }

    fn from_draft(draft: BirthdayQueryDraft) -> ValidationResult<Self> {
        if let Err(e) = draft.validate() {
            let err = ValidationError::new(fields::from_validator(e));
            debug!(fields = ?err.fields(), "Birthday query validation failed");
            return Err(err);
        }

        draft
            .days
            .and_then(|d| u16::try_from(d).ok())
            .map(|days| Self { days })
            .ok_or_else(|| ValidationError::single("days", "missing", "Field required"))
    }
}
