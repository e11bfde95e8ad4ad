//! Request and response schemas for the contacts API.
//!
//! Every validator reports all failing fields at once through
//! [`ValidationError`](crate::error::ValidationError).

pub mod birthday;
pub mod contact;
pub(crate) mod fields;
pub mod response;

pub use birthday::{BirthdayQuery, MAX_BIRTHDAY_WINDOW_DAYS};
pub use contact::{
    check_birthday, check_email_domain, ContactBase, CONTACT_FIELDS, FUTURE_BIRTHDAY_MESSAGE,
    INVALID_EMAIL_MESSAGE,
};
pub use fields::{BODY_FIELD, DATE_FORMAT};
pub use response::{ContactRecord, ContactResponse};

use crate::config::Config;
use crate::error::{PresentError, ValidationResult};
use serde_json::Value;

/// Validate a raw contact submission against today's local date.
pub fn validate_contact(raw: &Value) -> ValidationResult<ContactBase> {
    ContactBase::from_json(raw)
}

/// Validate a raw contact submission against the clock chosen in `config`.
pub fn validate_contact_with(raw: &Value, config: &Config) -> ValidationResult<ContactBase> {
    ContactBase::from_json_with_clock(raw, &config.clock())
}

/// Re-export a stored record in response form.
pub fn present<R: ContactRecord + ?Sized>(record: &R) -> Result<ContactResponse, PresentError> {
    ContactResponse::present(record)
}

/// Validate the parameters of an upcoming-birthdays query.
pub fn validate_birthday_query(raw: &Value) -> ValidationResult<BirthdayQuery> {
    BirthdayQuery::from_json(raw)
}
