//! Input form of a contact and its validation pipeline.

use super::fields::{self, FieldReader};
use crate::clock::Clock;
use crate::error::{FieldError, ValidationError, ValidationResult};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use validator::Validate;

/// Contact fields in declaration order; errors are reported in this order.
pub const CONTACT_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "phone_number",
    "birthday",
    "additional_data",
];

pub const NAME_MIN_LEN: u64 = 2;
pub const NAME_MAX_LEN: u64 = 50;
pub const PHONE_MIN_LEN: u64 = 6;
pub const PHONE_MAX_LEN: u64 = 20;
pub const ADDITIONAL_DATA_MAX_LEN: u64 = 150;

pub const FUTURE_BIRTHDAY_MESSAGE: &str = "Birthday cannot be in the future";
pub const INVALID_EMAIL_MESSAGE: &str = "value is not a valid email address";

/// A validated contact as submitted by a client.
///
/// Values of this type are normally obtained through
/// [`ContactBase::from_json`]. One deserialized directly with serde has not
/// been checked; call [`ContactBase::validate_at`] on it.
///
/// # Example
///
/// ```
/// use contact_schemas::{Clock, ContactBase};
/// use chrono::NaiveDate;
/// use serde_json::json;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let contact = ContactBase::from_json_with_clock(
///     &json!({
///         "first_name": "Jo",
///         "last_name": "Ann",
///         "email": "jo@x.com",
///         "phone_number": "123456",
///         "birthday": "2000-01-01",
///         "additional_data": null
///     }),
///     &Clock::Fixed(today),
/// )
/// .unwrap();
/// assert_eq!(contact.additional_data, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactBase {
    /// First name, 2 to 50 characters
    #[schemars(length(min = 2, max = 50))]
    pub first_name: String,

    /// Last name, 2 to 50 characters
    #[schemars(length(min = 2, max = 50))]
    pub last_name: String,

    /// Email address
    #[schemars(email)]
    pub email: String,

    /// Phone number, 6 to 20 characters
    #[schemars(length(min = 6, max = 20))]
    pub phone_number: String,

    /// Date of birth, never after the day of validation
    pub birthday: NaiveDate,

    /// Free-form notes, at most 150 characters
    #[serde(default)]
    #[schemars(length(max = 150))]
    pub additional_data: Option<String>,
}

impl ContactBase {
    /// Validate untyped input, reading today's date from the local clock.
    pub fn from_json(raw: &Value) -> ValidationResult<Self> {
        Self::from_json_with_clock(raw, &Clock::Local)
    }

    /// Validate untyped input against `clock`'s notion of today.
    ///
    /// Every failing field is reported, not just the first.
    pub fn from_json_with_clock(raw: &Value, clock: &Clock) -> ValidationResult<Self> {
        let mut reader = FieldReader::new(raw)?;

        let draft = ContactDraft {
            first_name: reader.required_string("first_name"),
            last_name: reader.required_string("last_name"),
            email: reader.required_string("email"),
            phone_number: reader.required_string("phone_number"),
            birthday: reader.required_date("birthday"),
            additional_data: reader.optional_string("additional_data"),
        };

        reader.extend(draft.constraint_errors(clock.today()));
        if let Err(err) = reader.finish(CONTACT_FIELDS) {
            debug!(
                error_count = err.errors().len(),
                fields = ?err.fields(),
                "Contact validation failed"
            );
            return Err(err);
        }

        let contact = draft.into_contact()?;
        trace!(email = %contact.email, "Contact validated");
        Ok(contact)
    }

    /// Re-check the field constraints of an already typed contact.
    pub fn validate_at(&self, clock: &Clock) -> ValidationResult<()> {
        let errors = ContactDraft::from(self.clone()).constraint_errors(clock.today());
        if errors.is_empty() {
            return Ok(());
        }
        debug!(error_count = errors.len(), "Contact validation failed");
        Err(ValidationError::new(fields::sort_errors(
            errors,
            CONTACT_FIELDS,
        )))
    }
}

/// Contact fields as read from input, before every constraint has passed.
///
/// Fields that failed extraction are `None` and skipped by the checks.
#[derive(Debug, Validate)]
struct ContactDraft {
    #[validate(length(
        min = NAME_MIN_LEN,
        max = NAME_MAX_LEN,
        message = "String should have between 2 and 50 characters"
    ))]
    first_name: Option<String>,

    #[validate(length(
        min = NAME_MIN_LEN,
        max = NAME_MAX_LEN,
        message = "String should have between 2 and 50 characters"
    ))]
    last_name: Option<String>,

    #[validate(email(message = "value is not a valid email address"))]
    email: Option<String>,

    #[validate(length(
        min = PHONE_MIN_LEN,
        max = PHONE_MAX_LEN,
        message = "String should have between 6 and 20 characters"
    ))]
    phone_number: Option<String>,

    birthday: Option<NaiveDate>,

    #[validate(length(
        max = ADDITIONAL_DATA_MAX_LEN,
        message = "String should have at most 150 characters"
    ))]
    additional_data: Option<String>,
}

impl ContactDraft {
    fn constraint_errors(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => fields::from_validator(e),
        };
        if let Some(email) = &self.email {
            if !errors.iter().any(|e| e.field == "email") {
                if let Err(e) = check_email_domain(email) {
                    errors.push(e);
                }
            }
        }
        if let Some(birthday) = self.birthday {
            if let Err(e) = check_birthday(birthday, today) {
                errors.push(e);
            }
        }
        errors
    }

    fn into_contact(self) -> ValidationResult<ContactBase> {
        let (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(phone_number),
            Some(birthday),
        ) = (
            self.first_name,
            self.last_name,
            self.email,
            self.phone_number,
            self.birthday,
        )
        else {
            return Err(ValidationError::single(
                fields::BODY_FIELD,
                "missing",
                "Field required",
            ));
        };

        Ok(ContactBase {
            first_name,
            last_name,
            email,
            phone_number,
            birthday,
            additional_data: self.additional_data,
        })
    }
}

impl From<ContactBase> for ContactDraft {
    fn from(contact: ContactBase) -> Self {
        Self {
            first_name: Some(contact.first_name),
            last_name: Some(contact.last_name),
            email: Some(contact.email),
            phone_number: Some(contact.phone_number),
            birthday: Some(contact.birthday),
            additional_data: contact.additional_data,
        }
    }
}

/// The domain must have at least two labels and end in a non-empty one.
///
/// Rejects single-label hosts such as `localhost`, which `validator` accepts.
pub fn check_email_domain(email: &str) -> Result<(), FieldError> {
    let valid = email
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain.contains('.') && domain.rsplit('.').next().is_some_and(|l| !l.is_empty())
        })
        .unwrap_or(false);
    if !valid {
        return Err(FieldError::new("email", "email", INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}

/// A birthday may be today but not later.
pub fn check_birthday(birthday: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if birthday > today {
        return Err(FieldError::new(
            "birthday",
            "future_date",
            FUTURE_BIRTHDAY_MESSAGE,
        ));
    }
    Ok(())
}
