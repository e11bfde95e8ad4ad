//! Contact Schemas - validation for a contact-management web API.
//!
//! This library checks untyped JSON submissions against the contact schema
//! (name and phone lengths, email syntax, birthday not in the future), checks
//! the "birthdays within N days" query, and re-exports stored records in
//! response form.
//!
//! # Architecture
//!
//! - **schemas**: `ContactBase`, `ContactResponse`, `BirthdayQuery` and their validators
//! - **error**: Custom error types for precise error handling
//! - **clock**: Source of "today" for birthday checks
//! - **config**: Configuration management from environment variables
//! - **observability**: `tracing` subscriber setup

pub mod clock;
pub mod config;
pub mod error;
pub mod observability;
pub mod schemas;

pub use clock::Clock;
pub use config::Config;
pub use error::{ConfigError, FieldError, PresentError, ValidationError, ValidationResult};
pub use observability::init_tracing;
pub use schemas::{
    present, validate_birthday_query, validate_contact, validate_contact_with, BirthdayQuery,
    ContactBase, ContactRecord, ContactResponse,
};
