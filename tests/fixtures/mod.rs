//! Test fixtures and sample data for the schema tests.
//!
//! This module provides a pinned clock, valid sample input, and a stored
//! record type standing in for the persistence layer.

use chrono::{NaiveDate, NaiveDateTime};
use contact_schemas::{Clock, ContactBase, ContactRecord};
use serde_json::{json, Value};

/// The date every test treats as "today".
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn fixed_clock() -> Clock {
    Clock::Fixed(today())
}

/// A valid contact submission.
pub fn valid_contact_json() -> Value {
    json!({
        "first_name": "Jo",
        "last_name": "Ann",
        "email": "jo@x.com",
        "phone_number": "123456",
        "birthday": "2000-01-01",
        "additional_data": null
    })
}

/// A valid submission with one field replaced.
#[allow(dead_code)]
pub fn contact_json_with(field: &str, value: Value) -> Value {
    let mut raw = valid_contact_json();
    raw[field] = value;
    raw
}

/// A valid submission with one field removed.
#[allow(dead_code)]
pub fn contact_json_without(field: &str) -> Value {
    let mut raw = valid_contact_json();
    raw.as_object_mut().unwrap().remove(field);
    raw
}

/// A string of exactly `len` characters.
#[allow(dead_code)]
pub fn text_of_len(len: u64) -> String {
    "a".repeat(len as usize)
}

/// A contact as held by storage after insertion.
#[allow(dead_code)]
pub struct StoredContact {
    pub id: Option<i64>,
    pub contact: ContactBase,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[allow(dead_code)]
impl StoredContact {
    /// Simulate an insert: storage assigns the id and creation time.
    pub fn insert(contact: ContactBase, id: i64, created_at: NaiveDateTime) -> Self {
        Self {
            id: Some(id),
            contact,
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

impl ContactRecord for StoredContact {
    fn id(&self) -> Option<i64> {
        self.id
    }
    fn first_name(&self) -> &str {
        &self.contact.first_name
    }
    fn last_name(&self) -> &str {
        &self.contact.last_name
    }
    fn email(&self) -> &str {
        &self.contact.email
    }
    fn phone_number(&self) -> &str {
        &self.contact.phone_number
    }
    fn birthday(&self) -> NaiveDate {
        self.contact.birthday
    }
    fn additional_data(&self) -> Option<&str> {
        self.contact.additional_data.as_deref()
    }
    fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
    fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }
}
