//! Response form of a contact, built from a stored record.

use super::contact::ContactBase;
use crate::error::PresentError;
use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Read access to a contact as held by the storage layer.
///
/// Any record type with the same attribute names can be presented without
/// copying it into an intermediate struct first.
pub trait ContactRecord {
    fn id(&self) -> Option<i64>;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;
    fn phone_number(&self) -> &str;
    fn birthday(&self) -> NaiveDate;
    fn additional_data(&self) -> Option<&str>;
    fn created_at(&self) -> Option<NaiveDateTime>;
    fn updated_at(&self) -> Option<NaiveDateTime>;
}

/// A stored contact as returned to clients.
///
/// Timestamps are always serialized, as `null` when unset. On input
/// `updated_at` may be omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactResponse {
    /// Unique identifier assigned by storage
    pub id: i64,

    #[serde(flatten)]
    pub contact: ContactBase,

    /// Creation timestamp
    pub created_at: Option<NaiveDateTime>,

    /// Last modification timestamp
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl ContactResponse {
    /// Copy a stored record into its response form.
    ///
    /// The base fields are trusted and not re-validated; only the identifier
    /// is required.
    pub fn present<R: ContactRecord + ?Sized>(record: &R) -> Result<Self, PresentError> {
        let id = record.id().ok_or(PresentError::MissingId)?;

        let response = Self {
            id,
            contact: ContactBase {
                first_name: record.first_name().to_string(),
                last_name: record.last_name().to_string(),
                email: record.email().to_string(),
                phone_number: record.phone_number().to_string(),
                birthday: record.birthday(),
                additional_data: record.additional_data().map(str::to_string),
            },
            created_at: record.created_at(),
            updated_at: record.updated_at(),
        };
        trace!(id, "Contact presented");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Row {
        id: Option<i64>,
        created_at: Option<NaiveDateTime>,
    }

    impl ContactRecord for Row {
        fn id(&self) -> Option<i64> {
            self.id
        }
        fn first_name(&self) -> &str {
            // Not re-validated: one character is passed through
            "J"
        }
        fn last_name(&self) -> &str {
            "Doe"
        }
        fn email(&self) -> &str {
            "j@example.com"
        }
        fn phone_number(&self) -> &str {
            "5551234"
        }
        fn birthday(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        }
        fn additional_data(&self) -> Option<&str> {
            None
        }
        fn created_at(&self) -> Option<NaiveDateTime> {
            self.created_at
        }
        fn updated_at(&self) -> Option<NaiveDateTime> {
            None
        }
    }

    #[test]
    fn test_present_copies_without_revalidating() {
        let row = Row {
            id: Some(3),
            created_at: None,
        };
        let response = ContactResponse::present(&row).unwrap();
        assert_eq!(response.id, 3);
        assert_eq!(response.contact.first_name, "J");
        assert_eq!(response.created_at, None);
    }

    #[test]
    fn test_present_requires_id() {
        let row = Row {
            id: None,
            created_at: None,
        };
        assert_eq!(
            ContactResponse::present(&row).unwrap_err(),
            PresentError::MissingId
        );
    }

    #[test]
    fn test_serialization_is_flat_with_null_timestamps() {
        let row = Row {
            id: Some(3),
            created_at: None,
        };
        let json = serde_json::to_value(ContactResponse::present(&row).unwrap()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["first_name"], "J");
        assert_eq!(json["birthday"], "1990-05-17");
        assert!(json["created_at"].is_null());
        assert!(json["updated_at"].is_null());
        assert!(json.get("contact").is_none());
    }

    #[test]
    fn test_deserialize_without_updated_at() {
        let response: ContactResponse = serde_json::from_value(json!({
            "id": 9,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone_number": "5551234",
            "birthday": "1815-12-10",
            "additional_data": null,
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(response.id, 9);
        assert_eq!(response.updated_at, None);
        assert!(response.created_at.is_some());
    }
}
