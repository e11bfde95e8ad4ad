//! Field extraction from untyped JSON input.
//!
//! Each accessor pulls one field out of a JSON object and converts it to its
//! semantic type. Failures are recorded instead of returned so that one call
//! can report every bad field at once.

use crate::error::{FieldError, ValidationError};
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Field name used when the input as a whole is malformed.
pub const BODY_FIELD: &str = "body";

/// Calendar date format accepted for date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads typed fields out of a JSON object, collecting failures.
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    /// Fails immediately when `raw` is not a JSON object.
    pub(crate) fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(object) => Ok(Self {
                object,
                errors: Vec::new(),
            }),
            _ => Err(ValidationError::single(
                BODY_FIELD,
                "model_type",
                "Input should be a valid object",
            )),
        }
    }

    /// Value of a required field; an explicit `null` is returned as-is and
    /// rejected by the type check.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field)
    }

    fn missing(&mut self, field: &str) {
        self.errors
            .push(FieldError::new(field, "missing", "Field required"));
    }

    pub(crate) fn required_string(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            None => {
                self.missing(field);
                None
            }
            Some(value) => self.string_value(field, value),
        }
    }

    /// Absent and `null` both read as `None`.
    pub(crate) fn optional_string(&mut self, field: &str) -> Option<String> {
        let value = self.get(field).filter(|v| !v.is_null())?;
        self.string_value(field, value)
    }

    fn string_value(&mut self, field: &str, value: &Value) -> Option<String> {
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.errors.push(FieldError::new(
                    field,
                    "string_type",
                    "Input should be a valid string",
                ));
                None
            }
        }
    }

    pub(crate) fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = match self.get(field) {
            None => {
                self.missing(field);
                return None;
            }
            Some(value) => value,
        };

        let Some(text) = value.as_str() else {
            self.errors.push(FieldError::new(
                field,
                "date_type",
                "Input should be a valid date",
            ));
            return None;
        };

        // chrono skips whitespace before numeric items
        let parsed = Some(text)
            .filter(|t| !t.starts_with(char::is_whitespace) && !t.ends_with(char::is_whitespace))
            .and_then(|t| NaiveDate::parse_from_str(t, DATE_FORMAT).ok());
        if parsed.is_none() {
            self.errors.push(FieldError::new(
                field,
                "date_from_datetime_parsing",
                "Input should be a valid date",
            ));
        }
        parsed
    }

    /// Accepts JSON integers, integral floats and integer strings.
    pub(crate) fn required_int(&mut self, field: &str) -> Option<i64> {
        let value = match self.get(field) {
            None => {
                self.missing(field);
                return None;
            }
            Some(value) => value,
        };

        let parsed = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.push(FieldError::new(
                field,
                "int_type",
                "Input should be a valid integer",
            ));
        }
        parsed
    }

    pub(crate) fn extend(&mut self, errors: impl IntoIterator<Item = FieldError>) {
        self.errors.extend(errors);
    }

    /// Finish reading; errors are ordered by the position of their field in
    /// `order`, keeping insertion order within a field.
    pub(crate) fn finish(self, order: &[&str]) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(ValidationError::new(sort_errors(self.errors, order)))
    }
}

pub(crate) fn sort_errors(mut errors: Vec<FieldError>, order: &[&str]) -> Vec<FieldError> {
    errors.sort_by_key(|e| {
        order
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(usize::MAX)
    });
    errors
}

/// Flatten the errors produced by a `validator` derive into field errors.
pub(crate) fn from_validator(errors: validator::ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            out.push(FieldError::new(field.to_string(), error.code.to_string(), message));
        }
    }
    out
}
