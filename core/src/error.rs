//! Field-level validation errors.
//!
//! # Design
//! A rejected request reports every offending field at once, so validation
//! produces a `Vec<FieldError>` rather than failing on the first problem.
//! The serialized shape is `{"field": ..., "error": ...}`, which is what
//! clients receive in a 400 response body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The client-facing fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Due,
    Position,
    Completed,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Due => "due",
            Field::Position => "position",
            Field::Completed => "completed",
        }
    }

    /// Message reported when the field holds an unacceptable value.
    pub fn message(self) -> &'static str {
        match self {
            Field::Title => "Title must be a string of length 1 to 128 characters",
            Field::Due => "Due date must be a valid ISO 8601 date",
            Field::Position => "Position must be an integer larger than or equal to 0",
            Field::Completed => "Completed must be a boolean value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub error: String,
}

impl FieldError {
    pub fn invalid(field: Field) -> Self {
        Self {
            field,
            error: field.message().to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}
