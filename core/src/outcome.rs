//! Result of a record operation that completed without an unexpected failure.

use crate::error::FieldError;

/// `Success`, a rejected payload, or a missing row. Store failures are not
/// represented here; they travel in the surrounding `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    ValidationFailed(Vec<FieldError>),
    NotFound,
}
