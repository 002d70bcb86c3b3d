//! Domain core for the todo service.
//!
//! # Overview
//! Validation, sanitization and partial-update planning for todo items,
//! with no I/O. The server crate feeds request drafts in and hands the
//! validated commands to a store.
//!
//! # Design
//! - `TodoDraft` carries raw JSON values; `validate_new` / `validate_patch`
//!   turn it into a typed `NewTodo` / `TodoPatch` or a list of `FieldError`s.
//! - `TodoPatch::assignments` lists only the supplied columns, in a fixed
//!   order, for positional binding.
//! - `Outcome` is the tagged result every record operation returns.

pub mod error;
pub mod outcome;
pub mod patch;
pub mod query;
pub mod sanitize;
pub mod types;
pub mod validate;

pub use error::{Field, FieldError};
pub use outcome::Outcome;
pub use patch::{Assignment, Column, ColumnValue};
pub use query::{ListFilter, ListParams, SortOrder};
pub use sanitize::sanitize;
pub use types::{NewTodo, TodoDraft, TodoId, TodoItem, TodoPatch};
pub use validate::{parse_iso8601, validate, validate_new, validate_patch, Intent};
