//! Field validation for todo drafts.
//!
//! # Design
//! Every field is checked independently and all failures are collected, in
//! the fixed order title, due, position, completed. A field that is missing
//! (or `null`) is skipped, except that an insert requires `title`. Successful
//! validation yields typed values, so nothing downstream re-parses input.
//!
//! `title` must be 1 to 128 characters as sent. It is then sanitized, and the
//! sanitized form must still fit, so a stored title never breaks the bound.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::{Field, FieldError};
use crate::sanitize::sanitize;
use crate::types::{NewTodo, TodoDraft, TodoPatch};

pub const TITLE_MAX_CHARS: usize = 128;

/// Which command a draft is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Insert,
    Update,
}

/// Returns every field error in `draft`; empty when the draft is acceptable
/// for `intent`.
pub fn validate(draft: &TodoDraft, intent: Intent) -> Vec<FieldError> {
    match intent {
        Intent::Insert => validate_new(draft).err(),
        Intent::Update => validate_patch(draft).err(),
    }
    .unwrap_or_default()
}

/// Validates an insert. Omitted `position` becomes 0, omitted `completed`
/// becomes `false`.
pub fn validate_new(draft: &TodoDraft) -> Result<NewTodo, Vec<FieldError>> {
    let title = check_title(draft.title.as_ref())
        .and_then(|title| title.ok_or_else(|| FieldError::invalid(Field::Title)));
    let checked = check(draft, title)?;
    Ok(NewTodo {
        title: checked.title,
        position: checked.position.unwrap_or(0),
        completed: checked.completed.unwrap_or(false),
        due: checked.due,
    })
}

/// Validates a partial update; only supplied fields end up in the patch.
pub fn validate_patch(draft: &TodoDraft) -> Result<TodoPatch, Vec<FieldError>> {
    let checked = check(draft, check_title(draft.title.as_ref()))?;
    Ok(TodoPatch {
        title: checked.title,
        position: checked.position,
        due: checked.due,
        completed: checked.completed,
    })
}

struct Checked<T> {
    title: T,
    due: Option<DateTime<Utc>>,
    position: Option<i32>,
    completed: Option<bool>,
}

fn check<T>(
    draft: &TodoDraft,
    title: Result<T, FieldError>,
) -> Result<Checked<T>, Vec<FieldError>> {
    let due = check_due(draft.due.as_ref());
    let position = check_position(draft.position.as_ref());
    let completed = check_completed(draft.completed.as_ref());

    match (title, due, position, completed) {
        (Ok(title), Ok(due), Ok(position), Ok(completed)) => Ok(Checked {
            title,
            due,
            position,
            completed,
        }),
        (title, due, position, completed) => Err([
            title.err(),
            due.err(),
            position.err(),
            completed.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

fn title_fits(title: &str) -> bool {
    (1..=TITLE_MAX_CHARS).contains(&title.chars().count())
}

fn check_title(value: Option<&Value>) -> Result<Option<String>, FieldError> {
    let raw = match value {
        None => return Ok(None),
        Some(Value::String(raw)) if title_fits(raw) => raw,
        Some(_) => return Err(FieldError::invalid(Field::Title)),
    };
    let clean = sanitize(raw);
    if title_fits(&clean) {
        Ok(Some(clean))
    } else {
        Err(FieldError::invalid(Field::Title))
    }
}

fn check_due(value: Option<&Value>) -> Result<Option<DateTime<Utc>>, FieldError> {
    match value {
        None => Ok(None),
        Some(Value::String(raw)) if raw.is_empty() => Ok(None),
        Some(Value::String(raw)) => parse_iso8601(raw)
            .map(Some)
            .ok_or_else(|| FieldError::invalid(Field::Due)),
        Some(_) => Err(FieldError::invalid(Field::Due)),
    }
}

fn check_position(value: Option<&Value>) -> Result<Option<i32>, FieldError> {
    let parsed = match value {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(raw)) => raw.trim().parse::<i32>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(position) if position >= 0 => Ok(Some(position)),
        _ => Err(FieldError::invalid(Field::Position)),
    }
}

fn check_completed(value: Option<&Value>) -> Result<Option<bool>, FieldError> {
    match value {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(FieldError::invalid(Field::Completed)),
    }
}

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses the ISO 8601 shapes clients commonly send: full date-times with or
/// without an offset (no offset means UTC) and bare calendar dates (midnight
/// UTC).
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(raw, fmt).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
