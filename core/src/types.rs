//! Domain types for the todo service.
//!
//! # Design
//! `TodoDraft` is what the HTTP layer hands over: every field is a raw JSON
//! value so the validator sees exactly what the client sent. Validation turns
//! a draft into either a `NewTodo` (insert) or a `TodoPatch` (partial update),
//! both of which carry only typed, sanitized values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-assigned primary key of a todo row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i32);

impl TodoId {
    /// Parses an id taken from a request path. Anything that is not a plain
    /// base-10 integer yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i32>().ok().map(TodoId)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo row as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub position: i32,
    pub due: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Unvalidated request body for insert and update.
///
/// A JSON `null` and a missing key both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoDraft {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub completed: Option<Value>,
    #[serde(default)]
    pub due: Option<Value>,
}

/// A validated, sanitized insert command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub position: i32,
    pub completed: bool,
    pub due: Option<DateTime<Utc>>,
}

/// A validated, sanitized partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub position: Option<i32>,
    pub due: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case(" 42 ", Some(42))]
    #[case("-3", Some(-3))]
    #[case("abc", None)]
    #[case("12abc", None)]
    #[case("", None)]
    #[case("99999999999", None)]
    fn todo_id_parse(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(TodoId::parse(raw).map(TodoId::get), expected);
    }

    #[test]
    fn draft_treats_null_as_absent() {
        let draft: TodoDraft =
            serde_json::from_str(r#"{"title":null,"completed":true}"#).unwrap();
        assert!(draft.title.is_none());
        assert!(draft.position.is_none());
        assert_eq!(draft.completed, Some(Value::Bool(true)));
    }

    #[test]
    fn draft_keeps_raw_values() {
        let draft: TodoDraft =
            serde_json::from_str(r#"{"position":"3","completed":"true"}"#).unwrap();
        assert_eq!(draft.position, Some(Value::String("3".to_string())));
        assert_eq!(draft.completed, Some(Value::String("true".to_string())));
    }

    #[test]
    fn item_serializes_id_as_number() {
        let now = Utc::now();
        let item = TodoItem {
            id: TodoId(7),
            title: "Test".to_string(),
            position: 0,
            due: None,
            completed: false,
            created: now,
            updated: now,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert!(json["due"].is_null());
    }
}
