//! Column assignments for partial updates.
//!
//! # Design
//! A `TodoPatch` lowers into an ordered list of `(column, value)` pairs that
//! contains only the supplied fields. The order is fixed (title, position,
//! due, completed) so a store can bind the values positionally. The same list
//! drives both the SQL `SET` clause and the in-memory store.

use chrono::{DateTime, Utc};

use crate::types::{TodoItem, TodoPatch};

/// A writable column of the `todos` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Position,
    Due,
    Completed,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Position => "position",
            Column::Due => "due",
            Column::Completed => "completed",
        }
    }
}

/// A typed value ready to be bound to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Text(String),
    Integer(i32),
    Timestamp(DateTime<Utc>),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: Column,
    pub value: ColumnValue,
}

impl TodoPatch {
    /// The columns this patch changes, in binding order.
    pub fn assignments(&self) -> Vec<Assignment> {
        [
            (Column::Title, self.title.clone().map(ColumnValue::Text)),
            (Column::Position, self.position.map(ColumnValue::Integer)),
            (Column::Due, self.due.map(ColumnValue::Timestamp)),
            (Column::Completed, self.completed.map(ColumnValue::Boolean)),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|value| Assignment { column, value }))
        .collect()
    }

    /// Writes the supplied fields onto `item`. Timestamps are left to the
    /// caller.
    pub fn apply_to(&self, item: &mut TodoItem) {
        for assignment in self.assignments() {
            match assignment.value {
                ColumnValue::Text(title) => item.title = title,
                ColumnValue::Integer(position) => item.position = position,
                ColumnValue::Timestamp(due) => item.due = Some(due),
                ColumnValue::Boolean(completed) => item.completed = completed,
            }
        }
    }
}
