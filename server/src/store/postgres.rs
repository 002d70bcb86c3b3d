//! `PostgreSQL` store.
//!
//! All statements are parameterized. The partial update binds the id as `$1`
//! and the changed columns positionally from `$2`, in the order given by
//! `TodoPatch::assignments`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use todo_core::{Assignment, ColumnValue, ListFilter, NewTodo, TodoId, TodoItem, TodoPatch};

use super::{StoreError, TodoStore};

pub const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id SERIAL PRIMARY KEY,
    title VARCHAR(128) NOT NULL,
    position INTEGER NOT NULL DEFAULT 0,
    due TIMESTAMPTZ NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created TIMESTAMPTZ NOT NULL DEFAULT current_timestamp,
    updated TIMESTAMPTZ NOT NULL DEFAULT current_timestamp
)";

const COLUMNS: &str = "id, title, position, due, completed, created, updated";

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    position: i32,
    due: Option<DateTime<Utc>>,
    completed: bool,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        TodoItem {
            id: TodoId(row.id),
            title: row.title,
            position: row.position,
            due: row.due,
            completed: row.completed,
            created: row.created,
            updated: row.updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `todos` table when it does not exist yet.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

fn list_statement(filter: ListFilter) -> String {
    let order = filter.order.as_sql();
    match filter.completed {
        Some(_) => format!(
            "SELECT {COLUMNS} FROM todos WHERE completed = $1 ORDER BY position {order}, id ASC"
        ),
        None => format!("SELECT {COLUMNS} FROM todos ORDER BY position {order}, id ASC"),
    }
}

fn update_statement(assignments: &[Assignment]) -> String {
    let set: String = assignments
        .iter()
        .enumerate()
        .map(|(i, assignment)| format!("{} = ${}, ", assignment.column.name(), i + 2))
        .collect();
    format!("UPDATE todos SET {set}updated = current_timestamp WHERE id = $1 RETURNING {COLUMNS}")
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self, filter: ListFilter) -> Result<Vec<TodoItem>, StoreError> {
        let sql = list_statement(filter);
        let mut query = sqlx::query_as::<_, TodoRow>(&sql);
        if let Some(completed) = filter.completed {
            query = query.bind(completed);
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    async fn find(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!("SELECT {COLUMNS} FROM todos WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(TodoItem::from))
    }

    async fn insert(&self, todo: &NewTodo) -> Result<TodoItem, StoreError> {
        let sql = format!(
            "INSERT INTO todos (title, position, due, completed) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&sql)
            .bind(&todo.title)
            .bind(todo.position)
            .bind(todo.due)
            .bind(todo.completed)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItem>, StoreError> {
        let assignments = patch.assignments();
        let sql = update_statement(&assignments);
        let mut query = sqlx::query_as::<_, TodoRow>(&sql).bind(id.get());
        for assignment in assignments {
            query = match assignment.value {
                ColumnValue::Text(value) => query.bind(value),
                ColumnValue::Integer(value) => query.bind(value),
                ColumnValue::Timestamp(value) => query.bind(value),
                ColumnValue::Boolean(value) => query.bind(value),
            };
        }
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row.map(TodoItem::from))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
