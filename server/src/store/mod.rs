//! Persistence gateway for todo rows.
//!
//! # Design
//! `TodoStore` is the only seam between the record service and storage.
//! Updates and deletes are single statements keyed by id, so a row that
//! disappears concurrently shows up as `None` / `false` rather than as a
//! stale success.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use todo_core::{ListFilter, NewTodo, TodoId, TodoItem, TodoPatch};

use crate::config::{Config, StorageMode};

pub use memory::InMemoryTodoStore;
pub use postgres::{PgTodoStore, SCHEMA};

/// Unexpected storage failure. Never shown to clients verbatim.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        StoreError::Database(error.to_string())
    }
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Rows ordered by `position` in `filter.order`, ties by ascending id.
    async fn list(&self, filter: ListFilter) -> Result<Vec<TodoItem>, StoreError>;

    async fn find(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError>;

    /// Inserts a row; the store assigns `id`, `created` and `updated`.
    async fn insert(&self, todo: &NewTodo) -> Result<TodoItem, StoreError>;

    /// Applies `patch` and refreshes `updated` in one step. `None` when no row
    /// has this id.
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItem>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: TodoId) -> Result<bool, StoreError>;
}

/// Builds the store selected by `config`. A Postgres store is connected and
/// its schema created before it is returned.
pub async fn open(config: &Config) -> Result<Arc<dyn TodoStore>, StoreError> {
    match config.storage_mode {
        StorageMode::Memory => {
            tracing::info!("using in-memory store");
            Ok(Arc::new(InMemoryTodoStore::new()))
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| StoreError::Database("DATABASE_URL is not set".to_string()))?;
            let store = PgTodoStore::connect(url, config.max_connections).await?;
            store.migrate().await?;
            tracing::info!(max_connections = config.max_connections, "connected to postgres");
            Ok(Arc::new(store))
        }
    }
}
