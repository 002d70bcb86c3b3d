//! Record service: validates drafts and drives the store.
//!
//! # Design
//! Ids arrive as raw path segments; anything that is not an integer is
//! `NotFound` without touching the store. A missing row takes precedence over
//! an invalid payload on update, so the existence lookup only runs when
//! validation has already failed. Valid patches go straight to the store's
//! single-statement update.

use std::sync::Arc;

use todo_core::{
    validate_new, validate_patch, FieldError, ListParams, Outcome, TodoDraft, TodoId, TodoItem,
};

use crate::store::{StoreError, TodoStore};

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Vec<TodoItem>, StoreError> {
        let filter = params.filter();
        let items = self.store.list(filter).await?;
        tracing::debug!(
            completed = ?filter.completed,
            order = ?filter.order,
            count = items.len(),
            "listed todos"
        );
        Ok(items)
    }

    /// Zero or one rows for a well-formed id; `NotFound` for a malformed one.
    pub async fn find_by_id(&self, raw_id: &str) -> Result<Outcome<Vec<TodoItem>>, StoreError> {
        let Some(id) = TodoId::parse(raw_id) else {
            tracing::debug!(raw_id, "rejected malformed id");
            return Ok(Outcome::NotFound);
        };
        let rows: Vec<TodoItem> = self.store.find(id).await?.into_iter().collect();
        tracing::debug!(%id, count = rows.len(), "looked up todo");
        Ok(Outcome::Success(rows))
    }

    pub async fn insert(&self, draft: TodoDraft) -> Result<Outcome<TodoItem>, StoreError> {
        let todo = match validate_new(&draft) {
            Ok(todo) => todo,
            Err(errors) => {
                tracing::warn!(fields = ?field_names(&errors), "rejected insert");
                return Ok(Outcome::ValidationFailed(errors));
            }
        };
        let item = self.store.insert(&todo).await?;
        tracing::info!(id = %item.id, "inserted todo");
        Ok(Outcome::Success(item))
    }

    pub async fn update_by_id(
        &self,
        raw_id: &str,
        draft: TodoDraft,
    ) -> Result<Outcome<TodoItem>, StoreError> {
        let Some(id) = TodoId::parse(raw_id) else {
            return Ok(Outcome::NotFound);
        };
        let patch = match validate_patch(&draft) {
            Ok(patch) => patch,
            Err(errors) => {
                if self.store.find(id).await?.is_none() {
                    return Ok(Outcome::NotFound);
                }
                tracing::warn!(%id, fields = ?field_names(&errors), "rejected update");
                return Ok(Outcome::ValidationFailed(errors));
            }
        };
        match self.store.update(id, &patch).await? {
            Some(item) => {
                let columns: Vec<&str> = patch.assignments().iter().map(|a| a.column.name()).collect();
                tracing::info!(%id, ?columns, "updated todo");
                Ok(Outcome::Success(item))
            }
            None => Ok(Outcome::NotFound),
        }
    }

    pub async fn delete_by_id(&self, raw_id: &str) -> Result<Outcome<()>, StoreError> {
        let Some(id) = TodoId::parse(raw_id) else {
            return Ok(Outcome::NotFound);
        };
        if self.store.delete(id).await? {
            tracing::info!(%id, "deleted todo");
            Ok(Outcome::Success(()))
        } else {
            Ok(Outcome::NotFound)
        }
    }
}

fn field_names(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}
