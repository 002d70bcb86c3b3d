use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use todo_core::{ListFilter, NewTodo, SortOrder, TodoId, TodoItem, TodoPatch};

use super::{StoreError, TodoStore};

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<TodoId, TodoItem>,
}

/// Process-local store with the same semantics as the Postgres one. Ids start
/// at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self, filter: ListFilter) -> Result<Vec<TodoItem>, StoreError> {
        let table = self.table.read().await;
        let mut items: Vec<TodoItem> = table
            .rows
            .values()
            .filter(|item| filter.completed.map_or(true, |completed| item.completed == completed))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            let by_position = match filter.order {
                SortOrder::Asc => a.position.cmp(&b.position),
                SortOrder::Desc => b.position.cmp(&a.position),
            };
            by_position.then(a.id.cmp(&b.id))
        });
        Ok(items)
    }

    async fn find(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<TodoItem, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let item = TodoItem {
            id: TodoId(table.last_id),
            title: todo.title.clone(),
            position: todo.position,
            due: todo.due,
            completed: todo.completed,
            created: now,
            updated: now,
        };
        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Option<TodoItem>, StoreError> {
        let mut table = self.table.write().await;
        let Some(item) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(item);
        item.updated = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
