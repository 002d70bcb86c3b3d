//! `PgTodoStore` against a real database.
//!
//! # Requirements
//!
//! A PostgreSQL instance reachable through `DATABASE_URL`, defaulting to
//! `postgres://localhost/todos_test`. Run with `cargo test -- --ignored`.
//! Tests share the `todos` table, so each one works only on rows it inserted.

use chrono::{TimeZone, Utc};
use todo_core::{ListFilter, NewTodo, SortOrder, TodoId, TodoPatch};
use todo_server::{PgTodoStore, TodoStore};

async fn store() -> PgTodoStore {
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/todos_test".into());
    let store = PgTodoStore::connect(&url, 2).await.expect("connect");
    store.migrate().await.expect("migrate");
    store
}

fn new_todo(title: &str, position: i32) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        position,
        completed: false,
        due: None,
    }
}

#[tokio::test]
#[ignore = "Requires PostgreSQL instance"]
async fn insert_round_trips_every_field() {
    let store = store().await;
    let due = Utc.with_ymd_and_hms(2025, 1, 31, 9, 30, 0).unwrap();
    let todo = NewTodo {
        due: Some(due),
        completed: true,
        ..new_todo("Tom & Jerry", 7)
    };

    let inserted = store.insert(&todo).await.unwrap();
    assert_eq!(inserted.title, "Tom & Jerry");
    assert_eq!(inserted.position, 7);
    assert!(inserted.completed);
    assert_eq!(inserted.due, Some(due));
    assert_eq!(inserted.created, inserted.updated);

    let found = store.find(inserted.id).await.unwrap();
    assert_eq!(found, Some(inserted));
}

#[tokio::test]
#[ignore = "Requires PostgreSQL instance"]
async fn partial_update_binds_only_supplied_columns() {
    let store = store().await;
    let inserted = store.insert(&new_todo("Walk dog", 2)).await.unwrap();

    let completed = TodoPatch {
        completed: Some(true),
        ..TodoPatch::default()
    };
    let updated = store.update(inserted.id, &completed).await.unwrap().unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Walk dog");
    assert_eq!(updated.position, 2);
    assert!(updated.updated >= inserted.updated);

    let due = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
    let mixed = TodoPatch {
        title: Some("Walk cat".to_string()),
        position: Some(5),
        due: Some(due),
        completed: Some(false),
    };
    let updated = store.update(inserted.id, &mixed).await.unwrap().unwrap();
    assert_eq!(updated.title, "Walk cat");
    assert_eq!(updated.position, 5);
    assert_eq!(updated.due, Some(due));
    assert!(!updated.completed);
    assert_eq!(updated.created, inserted.created);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL instance"]
async fn missing_rows_are_none_and_false() {
    let store = store().await;
    let missing = TodoId(i32::MAX);

    assert_eq!(store.find(missing).await.unwrap(), None);
    let patch = TodoPatch {
        title: Some("ghost".to_string()),
        ..TodoPatch::default()
    };
    assert_eq!(store.update(missing, &patch).await.unwrap(), None);
    assert!(!store.delete(missing).await.unwrap());
}

#[tokio::test]
#[ignore = "Requires PostgreSQL instance"]
async fn second_delete_affects_no_rows() {
    let store = store().await;
    let inserted = store.insert(&new_todo("Once", 0)).await.unwrap();

    assert!(store.delete(inserted.id).await.unwrap());
    assert!(!store.delete(inserted.id).await.unwrap());
    assert_eq!(store.find(inserted.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL instance"]
async fn list_filters_by_completed_and_orders_by_position() {
    let store = store().await;
    let marker = format!("list-{}", Utc::now().timestamp_micros());
    for (position, completed) in [(3, true), (1, true), (2, false)] {
        let todo = NewTodo {
            completed,
            ..new_todo(&marker, position)
        };
        store.insert(&todo).await.unwrap();
    }

    let done = store
        .list(ListFilter {
            completed: Some(true),
            order: SortOrder::Desc,
        })
        .await
        .unwrap();
    let positions: Vec<i32> = done
        .iter()
        .filter(|item| item.title == marker)
        .map(|item| item.position)
        .collect();
    assert_eq!(positions, vec![3, 1]);
    assert!(done.iter().all(|item| item.completed));
}
