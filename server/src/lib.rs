//! HTTP service exposing CRUD over todo items.
//!
//! # Design
//! Handlers stay thin: they hand raw drafts and path ids to `TodoService`,
//! which validates through `todo-core` and persists through a `TodoStore`.
//! The store is chosen at startup (Postgres or in-memory) and shared as
//! `Arc<dyn TodoStore>`; nothing else is shared between requests.

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod store;

pub use config::{Config, StorageMode};
pub use error::{AppError, ErrorBody, StartupError};
pub use service::TodoService;
pub use store::{InMemoryTodoStore, PgTodoStore, StoreError, TodoStore};

pub fn app(service: TodoService) -> Router {
    Router::new()
        .route("/", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/{id}",
            get(handlers::get_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(service)
}

/// Serves `app(service)` on `listener` until `shutdown` resolves.
pub async fn run(
    listener: TcpListener,
    service: TodoService,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}
