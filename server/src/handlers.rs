//! HTTP handlers: translate requests into service calls and outcomes into
//! status codes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use todo_core::{FieldError, ListParams, Outcome, TodoDraft, TodoItem};

use crate::error::{AppError, ErrorBody};
use crate::service::TodoService;

const NOT_FOUND: &str = "Item not found";
const DOES_NOT_EXIST: &str = "Item does not exist";

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(NOT_FOUND))).into_response()
}

fn invalid(errors: Vec<FieldError>) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}

/// Success is rendered by `ok`; the two failure variants share one mapping.
fn respond<T>(outcome: Outcome<T>, ok: impl FnOnce(T) -> Response) -> Response {
    match outcome {
        Outcome::Success(value) => ok(value),
        Outcome::ValidationFailed(errors) => invalid(errors),
        Outcome::NotFound => not_found(),
    }
}

pub async fn list_todos(
    State(service): State<TodoService>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    Ok(Json(service.list(&params).await?))
}

pub async fn create_todo(
    State(service): State<TodoService>,
    Json(draft): Json<TodoDraft>,
) -> Result<Response, AppError> {
    let outcome = service.insert(draft).await?;
    Ok(respond(outcome, |item| (StatusCode::OK, Json(item)).into_response()))
}

pub async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let outcome = service.find_by_id(&id).await?;
    Ok(respond(outcome, |rows| match rows.into_iter().next() {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(DOES_NOT_EXIST))).into_response(),
    }))
}

pub async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
    Json(draft): Json<TodoDraft>,
) -> Result<Response, AppError> {
    let outcome = service.update_by_id(&id, draft).await?;
    Ok(respond(outcome, |item| (StatusCode::OK, Json(item)).into_response()))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let outcome = service.delete_by_id(&id).await?;
    Ok(respond(outcome, |()| StatusCode::NO_CONTENT.into_response()))
}
