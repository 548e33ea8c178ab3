//! JSON-over-HTTP surface for `TodoStore`.
//!
//! Each handler calls exactly one store operation. Blank titles become 400
//! with an `{"error": ...}` body; unknown ids become 404.

pub mod logging;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use todo_core::{CreateTodo, StoreError, TodoRecord, TodoStore, TodoSummary, UpdateTodo};
use tokio::net::TcpListener;
use tracing::{debug, info};
use uuid::Uuid;

pub type Db = Arc<TodoStore>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(Arc::new(TodoStore::new()))
}

pub fn app_with_store(store: Db) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/todos/{id}/toggle", post(toggle_todo))
        .route("/completed", delete(clear_completed))
        .route("/summary", get(summary))
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: Db) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "serving todo api");
    }
    axum::serve(listener, app_with_store(store)).await
}

/// Handler failures rendered as HTTP responses.
#[derive(Debug)]
pub enum ApiFailure {
    Store(StoreError),
    /// No record with the requested id.
    NotFound,
}

impl From<StoreError> for ApiFailure {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            ApiFailure::Store(err) => {
                let status = match &err {
                    StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                };
                debug!(error = %err, "rejecting request");
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
            ApiFailure::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<TodoRecord>> {
    Json(db.list_all().await)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<TodoRecord>), ApiFailure> {
    let todo = db.add(input.title.as_deref().unwrap_or_default()).await?;
    info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoRecord>, StatusCode> {
    db.get_by_id(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<TodoRecord>, ApiFailure> {
    let updated = db.update(id, input.title.as_deref().unwrap_or_default()).await?;
    updated.map(Json).ok_or(ApiFailure::NotFound)
}

async fn toggle_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoRecord>, StatusCode> {
    db.toggle(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    if db.delete(id).await {
        info!(id = %id, "deleted todo");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn clear_completed(State(db): State<Db>) -> StatusCode {
    let removed = db.clear_completed().await;
    info!(removed, "cleared completed todos");
    StatusCode::NO_CONTENT
}

async fn summary(State(db): State<Db>) -> Json<TodoSummary> {
    Json(db.summary().await)
}
