//! HTTP API for the todo list.
//!
//! Stateless axum handlers, each translating one REST call into one
//! parameterized statement through [`TodoStore`].

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

use std::{future::Future, time::Instant};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Request, State,
    },
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use models::{Cleared, CreateTodo, Todo, UpdateTodo};
pub use store::TodoStore;

#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
}

pub fn app(pool: SqlitePool) -> Router {
    let state = AppState {
        store: TodoStore::new(pool),
    };
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/completed",
            delete(clear_completed)
                .get(not_a_todo_id)
                .patch(not_a_todo_id),
        )
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Serves until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, pool: SqlitePool, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(pool))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();
    let response = next.run(req).await;
    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    let title = models::normalize_title(&input.title)?;
    let todo = state.store.create(&title).await?;
    tracing::debug!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    state.store.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let patch = input.validate()?;
    state
        .store
        .update(id, &patch)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// `/todos/completed` shadows `/todos/{id}` for every method; only DELETE
/// means the sweep.
async fn not_a_todo_id() -> ApiError {
    ApiError::Validation("`completed` is not a todo id".to_string())
}

async fn clear_completed(State(state): State<AppState>) -> Result<Json<Cleared>, ApiError> {
    let deleted = state.store.clear_completed().await?;
    tracing::debug!(deleted, "completed todos cleared");
    Ok(Json(Cleared { deleted }))
}
