//! Minimal HTTP CRUD service over an in-memory task collection.
//!
//! # Overview
//! Handlers read and mutate a shared [`TaskStore`] behind a
//! `tokio::sync::RwLock` and answer with a fixed status-code and body
//! contract (see [`error`]). Task JSON shape:
//! `{ "id": integer, "name": string, "completed": boolean }`; error bodies
//! are plain text.
//!
//! # Design
//! - The store is injected into the router: [`app_with`] takes any starting
//!   state, so tests are isolated; [`app`] wraps the seeded boot-time
//!   collection (tasks 1 through 3).
//! - Handlers hold the lock only for the duration of one operation and
//!   delegate all validation and lookup to the store, so they reduce to
//!   lock, delegate, wrap in JSON.
//! - Unmatched paths fall through to the router's default 404.

pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub use error::ApiError;
pub use store::TaskStore;
pub use types::{CreateTask, Task, UpdateTask};

/// Shared handle to the process-wide task collection.
pub type Db = Arc<RwLock<TaskStore>>;

/// Router over the seeded boot-time collection.
pub fn app() -> Router {
    app_with(TaskStore::seeded())
}

/// Router over an explicit store, for tests that need a known state.
pub fn app_with(store: TaskStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task)
                .put(replace_task)
                .patch(update_task)
                .delete(delete_task),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    debug!(count = store.tasks().len(), "listing tasks");
    Json(store.tasks().to_vec())
}

async fn get_task(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Task>, ApiError> {
    let store = db.read().await;
    Ok(Json(store.get(id)?.clone()))
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = db.write().await.create(input)?;
    info!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn replace_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, ApiError> {
    let task = db.write().await.replace(id, input)?;
    debug!(id, "task replaced");
    Ok(Json(task))
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, ApiError> {
    let task = db.write().await.update(id, input)?;
    debug!(id, "task updated");
    Ok(Json(task))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    let task = db.write().await.remove(id)?;
    info!(id, "task deleted");
    Ok(Json(task))
}
