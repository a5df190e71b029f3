//! Task management API endpoints.
//!
//! Provides endpoints for managing tasks:
//! - List tasks (paginated)
//! - Create task
//! - Get task details
//! - Update task
//! - Delete task

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::store::{Task, TaskError, TaskPage};

/// Create task routes.
pub fn routes() -> Router<Arc<super::routes::AppState>> {
    Router::new()
        .route("/", get(list_tasks))
        .route("/", post(create_task))
        .route("/:id", get(get_task))
        .route("/:id", put(update_task))
        .route("/:id", delete(delete_task))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request/Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: String,
    /// Omitted to keep the stored value, explicit to overwrite it
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// 1-based page number (defaults to 1)
    pub page: Option<u64>,
    /// Number of tasks per page (defaults to 10)
    #[serde(rename = "pageSize")]
    pub page_size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a store error to its HTTP reply.
fn reject(err: TaskError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/tasks - List tasks, one page at a time.
async fn list_tasks(
    State(state): State<Arc<super::routes::AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskPage>, (StatusCode, Json<ErrorResponse>)> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(10);

    let result = state.tasks.list(page, page_size).await.map_err(reject)?;
    Ok(Json(result))
}

/// POST /api/tasks - Create a new task.
async fn create_task(
    State(state): State<Arc<super::routes::AppState>>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<ErrorResponse>)> {
    let task = state
        .tasks
        .create(&req.title, &req.description)
        .await
        .map_err(reject)?;

    tracing::info!("Created task: {} ({})", task.title, task.id);

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/:id - Get task details.
async fn get_task(
    State(state): State<Arc<super::routes::AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let task = state.tasks.get(id).await.map_err(reject)?;
    Ok(Json(task))
}

/// PUT /api/tasks/:id - Update a task.
async fn update_task(
    State(state): State<Arc<super::routes::AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let task = state
        .tasks
        .update(id, &req.title, &req.description, req.completed)
        .await
        .map_err(reject)?;

    tracing::info!("Updated task: {} ({})", task.title, task.id);

    Ok(Json(task))
}

/// DELETE /api/tasks/:id - Delete a task.
async fn delete_task(
    State(state): State<Arc<super::routes::AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.tasks.delete(id).await.map_err(reject)?;

    tracing::info!("Deleted task {}", id);

    Ok(StatusCode::NO_CONTENT)
}
