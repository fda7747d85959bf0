use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::modules::tasks::model::{StatusSearchParams, Task, TaskPayload, TitleSearchParams};
use crate::modules::tasks::service::TaskService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::pagination::{Page, PageParams};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Created, Location header points at the new task"),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 409, description = "Task with this title already exists", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TaskPayload>,
) -> Result<Response, AppError> {
    let task = TaskService::create_task(&state.db, payload).await?;

    let location = HeaderValue::from_str(&format!("/api/tasks/{}", task.id))?;
    let mut response = StatusCode::CREATED.into_response();
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = TaskService::get_task_by_id(&state.db, id).await?;
    Ok(Json(task))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    params(PageParams),
    responses(
        (status = 200, description = "Paged task listing", body = Page<Task>),
        (status = 400, description = "Unknown sort field", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn get_tasks(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<Task>>, AppError> {
    let page = TaskService::get_tasks(&state.db, params).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/tasks/search-title",
    params(TitleSearchParams),
    responses(
        (status = 200, description = "Tasks whose title contains the term, case-insensitively", body = Page<Task>)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn search_tasks_by_title(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> Result<Json<Page<Task>>, AppError> {
    let page = TaskService::search_by_title(&state.db, &params.title, params.page).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/tasks/search-status",
    params(StatusSearchParams),
    responses(
        (status = 200, description = "Tasks with exactly the given status", body = Page<Task>)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn search_tasks_by_status(
    State(state): State<AppState>,
    Query(params): Query<StatusSearchParams>,
) -> Result<Json<Page<Task>>, AppError> {
    let page = TaskService::search_by_status(&state.db, &params.status, params.page).await?;
    Ok(Json(page))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = TaskPayload,
    responses(
        (status = 204, description = "Task replaced"),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 409, description = "Another task already has this title", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<TaskPayload>,
) -> Result<StatusCode, AppError> {
    TaskService::update_task(&state.db, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    TaskService::delete_task(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
