use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::origins::model::{Origin, OriginPayload};
use crate::modules::origins::service::OriginService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/origins",
    request_body = OriginPayload,
    responses(
        (status = 201, description = "Origin created"),
        (status = 400, description = "Invalid url", body = ErrorResponse),
        (status = 409, description = "Origin already exists", body = ErrorResponse)
    ),
    tag = "Origins"
)]
#[instrument(skip(state))]
pub async fn create_origin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OriginPayload>,
) -> Result<StatusCode, AppError> {
    OriginService::create_origin(&state.db, payload).await?;
    state.origin_cache.invalidate().await;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/origins/{id}",
    params(("id" = i64, Path, description = "Origin ID")),
    responses(
        (status = 200, description = "Origin details", body = Origin),
        (status = 404, description = "Origin not found", body = ErrorResponse)
    ),
    tag = "Origins"
)]
#[instrument(skip(state))]
pub async fn get_origin_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Origin>, AppError> {
    let origin = OriginService::get_origin_by_id(&state.db, id).await?;
    Ok(Json(origin))
}

#[utoipa::path(
    get,
    path = "/api/origins",
    responses(
        (status = 200, description = "Full unpaged origin collection", body = Vec<Origin>)
    ),
    tag = "Origins"
)]
#[instrument(skip(state))]
pub async fn get_origins(State(state): State<AppState>) -> Result<Json<Vec<Origin>>, AppError> {
    let origins = OriginService::get_origins(&state.db).await?;
    Ok(Json(origins))
}

#[utoipa::path(
    put,
    path = "/api/origins/{id}",
    params(("id" = i64, Path, description = "Origin ID")),
    request_body = OriginPayload,
    responses(
        (status = 204, description = "Origin replaced"),
        (status = 400, description = "Invalid url", body = ErrorResponse),
        (status = 404, description = "Origin not found", body = ErrorResponse),
        (status = 409, description = "Another origin already has this uri", body = ErrorResponse)
    ),
    tag = "Origins"
)]
#[instrument(skip(state))]
pub async fn update_origin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<OriginPayload>,
) -> Result<StatusCode, AppError> {
    OriginService::update_origin(&state.db, id, payload).await?;
    state.origin_cache.invalidate().await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/origins/{id}",
    params(("id" = i64, Path, description = "Origin ID")),
    responses(
        (status = 204, description = "Origin deleted"),
        (status = 404, description = "Origin not found", body = ErrorResponse)
    ),
    tag = "Origins"
)]
#[instrument(skip(state))]
pub async fn delete_origin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    OriginService::delete_origin(&state.db, id).await?;
    state.origin_cache.invalidate().await;
    Ok(StatusCode::NO_CONTENT)
}
