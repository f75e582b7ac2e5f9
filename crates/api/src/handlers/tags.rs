//! Handlers for the tag resource.
//!
//! Tags are public to read; mutations live on the admin surface. Renaming
//! a tag recomputes its slug.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use backstage_core::error::CoreError;
use backstage_core::types::DbId;

use backstage_db::models::tag::{CreateTag, Tag, UpdateTag};
use backstage_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Tag>>>> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// POST /api/v1/admin/tags
///
/// Tag names are unique; a duplicate name or slug yields 409.
pub async fn create_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<DataResponse<Tag>>)> {
    let tag = TagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// PUT /api/v1/admin/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<Json<DataResponse<Tag>>> {
    let tag = TagRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/v1/admin/tags/{id}
///
/// Cascade removes the tag from every actor carrying it.
pub async fn delete_tag(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
