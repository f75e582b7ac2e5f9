//! Handlers for the producer resource.
//!
//! The list backs the actor form's producer select (authenticated);
//! mutations live on the admin surface. Deleting a producer clears the
//! link on any actor referencing it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use backstage_core::error::CoreError;
use backstage_core::types::DbId;

use backstage_db::models::producer::{CreateProducer, Producer, UpdateProducer};
use backstage_db::repositories::ProducerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/producers
pub async fn list_producers(
    State(state): State<AppState>,
    RequireAuth(_auth): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Producer>>>> {
    let producers = ProducerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: producers }))
}

/// POST /api/v1/admin/producers
pub async fn create_producer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateProducer>,
) -> AppResult<(StatusCode, Json<DataResponse<Producer>>)> {
    let producer = ProducerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: producer })))
}

/// PUT /api/v1/admin/producers/{id}
pub async fn update_producer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProducer>,
) -> AppResult<Json<DataResponse<Producer>>> {
    let producer = ProducerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Producer",
            id,
        }))?;
    Ok(Json(DataResponse { data: producer }))
}

/// DELETE /api/v1/admin/producers/{id}
pub async fn delete_producer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProducerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Producer",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
