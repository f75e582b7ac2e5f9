//! Handlers for the `/admin` surface: unscoped actor listing with filters,
//! bulk publish/unpublish with user-facing notices, and user management.
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use backstage_core::error::CoreError;
use backstage_core::text::pluralize;
use backstage_core::types::DbId;
use serde::{Deserialize, Serialize};

use backstage_db::models::actor::{ActorAdminFilter, ActorSummary};
use backstage_db::models::user::{AdminUpdateUser, CreateUser, UserResponse};
use backstage_db::repositories::{ActorRepo, RoleRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::users::build_user_response;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Word pluralized in bulk-action notices.
const ACTOR_WORD: &str = "actor";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/actors`.
///
/// `producer` accepts `available` / `not_available`, mirroring the admin
/// list filter; any other value applies no producer filter.
#[derive(Debug, Deserialize)]
pub struct AdminActorListParams {
    pub category_id: Option<DbId>,
    pub is_published: Option<bool>,
    pub producer: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /admin/actors/bulk-publish`.
#[derive(Debug, Deserialize)]
pub struct BulkPublishRequest {
    pub actor_ids: Vec<DbId>,
    /// Target state: `true` publishes, `false` returns to draft.
    pub publish: bool,
}

/// Result of a bulk publish/unpublish action.
#[derive(Debug, Serialize)]
pub struct BulkPublishResponse {
    /// Rows transitioned to the target state.
    pub changed: u64,
    /// Rows already in the target state (selection minus changed).
    pub unchanged: u64,
    /// User-facing notices with singular/plural wording.
    pub messages: Vec<String>,
}

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_id: DbId,
}

/// Request body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Actor administration
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/actors
///
/// Unscoped listing (drafts included) with the admin filters.
pub async fn list_actors(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AdminActorListParams>,
) -> AppResult<Json<DataResponse<Vec<ActorSummary>>>> {
    let filter = ActorAdminFilter {
        category_id: params.category_id,
        is_published: params.is_published,
        has_producer: match params.producer.as_deref() {
            Some("available") => Some(true),
            Some("not_available") => Some(false),
            _ => None,
        },
        limit: params.limit,
        offset: params.offset,
    };

    let actors = ActorRepo::list_all(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// POST /api/v1/admin/actors/bulk-publish
///
/// Transition the selected actors to the target publish state. Only rows
/// not already in that state change; the response reports both counts as
/// notices with correct singular/plural wording.
pub async fn bulk_publish(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<BulkPublishRequest>,
) -> AppResult<Json<BulkPublishResponse>> {
    let changed = ActorRepo::set_published(&state.pool, &input.actor_ids, input.publish).await?;
    let unchanged = (input.actor_ids.len() as u64).saturating_sub(changed);

    let verb = if input.publish { "published" } else { "removed" };
    let mut messages = Vec::new();
    if changed > 0 {
        messages.push(format!(
            "Successfully {verb} {changed} {}.",
            pluralize(changed, ACTOR_WORD)
        ));
    }
    if unchanged > 0 {
        messages.push(format!(
            "Changes weren't applied to {unchanged} {}.",
            pluralize(unchanged, ACTOR_WORD)
        ));
    }

    tracing::info!(
        admin_id = admin.user_id,
        publish = input.publish,
        changed,
        unchanged,
        "Bulk publish action"
    );

    Ok(Json(BulkPublishResponse {
        changed,
        unchanged,
        messages,
    }))
}

/// DELETE /api/v1/admin/actors/{id}
pub async fn delete_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Actor", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/users
///
/// Create a user directly, bypassing the public registration rules but
/// still enforcing password strength.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        first_name: String::new(),
        last_name: String::new(),
        role_id: input.role_id,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: build_user_response(&user, role),
        }),
    ))
}

/// GET /api/v1/admin/users
///
/// List all users with resolved role names.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;

    // Pre-fetch all roles to avoid N+1 queries.
    let roles = RoleRepo::list(&state.pool).await?;

    let responses: Vec<UserResponse> = users
        .iter()
        .map(|u| {
            let role_name = roles
                .iter()
                .find(|r| r.id == u.role_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "unknown".to_string());
            build_user_response(u, role_name)
        })
        .collect();

    Ok(Json(DataResponse { data: responses }))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Update identity/role/active fields (not the password).
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<AdminUpdateUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::admin_update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

/// POST /api/v1/admin/users/{id}/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = UserRepo::deactivate(&state.pool, id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/users/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, id, &hashed).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
