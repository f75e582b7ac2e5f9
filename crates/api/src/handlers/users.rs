//! Handlers for registration, profile management, password change, and
//! password reset.
//!
//! Registration applies the site's historical form rules: usernames must
//! be longer than 3 characters, only `@gmail.com` addresses are accepted,
//! and an already-registered email is rejected. Profile updates cannot
//! touch username or email -- those are fixed identity.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use backstage_core::error::CoreError;
use backstage_core::roles::ROLE_USER;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use backstage_db::models::user::{CreateUser, UpdateProfile, User, UserResponse};
use backstage_db::repositories::{PasswordResetRepo, RoleRepo, SessionRepo, UserRepo};

use crate::auth::jwt::{generate_opaque_token, hash_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{field_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{self, USER_PHOTOS_DIR};

/// Lifetime of a password-reset token in minutes.
const RESET_TOKEN_EXPIRY_MINS: i64 = 60;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /users/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, message = "Username must be longer than 3 characters!"))]
    pub username: String,
    #[validate(custom(function = "validate_email_domain"))]
    pub email: String,
    pub password1: String,
    pub password2: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Request body for `PUT /users/profile`.
///
/// Username and email are fixed identity and deliberately not accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileFormRequest {
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
    pub date_birth: Option<NaiveDate>,
}

/// Request body for `POST /users/change_password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

/// Request body for `POST /users/password-reset`.
#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Request body for `POST /users/password-reset/confirm`.
#[derive(Debug, Deserialize)]
pub struct PasswordResetConfirmRequest {
    pub token: String,
    pub new_password1: String,
    pub new_password2: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Only `@gmail.com` addresses are accepted, matching the original form.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    if !email.contains("@gmail.com") {
        return Err(ValidationError::new("email_domain")
            .with_message("Invalid email address!".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// POST /api/v1/users/register
///
/// Create an account with the `user` role. Field-level failures: short
/// username, non-gmail email, already-registered email, password mismatch.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    input.validate()?;

    if input.password1 != input.password2 {
        return Err(field_error(
            "password2",
            "password_mismatch",
            "The two password fields didn't match.",
        ));
    }
    validate_password_strength(&input.password1)
        .map_err(|msg| field_error("password1", "password_too_short", msg))?;

    // Uniqueness checks are form-level, like the original.
    if UserRepo::email_exists(&state.pool, &input.email).await? {
        return Err(field_error("email", "unique", "Email already exists!"));
    }
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(field_error(
            "username",
            "unique",
            "A user with that username already exists.",
        ));
    }

    let role = RoleRepo::find_by_name(&state.pool, ROLE_USER)
        .await?
        .ok_or_else(|| AppError::InternalError("Default user role is not seeded".into()))?;

    let hashed = hash_password(&input.password1)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash: hashed,
        first_name: input.first_name,
        last_name: input.last_name,
        role_id: role.id,
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: build_user_response(&user, role.name),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = find_user(&state, auth.user_id).await?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

/// PUT /api/v1/users/profile
///
/// Update the editable contact/biographical fields only.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ProfileFormRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    input.validate()?;

    let update_dto = UpdateProfile {
        first_name: input.first_name,
        last_name: input.last_name,
        date_birth: input.date_birth,
    };

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

/// POST /api/v1/users/profile/photo
///
/// Multipart photo upload for the authenticated user's own profile.
pub async fn upload_profile_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let photo_path =
        uploads::save_photo(&state.config.media_root, USER_PHOTOS_DIR, &mut multipart).await?;

    let user = UserRepo::set_photo_path(&state.pool, auth.user_id, &photo_path)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(DataResponse {
        data: build_user_response(&user, role),
    }))
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// POST /api/v1/users/change_password
///
/// Requires the current password; returns 204 on success.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = find_user(&state, auth.user_id).await?;

    let old_valid = verify_password(&input.old_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !old_valid {
        return Err(field_error(
            "old_password",
            "password_incorrect",
            "Your old password was entered incorrectly.",
        ));
    }

    if input.new_password1 != input.new_password2 {
        return Err(field_error(
            "new_password2",
            "password_mismatch",
            "The two password fields didn't match.",
        ));
    }
    validate_password_strength(&input.new_password1)
        .map_err(|msg| field_error("new_password1", "password_too_short", msg))?;

    let hashed = hash_password(&input.new_password1)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &hashed).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Password reset
// ---------------------------------------------------------------------------

/// POST /api/v1/users/password-reset
///
/// Always returns 202 so the response does not reveal whether an account
/// exists. A token is generated (and mailed, when SMTP is configured)
/// only when the email matches exactly one active account.
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(input): Json<PasswordResetRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let matches = UserRepo::find_all_by_email(&state.pool, &input.email).await?;

    if let [user] = matches.as_slice() {
        if user.is_active {
            let (plaintext, token_hash) = generate_opaque_token();
            let expires_at = Utc::now() + chrono::Duration::minutes(RESET_TOKEN_EXPIRY_MINS);
            PasswordResetRepo::create(&state.pool, user.id, &token_hash, expires_at).await?;

            match &state.mailer {
                Some(mailer) => {
                    if let Err(e) = mailer.send_password_reset(&user.email, &plaintext).await {
                        tracing::warn!(error = %e, "Failed to send password reset email");
                    }
                }
                None => {
                    tracing::info!(user_id = user.id, "SMTP not configured; reset email skipped");
                }
            }
        }
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "If the email is registered, a reset message has been sent.",
        }),
    ))
}

/// POST /api/v1/users/password-reset/confirm
///
/// Consume a reset token, set the new password, and revoke all sessions.
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(input): Json<PasswordResetConfirmRequest>,
) -> AppResult<StatusCode> {
    let reset = PasswordResetRepo::find_active_by_token_hash(&state.pool, &hash_token(&input.token))
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid or expired reset token".into()))?;

    if input.new_password1 != input.new_password2 {
        return Err(field_error(
            "new_password2",
            "password_mismatch",
            "The two password fields didn't match.",
        ));
    }
    validate_password_strength(&input.new_password1)
        .map_err(|msg| field_error("new_password1", "password_too_short", msg))?;

    let hashed = hash_password(&input.new_password1)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, reset.user_id, &hashed).await?;
    PasswordResetRepo::mark_used(&state.pool, reset.id).await?;
    SessionRepo::revoke_all_for_user(&state.pool, reset.user_id).await?;

    tracing::info!(user_id = reset.user_id, "Password reset completed");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a user row or 404.
async fn find_user(state: &AppState, id: backstage_core::types::DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// Assemble the safe API representation of a user row.
pub(crate) fn build_user_response(user: &User, role: String) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        photo_path: user.photo_path.clone(),
        date_birth: user.date_birth,
        role,
        is_active: user.is_active,
        last_login_at: user.last_login_at,
        created_at: user.created_at,
    }
}
