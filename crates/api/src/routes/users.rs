//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// POST /login                    -> login (email identifier)
/// POST /refresh                  -> refresh
/// POST /logout                   -> logout (auth)
/// POST /register                 -> register
/// GET  /profile                  -> get_profile (auth)
/// PUT  /profile                  -> update_profile (auth)
/// POST /profile/photo            -> upload_profile_photo (auth)
/// POST /change_password          -> change_password (auth)
/// POST /password-reset           -> request_password_reset
/// POST /password-reset/confirm   -> confirm_password_reset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/register", post(users::register))
        .route(
            "/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/profile/photo", post(users::upload_profile_photo))
        .route("/change_password", post(users::change_password))
        .route("/password-reset", post(users::request_password_reset))
        .route(
            "/password-reset/confirm",
            post(users::confirm_password_reset),
        )
}
