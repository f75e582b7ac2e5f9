//! Route definitions for the `/admin` surface.
//!
//! Authorization is enforced per-handler via the `RequireAdmin` extractor.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{admin, categories, producers, tags};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// GET    /actors                     -> list_actors (filters, drafts included)
/// POST   /actors/bulk-publish        -> bulk_publish
/// DELETE /actors/{id}                -> delete_actor
/// POST   /categories                 -> create_category
/// PUT    /categories/{id}            -> update_category
/// DELETE /categories/{id}            -> delete_category (409 while referenced)
/// POST   /tags                       -> create_tag
/// PUT    /tags/{id}                  -> update_tag
/// DELETE /tags/{id}                  -> delete_tag
/// POST   /producers                  -> create_producer
/// PUT    /producers/{id}             -> update_producer
/// DELETE /producers/{id}             -> delete_producer
/// GET    /users                      -> list_users
/// POST   /users                      -> create_user
/// GET    /users/{id}                 -> get_user
/// PUT    /users/{id}                 -> update_user
/// POST   /users/{id}/deactivate      -> deactivate_user
/// POST   /users/{id}/reset-password  -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors", get(admin::list_actors))
        .route("/actors/bulk-publish", post(admin::bulk_publish))
        .route("/actors/{id}", delete(admin::delete_actor))
        .route("/categories", post(categories::create_category))
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/tags", post(tags::create_tag))
        .route("/tags/{id}", put(tags::update_tag).delete(tags::delete_tag))
        .route("/producers", post(producers::create_producer))
        .route(
            "/producers/{id}",
            put(producers::update_producer).delete(producers::delete_producer),
        )
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}", get(admin::get_user).put(admin::update_user))
        .route("/users/{id}/deactivate", post(admin::deactivate_user))
        .route("/users/{id}/reset-password", post(admin::reset_password))
}
