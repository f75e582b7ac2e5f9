//! Route tree assembly.

pub mod actors;
pub mod admin;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /actors                                  published index (GET), create (POST, auth)
/// /actors/{id}                             update (PUT, auth)
/// /actors/{id}/photo                       photo upload (POST, auth)
/// /post/{slug}                             published actor detail
/// /category/{slug}                         published actors in category
/// /tag/{slug}                              published actors with tag
/// /categories                              category list
/// /tags                                    tag list
/// /producers                               producer list (auth)
/// /about                                   static page view-model
///
/// /users/login                             login (public, email identifier)
/// /users/refresh                           refresh tokens (public)
/// /users/logout                            logout (auth)
/// /users/register                          registration (public)
/// /users/profile                           get, update own profile (auth)
/// /users/profile/photo                     photo upload (auth)
/// /users/change_password                   change own password (auth)
/// /users/password-reset                    request reset mail (public)
/// /users/password-reset/confirm            consume reset token (public)
///
/// /admin/actors                            unscoped list with filters
/// /admin/actors/bulk-publish               bulk publish/unpublish
/// /admin/actors/{id}                       delete
/// /admin/categories[/{id}]                 create, update, delete
/// /admin/tags[/{id}]                       create, update, delete
/// /admin/producers[/{id}]                  create, update, delete
/// /admin/users[/{id}]                      list, create, get, update
/// /admin/users/{id}/deactivate             deactivate
/// /admin/users/{id}/reset-password         set a new password
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(actors::router())
        .nest("/users", users::router())
        .nest("/admin", admin::router())
}
