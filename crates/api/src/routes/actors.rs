//! Route definitions for the public catalogue and authoring endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{actors, categories, producers, tags};
use crate::state::AppState;

/// Catalogue routes mounted directly under `/api/v1`.
///
/// ```text
/// GET  /actors              -> index (published scope)
/// POST /actors              -> create_actor (auth)
/// PUT  /actors/{id}         -> update_actor (auth)
/// POST /actors/{id}/photo   -> upload_actor_photo (auth)
/// GET  /post/{slug}         -> detail (published scope)
/// GET  /category/{slug}     -> by_category
/// GET  /tag/{slug}          -> by_tag
/// GET  /categories          -> list_categories
/// GET  /tags                -> list_tags
/// GET  /producers           -> list_producers (auth)
/// GET  /about               -> about
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors", get(actors::index).post(actors::create_actor))
        .route("/actors/{id}", put(actors::update_actor))
        .route("/actors/{id}/photo", post(actors::upload_actor_photo))
        .route("/post/{slug}", get(actors::detail))
        .route("/category/{slug}", get(actors::by_category))
        .route("/tag/{slug}", get(actors::by_tag))
        .route("/categories", get(categories::list_categories))
        .route("/tags", get(tags::list_tags))
        .route("/producers", get(producers::list_producers))
        .route("/about", get(actors::about))
}
