//! Handlers for the public actor catalogue and authenticated authoring.
//!
//! All public read paths go through the published query scope; drafts are
//! only reachable via the admin surface. Creating or editing an entry
//! requires authentication, and the slug is recomputed from the name on
//! every save -- renaming an actor changes its URL.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use backstage_core::error::CoreError;
use backstage_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use backstage_db::models::actor::{Actor, ActorSummary, CreateActor, UpdateActor};
use backstage_db::models::category::Category;
use backstage_db::models::producer::Producer;
use backstage_db::models::tag::Tag;
use backstage_db::repositories::{ActorRepo, CategoryRepo, ProducerRepo, TagRepo};

use crate::error::{field_error, AppError, AppResult};
use crate::meta::PageMeta;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{DataResponse, MetaResponse};
use crate::state::AppState;
use crate::uploads::{self, ACTOR_PHOTOS_DIR};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for creating and updating an actor.
///
/// Mirrors the site's actor form: names and a category are required,
/// producer and tags are optional, and new entries default to published.
#[derive(Debug, Deserialize, Validate)]
pub struct ActorFormRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[serde(default)]
    pub biography: String,
    #[validate(required(message = "Select a category"))]
    pub category_id: Option<DbId>,
    pub producer_id: Option<DbId>,
    #[serde(default = "default_publish")]
    pub is_published: bool,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

fn default_publish() -> bool {
    true
}

/// Detail view-model: the actor row with its relations resolved.
#[derive(Debug, Serialize)]
pub struct ActorDetail {
    #[serde(flatten)]
    pub actor: Actor,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
    pub producer: Option<Producer>,
}

// ---------------------------------------------------------------------------
// Public catalogue (published scope)
// ---------------------------------------------------------------------------

/// GET /api/v1/actors
///
/// Paginated list of published actors with their category joined in.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<MetaResponse<Vec<ActorSummary>>>> {
    let actors = ActorRepo::list_published(&state.pool, params.limit, params.offset).await?;

    Ok(Json(MetaResponse {
        meta: PageMeta::new("Homepage"),
        data: actors,
    }))
}

/// GET /api/v1/about
pub async fn about() -> Json<MetaResponse<()>> {
    Json(MetaResponse {
        meta: PageMeta::new("About Us"),
        data: (),
    })
}

/// GET /api/v1/post/{slug}
///
/// Published actor detail. Draft and unknown slugs both yield 404.
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<MetaResponse<ActorDetail>>> {
    let actor = ActorRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Actor",
                slug,
            })
        })?;

    let tags = TagRepo::list_for_actor(&state.pool, actor.id).await?;
    let category = match actor.category_id {
        Some(id) => CategoryRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };
    let producer = match actor.producer_id {
        Some(id) => ProducerRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };

    let mut meta = PageMeta::new(format!("Actor - {}", actor.full_name()));
    if let Some(category) = &category {
        meta = meta.with_category(category.slug.as_str());
    }

    Ok(Json(MetaResponse {
        meta,
        data: ActorDetail {
            actor,
            category,
            tags,
            producer,
        },
    }))
}

/// GET /api/v1/category/{slug}
///
/// Published actors within a category. Unknown slugs yield 404.
pub async fn by_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<MetaResponse<Vec<ActorSummary>>>> {
    let category = CategoryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Category",
                slug,
            })
        })?;

    let actors = ActorRepo::list_published_by_category(
        &state.pool,
        category.id,
        params.limit,
        params.offset,
    )
    .await?;

    Ok(Json(MetaResponse {
        meta: PageMeta::new(format!("Category - {}", category.name))
            .with_category(category.slug.as_str()),
        data: actors,
    }))
}

/// GET /api/v1/tag/{slug}
///
/// Published actors carrying a tag. Unknown slugs yield 404.
pub async fn by_tag(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<MetaResponse<Vec<ActorSummary>>>> {
    let tag = TagRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Tag",
                slug,
            })
        })?;

    let actors =
        ActorRepo::list_published_by_tag(&state.pool, tag.id, params.limit, params.offset).await?;

    Ok(Json(MetaResponse {
        meta: PageMeta::new(format!("Tag - {}", tag.name)),
        data: actors,
    }))
}

// ---------------------------------------------------------------------------
// Authoring (authenticated)
// ---------------------------------------------------------------------------

/// POST /api/v1/actors
///
/// Create an actor; the authenticated user becomes the author.
pub async fn create_actor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ActorFormRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Actor>>)> {
    input.validate()?;
    let (category_id, producer_id) = validate_relations(&state, &input).await?;

    let create_dto = CreateActor {
        first_name: input.first_name,
        last_name: input.last_name,
        biography: input.biography,
        is_published: input.is_published,
        category_id: Some(category_id),
        producer_id,
        author_id: Some(auth.user_id),
        tag_ids: input.tag_ids,
    };

    let actor = ActorRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(actor_id = actor.id, author_id = auth.user_id, "Actor created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// PUT /api/v1/actors/{id}
///
/// Full form-style update; recomputes the slug and replaces the tag set.
pub async fn update_actor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ActorFormRequest>,
) -> AppResult<Json<DataResponse<Actor>>> {
    input.validate()?;
    let (category_id, producer_id) = validate_relations(&state, &input).await?;

    let update_dto = UpdateActor {
        first_name: input.first_name,
        last_name: input.last_name,
        biography: input.biography,
        is_published: input.is_published,
        category_id: Some(category_id),
        producer_id,
        tag_ids: input.tag_ids,
    };

    let actor = ActorRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;

    tracing::info!(actor_id = actor.id, user_id = auth.user_id, "Actor updated");

    Ok(Json(DataResponse { data: actor }))
}

/// POST /api/v1/actors/{id}/photo
///
/// Multipart photo upload. Stores the file under the media root and
/// records its relative path on the actor.
pub async fn upload_actor_photo(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Actor>>> {
    // 404 before touching the filesystem.
    ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;

    let photo_path =
        uploads::save_photo(&state.config.media_root, ACTOR_PHOTOS_DIR, &mut multipart).await?;

    let actor = ActorRepo::set_photo_path(&state.pool, id, &photo_path)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;

    Ok(Json(DataResponse { data: actor }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check the category (required) and producer (optional) references point
/// at existing rows, returning field-level errors like the original form's
/// choice validation.
async fn validate_relations(
    state: &AppState,
    input: &ActorFormRequest,
) -> AppResult<(DbId, Option<DbId>)> {
    // `validate()` already rejected a missing category.
    let category_id = input
        .category_id
        .ok_or_else(|| field_error("category_id", "required", "Select a category"))?;

    if CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_none()
    {
        return Err(field_error(
            "category_id",
            "invalid_choice",
            "Select a valid category",
        ));
    }

    if let Some(producer_id) = input.producer_id {
        if ProducerRepo::find_by_id(&state.pool, producer_id)
            .await?
            .is_none()
        {
            return Err(field_error(
                "producer_id",
                "invalid_choice",
                "Select a valid producer",
            ));
        }
    }

    Ok((category_id, input.producer_id))
}
