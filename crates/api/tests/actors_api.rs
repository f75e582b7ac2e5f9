//! HTTP-level integration tests for the public catalogue and authoring
//! endpoints.
//!
//! Covers the published query scope, slug derivation (including Cyrillic
//! transliteration), slug recomputation on rename, and the not-found /
//! conflict edges.

mod common;

use axum::http::StatusCode;
use backstage_core::roles::ROLE_USER;
use backstage_core::types::DbId;
use common::{body_json, get, post_json_auth, put_json_auth, USER_ROLE_ID};
use sqlx::PgPool;
use tower::ServiceExt;

use backstage_db::models::actor::{Actor, CreateActor};
use backstage_db::models::category::{Category, CreateCategory};
use backstage_db::models::tag::CreateTag;
use backstage_db::repositories::{ActorRepo, CategoryRepo, TagRepo};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

async fn seed_category(pool: &PgPool, name: &str) -> Category {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
        },
    )
    .await
    .expect("category creation should succeed")
}

async fn seed_actor(
    pool: &PgPool,
    category_id: DbId,
    first_name: &str,
    last_name: &str,
    is_published: bool,
) -> Actor {
    ActorRepo::create(
        pool,
        &CreateActor {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            biography: String::new(),
            is_published,
            category_id: Some(category_id),
            producer_id: None,
            author_id: None,
            tag_ids: vec![],
        },
    )
    .await
    .expect("actor creation should succeed")
}

// ---------------------------------------------------------------------------
// Published scope
// ---------------------------------------------------------------------------

/// The index lists only published actors and carries the Homepage title.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_index_excludes_drafts(pool: PgPool) {
    let category = seed_category(&pool, "Drama").await;
    let published = seed_actor(&pool, category.id, "Alice", "Stone", true).await;
    let draft = seed_actor(&pool, category.id, "Bob", "Hidden", false).await;

    let response = get(common::build_test_app(pool), "/api/v1/actors").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["meta"]["title"], "Homepage");
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert!(slugs.contains(&published.slug.as_str()));
    assert!(!slugs.contains(&draft.slug.as_str()));

    // The joined category shows up on list rows.
    assert_eq!(json["data"][0]["category_slug"], "drama");
}

/// A draft actor's detail page is a 404; the published one resolves with
/// relations and page metadata.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_respects_published_scope(pool: PgPool) {
    let category = seed_category(&pool, "Drama").await;
    let published = seed_actor(&pool, category.id, "Alice", "Stone", true).await;
    let draft = seed_actor(&pool, category.id, "Bob", "Hidden", false).await;

    let uri = format!("/api/v1/post/{}", published.slug);
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["title"], "Actor - Alice Stone");
    assert_eq!(json["meta"]["category_selected"], "drama");
    assert_eq!(json["data"]["category"]["name"], "Drama");

    let uri = format!("/api/v1/post/{}", draft.slug);
    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Category pages 404 on an unknown slug but return an empty page for a
/// category with no published actors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_page(pool: PgPool) {
    let drama = seed_category(&pool, "Drama").await;
    let comedy = seed_category(&pool, "Comedy").await;
    seed_actor(&pool, drama.id, "Alice", "Stone", true).await;
    seed_actor(&pool, comedy.id, "Carol", "Quiet", false).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/category/drama").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["title"], "Category - Drama");
    assert_eq!(json["meta"]["category_selected"], "drama");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Known category, only a draft inside: empty page, not an error.
    let response = get(common::build_test_app(pool.clone()), "/api/v1/category/comedy").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let response = get(common::build_test_app(pool), "/api/v1/category/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tag pages list published actors carrying the tag and 404 on unknown slugs.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_tag_page(pool: PgPool) {
    let category = seed_category(&pool, "Drama").await;
    let tag = TagRepo::create(
        &pool,
        &CreateTag {
            name: "Oscar Winner".to_string(),
        },
    )
    .await
    .expect("tag creation should succeed");

    ActorRepo::create(
        &pool,
        &CreateActor {
            first_name: "Alice".to_string(),
            last_name: "Stone".to_string(),
            biography: String::new(),
            is_published: true,
            category_id: Some(category.id),
            producer_id: None,
            author_id: None,
            tag_ids: vec![tag.id],
        },
    )
    .await
    .expect("actor creation should succeed");

    let response = get(common::build_test_app(pool.clone()), "/api/v1/tag/oscar-winner").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["title"], "Tag - Oscar Winner");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool), "/api/v1/tag/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Authoring
// ---------------------------------------------------------------------------

/// Creating an actor requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_auth(pool: PgPool) {
    let category = seed_category(&pool, "Drama").await;
    let body = serde_json::json!({
        "first_name": "Alice",
        "last_name": "Stone",
        "category_id": category.id,
    });

    let app = common::build_test_app(pool);
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method(axum::http::Method::POST)
                .uri("/api/v1/actors")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Cyrillic names slugify to transliterated, lowercase, hyphenated Latin,
/// and the authenticated creator becomes the author.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_actor_transliterates_slug(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "author", "author@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);
    let category = seed_category(&pool, "Drama").await;

    let body = serde_json::json!({
        "first_name": "Сергей",
        "last_name": "Бодров",
        "biography": "Актёр и режиссёр",
        "category_id": category.id,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/actors",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    assert_eq!(json["data"]["slug"], "sergey-bodrov");
    assert_eq!(json["data"]["author_id"], user.id);
    // The form's publish flag defaults to on.
    assert_eq!(json["data"]["is_published"], true);
}

/// Renaming an actor recomputes the slug: the old URL dies, the new one works.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rename_changes_slug(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "editor", "editor@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);
    let category = seed_category(&pool, "Drama").await;
    let actor = seed_actor(&pool, category.id, "Alice", "Stone", true).await;
    assert_eq!(actor.slug, "alice-stone");

    let body = serde_json::json!({
        "first_name": "Alicia",
        "last_name": "Stone",
        "biography": "",
        "category_id": category.id,
        "is_published": true,
    });
    let uri = format!("/api/v1/actors/{}", actor.id);
    let response = put_json_auth(common::build_test_app(pool.clone()), &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "alicia-stone");

    let response = get(common::build_test_app(pool.clone()), "/api/v1/post/alice-stone").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), "/api/v1/post/alicia-stone").await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Two actors with the same full name collide on the slug: no resolution
/// strategy exists, so the second save surfaces the unique violation as 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_slug_conflict(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "author", "author@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);
    let category = seed_category(&pool, "Drama").await;
    seed_actor(&pool, category.id, "Alice", "Stone", true).await;

    let body = serde_json::json!({
        "first_name": "Alice",
        "last_name": "Stone",
        "category_id": category.id,
    });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/v1/actors", &token, body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// A nonexistent category id fails with a field-level error, like the
/// original form's choice validation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_invalid_category(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "author", "author@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);

    let body = serde_json::json!({
        "first_name": "Alice",
        "last_name": "Stone",
        "category_id": 9999,
    });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/v1/actors", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["category_id"].is_array());
}

/// A multipart photo upload stores the file under the media root and
/// records its relative path on the actor; non-image payloads are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_actor_photo(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "snapper", "snapper@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);
    let category = seed_category(&pool, "Drama").await;
    let actor = seed_actor(&pool, category.id, "Alice", "Stone", true).await;

    // The PNG signature alone satisfies header-only format sniffing.
    let png_magic: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let uri = format!("/api/v1/actors/{}/photo", actor.id);

    let response = common::post_multipart_auth(
        common::build_test_app(pool.clone()),
        &uri,
        &token,
        "photo.png",
        "image/png",
        png_magic,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let photo_path = json["data"]["photo_path"].as_str().unwrap();
    assert!(photo_path.starts_with("actors_photos/"));
    assert!(photo_path.ends_with(".png"));
    assert!(common::test_config().media_root.join(photo_path).exists());

    // A payload that is not an image is a 400.
    let response = common::post_multipart_auth(
        common::build_test_app(pool),
        &uri,
        &token,
        "notes.txt",
        "text/plain",
        b"just some text",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
