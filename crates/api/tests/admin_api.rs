//! HTTP-level integration tests for the admin surface.
//!
//! Covers the unscoped actor listing with filters, bulk publish/unpublish
//! counts and notice wording, RBAC enforcement, and the protected category
//! delete.

mod common;

use axum::http::StatusCode;
use backstage_core::roles::{ROLE_ADMIN, ROLE_USER};
use backstage_core::types::DbId;
use common::{
    body_json, delete_auth, get_auth, post_json_auth, ADMIN_ROLE_ID, USER_ROLE_ID,
};
use sqlx::PgPool;

use backstage_db::models::actor::{Actor, CreateActor};
use backstage_db::models::category::{Category, CreateCategory};
use backstage_db::models::producer::CreateProducer;
use backstage_db::repositories::{ActorRepo, CategoryRepo, ProducerRepo};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

async fn admin_token(pool: &PgPool) -> String {
    let (admin, _) = common::create_test_user(pool, "admin", "admin@test.com", ADMIN_ROLE_ID).await;
    common::auth_token_for(admin.id, ROLE_ADMIN)
}

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
    producer_id: Option<DbId>,
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
            producer_id,
            author_id: None,
            tag_ids: vec![],
        },
    )
    .await
    .expect("actor creation should succeed")
}

// ---------------------------------------------------------------------------
// Bulk publish / unpublish
// ---------------------------------------------------------------------------

/// Bulk publish on a mixed selection transitions exactly the drafts and
/// reports both counts with plural wording.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_publish_mixed_selection(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let draft_a = seed_actor(&pool, category.id, None, "Draft", "One", false).await;
    let draft_b = seed_actor(&pool, category.id, None, "Draft", "Two", false).await;
    let already = seed_actor(&pool, category.id, None, "Live", "Already", true).await;

    let body = serde_json::json!({
        "actor_ids": [draft_a.id, draft_b.id, already.id],
        "publish": true,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/actors/bulk-publish",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["changed"], 2);
    assert_eq!(json["unchanged"], 1);
    assert_eq!(json["messages"][0], "Successfully published 2 actors.");
    assert_eq!(json["messages"][1], "Changes weren't applied to 1 actor.");

    // The already-published row is untouched; the drafts transitioned.
    let row = ActorRepo::find_by_id(&pool, draft_a.id).await.unwrap().unwrap();
    assert!(row.is_published);
    let row = ActorRepo::find_by_id(&pool, already.id).await.unwrap().unwrap();
    assert!(row.is_published);
}

/// A single transitioned row gets singular wording.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_publish_singular_wording(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let draft = seed_actor(&pool, category.id, None, "Draft", "One", false).await;

    let body = serde_json::json!({ "actor_ids": [draft.id], "publish": true });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/actors/bulk-publish",
        &token,
        body,
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["changed"], 1);
    assert_eq!(json["unchanged"], 0);
    assert_eq!(json["messages"][0], "Successfully published 1 actor.");
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
}

/// Unpublish transitions only published rows and uses the removal wording.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_unpublish(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let live = seed_actor(&pool, category.id, None, "Live", "One", true).await;
    let draft = seed_actor(&pool, category.id, None, "Draft", "Two", false).await;

    let body = serde_json::json!({ "actor_ids": [live.id, draft.id], "publish": false });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/actors/bulk-publish",
        &token,
        body,
    )
    .await;
    let json = body_json(response).await;

    assert_eq!(json["changed"], 1);
    assert_eq!(json["unchanged"], 1);
    assert_eq!(json["messages"][0], "Successfully removed 1 actor.");

    let row = ActorRepo::find_by_id(&pool, live.id).await.unwrap().unwrap();
    assert!(!row.is_published);
}

/// The bulk action is admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_publish_requires_admin(pool: PgPool) {
    let (user, _) = common::create_test_user(&pool, "pleb", "pleb@test.com", USER_ROLE_ID).await;
    let token = common::auth_token_for(user.id, ROLE_USER);

    let body = serde_json::json!({ "actor_ids": [1], "publish": true });
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admin/actors/bulk-publish",
        &token,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Unscoped listing + filters
// ---------------------------------------------------------------------------

/// The admin listing includes drafts and supports the producer filter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_filters(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let producer = ProducerRepo::create(
        &pool,
        &CreateProducer {
            first_name: "Paula".to_string(),
            last_name: "Deals".to_string(),
            age: Some(48),
        },
    )
    .await
    .expect("producer creation should succeed");

    let managed = seed_actor(&pool, category.id, Some(producer.id), "Alice", "Stone", true).await;
    let draft = seed_actor(&pool, category.id, None, "Bob", "Hidden", false).await;

    // Unscoped list returns both, drafts included.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/actors",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // producer=available keeps only the managed actor.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/actors?producer=available",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![managed.id]);

    // producer=not_available keeps only the unmanaged one.
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/actors?producer=not_available",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![draft.id]);

    // is_published filter narrows to drafts.
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/admin/actors?is_published=false",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["id"], draft.id);
}

// ---------------------------------------------------------------------------
// Catalogue administration
// ---------------------------------------------------------------------------

/// Deleting a category is blocked with 409 while actors reference it, and
/// succeeds once nothing does.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_delete_protected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let actor = seed_actor(&pool, category.id, None, "Alice", "Stone", true).await;

    let uri = format!("/api/v1/admin/categories/{}", category.id);
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    ActorRepo::delete(&pool, actor.id)
        .await
        .expect("actor delete should succeed");

    let response = delete_auth(common::build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Renaming a category recomputes its slug.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_rename_changes_slug(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    assert_eq!(category.slug, "drama");

    let uri = format!("/api/v1/admin/categories/{}", category.id);
    let body = serde_json::json!({ "name": "Historical Drama" });
    let response =
        common::put_json_auth(common::build_test_app(pool), &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "historical-drama");
}

/// Deleting an actor returns 204 and removes the row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_actor(pool: PgPool) {
    let token = admin_token(&pool).await;
    let category = seed_category(&pool, "Drama").await;
    let actor = seed_actor(&pool, category.id, None, "Alice", "Stone", true).await;

    let uri = format!("/api/v1/admin/actors/{}", actor.id);
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let row = ActorRepo::find_by_id(&pool, actor.id).await.unwrap();
    assert!(row.is_none());
}
