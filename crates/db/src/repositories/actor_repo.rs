//! Repository for the `actors` and `actor_tags` tables.
//!
//! Two query scopes are provided. The *published* methods back every
//! public read path and never return a draft row; the unscoped methods
//! (`find_by_id`, `list_all`) are reserved for administrative and author
//! contexts.

use backstage_core::slug::slugify;
use backstage_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::actor::{Actor, ActorAdminFilter, ActorSummary, CreateActor, UpdateActor};

/// Column list for full `actors` rows.
const ACTOR_COLUMNS: &str = "id, first_name, last_name, biography, slug, photo_path, \
                             is_published, category_id, producer_id, author_id, \
                             created_at, updated_at";

/// SELECT prefix for list rows with the category joined in.
const SUMMARY_SELECT: &str = "SELECT a.id, a.first_name, a.last_name, a.slug, a.photo_path, \
                              a.is_published, c.name AS category_name, c.slug AS category_slug, \
                              a.created_at \
                              FROM actors a \
                              LEFT JOIN categories c ON c.id = a.category_id";

/// Default page size for actor listings.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for actor listings.
const MAX_LIMIT: i64 = 100;

/// Clamp an optional limit into `[1, MAX_LIMIT]` with the default page size.
fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp an optional offset to a non-negative value.
fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides CRUD operations and the published query scope for actors.
pub struct ActorRepo;

impl ActorRepo {
    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new actor and its tag associations in one transaction.
    ///
    /// The slug is derived from the full name; a clash surfaces as the
    /// `uq_actors_slug` unique violation.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let slug = slugify(&format!("{} {}", input.first_name, input.last_name));

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO actors \
                 (first_name, last_name, biography, slug, is_published, \
                  category_id, producer_id, author_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ACTOR_COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.biography)
            .bind(&slug)
            .bind(input.is_published)
            .bind(input.category_id)
            .bind(input.producer_id)
            .bind(input.author_id)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_tags(&mut tx, actor.id, &input.tag_ids).await?;

        tx.commit().await?;
        Ok(actor)
    }

    /// Replace all fields of an existing actor, recomputing the slug from
    /// the new names and replacing the tag set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let slug = slugify(&format!("{} {}", input.first_name, input.last_name));

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE actors SET \
                 first_name = $2, last_name = $3, biography = $4, slug = $5, \
                 is_published = $6, category_id = $7, producer_id = $8, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {ACTOR_COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.biography)
            .bind(&slug)
            .bind(input.is_published)
            .bind(input.category_id)
            .bind(input.producer_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(actor) = actor else {
            return Ok(None);
        };

        Self::replace_tags(&mut tx, actor.id, &input.tag_ids).await?;

        tx.commit().await?;
        Ok(Some(actor))
    }

    /// Store the relative path of an uploaded photo.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_photo_path(
        pool: &PgPool,
        id: DbId,
        photo_path: &str,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET photo_path = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {ACTOR_COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(photo_path)
            .fetch_optional(pool)
            .await
    }

    /// Transition the given actors to the target publish state.
    ///
    /// Only rows not already in that state are touched; returns the number
    /// of rows that actually changed.
    pub async fn set_published(
        pool: &PgPool,
        ids: &[DbId],
        publish: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actors SET is_published = $2, updated_at = NOW() \
             WHERE id = ANY($1) AND is_published <> $2",
        )
        .bind(ids)
        .bind(publish)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete an actor by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Published scope (public read paths)
    // -----------------------------------------------------------------------

    /// List published actors, newest page of the catalogue first by id.
    pub async fn list_published(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.is_published ORDER BY a.id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ActorSummary>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Find a published actor by its URL slug. Draft rows are invisible here.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "SELECT {ACTOR_COLUMNS} FROM actors WHERE slug = $1 AND is_published"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published actors within a category.
    pub async fn list_published_by_category(
        pool: &PgPool,
        category_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.is_published AND a.category_id = $1 \
             ORDER BY a.id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActorSummary>(&query)
            .bind(category_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// List published actors carrying a tag.
    pub async fn list_published_by_tag(
        pool: &PgPool,
        tag_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             JOIN actor_tags atg ON atg.actor_id = a.id \
             WHERE a.is_published AND atg.tag_id = $1 \
             ORDER BY a.id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActorSummary>(&query)
            .bind(tag_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Unscoped access (admin / author contexts)
    // -----------------------------------------------------------------------

    /// Find any actor by internal ID, drafts included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors, drafts included, with optional admin filters.
    pub async fn list_all(
        pool: &PgPool,
        filter: &ActorAdminFilter,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             WHERE ($1::bigint IS NULL OR a.category_id = $1) \
               AND ($2::boolean IS NULL OR a.is_published = $2) \
               AND ($3::boolean IS NULL OR (a.producer_id IS NOT NULL) = $3) \
             ORDER BY a.id LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ActorSummary>(&query)
            .bind(filter.category_id)
            .bind(filter.is_published)
            .bind(filter.has_producer)
            .bind(clamp_limit(filter.limit))
            .bind(clamp_offset(filter.offset))
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    /// Replace the tag set of an actor inside an open transaction.
    async fn replace_tags(
        tx: &mut Transaction<'_, Postgres>,
        actor_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM actor_tags WHERE actor_id = $1")
            .bind(actor_id)
            .execute(&mut **tx)
            .await?;

        if !tag_ids.is_empty() {
            // Joining against tags drops ids that do not exist instead of
            // failing the whole save.
            sqlx::query(
                "INSERT INTO actor_tags (actor_id, tag_id) \
                 SELECT $1, t.id FROM tags t WHERE t.id = ANY($2)",
            )
            .bind(actor_id)
            .bind(tag_ids)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
