//! Repository for the `tags` table.

use backstage_core::slug::slugify;
use backstage_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{CreateTag, Tag, UpdateTag};

/// Column list shared across queries.
const COLUMNS: &str = "id, name, slug";

/// Provides CRUD operations for tags.
///
/// Tag names are unique; the slug is recomputed from the name on every
/// write.
pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .fetch_one(pool)
            .await
    }

    /// Find a tag by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE slug = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all tags ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// List the tags attached to a specific actor, ordered by name.
    pub async fn list_for_actor(pool: &PgPool, actor_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.slug \
             FROM actor_tags atg \
             JOIN tags t ON t.id = atg.tag_id \
             WHERE atg.actor_id = $1 \
             ORDER BY t.name",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }

    /// Rename a tag, recomputing its slug.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTag,
    ) -> Result<Option<Tag>, sqlx::Error> {
        let query =
            format!("UPDATE tags SET name = $2, slug = $3 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(slugify(&input.name))
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag by ID. Cascade removes its actor associations.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
