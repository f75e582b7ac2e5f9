//! Repository for the `producers` table.

use backstage_core::types::DbId;
use sqlx::PgPool;

use crate::models::producer::{CreateProducer, Producer, UpdateProducer};

/// Column list shared across queries.
const COLUMNS: &str = "id, first_name, last_name, age";

/// Provides CRUD operations for producers.
pub struct ProducerRepo;

impl ProducerRepo {
    /// Insert a new producer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProducer) -> Result<Producer, sqlx::Error> {
        let query = format!(
            "INSERT INTO producers (first_name, last_name, age) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Producer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find a producer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Producer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producers WHERE id = $1");
        sqlx::query_as::<_, Producer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all producers ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Producer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producers ORDER BY id");
        sqlx::query_as::<_, Producer>(&query).fetch_all(pool).await
    }

    /// Update a producer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProducer,
    ) -> Result<Option<Producer>, sqlx::Error> {
        let query = format!(
            "UPDATE producers SET \
                 first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name), \
                 age = COALESCE($4, age) \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Producer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.age)
            .fetch_optional(pool)
            .await
    }

    /// Delete a producer by ID. Linked actors get their producer cleared.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM producers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
