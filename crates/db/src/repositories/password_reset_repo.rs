//! Repository for the `password_resets` table.

use backstage_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::password_reset::PasswordReset;

/// Column list shared across queries.
const COLUMNS: &str = "id, user_id, token_hash, expires_at, used_at, created_at";

/// Provides persistence for single-use password-reset tokens.
pub struct PasswordResetRepo;

impl PasswordResetRepo {
    /// Insert a new reset token hash with its expiry.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<PasswordReset, sqlx::Error> {
        let query = format!(
            "INSERT INTO password_resets (user_id, token_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(user_id)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find the usable reset matching a token hash.
    ///
    /// Consumed and expired tokens never match.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<PasswordReset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM password_resets \
             WHERE token_hash = $1 \
               AND used_at IS NULL \
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, PasswordReset>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Mark a reset token as consumed.
    pub async fn mark_used(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE password_resets SET used_at = NOW() WHERE id = $1 AND used_at IS NULL")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
