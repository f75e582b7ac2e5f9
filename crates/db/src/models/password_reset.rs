//! Password-reset token model.

use backstage_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A password-reset row from the `password_resets` table.
///
/// Tokens are single-use: `used_at` is set when the reset is consumed.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordReset {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub used_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
