//! Actor entity model and DTOs.

use backstage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor row from the `actors` table.
///
/// The slug is derived from the full name on every save; `is_published`
/// gates visibility on all public read paths.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
    pub slug: String,
    pub photo_path: Option<String>,
    pub is_published: bool,
    pub category_id: Option<DbId>,
    pub producer_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Actor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Actor list row with the category joined in, for index pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorSummary {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub slug: String,
    pub photo_path: Option<String>,
    pub is_published: bool,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new actor. The slug is computed, not supplied.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
    pub is_published: bool,
    pub category_id: Option<DbId>,
    pub producer_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub tag_ids: Vec<DbId>,
}

/// DTO for updating an existing actor.
///
/// Updates are form-style full replacements: every field is written, the
/// slug is recomputed from the new names, and the tag set is replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub first_name: String,
    pub last_name: String,
    pub biography: String,
    pub is_published: bool,
    pub category_id: Option<DbId>,
    pub producer_id: Option<DbId>,
    pub tag_ids: Vec<DbId>,
}

/// Filters for the administrative (unscoped) actor listing.
#[derive(Debug, Clone, Default)]
pub struct ActorAdminFilter {
    pub category_id: Option<DbId>,
    pub is_published: Option<bool>,
    /// `Some(true)` keeps only actors with a linked producer,
    /// `Some(false)` only those without one.
    pub has_producer: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
