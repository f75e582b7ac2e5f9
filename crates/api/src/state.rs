use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mail::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: backstage_db::DbPool,
    /// Server configuration (JWT settings, media root, timeouts).
    pub config: Arc<ServerConfig>,
    /// Outgoing SMTP mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<Mailer>>,
}
