//! Activity log entity model and DTOs.

use launchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An activity log row. Rows are append-only; there is no update path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub actor_id: DbId,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// Feed row with the actor's identity joined in for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeedEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub actor_id: DbId,
    pub action: String,
    pub details: Option<serde_json::Value>,
    pub actor_email: String,
    pub actor_display_name: Option<String>,
    pub created_at: Timestamp,
}

/// Query filters for the activity feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityFilters {
    /// Exact action tag to filter on (e.g. `wallet.added`).
    pub action: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
