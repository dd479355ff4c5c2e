//! Repository for the append-only `activity_log` table.

use launchlist_core::audit::clamp_feed_limit;
use launchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{ActivityEntry, ActivityFilters, FeedEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, actor_id, action, details, created_at";

/// Provides append and feed queries for activity log entries.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append an activity entry, returning the created row.
    pub async fn log(
        pool: &PgPool,
        project_id: DbId,
        actor_id: DbId,
        action: &str,
        details: Option<serde_json::Value>,
    ) -> Result<ActivityEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_log (project_id, actor_id, action, details)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(project_id)
            .bind(actor_id)
            .bind(action)
            .bind(details)
            .fetch_one(pool)
            .await
    }

    /// Append an activity entry, swallowing any failure.
    ///
    /// Audit logging never blocks or rolls back the mutation it describes;
    /// a failed insert is reported through tracing and dropped.
    pub async fn log_best_effort(
        pool: &PgPool,
        project_id: DbId,
        actor_id: DbId,
        action: &str,
        details: Option<serde_json::Value>,
    ) {
        if let Err(error) = Self::log(pool, project_id, actor_id, action, details).await {
            tracing::warn!(%error, project_id, action, "failed to write activity log entry");
        }
    }

    /// Page through a project's feed, newest first, optionally filtered by
    /// action. The limit defaults to 50 and is capped at 500.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        filters: &ActivityFilters,
    ) -> Result<Vec<FeedEntry>, sqlx::Error> {
        sqlx::query_as::<_, FeedEntry>(
            "SELECT l.id, l.project_id, l.actor_id, l.action, l.details,
                    u.email AS actor_email, u.display_name AS actor_display_name,
                    l.created_at
               FROM activity_log l
               JOIN users u ON u.id = l.actor_id
              WHERE l.project_id = $1
                AND l.action = COALESCE($2, l.action)
              ORDER BY l.created_at DESC, l.id DESC
              LIMIT $3 OFFSET $4",
        )
        .bind(project_id)
        .bind(&filters.action)
        .bind(clamp_feed_limit(filters.limit))
        .bind(filters.offset.unwrap_or(0).max(0))
        .fetch_all(pool)
        .await
    }

    /// Count a project's feed entries under the same action filter as
    /// [`Self::list_for_project`].
    pub async fn count_for_project(
        pool: &PgPool,
        project_id: DbId,
        action: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM activity_log
              WHERE project_id = $1
                AND action = COALESCE($2, action)",
        )
        .bind(project_id)
        .bind(action)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
