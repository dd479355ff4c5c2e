//! Repository for the `collaborations` table.

use launchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::collaboration::{CollabListItem, Collaboration, CreateCollaboration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, requester_project_id, target_project_id, status, message, created_at, updated_at";

/// Provides CRUD operations for collaborations.
pub struct CollaborationRepo;

impl CollaborationRepo {
    /// Insert a new pending collaboration request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollaboration,
    ) -> Result<Collaboration, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborations (requester_project_id, target_project_id, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(input.requester_project_id)
            .bind(input.target_project_id)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a collaboration by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Collaboration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collaborations WHERE id = $1");
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every collaboration touching a project (as requester or
    /// target), newest first, with both project identities joined in.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CollabListItem>, sqlx::Error> {
        sqlx::query_as::<_, CollabListItem>(
            "SELECT c.id, c.requester_project_id, c.target_project_id, c.status, c.message,
                    rp.name AS requester_name, rp.slug AS requester_slug,
                    rp.logo_url AS requester_logo_url,
                    tp.name AS target_name, tp.slug AS target_slug,
                    tp.logo_url AS target_logo_url,
                    c.created_at, c.updated_at
               FROM collaborations c
               JOIN projects rp ON rp.id = c.requester_project_id
               JOIN projects tp ON tp.id = c.target_project_id
              WHERE c.requester_project_id = $1 OR c.target_project_id = $1
              ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Transition a collaboration's status, guarded by the expected current
    /// status. Returns `None` when the row is missing or not in
    /// `from_status` (a concurrent transition won).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        from_status: &str,
        to_status: &str,
    ) -> Result<Option<Collaboration>, sqlx::Error> {
        let query = format!(
            "UPDATE collaborations SET status = $3
              WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaboration>(&query)
            .bind(id)
            .bind(from_status)
            .bind(to_status)
            .fetch_optional(pool)
            .await
    }
}
