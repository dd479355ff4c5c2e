//! Repository for the `whitelist_applications` table.

use launchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{ApplicationFilters, CreateApplication, WhitelistApplication};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, wallet_address, wallet_chain, twitter_handle, \
                        discord_handle, reason, status, reviewed_by, created_at, reviewed_at";

/// Provides CRUD operations for whitelist applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new pending application, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<WhitelistApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO whitelist_applications
                (project_id, wallet_address, wallet_chain, twitter_handle, discord_handle, reason)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WhitelistApplication>(&query)
            .bind(input.project_id)
            .bind(&input.wallet_address)
            .bind(&input.wallet_chain)
            .bind(&input.twitter_handle)
            .bind(&input.discord_handle)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find an application by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WhitelistApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM whitelist_applications WHERE id = $1");
        sqlx::query_as::<_, WhitelistApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's applications, newest first, optionally filtered by
    /// status.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        filters: &ApplicationFilters,
    ) -> Result<Vec<WhitelistApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM whitelist_applications
              WHERE project_id = $1
                AND status = COALESCE($2, status)
              ORDER BY created_at DESC, id DESC
              LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, WhitelistApplication>(&query)
            .bind(project_id)
            .bind(&filters.status)
            .bind(filters.limit.map(|l| l.max(0)))
            .bind(filters.offset.map(|o| o.max(0)))
            .fetch_all(pool)
            .await
    }

    /// Record a review decision. The `status = 'pending'` guard makes the
    /// first review win: a second attempt matches no row and returns
    /// `None`, which the caller reports as a conflict.
    pub async fn mark_reviewed(
        pool: &PgPool,
        id: DbId,
        status: &str,
        reviewed_by: DbId,
    ) -> Result<Option<WhitelistApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE whitelist_applications
                SET status = $2, reviewed_by = $3, reviewed_at = NOW()
              WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WhitelistApplication>(&query)
            .bind(id)
            .bind(status)
            .bind(reviewed_by)
            .fetch_optional(pool)
            .await
    }
}
