//! Repository for the `projects` table.

use launchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, slug, description, chain, logo_url, banner_url, \
                        twitter_url, discord_url, website_url, marketplace_url, mint_date, \
                        supply, mint_price, wl_spots_total, wl_spots_filled, gtd_spots_total, \
                        gtd_spots_filled, is_applications_open, is_locked, locked_at, locked_by, \
                        wl_open_date, wl_close_date, snapshot_date, created_at, updated_at";

/// Provides CRUD operations for projects.
///
/// Owner-scoped lookups take `(id, owner_id)` so a project owned by
/// someone else is indistinguishable from a missing one.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `chain` is `None` in the input, defaults to `ethereum`.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        slug: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, name, slug, description, chain)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'ethereum'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.chain)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID without an ownership check. Used where the
    /// caller is not the owner (collab targets, internal resolution).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, scoped to its owner.
    pub async fn find_by_id_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recent first, with the pending
    /// application count joined in for dashboard badges.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<ProjectSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummary>(
            "SELECT p.id, p.name, p.slug, p.chain, p.logo_url, p.mint_date,
                    p.wl_spots_total, p.wl_spots_filled, p.gtd_spots_total, p.gtd_spots_filled,
                    p.is_applications_open, p.is_locked,
                    (SELECT COUNT(*) FROM whitelist_applications a
                      WHERE a.project_id = p.id AND a.status = 'pending') AS pending_applications,
                    p.created_at, p.updated_at
               FROM projects p
              WHERE p.owner_id = $1
              ORDER BY p.created_at DESC, p.id DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Update a project's settings. Only non-`None` fields in `input` are
    /// applied. Returns `None` if the project does not exist or is not
    /// owned by `owner_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                chain = COALESCE($5, chain),
                logo_url = COALESCE($6, logo_url),
                banner_url = COALESCE($7, banner_url),
                twitter_url = COALESCE($8, twitter_url),
                discord_url = COALESCE($9, discord_url),
                website_url = COALESCE($10, website_url),
                marketplace_url = COALESCE($11, marketplace_url),
                mint_date = COALESCE($12, mint_date),
                supply = COALESCE($13, supply),
                mint_price = COALESCE($14, mint_price),
                wl_spots_total = COALESCE($15, wl_spots_total),
                gtd_spots_total = COALESCE($16, gtd_spots_total),
                is_applications_open = COALESCE($17, is_applications_open),
                wl_open_date = COALESCE($18, wl_open_date),
                wl_close_date = COALESCE($19, wl_close_date),
                snapshot_date = COALESCE($20, snapshot_date)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.chain)
            .bind(&input.logo_url)
            .bind(&input.banner_url)
            .bind(&input.twitter_url)
            .bind(&input.discord_url)
            .bind(&input.website_url)
            .bind(&input.marketplace_url)
            .bind(input.mint_date)
            .bind(input.supply)
            .bind(&input.mint_price)
            .bind(input.wl_spots_total)
            .bind(input.gtd_spots_total)
            .bind(input.is_applications_open)
            .bind(input.wl_open_date)
            .bind(input.wl_close_date)
            .bind(input.snapshot_date)
            .fetch_optional(pool)
            .await
    }

    /// Lock the whitelist: set the flag and record who locked it and when.
    /// Safe to call on an already-locked project.
    pub async fn lock(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        locked_by: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET is_locked = true, locked_at = NOW(), locked_by = $3
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(locked_by)
            .fetch_optional(pool)
            .await
    }

    /// Unlock the whitelist: clear the flag, timestamp, and actor.
    pub async fn unlock(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET is_locked = false, locked_at = NULL, locked_by = NULL
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Wallets, applications, collaborations,
    /// and activity entries cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
