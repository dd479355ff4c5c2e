//! Repository for the `wallets` table.

use launchlist_core::types::DbId;
use launchlist_core::wallet::STATUS_ACTIVE;
use sqlx::PgPool;

use crate::models::wallet::{CreateWallet, Wallet, WalletFilters};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, address, chain, category, label, source, status, \
                        added_by, created_at, removed_at, removed_by";

/// Provides CRUD operations for whitelist wallets.
pub struct WalletRepo;

impl WalletRepo {
    /// Insert a new active wallet, returning the created row.
    ///
    /// The partial unique index `uq_wallets_project_address_active` rejects
    /// a second active row with the same address (case-insensitive) in the
    /// same project; that unique violation is surfaced to the caller.
    pub async fn insert(pool: &PgPool, input: &CreateWallet) -> Result<Wallet, sqlx::Error> {
        let query = format!(
            "INSERT INTO wallets (project_id, address, chain, category, label, source, added_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wallet>(&query)
            .bind(input.project_id)
            .bind(&input.address)
            .bind(&input.chain)
            .bind(&input.category)
            .bind(&input.label)
            .bind(&input.source)
            .bind(input.added_by)
            .fetch_one(pool)
            .await
    }

    /// List a project's wallets with optional filters: status (default
    /// `active`), category, and a case-insensitive substring search over
    /// address and label. `limit`/`offset` are optional; a NULL limit means
    /// the full set (the export path relies on this).
    pub async fn list(
        pool: &PgPool,
        project_id: DbId,
        filters: &WalletFilters,
    ) -> Result<Vec<Wallet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wallets
              WHERE project_id = $1
                AND status = $2
                AND category = COALESCE($3, category)
                AND ($4::text IS NULL
                     OR address ILIKE '%' || $4 || '%'
                     OR COALESCE(label, '') ILIKE '%' || $4 || '%')
              ORDER BY created_at DESC, id DESC
              LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Wallet>(&query)
            .bind(project_id)
            .bind(filters.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .bind(&filters.category)
            .bind(&filters.search)
            .bind(filters.limit.map(|l| l.max(0)))
            .bind(filters.offset.map(|o| o.max(0)))
            .fetch_all(pool)
            .await
    }

    /// Find the active wallet matching an address (case-insensitive) in a
    /// project, if any.
    pub async fn find_active_by_address(
        pool: &PgPool,
        project_id: DbId,
        address: &str,
    ) -> Result<Option<Wallet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wallets
              WHERE project_id = $1
                AND status = 'active'
                AND lower(address) = lower($2)
              LIMIT 1"
        );
        sqlx::query_as::<_, Wallet>(&query)
            .bind(project_id)
            .bind(address)
            .fetch_optional(pool)
            .await
    }

    /// Soft-remove the given active wallets: flip status to `removed` and
    /// record when and by whom. Rows already removed (or belonging to a
    /// different project) are left untouched. Returns the affected rows.
    pub async fn soft_remove(
        pool: &PgPool,
        project_id: DbId,
        wallet_ids: &[DbId],
        removed_by: DbId,
    ) -> Result<Vec<Wallet>, sqlx::Error> {
        let query = format!(
            "UPDATE wallets
                SET status = 'removed', removed_at = NOW(), removed_by = $3
              WHERE project_id = $1
                AND id = ANY($2)
                AND status = 'active'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wallet>(&query)
            .bind(project_id)
            .bind(wallet_ids)
            .bind(removed_by)
            .fetch_all(pool)
            .await
    }

    /// Recompute a project's filled-spot counters from its active wallet
    /// rows. Category `gtd` feeds the GTD counter; every other category
    /// feeds the WL counter. Called after each wallet mutation.
    pub async fn recount_project_spots(pool: &PgPool, project_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE projects SET
                wl_spots_filled = (SELECT COUNT(*)::int FROM wallets
                                    WHERE project_id = $1 AND status = 'active'
                                      AND category <> 'gtd'),
                gtd_spots_filled = (SELECT COUNT(*)::int FROM wallets
                                     WHERE project_id = $1 AND status = 'active'
                                       AND category = 'gtd')
             WHERE id = $1",
        )
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
