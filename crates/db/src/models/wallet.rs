//! Whitelist wallet entity model and DTOs.

use launchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A wallet row from the `wallets` table.
///
/// Removal is soft: `status` flips to `removed` and the row keeps its
/// history (`removed_at`, `removed_by`). Only `active` rows count toward
/// spot totals and duplicate checks.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wallet {
    pub id: DbId,
    pub project_id: DbId,
    pub address: String,
    pub chain: String,
    pub category: String,
    pub label: Option<String>,
    pub source: String,
    pub status: String,
    pub added_by: DbId,
    pub created_at: Timestamp,
    pub removed_at: Option<Timestamp>,
    pub removed_by: Option<DbId>,
}

/// Input for inserting a wallet row. Address and enum values are already
/// validated by the caller.
#[derive(Debug, Clone)]
pub struct CreateWallet {
    pub project_id: DbId,
    pub address: String,
    pub chain: String,
    pub category: String,
    pub label: Option<String>,
    pub source: String,
    pub added_by: DbId,
}

/// Query filters for listing wallets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletFilters {
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match on address or label.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
