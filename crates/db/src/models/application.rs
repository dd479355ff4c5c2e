//! Whitelist application entity model and DTOs.

use launchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A whitelist application row from the `whitelist_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WhitelistApplication {
    pub id: DbId,
    pub project_id: DbId,
    pub wallet_address: String,
    pub wallet_chain: String,
    pub twitter_handle: Option<String>,
    pub discord_handle: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    pub reviewed_by: Option<DbId>,
    pub created_at: Timestamp,
    pub reviewed_at: Option<Timestamp>,
}

/// Input for inserting a pending application. The address is validated and
/// the twitter handle is stripped of its leading `@` before this point.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub project_id: DbId,
    pub wallet_address: String,
    pub wallet_chain: String,
    pub twitter_handle: Option<String>,
    pub discord_handle: Option<String>,
    pub reason: Option<String>,
}

/// Query filters for listing applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationFilters {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
