//! Collaboration entity model and DTOs.

use launchlist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A collaboration row from the `collaborations` table.
///
/// A collab is a spot-exchange request between two projects: the requester
/// asks, the target accepts or declines, and either side can mark an
/// accepted collab completed once spots have been swapped.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaboration {
    pub id: DbId,
    pub requester_project_id: DbId,
    pub target_project_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for inserting a pending collaboration request.
#[derive(Debug, Clone)]
pub struct CreateCollaboration {
    pub requester_project_id: DbId,
    pub target_project_id: DbId,
    pub message: Option<String>,
}

/// Collaboration list row with both project identities joined in, so the
/// UI can render counterparty cards without extra lookups.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollabListItem {
    pub id: DbId,
    pub requester_project_id: DbId,
    pub target_project_id: DbId,
    pub status: String,
    pub message: Option<String>,
    pub requester_name: String,
    pub requester_slug: String,
    pub requester_logo_url: Option<String>,
    pub target_name: String,
    pub target_slug: String,
    pub target_logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
