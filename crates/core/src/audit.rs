//! Activity feed action taxonomy.
//!
//! This module lives in `core` (zero internal deps) so the action tags and
//! display labels stay consistent between the API layer, the repositories,
//! and any future CLI tooling. Entries themselves are append-only rows; the
//! constants here are the only place action strings are spelled out.

// ---------------------------------------------------------------------------
// Action constants
// ---------------------------------------------------------------------------

/// Known action tags for activity log entries.
pub mod actions {
    pub const WALLET_ADDED: &str = "wallet.added";
    pub const WALLET_REMOVED: &str = "wallet.removed";
    pub const WALLET_BULK_UPLOAD: &str = "wallet.bulk_upload";
    pub const LIST_LOCKED: &str = "list.locked";
    pub const LIST_UNLOCKED: &str = "list.unlocked";
    pub const APPLICATION_APPROVED: &str = "application.approved";
    pub const APPLICATION_REJECTED: &str = "application.rejected";
    pub const COLLAB_SENT: &str = "collab.sent";
    pub const COLLAB_ACCEPTED: &str = "collab.accepted";
    pub const COLLAB_DECLINED: &str = "collab.declined";
    pub const COLLAB_COMPLETED: &str = "collab.completed";
    pub const PROJECT_UPDATED: &str = "project.updated";
    pub const PROJECT_CREATED: &str = "project.created";
    pub const TIMELINE_CHANGED: &str = "timeline.changed";
}

/// All valid action tags.
pub const VALID_ACTIONS: &[&str] = &[
    actions::WALLET_ADDED,
    actions::WALLET_REMOVED,
    actions::WALLET_BULK_UPLOAD,
    actions::LIST_LOCKED,
    actions::LIST_UNLOCKED,
    actions::APPLICATION_APPROVED,
    actions::APPLICATION_REJECTED,
    actions::COLLAB_SENT,
    actions::COLLAB_ACCEPTED,
    actions::COLLAB_DECLINED,
    actions::COLLAB_COMPLETED,
    actions::PROJECT_UPDATED,
    actions::PROJECT_CREATED,
    actions::TIMELINE_CHANGED,
];

/// Default page size for the activity feed.
pub const DEFAULT_FEED_LIMIT: i64 = 50;

/// Hard cap on the activity feed page size.
pub const MAX_FEED_LIMIT: i64 = 500;

// ---------------------------------------------------------------------------
// Validation and display
// ---------------------------------------------------------------------------

/// Validate an action tag.
pub fn validate_action(action: &str) -> Result<(), String> {
    if VALID_ACTIONS.contains(&action) {
        Ok(())
    } else {
        Err(format!(
            "Invalid action '{action}'. Must be one of: {}",
            VALID_ACTIONS.join(", ")
        ))
    }
}

/// Human-readable label for an action tag.
///
/// Unknown tags fall back to the raw tag so old feed entries render even
/// if an action is later retired.
pub fn action_label(action: &str) -> &str {
    match action {
        actions::WALLET_ADDED => "Wallet added",
        actions::WALLET_REMOVED => "Wallet removed",
        actions::WALLET_BULK_UPLOAD => "Bulk upload",
        actions::LIST_LOCKED => "Whitelist locked",
        actions::LIST_UNLOCKED => "Whitelist unlocked",
        actions::APPLICATION_APPROVED => "Application approved",
        actions::APPLICATION_REJECTED => "Application rejected",
        actions::COLLAB_SENT => "Collab request sent",
        actions::COLLAB_ACCEPTED => "Collab accepted",
        actions::COLLAB_DECLINED => "Collab declined",
        actions::COLLAB_COMPLETED => "Collab completed",
        actions::PROJECT_UPDATED => "Project updated",
        actions::PROJECT_CREATED => "Project created",
        actions::TIMELINE_CHANGED => "Timeline changed",
        other => other,
    }
}

/// Clamp a requested feed page size to the allowed range.
pub fn clamp_feed_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_FEED_LIMIT).clamp(0, MAX_FEED_LIMIT)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
