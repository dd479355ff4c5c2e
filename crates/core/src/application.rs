//! Whitelist application statuses and review decisions.
//!
//! An application is reviewed at most once: pending -> approved or
//! pending -> rejected, never back. The review handler relies on
//! [`ReviewDecision`] for input validation and on the status enum for the
//! single-review guard.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const APPLICATION_PENDING: &str = "pending";
pub const APPLICATION_APPROVED: &str = "approved";
pub const APPLICATION_REJECTED: &str = "rejected";

/// All valid application status strings.
pub const VALID_APPLICATION_STATUSES: &[&str] = &[
    APPLICATION_PENDING,
    APPLICATION_APPROVED,
    APPLICATION_REJECTED,
];

/// All valid review decision strings (terminal statuses only).
pub const VALID_DECISIONS: &[&str] = &[APPLICATION_APPROVED, APPLICATION_REJECTED];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a whitelist application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            APPLICATION_PENDING => Ok(Self::Pending),
            APPLICATION_APPROVED => Ok(Self::Approved),
            APPLICATION_REJECTED => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid application status '{s}'. Must be one of: {}",
                VALID_APPLICATION_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => APPLICATION_PENDING,
            Self::Approved => APPLICATION_APPROVED,
            Self::Rejected => APPLICATION_REJECTED,
        }
    }

    /// Whether this application can still be reviewed.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A reviewer's decision on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl ReviewDecision {
    /// Convert from a request string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            APPLICATION_APPROVED => Ok(Self::Approved),
            APPLICATION_REJECTED => Ok(Self::Rejected),
            _ => Err(format!(
                "Invalid decision '{s}'. Must be one of: {}",
                VALID_DECISIONS.join(", ")
            )),
        }
    }

    /// The application status this decision resolves to.
    pub fn as_status(&self) -> ApplicationStatus {
        match self {
            Self::Approved => ApplicationStatus::Approved,
            Self::Rejected => ApplicationStatus::Rejected,
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => APPLICATION_APPROVED,
            Self::Rejected => APPLICATION_REJECTED,
        }
    }
}

/// Validate that a decision string is one of the accepted values.
pub fn validate_decision(decision: &str) -> Result<(), String> {
    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            VALID_DECISIONS.join(", ")
        ))
    }
}

/// Build the provenance label for a wallet created from an approved
/// application, e.g. `Applied via WL form (@handle)`.
pub fn promotion_label(twitter_handle: Option<&str>) -> String {
    match twitter_handle {
        Some(handle) if !handle.is_empty() => format!("Applied via WL form (@{handle})"),
        _ => "Applied via WL form".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
