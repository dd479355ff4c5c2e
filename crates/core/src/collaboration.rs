//! Collaboration request state machine.
//!
//! A collaboration is a bilateral cross-promotion request between two
//! projects. The target answers a pending request (accept or decline);
//! either side can mark an accepted one completed. Declined and completed
//! are terminal.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const COLLAB_PENDING: &str = "pending";
pub const COLLAB_ACCEPTED: &str = "accepted";
pub const COLLAB_DECLINED: &str = "declined";
pub const COLLAB_COMPLETED: &str = "completed";

/// All valid collaboration status strings.
pub const VALID_COLLAB_STATUSES: &[&str] = &[
    COLLAB_PENDING,
    COLLAB_ACCEPTED,
    COLLAB_DECLINED,
    COLLAB_COMPLETED,
];

/// Valid responses to a pending request.
pub const VALID_RESPONSES: &[&str] = &[COLLAB_ACCEPTED, COLLAB_DECLINED];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Status of a collaboration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollabStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl CollabStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            COLLAB_PENDING => Ok(Self::Pending),
            COLLAB_ACCEPTED => Ok(Self::Accepted),
            COLLAB_DECLINED => Ok(Self::Declined),
            COLLAB_COMPLETED => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid collaboration status '{s}'. Must be one of: {}",
                VALID_COLLAB_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => COLLAB_PENDING,
            Self::Accepted => COLLAB_ACCEPTED,
            Self::Declined => COLLAB_DECLINED,
            Self::Completed => COLLAB_COMPLETED,
        }
    }

    /// Whether the workflow can move from `self` to `next`.
    ///
    /// Allowed: pending -> accepted, pending -> declined,
    /// accepted -> completed. Everything else is rejected; declined and
    /// completed have no way out.
    pub fn can_transition_to(&self, next: CollabStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, CollabStatus::Accepted)
                | (Self::Pending, CollabStatus::Declined)
                | (Self::Accepted, CollabStatus::Completed)
        )
    }
}

/// The target project's answer to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollabResponse {
    Accepted,
    Declined,
}

impl CollabResponse {
    /// Convert from a request string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            COLLAB_ACCEPTED => Ok(Self::Accepted),
            COLLAB_DECLINED => Ok(Self::Declined),
            _ => Err(format!(
                "Invalid response '{s}'. Must be one of: {}",
                VALID_RESPONSES.join(", ")
            )),
        }
    }

    /// The collaboration status this response resolves to.
    pub fn as_status(&self) -> CollabStatus {
        match self {
            Self::Accepted => CollabStatus::Accepted,
            Self::Declined => CollabStatus::Declined,
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => COLLAB_ACCEPTED,
            Self::Declined => COLLAB_DECLINED,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in &[
            CollabStatus::Pending,
            CollabStatus::Accepted,
            CollabStatus::Declined,
            CollabStatus::Completed,
        ] {
            assert_eq!(
                CollabStatus::from_str_value(status.as_str()).unwrap(),
                *status
            );
        }
    }

    #[test]
    fn pending_can_be_answered_either_way() {
        assert!(CollabStatus::Pending.can_transition_to(CollabStatus::Accepted));
        assert!(CollabStatus::Pending.can_transition_to(CollabStatus::Declined));
    }

    #[test]
    fn accepted_can_only_complete() {
        assert!(CollabStatus::Accepted.can_transition_to(CollabStatus::Completed));
        assert!(!CollabStatus::Accepted.can_transition_to(CollabStatus::Declined));
        assert!(!CollabStatus::Accepted.can_transition_to(CollabStatus::Pending));
    }

    #[test]
    fn declined_and_completed_are_terminal() {
        for next in &[
            CollabStatus::Pending,
            CollabStatus::Accepted,
            CollabStatus::Declined,
            CollabStatus::Completed,
        ] {
            assert!(!CollabStatus::Declined.can_transition_to(*next));
            assert!(!CollabStatus::Completed.can_transition_to(*next));
        }
    }

    #[test]
    fn pending_cannot_skip_to_completed() {
        assert!(!CollabStatus::Pending.can_transition_to(CollabStatus::Completed));
    }

    #[test]
    fn response_rejects_completed() {
        assert!(CollabResponse::from_str_value("completed").is_err());
    }

    #[test]
    fn response_maps_to_matching_status() {
        assert_eq!(CollabResponse::Accepted.as_status(), CollabStatus::Accepted);
        assert_eq!(CollabResponse::Declined.as_status(), CollabStatus::Declined);
    }
}
