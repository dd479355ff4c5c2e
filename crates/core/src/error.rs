//! Domain error taxonomy shared across the workspace.
//!
//! Business-rule failures are detected before any write and carried up to
//! the HTTP layer, which maps each variant onto a status code and a stable
//! machine-readable error code.

use crate::types::DbId;

/// Domain-level error for whitelist operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist or is not visible to the caller.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A slug-addressed public lookup found nothing.
    #[error("{entity} with slug '{slug}' not found")]
    SlugNotFound { entity: &'static str, slug: String },

    /// Bad or missing required input (blank name, malformed address,
    /// unknown enum value).
    #[error("{0}")]
    Validation(String),

    /// A whitelist mutation was attempted while the project is locked.
    #[error("{0}")]
    Locked(String),

    /// An active wallet with the same address already exists in the project.
    #[error("{0}")]
    DuplicateActive(String),

    /// A public application was submitted while the project has
    /// applications closed.
    #[error("{0}")]
    ApplicationsClosed(String),

    /// The operation conflicts with current state, e.g. re-reviewing an
    /// already-reviewed application or completing a declined collab.
    #[error("{0}")]
    Conflict(String),

    /// Authentication is missing or invalid.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to perform this action.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
