//! Route definitions for the `/applications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`. Listing is project-scoped and lives
/// under `/projects/{id}/applications`.
///
/// ```text
/// POST /{id}/review  -> approve or reject (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/review", post(applications::review_application))
}
