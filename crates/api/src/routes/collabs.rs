//! Route definitions for the `/collabs` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::collabs;
use crate::state::AppState;

/// Routes mounted at `/collabs`. Listing and sending are project-scoped
/// and live under `/projects/{id}/collabs`.
///
/// ```text
/// POST /{id}/respond   -> accept or decline (target owner)
/// POST /{id}/complete  -> mark completed (either owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/respond", post(collabs::respond_collab))
        .route("/{id}/complete", post(collabs::complete_collab))
}
