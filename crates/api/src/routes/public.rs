//! Route definitions for the unauthenticated `/public` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/public` (root-level, NOT under `/api/v1`).
///
/// ```text
/// GET  /projects/{slug}        -> launch view
/// GET  /projects/{slug}/check  -> wallet status lookup (?address=)
/// POST /projects/{slug}/apply  -> whitelist application
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/{slug}", get(public::get_public_project))
        .route("/projects/{slug}/check", get(public::check_wallet))
        .route("/projects/{slug}/apply", post(public::apply))
}
