pub mod applications;
pub mod auth;
pub mod collabs;
pub mod health;
pub mod projects;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// `/health` and `/public` mount at the root (see `main.rs`), outside this
/// tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                         register (public)
/// /auth/login                            login (public)
/// /auth/refresh                          refresh (public)
/// /auth/logout                           logout (requires auth)
/// /auth/me                               current user (requires auth)
///
/// /projects                              list, create
/// /projects/{id}                         get, update, delete
/// /projects/{id}/lock                    lock whitelist (POST)
/// /projects/{id}/unlock                  unlock whitelist (POST)
/// /projects/{id}/applications-toggle     flip applications flag (POST)
/// /projects/{id}/readiness               launch checklist (GET)
/// /projects/{id}/wallets                 list, add
/// /projects/{id}/wallets/import          CSV bulk import (POST)
/// /projects/{id}/wallets/remove          soft-remove batch (POST)
/// /projects/{id}/wallets/export          CSV download (GET)
/// /projects/{id}/applications            list applications (GET)
/// /projects/{id}/collabs                 list, send
/// /projects/{id}/activity                activity feed (GET)
///
/// /applications/{id}/review              approve/reject (POST)
///
/// /collabs/{id}/respond                  accept/decline (POST)
/// /collabs/{id}/complete                 mark completed (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication: accounts, sessions, profile.
        .nest("/auth", auth::router())
        // Projects and their nested whitelist resources.
        .nest("/projects", projects::router())
        // Application review (listing is project-scoped).
        .nest("/applications", applications::router())
        // Collab responses (listing/sending are project-scoped).
        .nest("/collabs", collabs::router())
}
