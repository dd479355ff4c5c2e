//! Route definitions for the `/projects` resource and its sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{activity, applications, collabs, projects, wallets};
use crate::state::AppState;

/// Routes mounted at `/projects`. All require authentication.
///
/// ```text
/// GET    /                            -> list own projects
/// POST   /                            -> create
/// GET    /{id}                        -> get
/// PUT    /{id}                        -> settings update
/// DELETE /{id}                        -> confirm-name delete
/// POST   /{id}/lock                   -> lock whitelist
/// POST   /{id}/unlock                 -> unlock whitelist
/// POST   /{id}/applications-toggle    -> flip is_applications_open
/// GET    /{id}/readiness              -> launch checklist
/// GET    /{id}/wallets                -> list wallets (filters)
/// POST   /{id}/wallets                -> manual add
/// POST   /{id}/wallets/import         -> CSV bulk import
/// POST   /{id}/wallets/remove         -> soft-remove batch
/// GET    /{id}/wallets/export         -> CSV download
/// GET    /{id}/applications           -> list applications
/// GET    /{id}/collabs                -> list collabs (both directions)
/// POST   /{id}/collabs                -> send collab request
/// GET    /{id}/activity               -> activity feed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/{id}/lock", post(projects::lock_project))
        .route("/{id}/unlock", post(projects::unlock_project))
        .route(
            "/{id}/applications-toggle",
            post(projects::toggle_applications),
        )
        .route("/{id}/readiness", get(projects::get_readiness))
        .route(
            "/{id}/wallets",
            get(wallets::list_wallets).post(wallets::add_wallet),
        )
        .route("/{id}/wallets/import", post(wallets::import_wallets))
        .route("/{id}/wallets/remove", post(wallets::remove_wallets))
        .route("/{id}/wallets/export", get(wallets::export_wallets))
        .route("/{id}/applications", get(applications::list_applications))
        .route(
            "/{id}/collabs",
            get(collabs::list_collabs).post(collabs::send_collab),
        )
        .route("/{id}/activity", get(activity::get_activity))
}
