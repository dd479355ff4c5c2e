//! Unauthenticated handlers for the slug-addressed public surface.
//!
//! Holders land here from a project's share link: view the launch page,
//! check whether their wallet made the list, and apply for a spot while
//! applications are open. No actor identity exists on these paths, so
//! none of them write activity entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use launchlist_core::error::CoreError;
use launchlist_core::validator::validate_address;
use launchlist_db::models::application::CreateApplication;
use launchlist_db::models::project::{Project, PublicProject};
use launchlist_db::repositories::{ApplicationRepo, ProjectRepo, WalletRepo};

use super::wallets::resolve_chain;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /public/projects/{slug}/check`.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub address: String,
}

/// Result of a public wallet-status lookup.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

/// Request body for `POST /public/projects/{slug}/apply`.
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub wallet_address: String,
    /// Detected from the address, falling back to the project chain, when
    /// omitted.
    pub chain: Option<String>,
    pub twitter_handle: Option<String>,
    pub discord_handle: Option<String>,
    pub reason: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /public/projects/{slug}
///
/// The public launch view. Owner identity and moderation internals are
/// excluded.
pub async fn get_public_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = find_by_slug(&state, &slug).await?;
    Ok(Json(DataResponse {
        data: PublicProject::from(project),
    }))
}

/// GET /public/projects/{slug}/check?address=...
///
/// Case-insensitive wallet-status lookup. Returns the category and chain
/// when the wallet is on the active list.
pub async fn check_wallet(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CheckParams>,
) -> AppResult<impl IntoResponse> {
    let project = find_by_slug(&state, &slug).await?;

    let address = params.address.trim();
    if address.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Address is required".into(),
        )));
    }

    let wallet = WalletRepo::find_active_by_address(&state.pool, project.id, address).await?;

    let result = match wallet {
        Some(wallet) => CheckResult {
            found: true,
            category: Some(wallet.category),
            chain: Some(wallet.chain),
        },
        None => CheckResult {
            found: false,
            category: None,
            chain: None,
        },
    };

    Ok(Json(DataResponse { data: result }))
}

/// POST /public/projects/{slug}/apply
///
/// Submit a whitelist application. Gated by `is_applications_open`; the
/// twitter handle is stored without its leading `@`.
pub async fn apply(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<impl IntoResponse> {
    let project = find_by_slug(&state, &slug).await?;

    if !project.is_applications_open {
        return Err(AppError::Core(CoreError::ApplicationsClosed(
            "Applications are closed for this project".into(),
        )));
    }

    let address = input.wallet_address.trim().to_string();
    let chain = resolve_chain(input.chain.as_deref(), &address, &project)?;

    validate_address(&address, chain)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let twitter_handle = input
        .twitter_handle
        .map(|h| h.trim().trim_start_matches('@').to_string())
        .filter(|h| !h.is_empty());
    let discord_handle = input
        .discord_handle
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());
    let reason = input
        .reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    let application = ApplicationRepo::create(
        &state.pool,
        &CreateApplication {
            project_id: project.id,
            wallet_address: address,
            wallet_chain: chain.as_str().to_string(),
            twitter_handle,
            discord_handle,
            reason,
        },
    )
    .await?;

    tracing::info!(
        project_id = project.id,
        application_id = application.id,
        "Whitelist application submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_by_slug(state: &AppState, slug: &str) -> AppResult<Project> {
    ProjectRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Project",
                slug: slug.to_string(),
            })
        })
}
