//! Handlers for whitelist application review.
//!
//! Public submission lives in [`super::public`]; this module is the
//! owner-facing side: listing a project's applications and deciding them.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use launchlist_core::application::{promotion_label, ReviewDecision};
use launchlist_core::audit::actions;
use launchlist_core::error::CoreError;
use launchlist_core::types::DbId;
use launchlist_core::wallet::{CATEGORY_WL, SOURCE_APPLICATION};
use launchlist_db::models::application::ApplicationFilters;
use launchlist_db::models::wallet::CreateWallet;
use launchlist_db::repositories::{ActivityRepo, ApplicationRepo, WalletRepo};

use super::projects::find_owned_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /applications/{id}/review`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// `approved` or `rejected`.
    pub decision: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/applications
///
/// List a project's applications, newest first, optionally filtered by
/// status.
pub async fn list_applications(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(filters): Query<ApplicationFilters>,
) -> AppResult<impl IntoResponse> {
    find_owned_project(&state, id, auth.user_id).await?;

    let applications = ApplicationRepo::list_for_project(&state.pool, id, &filters).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// POST /api/v1/applications/{id}/review
///
/// Decide a pending application. The first review wins; a second attempt
/// conflicts. Approval promotes the applicant onto the whitelist unless an
/// active wallet with the same address already exists.
pub async fn review_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    // Ownership check via the application's project.
    find_owned_project(&state, application.project_id, auth.user_id).await?;

    let decision = ReviewDecision::from_str_value(&input.decision)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // An active duplicate means the wallet is already listed; the
    // application still gets approved, just without a second wallet row.
    let already_listed = match decision {
        ReviewDecision::Approved => WalletRepo::find_active_by_address(
            &state.pool,
            application.project_id,
            &application.wallet_address,
        )
        .await?
        .is_some(),
        ReviewDecision::Rejected => false,
    };

    let reviewed = ApplicationRepo::mark_reviewed(
        &state.pool,
        id,
        decision.as_status().as_str(),
        auth.user_id,
    )
    .await?
    .ok_or(AppError::Core(CoreError::Conflict(
        "Application has already been reviewed".into(),
    )))?;

    match decision {
        ReviewDecision::Rejected => {
            ActivityRepo::log_best_effort(
                &state.pool,
                reviewed.project_id,
                auth.user_id,
                actions::APPLICATION_REJECTED,
                Some(json!({
                    "wallet_address": reviewed.wallet_address,
                    "chain": reviewed.wallet_chain,
                })),
            )
            .await;
        }
        ReviewDecision::Approved if already_listed => {
            ActivityRepo::log_best_effort(
                &state.pool,
                reviewed.project_id,
                auth.user_id,
                actions::APPLICATION_APPROVED,
                Some(json!({
                    "wallet_address": reviewed.wallet_address,
                    "already_whitelisted": true,
                    "note": "Wallet was already on the list",
                })),
            )
            .await;
        }
        ReviewDecision::Approved => {
            WalletRepo::insert(
                &state.pool,
                &CreateWallet {
                    project_id: reviewed.project_id,
                    address: reviewed.wallet_address.clone(),
                    chain: reviewed.wallet_chain.clone(),
                    category: CATEGORY_WL.to_string(),
                    label: Some(promotion_label(reviewed.twitter_handle.as_deref())),
                    source: SOURCE_APPLICATION.to_string(),
                    added_by: auth.user_id,
                },
            )
            .await?;

            WalletRepo::recount_project_spots(&state.pool, reviewed.project_id).await?;

            ActivityRepo::log_best_effort(
                &state.pool,
                reviewed.project_id,
                auth.user_id,
                actions::APPLICATION_APPROVED,
                Some(json!({
                    "wallet_address": reviewed.wallet_address,
                    "chain": reviewed.wallet_chain,
                    "twitter": reviewed.twitter_handle,
                })),
            )
            .await;
        }
    }

    tracing::info!(
        user_id = auth.user_id,
        application_id = id,
        project_id = reviewed.project_id,
        decision = %decision.as_str(),
        "Application reviewed"
    );

    Ok(Json(DataResponse { data: reviewed }))
}
