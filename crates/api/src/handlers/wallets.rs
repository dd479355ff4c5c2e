//! Handlers for the per-project `/wallets` resource.
//!
//! All mutations re-read the project's lock state at call time and are
//! refused wholesale while the whitelist is locked.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use launchlist_core::audit::actions;
use launchlist_core::chain::Chain;
use launchlist_core::csv::parse_wallet_csv;
use launchlist_core::error::CoreError;
use launchlist_core::naming::{truncate_address, ADDRESS_TRUNCATE_CHARS};
use launchlist_core::types::DbId;
use launchlist_core::validator::{detect_chain, validate_address};
use launchlist_core::wallet::{validate_category, CATEGORY_WL, SOURCE_CSV_UPLOAD, SOURCE_MANUAL};
use launchlist_db::models::project::Project;
use launchlist_db::models::wallet::{CreateWallet, WalletFilters};
use launchlist_db::repositories::{ActivityRepo, WalletRepo};

use super::projects::find_owned_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many truncated addresses a `wallet.removed` entry carries as a sample.
const REMOVAL_SAMPLE_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/wallets`.
#[derive(Debug, Deserialize)]
pub struct AddWalletRequest {
    pub address: String,
    /// Detected from the address, falling back to the project chain, when
    /// omitted.
    pub chain: Option<String>,
    /// Defaults to `wl`.
    pub category: Option<String>,
    pub label: Option<String>,
}

/// Request body for `POST /projects/{id}/wallets/import`.
#[derive(Debug, Deserialize)]
pub struct ImportWalletsRequest {
    /// Raw CSV text, read fully into memory.
    pub content: String,
}

/// Request body for `POST /projects/{id}/wallets/remove`.
#[derive(Debug, Deserialize)]
pub struct RemoveWalletsRequest {
    pub wallet_ids: Vec<DbId>,
}

/// Outcome counts for a bulk import.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Outcome count for a batch removal.
#[derive(Debug, Serialize)]
pub struct RemoveSummary {
    pub removed: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/wallets
///
/// List wallets with optional status/category filters and a
/// case-insensitive substring search over address and label.
pub async fn list_wallets(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(filters): Query<WalletFilters>,
) -> AppResult<impl IntoResponse> {
    find_owned_project(&state, id, auth.user_id).await?;

    let wallets = WalletRepo::list(&state.pool, id, &filters).await?;
    Ok(Json(DataResponse { data: wallets }))
}

/// POST /api/v1/projects/{id}/wallets
///
/// Manually add one wallet to the whitelist.
pub async fn add_wallet(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddWalletRequest>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;
    ensure_unlocked(&project)?;

    let address = input.address.trim().to_string();
    let chain = resolve_chain(input.chain.as_deref(), &address, &project)?;

    validate_address(&address, chain)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let category = input.category.unwrap_or_else(|| CATEGORY_WL.to_string());
    validate_category(&category).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if WalletRepo::find_active_by_address(&state.pool, id, &address)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::DuplicateActive(
            "This wallet is already on the whitelist".into(),
        )));
    }

    let label = input
        .label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    let wallet = WalletRepo::insert(
        &state.pool,
        &CreateWallet {
            project_id: id,
            address,
            chain: chain.as_str().to_string(),
            category,
            label,
            source: SOURCE_MANUAL.to_string(),
            added_by: auth.user_id,
        },
    )
    .await?;

    WalletRepo::recount_project_spots(&state.pool, id).await?;

    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::WALLET_ADDED,
        Some(json!({
            "address": wallet.address,
            "chain": wallet.chain,
            "category": wallet.category,
            "label": wallet.label,
        })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        project_id = id,
        wallet_id = wallet.id,
        "Wallet added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: wallet })))
}

/// POST /api/v1/projects/{id}/wallets/import
///
/// Bulk-import wallets from CSV text. Invalid rows count as `errors` and
/// are never inserted; rows that fail on insert (duplicates) count as
/// `skipped`; the import itself keeps going either way.
pub async fn import_wallets(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ImportWalletsRequest>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;
    ensure_unlocked(&project)?;

    let rows = parse_wallet_csv(&input.content);
    let total = rows.len();

    let mut added = 0usize;
    let mut skipped = 0usize;
    let mut errors = 0usize;

    for row in rows {
        let chain = match resolve_chain(row.chain.as_deref(), &row.address, &project) {
            Ok(chain) => chain,
            Err(_) => {
                errors += 1;
                continue;
            }
        };
        if validate_address(&row.address, chain).is_err() {
            errors += 1;
            continue;
        }

        let category = row.category.unwrap_or_else(|| CATEGORY_WL.to_string());
        if validate_category(&category).is_err() {
            errors += 1;
            continue;
        }

        let insert = WalletRepo::insert(
            &state.pool,
            &CreateWallet {
                project_id: id,
                address: row.address,
                chain: chain.as_str().to_string(),
                category,
                label: row.label,
                source: SOURCE_CSV_UPLOAD.to_string(),
                added_by: auth.user_id,
            },
        )
        .await;

        // Duplicate active rows trip the partial unique index; any per-row
        // insert failure is absorbed as a skip.
        match insert {
            Ok(_) => added += 1,
            Err(_) => skipped += 1,
        }
    }

    WalletRepo::recount_project_spots(&state.pool, id).await?;

    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::WALLET_BULK_UPLOAD,
        Some(json!({
            "added": added,
            "skipped": skipped,
            "errors": errors,
            "total": total,
        })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        project_id = id,
        added,
        skipped,
        errors,
        "Bulk wallet import finished"
    );

    Ok(Json(DataResponse {
        data: ImportSummary {
            added,
            skipped,
            errors,
        },
    }))
}

/// POST /api/v1/projects/{id}/wallets/remove
///
/// Soft-remove a batch of wallets. An empty id set is a silent no-op.
pub async fn remove_wallets(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RemoveWalletsRequest>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;
    ensure_unlocked(&project)?;

    if input.wallet_ids.is_empty() {
        return Ok(Json(DataResponse {
            data: RemoveSummary { removed: 0 },
        }));
    }

    let removed = WalletRepo::soft_remove(&state.pool, id, &input.wallet_ids, auth.user_id).await?;

    WalletRepo::recount_project_spots(&state.pool, id).await?;

    if !removed.is_empty() {
        let sample: Vec<String> = removed
            .iter()
            .take(REMOVAL_SAMPLE_SIZE)
            .map(|w| truncate_address(&w.address, ADDRESS_TRUNCATE_CHARS))
            .collect();

        ActivityRepo::log_best_effort(
            &state.pool,
            id,
            auth.user_id,
            actions::WALLET_REMOVED,
            Some(json!({ "count": removed.len(), "addresses": sample })),
        )
        .await;
    }

    tracing::info!(
        user_id = auth.user_id,
        project_id = id,
        removed = removed.len(),
        "Wallets removed"
    );

    Ok(Json(DataResponse {
        data: RemoveSummary {
            removed: removed.len(),
        },
    }))
}

/// GET /api/v1/projects/{id}/wallets/export
///
/// Download the (filtered) wallet list as CSV. Header
/// `address,chain,category,label`, comma-joined, no quoting. Read-only,
/// so no activity entry and no lock check.
pub async fn export_wallets(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(filters): Query<WalletFilters>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;

    let wallets = WalletRepo::list(&state.pool, id, &filters).await?;

    let mut csv = String::from("address,chain,category,label\n");
    for wallet in &wallets {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            wallet.address,
            wallet.chain,
            wallet.category,
            wallet.label.as_deref().unwrap_or(""),
        ));
    }

    Ok((
        StatusCode::OK,
        [
            (axum::http::header::CONTENT_TYPE, "text/csv".to_string()),
            (
                axum::http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}-whitelist.csv\"", project.slug),
            ),
        ],
        csv,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Refuse wallet mutations while the whitelist is locked.
fn ensure_unlocked(project: &Project) -> AppResult<()> {
    if project.is_locked {
        return Err(AppError::Core(CoreError::Locked(
            "Whitelist is locked".into(),
        )));
    }
    Ok(())
}

/// Pick the chain for an incoming address: the supplied value if any, else
/// the first format match, else the project's own chain.
pub(crate) fn resolve_chain(
    supplied: Option<&str>,
    address: &str,
    project: &Project,
) -> AppResult<Chain> {
    match supplied {
        Some(value) => Chain::from_str_value(value)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg))),
        None => Ok(detect_chain(address)
            .unwrap_or_else(|| Chain::from_str_value(&project.chain).unwrap_or(Chain::Other))),
    }
}
