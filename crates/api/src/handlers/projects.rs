//! Handlers for the `/projects` resource: lifecycle, lock state, readiness.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use launchlist_core::audit::actions;
use launchlist_core::chain::validate_chain;
use launchlist_core::error::CoreError;
use launchlist_core::readiness::{
    evaluate_readiness, readiness_score, ProjectSnapshot, ReadinessItem, ReadinessScore,
};
use launchlist_core::types::{DbId, Timestamp};
use launchlist_db::models::project::{CreateProject, Project, UpdateProject};
use launchlist_db::repositories::{ActivityRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `DELETE /projects/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    /// Must match the project name exactly.
    pub confirm_name: String,
}

/// Response body for `GET /projects/{id}/readiness`.
#[derive(Debug, serde::Serialize)]
pub struct ReadinessReport {
    pub items: Vec<ReadinessItem>,
    pub score: ReadinessScore,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Resolve a project by id, scoped to the current user. A project owned by
/// someone else is reported as missing, not forbidden.
pub(crate) async fn find_owned_project(
    state: &AppState,
    id: DbId,
    owner_id: DbId,
) -> AppResult<Project> {
    ProjectRepo::find_by_id_for_owner(&state.pool, id, owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

fn snapshot_of(project: &Project) -> ProjectSnapshot {
    ProjectSnapshot {
        id: project.id,
        name: project.name.clone(),
        chain: project.chain.clone(),
        wl_open_date: project.wl_open_date,
        mint_date: project.mint_date,
        wl_spots_total: project.wl_spots_total,
        wl_spots_filled: project.wl_spots_filled,
        twitter_url: project.twitter_url.clone(),
        discord_url: project.discord_url.clone(),
        website_url: project.website_url.clone(),
        is_locked: project.is_locked,
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// Create a project. The slug is derived from the name once and never
/// rewritten.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name is required".into(),
        )));
    }
    input.name = name.to_string();

    if let Some(ref chain) = input.chain {
        validate_chain(chain).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    // Uniqueness is best-effort: the random suffix makes collisions rare and
    // a residual one surfaces as 409 via uq_projects_slug.
    let slug = launchlist_core::naming::generate_slug(&input.name);

    let project = ProjectRepo::create(&state.pool, auth.user_id, &slug, &input).await?;

    ActivityRepo::log_best_effort(
        &state.pool,
        project.id,
        auth.user_id,
        actions::PROJECT_CREATED,
        Some(json!({ "name": project.name, "chain": project.chain })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        project_id = project.id,
        slug = %project.slug,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
///
/// List the current user's projects, most recent first, with pending
/// application counts for dashboard badges.
pub async fn list_projects(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_for_owner(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
///
/// Partial settings update. Each timeline date that actually changes gets
/// its own `timeline.changed` entry; every successful update ends with one
/// `project.updated` entry.
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let existing = find_owned_project(&state, id, auth.user_id).await?;

    if let Some(ref name) = input.name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Project name is required".into(),
            )));
        }
        input.name = Some(trimmed.to_string());
    }

    if let Some(ref chain) = input.chain {
        validate_chain(chain).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let updated = ProjectRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    log_timeline_changes(&state, &existing, &input, auth.user_id).await;

    let summary = match input.is_applications_open {
        Some(open) if open != existing.is_applications_open => {
            if open {
                "Applications opened"
            } else {
                "Applications closed"
            }
        }
        _ => "Project settings updated",
    };
    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::PROJECT_UPDATED,
        Some(json!({ "summary": summary })),
    )
    .await;

    tracing::info!(user_id = auth.user_id, project_id = id, "Project updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/projects/{id}
///
/// Irreversible. The caller confirms by re-typing the exact project name;
/// wallets, applications, collabs, and activity entries cascade.
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteProjectRequest>,
) -> AppResult<StatusCode> {
    let project = find_owned_project(&state, id, auth.user_id).await?;

    if input.confirm_name != project.name {
        return Err(AppError::Core(CoreError::Validation(
            "Project name confirmation does not match".into(),
        )));
    }

    let deleted = ProjectRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Lock state
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/lock
///
/// Freeze the whitelist. Re-locking an already-locked project is a no-op.
pub async fn lock_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;

    if project.is_locked {
        return Ok(Json(DataResponse { data: project }));
    }

    let locked = ProjectRepo::lock(&state.pool, id, auth.user_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::LIST_LOCKED,
        Some(json!({
            "wallet_count": locked.wl_spots_filled + locked.gtd_spots_filled
        })),
    )
    .await;

    tracing::info!(user_id = auth.user_id, project_id = id, "Whitelist locked");

    Ok(Json(DataResponse { data: locked }))
}

/// POST /api/v1/projects/{id}/unlock
///
/// Reopen the whitelist. Unlocking an unlocked project is a no-op.
pub async fn unlock_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;

    if !project.is_locked {
        return Ok(Json(DataResponse { data: project }));
    }

    let previously_locked_at = project.locked_at;

    let unlocked = ProjectRepo::unlock(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::LIST_UNLOCKED,
        Some(json!({ "previously_locked_at": previously_locked_at })),
    )
    .await;

    tracing::info!(user_id = auth.user_id, project_id = id, "Whitelist unlocked");

    Ok(Json(DataResponse { data: unlocked }))
}

/// POST /api/v1/projects/{id}/applications-toggle
///
/// Flip `is_applications_open`. Goes through the same update path as any
/// settings change, so the feed shows it as `project.updated`.
pub async fn toggle_applications(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;
    let opening = !project.is_applications_open;

    let patch = UpdateProject {
        is_applications_open: Some(opening),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&state.pool, id, auth.user_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let summary = if opening {
        "Applications opened"
    } else {
        "Applications closed"
    };
    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::PROJECT_UPDATED,
        Some(json!({ "summary": summary })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        project_id = id,
        applications_open = opening,
        "Applications toggled"
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Readiness
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/readiness
///
/// Evaluate the launch checklist against the project's current state.
pub async fn get_readiness(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = find_owned_project(&state, id, auth.user_id).await?;

    let items = evaluate_readiness(&snapshot_of(&project));
    let score = readiness_score(&items);

    Ok(Json(DataResponse {
        data: ReadinessReport { items, score },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Emit one `timeline.changed` entry per timeline date whose incoming value
/// differs from the stored one.
async fn log_timeline_changes(
    state: &AppState,
    existing: &Project,
    input: &UpdateProject,
    actor_id: DbId,
) {
    let fields: [(&str, Option<Timestamp>, Option<Timestamp>); 4] = [
        ("wl_open_date", existing.wl_open_date, input.wl_open_date),
        ("wl_close_date", existing.wl_close_date, input.wl_close_date),
        ("snapshot_date", existing.snapshot_date, input.snapshot_date),
        ("mint_date", existing.mint_date, input.mint_date),
    ];

    for (field, previous, incoming) in fields {
        let Some(new_value) = incoming else { continue };
        if previous == Some(new_value) {
            continue;
        }
        ActivityRepo::log_best_effort(
            &state.pool,
            existing.id,
            actor_id,
            actions::TIMELINE_CHANGED,
            Some(json!({
                "field": field,
                "previous_value": previous,
                "new_value": new_value,
            })),
        )
        .await;
    }
}
