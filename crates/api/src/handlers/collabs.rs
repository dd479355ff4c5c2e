//! Handlers for the cross-project collaboration workflow.
//!
//! `pending -> accepted -> completed`, with `pending -> declined` as the
//! terminal rejection. Transitions are guarded in SQL by the expected
//! current status, so a stale request conflicts instead of overwriting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use launchlist_core::audit::actions;
use launchlist_core::collaboration::{
    CollabResponse, COLLAB_ACCEPTED, COLLAB_COMPLETED, COLLAB_PENDING,
};
use launchlist_core::error::CoreError;
use launchlist_core::types::DbId;
use launchlist_db::models::collaboration::{Collaboration, CreateCollaboration};
use launchlist_db::repositories::{ActivityRepo, CollaborationRepo, ProjectRepo};

use super::projects::find_owned_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/collabs`.
#[derive(Debug, Deserialize)]
pub struct SendCollabRequest {
    pub target_project_id: DbId,
    pub message: Option<String>,
}

/// Request body for `POST /collabs/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondCollabRequest {
    /// `accepted` or `declined`.
    pub decision: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/collabs
///
/// List every collab touching the project, incoming and outgoing, with
/// both counterparty identities joined in.
pub async fn list_collabs(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_owned_project(&state, id, auth.user_id).await?;

    let collabs = CollaborationRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: collabs }))
}

/// POST /api/v1/projects/{id}/collabs
///
/// Send a collab request from the caller's project to another project.
pub async fn send_collab(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SendCollabRequest>,
) -> AppResult<impl IntoResponse> {
    find_owned_project(&state, id, auth.user_id).await?;

    if input.target_project_id == id {
        return Err(AppError::Core(CoreError::Validation(
            "A project cannot collab with itself".into(),
        )));
    }

    let target = ProjectRepo::find_by_id(&state.pool, input.target_project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.target_project_id,
        }))?;

    let message = input
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let collab = CollaborationRepo::create(
        &state.pool,
        &CreateCollaboration {
            requester_project_id: id,
            target_project_id: target.id,
            message,
        },
    )
    .await?;

    ActivityRepo::log_best_effort(
        &state.pool,
        id,
        auth.user_id,
        actions::COLLAB_SENT,
        Some(json!({
            "target_project": target.name,
            "target_project_id": target.id,
        })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        project_id = id,
        target_project_id = target.id,
        collab_id = collab.id,
        "Collab request sent"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: collab })))
}

/// POST /api/v1/collabs/{id}/respond
///
/// Accept or decline a pending request. Only the target project's owner
/// may answer.
pub async fn respond_collab(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RespondCollabRequest>,
) -> AppResult<impl IntoResponse> {
    let collab = find_collab(&state, id).await?;

    // Only the target side answers. The requester gets told so; anyone
    // else sees nothing.
    if ProjectRepo::find_by_id_for_owner(&state.pool, collab.target_project_id, auth.user_id)
        .await?
        .is_none()
    {
        if ProjectRepo::find_by_id_for_owner(&state.pool, collab.requester_project_id, auth.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only the target project can respond to a collab request".into(),
            )));
        }
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }));
    }

    let response = CollabResponse::from_str_value(&input.decision)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let updated = CollaborationRepo::set_status(
        &state.pool,
        id,
        COLLAB_PENDING,
        response.as_status().as_str(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::Conflict(
        "Collab request has already been answered".into(),
    )))?;

    let partner = ProjectRepo::find_by_id(&state.pool, collab.requester_project_id).await?;
    let action = match response {
        CollabResponse::Accepted => actions::COLLAB_ACCEPTED,
        CollabResponse::Declined => actions::COLLAB_DECLINED,
    };
    ActivityRepo::log_best_effort(
        &state.pool,
        collab.target_project_id,
        auth.user_id,
        action,
        Some(json!({
            "partner_project": partner.map(|p| p.name),
            "partner_project_id": collab.requester_project_id,
        })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        collab_id = id,
        decision = %response.as_str(),
        "Collab request answered"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/collabs/{id}/complete
///
/// Mark an accepted collab completed. Either side may do this; the entry
/// lands on the completing side's feed.
pub async fn complete_collab(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let collab = find_collab(&state, id).await?;

    // Work out which side the caller owns; the other side is the partner.
    let (own_project_id, partner_project_id) = if ProjectRepo::find_by_id_for_owner(
        &state.pool,
        collab.requester_project_id,
        auth.user_id,
    )
    .await?
    .is_some()
    {
        (collab.requester_project_id, collab.target_project_id)
    } else if ProjectRepo::find_by_id_for_owner(&state.pool, collab.target_project_id, auth.user_id)
        .await?
        .is_some()
    {
        (collab.target_project_id, collab.requester_project_id)
    } else {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }));
    };

    let updated = CollaborationRepo::set_status(&state.pool, id, COLLAB_ACCEPTED, COLLAB_COMPLETED)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Only an accepted collab can be completed".into(),
        )))?;

    let partner = ProjectRepo::find_by_id(&state.pool, partner_project_id).await?;
    ActivityRepo::log_best_effort(
        &state.pool,
        own_project_id,
        auth.user_id,
        actions::COLLAB_COMPLETED,
        Some(json!({
            "partner_project": partner.map(|p| p.name),
            "partner_project_id": partner_project_id,
        })),
    )
    .await;

    tracing::info!(
        user_id = auth.user_id,
        collab_id = id,
        "Collab marked completed"
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_collab(state: &AppState, id: DbId) -> AppResult<Collaboration> {
    CollaborationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaboration",
            id,
        }))
}
