//! Handler for the per-project activity feed.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use launchlist_core::audit::validate_action;
use launchlist_core::error::CoreError;
use launchlist_core::types::DbId;
use launchlist_db::models::activity::{ActivityFilters, FeedEntry};
use launchlist_db::repositories::ActivityRepo;

use super::projects::find_owned_project;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Feed page plus the unpaged total for the same filter.
#[derive(Debug, Serialize)]
pub struct ActivityFeed {
    pub entries: Vec<FeedEntry>,
    pub total_count: i64,
}

/// GET /api/v1/projects/{id}/activity
///
/// Page through the project's audit trail, newest first. Accepts an
/// optional `action` filter plus `limit` (default 50, cap 500) and
/// `offset`.
pub async fn get_activity(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(filters): Query<ActivityFilters>,
) -> AppResult<impl IntoResponse> {
    find_owned_project(&state, id, auth.user_id).await?;

    if let Some(ref action) = filters.action {
        validate_action(action).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let entries = ActivityRepo::list_for_project(&state.pool, id, &filters).await?;
    let total_count =
        ActivityRepo::count_for_project(&state.pool, id, filters.action.as_deref()).await?;

    Ok(Json(DataResponse {
        data: ActivityFeed {
            entries,
            total_count,
        },
    }))
}
