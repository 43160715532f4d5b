use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::interests::validation::validate_interests;
use crate::matching::handlers::MatchResponse;
use crate::models::interests::{StoredInterests, UserInterests};
use crate::state::AppState;

/// PUT /api/v1/interests/:user_id
pub async fn handle_save_interests(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    AppJson(interests): AppJson<UserInterests>,
) -> Result<Json<StoredInterests>, AppError> {
    validate_interests(&interests).map_err(AppError::Validation)?;

    let stored = state.interests.put(user_id, interests).await?;
    info!("Saved interests for user {user_id}");
    Ok(Json(stored))
}

/// GET /api/v1/interests/:user_id
pub async fn handle_get_interests(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<StoredInterests>, AppError> {
    let stored = state
        .interests
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No interests saved for user {user_id}")))?;
    Ok(Json(stored))
}

/// DELETE /api/v1/interests/:user_id
pub async fn handle_delete_interests(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.interests.remove(user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No interests saved for user {user_id}"
        )))
    }
}

/// GET /api/v1/interests/:user_id/matches
///
/// Ranks career paths against the user's saved interests.
pub async fn handle_match_saved(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MatchResponse>, AppError> {
    let stored = state
        .interests
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No interests saved for user {user_id}")))?;

    let matches = state.matcher.rank(&stored.interests, &state.catalog)?;
    Ok(Json(MatchResponse { matches }))
}
