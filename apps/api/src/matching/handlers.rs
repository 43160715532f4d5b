//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::errors::{AppError, AppJson};
use crate::matching::skill_gap::{skill_gap, SkillGapReport};
use crate::models::career::ScoredCareerPath;
use crate::models::interests::UserInterests;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredCareerPath>,
}

/// GET /api/v1/careers
///
/// Returns the skill categories and career paths in catalog order.
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/matches
///
/// Ranks every career path against the submitted interests. Input is not
/// validated: empty or odd values just produce low-signal scores.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(interests): AppJson<UserInterests>,
) -> Result<Json<MatchResponse>, AppError> {
    let matches = state.matcher.rank(&interests, &state.catalog)?;
    Ok(Json(MatchResponse { matches }))
}

/// POST /api/v1/careers/:id/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
    AppJson(interests): AppJson<UserInterests>,
) -> Result<Json<SkillGapReport>, AppError> {
    let path = state
        .catalog
        .find_path(&path_id)
        .ok_or_else(|| AppError::NotFound(format!("Career path {path_id} not found")))?;

    Ok(Json(skill_gap(&interests, path)))
}
