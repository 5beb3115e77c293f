//! Axum route handlers for the Recommendation API.
//!
//! The skills and careers endpoints are projections of the full bundle.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::recommendation::{
    CareerScore, ProfileStats, RecommendationBundle, SkillAnalysis, SkillGap,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skill_analysis: SkillAnalysis,
    pub profile_stats: ProfileStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CareersResponse {
    pub career_paths: Vec<CareerScore>,
    pub skill_gaps: Vec<SkillGap>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /recommend
///
/// Full recommendation bundle for the supplied repositories.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<RecommendationBundle>, AppError> {
    let bundle = recommend(&state, &profile)?;
    Ok(Json(bundle))
}

/// POST /analyze/skills
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SkillsResponse>, AppError> {
    let bundle = recommend(&state, &profile)?;
    Ok(Json(SkillsResponse {
        skill_analysis: bundle.skill_analysis,
        profile_stats: bundle.profile_stats,
    }))
}

/// POST /analyze/careers
pub async fn handle_analyze_careers(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<CareersResponse>, AppError> {
    let bundle = recommend(&state, &profile)?;
    Ok(Json(CareersResponse {
        career_paths: bundle.career_paths,
        skill_gaps: bundle.skill_gaps,
    }))
}

fn recommend(state: &AppState, profile: &UserProfile) -> Result<RecommendationBundle, AppError> {
    let bundle = state.recommender.recommend(profile)?;

    info!(
        user_id = %profile.user_id,
        repos = profile.repos.len(),
        careers = bundle.career_paths.len(),
        "recommendations served"
    );
    Ok(bundle)
}
