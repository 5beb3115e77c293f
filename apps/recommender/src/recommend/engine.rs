//! Recommendation engine: composes every analysis stage into one bundle.
//!
//! Pure and synchronous: the same profile against the same knowledge base always
//! yields the same bundle. Nothing is cached between calls.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, built at startup around the shared
//! `KnowledgeBase`.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::complexity::compute_profile_stats;
use crate::analysis::skills::{extract_skills, skill_names};
use crate::analysis::strengths::analyze_strengths_weaknesses;
use crate::errors::EngineError;
use crate::knowledge::KnowledgeBase;
use crate::matching::careers::score_career_paths;
use crate::matching::gaps::analyze_skill_gaps;
use crate::models::profile::{Repository, UserProfile};
use crate::models::recommendation::RecommendationBundle;
use crate::recommend::projects::recommend_projects;
use crate::recommend::repo_improvements::suggest_repo_improvements;
use crate::recommend::resources::recommend_resources;
use crate::recommend::technologies::recommend_technologies;

/// The recommender trait. Implement this to swap scoring backends without
/// touching the handlers.
pub trait Recommender: Send + Sync {
    fn recommend(&self, profile: &UserProfile) -> Result<RecommendationBundle, EngineError>;
}

/// Default backend: knowledge-base rules, no trained model.
pub struct RuleBasedRecommender {
    kb: Arc<KnowledgeBase>,
}

impl RuleBasedRecommender {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }
}

impl Recommender for RuleBasedRecommender {
    fn recommend(&self, profile: &UserProfile) -> Result<RecommendationBundle, EngineError> {
        generate_recommendations(&self.kb, profile)
    }
}

/// Runs the full pipeline: skills → careers → gaps → recommendations.
///
/// A profile without repositories yields the canonical empty bundle.
pub fn generate_recommendations(
    kb: &KnowledgeBase,
    profile: &UserProfile,
) -> Result<RecommendationBundle, EngineError> {
    let repos = &profile.repos;
    if repos.is_empty() {
        return Ok(RecommendationBundle::default());
    }
    validate_repositories(repos)?;

    let skill_profile = extract_skills(kb, repos);
    let profile_stats = compute_profile_stats(repos);
    let user_skills = skill_names(&skill_profile);

    let career_paths = score_career_paths(kb, &user_skills);
    let skill_gaps = analyze_skill_gaps(kb, &user_skills, &career_paths);
    let skill_analysis = analyze_strengths_weaknesses(&skill_profile);

    let technologies = recommend_technologies(kb, &user_skills, &career_paths);
    let project_ideas = recommend_projects(kb, &user_skills, &skill_gaps);
    let learning_resources = recommend_resources(kb, &skill_gaps);
    let repo_improvements = suggest_repo_improvements(repos);

    debug!(
        user_id = %profile.user_id,
        repos = repos.len(),
        skills = skill_profile.len(),
        gaps = skill_gaps.len(),
        technologies = technologies.len(),
        projects = project_ideas.len(),
        resources = learning_resources.len(),
        "recommendations generated"
    );

    Ok(RecommendationBundle {
        career_paths,
        skill_gaps,
        project_ideas,
        technologies,
        learning_resources,
        skill_analysis,
        repo_improvements,
        profile_stats,
    })
}

/// Language byte counts must be finite and non-negative.
fn validate_repositories(repos: &[Repository]) -> Result<(), EngineError> {
    for repo in repos {
        for (language, &bytes) in &repo.languages {
            if !bytes.is_finite() || bytes < 0.0 {
                return Err(EngineError::MalformedRepository {
                    repo: repo.name.clone(),
                    reason: format!("language '{language}' has invalid byte count {bytes}"),
                });
            }
        }
    }
    Ok(())
}
