//! Technology recommendations: what to learn next for the top careers, gated by
//! prerequisites the user already has.

use crate::knowledge::{KnowledgeBase, SkillSet};
use crate::models::recommendation::{CareerScore, TechnologyRecommendation};

const TARGET_CAREERS: usize = 2;
const TECHNOLOGY_LIMIT: usize = 5;

pub fn recommend_technologies(
    kb: &KnowledgeBase,
    user_skills: &SkillSet,
    careers: &[CareerScore],
) -> Vec<TechnologyRecommendation> {
    let target_skills: SkillSet = careers
        .iter()
        .take(TARGET_CAREERS)
        .filter_map(|c| kb.career(&c.title))
        .flat_map(|c| c.required_skills.iter().chain(c.preferred_skills.iter()))
        .cloned()
        .collect();

    let reason = careers
        .first()
        .map(|c| format!("Required for {}", c.title))
        .unwrap_or_default();

    let mut recommendations: Vec<TechnologyRecommendation> = kb
        .technologies()
        .iter()
        .filter(|tech| target_skills.contains(&tech.name) && !user_skills.contains(&tech.name))
        .filter(|tech| tech.prerequisites.is_subset(user_skills))
        .map(|tech| TechnologyRecommendation {
            technology: tech.name.clone(),
            category: tech.category.clone(),
            difficulty: tech.difficulty.clone(),
            learning_time: tech.learning_time.clone(),
            job_relevance: tech.job_relevance.clone(),
            prerequisites_met: tech.prerequisites.intersection(user_skills).cloned().collect(),
            reason: reason.clone(),
        })
        .collect();

    recommendations.sort_by_key(|r| std::cmp::Reverse(relevance_rank(&r.job_relevance)));
    recommendations.truncate(TECHNOLOGY_LIMIT);
    recommendations
}

/// Ordinal for sorting job-relevance labels; unknown labels rank last.
pub fn relevance_rank(label: &str) -> u8 {
    match label {
        "Very High" => 4,
        "High" => 3,
        "Medium-High" => 2,
        "Medium" => 1,
        _ => 0,
    }
}
