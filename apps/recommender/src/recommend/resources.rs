use crate::knowledge::{KnowledgeBase, SkillSet};
use crate::models::recommendation::{ResourceRecommendation, SkillGap};

const RESOURCE_LIMIT: usize = 4;

/// Learning resources covering the identified gaps (required and nice-to-have),
/// ranked by how many gap skills each resource teaches.
pub fn recommend_resources(kb: &KnowledgeBase, gaps: &[SkillGap]) -> Vec<ResourceRecommendation> {
    let skills_to_learn: SkillSet = gaps
        .iter()
        .flat_map(|g| g.missing_skills.iter().chain(g.nice_to_have.iter()))
        .cloned()
        .collect();

    let mut recommendations: Vec<ResourceRecommendation> = kb
        .resources()
        .iter()
        .filter_map(|resource| {
            let relevant_skills: Vec<String> = resource
                .skills
                .intersection(&skills_to_learn)
                .cloned()
                .collect();
            if relevant_skills.is_empty() {
                return None;
            }
            Some(ResourceRecommendation {
                resource: resource.clone(),
                relevance_score: relevant_skills.len(),
                relevant_skills,
            })
        })
        .collect();

    recommendations.sort_by_key(|r| std::cmp::Reverse(r.relevance_score));
    recommendations.truncate(RESOURCE_LIMIT);
    recommendations
}
