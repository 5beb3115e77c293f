//! Strength / weakness ranking over the skill profile.

use std::cmp::Ordering;

use crate::analysis::skills::SkillProfile;
use crate::models::recommendation::{SkillAnalysis, SkillEntry, SkillInfo, StrengthInfo, WeaknessInfo};

const STRENGTH_LIMIT: usize = 5;
const WEAKNESS_LIMIT: usize = 3;
const SKILL_LIST_LIMIT: usize = 15;

/// Below this score a single-repository skill counts as limited exposure.
const WEAKNESS_SCORE_CEILING: f64 = 10.0;

pub fn analyze_strengths_weaknesses(profile: &SkillProfile) -> SkillAnalysis {
    let ranked = rank_by_score(profile);

    let strengths = ranked
        .iter()
        .take(STRENGTH_LIMIT)
        .map(|(name, entry)| StrengthInfo {
            skill: name.to_string(),
            score: (entry.score * 10.0).round() / 10.0,
            repos_count: entry.repos_count,
            category: entry.category,
        })
        .collect();

    let weaknesses = ranked
        .iter()
        .filter(|(_, entry)| entry.repos_count == 1 && entry.score < WEAKNESS_SCORE_CEILING)
        .take(WEAKNESS_LIMIT)
        .map(|(name, _)| WeaknessInfo {
            skill: name.to_string(),
            reason: "Limited exposure".to_string(),
            suggestion: format!("Build more projects with {name}"),
        })
        .collect();

    let max_score = ranked
        .first()
        .map(|(_, entry)| entry.score)
        .filter(|s| *s > 0.0)
        .unwrap_or(1.0);

    let skills = ranked
        .iter()
        .take(SKILL_LIST_LIMIT)
        .map(|(name, entry)| SkillInfo {
            skill: name.to_string(),
            proficiency: ((entry.score / max_score) * 100.0).round().min(100.0) as u32,
            repos_count: entry.repos_count,
            category: entry.category,
        })
        .collect();

    SkillAnalysis {
        strengths,
        weaknesses,
        skills,
    }
}

/// Highest score first; equal scores fall back to canonical name order.
pub fn rank_by_score(profile: &SkillProfile) -> Vec<(&str, &SkillEntry)> {
    let mut ranked: Vec<(&str, &SkillEntry)> =
        profile.iter().map(|(name, entry)| (name.as_str(), entry)).collect();
    ranked.sort_by(|a, b| {
        b.1.score
            .partial_cmp(&a.1.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
}
