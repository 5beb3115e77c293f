//! Career matching: weighted overlap of the user's skills with each career path.
//!
//! Algorithm per career:
//! 1. required_score  = |user ∩ required|  / |required|   (0 when required is empty)
//! 2. preferred_score = |user ∩ preferred| / |preferred|  (0 when preferred is empty)
//! 3. score      = 0.7 × required_score + 0.3 × preferred_score
//! 4. confidence = min(1, (|req overlap| + |pref overlap|) / (0.8 × |required|))
//!
//! Both values are rounded to two decimals. Careers are ranked by score with a
//! stable sort, so equal scores keep knowledge-base order.

use std::cmp::Ordering;

use crate::knowledge::{CareerPathDef, KnowledgeBase, SkillSet};
use crate::models::recommendation::CareerScore;

const REQUIRED_WEIGHT: f64 = 0.7;
const PREFERRED_WEIGHT: f64 = 0.3;
const CONFIDENCE_COVERAGE: f64 = 0.8;
const TOP_CAREERS: usize = 3;

pub fn score_career_paths(kb: &KnowledgeBase, user_skills: &SkillSet) -> Vec<CareerScore> {
    let mut scored: Vec<CareerScore> = kb
        .careers()
        .iter()
        .map(|career| score_career(career, user_skills))
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(TOP_CAREERS);
    scored
}

fn score_career(career: &CareerPathDef, user_skills: &SkillSet) -> CareerScore {
    let required_overlap: SkillSet = user_skills
        .intersection(&career.required_skills)
        .cloned()
        .collect();
    let preferred_overlap: SkillSet = user_skills
        .intersection(&career.preferred_skills)
        .cloned()
        .collect();

    let required_score = ratio(required_overlap.len(), career.required_skills.len());
    let preferred_score = ratio(preferred_overlap.len(), career.preferred_skills.len());
    let match_score = REQUIRED_WEIGHT * required_score + PREFERRED_WEIGHT * preferred_score;

    let confidence = if career.required_skills.is_empty() {
        0.0
    } else {
        let total_overlap = (required_overlap.len() + preferred_overlap.len()) as f64;
        (total_overlap / (CONFIDENCE_COVERAGE * career.required_skills.len() as f64)).min(1.0)
    };

    CareerScore {
        title: career.title.clone(),
        score: round2(match_score),
        confidence: round2(confidence),
        description: career.description.clone(),
        matched_skills: required_overlap.union(&preferred_overlap).cloned().collect(),
        salary_range: career.salary_range.clone(),
        demand: career.demand.clone(),
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
