use serde::{Deserialize, Serialize};

use crate::knowledge::{LearningResource, ProjectTemplate};

// ────────────────────────────────────────────────────────────────────────────
// Skill profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Language,
    #[serde(rename = "Technology/Framework")]
    TechnologyFramework,
}

/// Where a repository's contribution to a skill came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "from", rename_all = "snake_case")]
pub enum EvidenceSource {
    Language { bytes: f64 },
    Topic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub repo: String,
    pub stars: u64,
    #[serde(flatten)]
    pub source: EvidenceSource,
}

/// Accumulated evidence for one canonical skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub score: f64,
    pub evidence: Vec<Evidence>,
    pub repos_count: u32,
    pub category: SkillCategory,
}

impl SkillEntry {
    pub fn new(category: SkillCategory) -> Self {
        Self {
            score: 0.0,
            evidence: Vec::new(),
            repos_count: 0,
            category,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Careers and gaps
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerScore {
    pub title: String,
    pub score: f64,      // 0.0 – 1.0
    pub confidence: f64, // 0.0 – 1.0
    pub description: String,
    pub matched_skills: Vec<String>,
    pub salary_range: String,
    pub demand: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub career: String,
    pub missing_skills: Vec<String>, // ≤ 4 required skills
    pub nice_to_have: Vec<String>,   // ≤ 3 preferred skills
    pub priority: GapPriority,
    pub completion_percentage: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyRecommendation {
    pub technology: String,
    pub category: String,
    pub difficulty: String,
    pub learning_time: String,
    pub job_relevance: String,
    pub prerequisites_met: Vec<String>,
    pub reason: String,
}

/// A project template plus how it lines up with the user's skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIdea {
    #[serde(flatten)]
    pub template: ProjectTemplate,
    pub skills_you_have: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub match_percentage: u32,
    pub reason: String,
    /// Number of gap skills the project teaches. Ranking only.
    #[serde(skip)]
    pub priority: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecommendation {
    #[serde(flatten)]
    pub resource: LearningResource,
    pub relevant_skills: Vec<String>,
    pub relevance_score: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Skill analysis
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthInfo {
    pub skill: String,
    pub score: f64,
    pub repos_count: u32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaknessInfo {
    pub skill: String,
    pub reason: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub skill: String,
    pub proficiency: u32, // 0 – 100
    pub repos_count: u32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub strengths: Vec<StrengthInfo>,
    pub weaknesses: Vec<WeaknessInfo>,
    pub skills: Vec<SkillInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Repository hygiene
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementKind {
    Documentation,
    Topics,
    Quality,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    #[serde(rename = "type")]
    pub kind: ImprovementKind,
    pub suggestion: String,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoImprovement {
    pub repo: String,
    pub current_stars: u64,
    pub improvements: Vec<Improvement>,
}

// ────────────────────────────────────────────────────────────────────────────
// Bundle
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub language_diversity: usize,
    pub topic_diversity: usize,
    pub total_repos: usize,
    pub total_stars: u64,
    pub avg_languages_per_repo: f64,
}

/// Full engine output. `Default` is the canonical empty bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub career_paths: Vec<CareerScore>,
    pub skill_gaps: Vec<SkillGap>,
    pub project_ideas: Vec<ProjectIdea>,
    pub technologies: Vec<TechnologyRecommendation>,
    pub learning_resources: Vec<ResourceRecommendation>,
    pub skill_analysis: SkillAnalysis,
    pub repo_improvements: Vec<RepoImprovement>,
    pub profile_stats: ProfileStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&SkillCategory::TechnologyFramework).unwrap(),
            r#""Technology/Framework""#
        );
        assert_eq!(
            serde_json::to_string(&SkillCategory::Language).unwrap(),
            r#""Language""#
        );
    }

    #[test]
    fn test_evidence_is_tagged_by_source() {
        let evidence = Evidence {
            repo: "api".to_string(),
            stars: 4,
            source: EvidenceSource::Language { bytes: 1024.0 },
        };
        let value = serde_json::to_value(&evidence).unwrap();
        assert_eq!(value["from"], "language");
        assert_eq!(value["bytes"], 1024.0);
        assert_eq!(value["repo"], "api");
    }

    #[test]
    fn test_empty_bundle_has_every_field() {
        let value = serde_json::to_value(RecommendationBundle::default()).unwrap();
        for key in [
            "career_paths",
            "skill_gaps",
            "project_ideas",
            "technologies",
            "learning_resources",
            "repo_improvements",
        ] {
            assert_eq!(value[key], serde_json::json!([]), "{key}");
        }
        assert_eq!(value["skill_analysis"]["strengths"], serde_json::json!([]));
        assert_eq!(value["skill_analysis"]["weaknesses"], serde_json::json!([]));
        assert_eq!(value["skill_analysis"]["skills"], serde_json::json!([]));
        assert_eq!(value["profile_stats"]["total_repos"], 0);
        assert_eq!(value["profile_stats"]["avg_languages_per_repo"], 0.0);
    }

    #[test]
    fn test_improvement_kind_serializes_as_type() {
        let imp = Improvement {
            kind: ImprovementKind::Quality,
            suggestion: "Add automated tests".to_string(),
            impact: "Demonstrates code quality".to_string(),
        };
        let value = serde_json::to_value(&imp).unwrap();
        assert_eq!(value["type"], "quality");
    }
}
