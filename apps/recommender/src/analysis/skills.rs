//! Skill extraction: turns a repository list into a weighted skill profile.
//!
//! Scoring per repository:
//! - language: `ln(1 + bytes) × (1 + ln(1 + stars) × 0.15)`
//! - topic:    `5.0 × (1 + ln(1 + stars) × 0.1)`
//!
//! Scores only accumulate. Repository recency is not weighted.

use std::collections::BTreeMap;

use crate::knowledge::{KnowledgeBase, SkillSet};
use crate::models::profile::Repository;
use crate::models::recommendation::{Evidence, EvidenceSource, SkillCategory, SkillEntry};

/// Canonical skill name → accumulated evidence.
pub type SkillProfile = BTreeMap<String, SkillEntry>;

const LANGUAGE_STAR_WEIGHT: f64 = 0.15;
const TOPIC_STAR_WEIGHT: f64 = 0.1;
const TOPIC_BASE_SCORE: f64 = 5.0;

pub fn extract_skills(kb: &KnowledgeBase, repos: &[Repository]) -> SkillProfile {
    let mut skills = SkillProfile::new();

    for repo in repos {
        for (language, &bytes) in &repo.languages {
            let entry = skills
                .entry(kb.normalize(language))
                .or_insert_with(|| SkillEntry::new(SkillCategory::Language));
            entry.score += language_score(bytes, repo.stars);
            entry.repos_count += 1;
            entry.evidence.push(Evidence {
                repo: repo.name.clone(),
                stars: repo.stars,
                source: EvidenceSource::Language { bytes },
            });
        }

        for topic in &repo.topics {
            let entry = skills
                .entry(kb.normalize(topic))
                .or_insert_with(|| SkillEntry::new(SkillCategory::TechnologyFramework));
            entry.score += topic_score(repo.stars);
            entry.repos_count += 1;
            entry.evidence.push(Evidence {
                repo: repo.name.clone(),
                stars: repo.stars,
                source: EvidenceSource::Topic,
            });
        }
    }

    skills
}

/// The set of canonical names the user has evidence for.
pub fn skill_names(profile: &SkillProfile) -> SkillSet {
    profile.keys().cloned().collect()
}

fn star_boost(stars: u64, weight: f64) -> f64 {
    1.0 + (stars as f64).ln_1p() * weight
}

fn language_score(bytes: f64, stars: u64) -> f64 {
    bytes.ln_1p() * star_boost(stars, LANGUAGE_STAR_WEIGHT)
}

fn topic_score(stars: u64) -> f64 {
    TOPIC_BASE_SCORE * star_boost(stars, TOPIC_STAR_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, languages: &[(&str, f64)], topics: &[&str], stars: u64) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            languages: languages.iter().map(|(l, b)| (l.to_string(), *b)).collect(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            stars,
            forks: 0,
        }
    }

    #[test]
    fn test_language_and_topic_categories() {
        let kb = KnowledgeBase::new();
        let repos = vec![repo("ml", &[("Python", 50_000.0)], &["machine-learning"], 100)];
        let skills = extract_skills(&kb, &repos);

        assert_eq!(skills.len(), 2);
        assert_eq!(skills["Python"].category, SkillCategory::Language);
        assert_eq!(skills["ML"].category, SkillCategory::TechnologyFramework);
        assert_eq!(skills["Python"].repos_count, 1);
    }

    #[test]
    fn test_language_score_formula() {
        let kb = KnowledgeBase::new();
        let repos = vec![repo("a", &[("Rust", 1000.0)], &[], 10)];
        let skills = extract_skills(&kb, &repos);
        let expected = 1001.0_f64.ln() * (1.0 + 11.0_f64.ln() * 0.15);
        assert!((skills["Rust"].score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_topic_score_formula_without_stars() {
        let kb = KnowledgeBase::new();
        let skills = extract_skills(&kb, &[repo("a", &[], &["docker"], 0)]);
        assert!((skills["Docker"].score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_topic_casing_merges_into_one_entry() {
        let kb = KnowledgeBase::new();
        let repos = vec![
            repo("one", &[], &["docker"], 0),
            repo("two", &[], &["Docker"], 3),
        ];
        let skills = extract_skills(&kb, &repos);

        assert_eq!(skills.len(), 1);
        let docker = &skills["Docker"];
        assert_eq!(docker.repos_count, 2);
        assert_eq!(docker.evidence.len(), 2);
        assert_eq!(docker.evidence[0].repo, "one");
        assert_eq!(docker.evidence[1].source, EvidenceSource::Topic);
    }

    #[test]
    fn test_more_stars_never_lowers_score() {
        let kb = KnowledgeBase::new();
        let mut previous = 0.0;
        for stars in [0, 1, 10, 100, 10_000] {
            let skills = extract_skills(&kb, &[repo("a", &[("Go", 4096.0)], &["k8s"], stars)]);
            let total = skills["Go"].score + skills["Kubernetes"].score;
            assert!(total >= previous, "score dropped at {stars} stars");
            previous = total;
        }
    }

    #[test]
    fn test_blank_names_are_kept() {
        let kb = KnowledgeBase::new();
        let skills = extract_skills(&kb, &[repo("a", &[(" ", 10.0)], &[""], 0)]);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[""].repos_count, 2);
    }

    #[test]
    fn test_skill_names_are_canonical() {
        let kb = KnowledgeBase::new();
        let skills = extract_skills(&kb, &[repo("a", &[("JS", 10.0)], &["nodejs"], 0)]);
        let names = skill_names(&skills);
        assert!(names.contains("JavaScript"));
        assert!(names.contains("Node.js"));
    }
}
