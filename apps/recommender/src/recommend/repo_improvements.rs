//! Repository hygiene suggestions drawn from descriptions, topics and language spread.

use crate::models::profile::Repository;
use crate::models::recommendation::{Improvement, ImprovementKind, RepoImprovement};

const REPOS_EXAMINED: usize = 5;
const REPO_LIMIT: usize = 3;
const SUGGESTIONS_PER_REPO: usize = 2;

const MIN_DESCRIPTION_CHARS: usize = 20;
const MIN_TOPICS: usize = 3;
/// Repositories with more languages than this are expected to show testing.
const MULTI_LANGUAGE_THRESHOLD: usize = 2;

/// Examines the first five repositories in input order and returns up to three
/// that have something to fix, each with its first two suggestions.
pub fn suggest_repo_improvements(repos: &[Repository]) -> Vec<RepoImprovement> {
    repos
        .iter()
        .take(REPOS_EXAMINED)
        .filter_map(|repo| {
            let mut improvements = evaluate(repo);
            if improvements.is_empty() {
                return None;
            }
            improvements.truncate(SUGGESTIONS_PER_REPO);
            Some(RepoImprovement {
                repo: repo.name.clone(),
                current_stars: repo.stars,
                improvements,
            })
        })
        .take(REPO_LIMIT)
        .collect()
}

/// Runs every heuristic in order: documentation, topics, quality.
fn evaluate(repo: &Repository) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if repo.description().chars().count() < MIN_DESCRIPTION_CHARS {
        improvements.push(Improvement {
            kind: ImprovementKind::Documentation,
            suggestion: "Add a detailed description".to_string(),
            impact: "Improves discoverability".to_string(),
        });
    }

    if repo.topics.len() < MIN_TOPICS {
        improvements.push(Improvement {
            kind: ImprovementKind::Topics,
            suggestion: "Add relevant topics/tags".to_string(),
            impact: "Increases visibility".to_string(),
        });
    }

    let has_testing_topic = repo
        .topics
        .iter()
        .any(|t| t.to_lowercase() == "testing");
    if repo.languages.len() > MULTI_LANGUAGE_THRESHOLD && !has_testing_topic {
        improvements.push(Improvement {
            kind: ImprovementKind::Quality,
            suggestion: "Add automated tests".to_string(),
            impact: "Demonstrates code quality".to_string(),
        });
    }

    improvements
}
