use std::collections::HashSet;

use crate::models::profile::Repository;
use crate::models::recommendation::ProfileStats;

/// Portfolio-wide totals. Languages and topics are counted by their raw names,
/// as reported by the hosting platform. The star total saturates at `u64::MAX`.
pub fn compute_profile_stats(repos: &[Repository]) -> ProfileStats {
    if repos.is_empty() {
        return ProfileStats::default();
    }

    let languages: HashSet<&str> = repos
        .iter()
        .flat_map(|r| r.languages.keys().map(String::as_str))
        .collect();
    let topics: HashSet<&str> = repos
        .iter()
        .flat_map(|r| r.topics.iter().map(String::as_str))
        .collect();
    let languages_per_repo: usize = repos.iter().map(|r| r.languages.len()).sum();

    ProfileStats {
        language_diversity: languages.len(),
        topic_diversity: topics.len(),
        total_repos: repos.len(),
        total_stars: repos.iter().map(|r| r.stars).fold(0, u64::saturating_add),
        avg_languages_per_repo: languages_per_repo as f64 / repos.len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(languages: &[&str], topics: &[&str], stars: u64) -> Repository {
        Repository {
            name: "r".to_string(),
            languages: languages.iter().map(|l| (l.to_string(), 100.0)).collect(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            stars,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_is_zeroed() {
        assert_eq!(compute_profile_stats(&[]), ProfileStats::default());
    }

    #[test]
    fn test_counts_distinct_and_totals() {
        let repos = vec![
            repo(&["Rust", "Shell"], &["cli", "parser"], 5),
            repo(&["Rust"], &["cli"], 7),
            repo(&[], &[], 0),
        ];
        let stats = compute_profile_stats(&repos);
        assert_eq!(stats.language_diversity, 2);
        assert_eq!(stats.topic_diversity, 2);
        assert_eq!(stats.total_repos, 3);
        assert_eq!(stats.total_stars, 12);
        assert!((stats.avg_languages_per_repo - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_star_total_saturates() {
        let repos = vec![repo(&[], &[], u64::MAX), repo(&[], &[], u64::MAX)];
        assert_eq!(compute_profile_stats(&repos).total_stars, u64::MAX);
    }
}
