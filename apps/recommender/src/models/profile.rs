use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A code repository as supplied by the caller (already fetched from the hosting platform).
///
/// Optional fields default to empty when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// language name → byte count
    #[serde(default)]
    pub languages: BTreeMap<String, f64>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
}

impl Repository {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Input to the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub repos: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let repo: Repository = serde_json::from_value(json!({ "name": "bare" })).unwrap();
        assert_eq!(repo.description(), "");
        assert!(repo.languages.is_empty());
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
    }

    #[test]
    fn test_null_description_is_empty() {
        let repo: Repository =
            serde_json::from_value(json!({ "name": "r", "description": null })).unwrap();
        assert_eq!(repo.description(), "");
    }

    #[test]
    fn test_profile_deserializes() {
        let profile: UserProfile = serde_json::from_value(json!({
            "user_id": "octocat",
            "repos": [{
                "name": "ml-lab",
                "description": "Experiments",
                "languages": { "Python": 50000, "Shell": 1200.5 },
                "topics": ["machine-learning"],
                "stars": 100,
                "forks": 3
            }]
        }))
        .unwrap();
        assert_eq!(profile.user_id, "octocat");
        assert_eq!(profile.repos.len(), 1);
        assert_eq!(profile.repos[0].languages["Python"], 50000.0);
        assert_eq!(profile.repos[0].stars, 100);
    }

    #[test]
    fn test_negative_stars_rejected() {
        let result: Result<Repository, _> =
            serde_json::from_value(json!({ "name": "r", "stars": -1 }));
        assert!(result.is_err());
    }
}
