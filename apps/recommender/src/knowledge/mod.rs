//! Knowledge base: immutable reference tables shared by every recommendation request.
//!
//! Built once at startup and handed to the engine behind an `Arc`. Every skill name
//! stored here has already been passed through [`KnowledgeBase::normalize`], so set
//! operations against a user's skill profile are alias-insensitive.

mod data;

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use self::data::{CAREER_PATHS, LEARNING_RESOURCES, PROJECT_TEMPLATES, SKILL_ALIASES, TECHNOLOGIES};

/// Canonical skill names, ordered by name. Taking "the first N" of a set is
/// therefore deterministic.
pub type SkillSet = BTreeSet<String>;

// ────────────────────────────────────────────────────────────────────────────
// Reference records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CareerPathDef {
    pub title: String,
    pub required_skills: SkillSet,
    pub preferred_skills: SkillSet,
    pub description: String,
    pub salary_range: String,
    pub demand: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyDef {
    pub name: String,
    pub category: String,
    pub prerequisites: SkillSet,
    pub difficulty: String,
    pub learning_time: String,
    /// "Very High" | "High" | "Medium-High" | "Medium"
    pub job_relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub provider: String,
    pub skills: SkillSet,
    pub difficulty: String,
    pub duration: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTemplate {
    pub title: String,
    pub skills: SkillSet,
    pub difficulty: String,
    pub description: String,
    pub estimated_time: String,
    pub learning_goals: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// KnowledgeBase
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct KnowledgeBase {
    aliases: HashMap<String, String>,
    careers: Vec<CareerPathDef>,
    technologies: Vec<TechnologyDef>,
    resources: Vec<LearningResource>,
    projects: Vec<ProjectTemplate>,
}

impl KnowledgeBase {
    /// Builds the alias table and the normalized reference tables.
    ///
    /// Every skill name that appears in the seed tables is registered as its own
    /// alias unless the fixed alias table already claims that key, so canonical
    /// names such as "Node.js" or "REST APIs" survive normalization unchanged.
    pub fn new() -> Self {
        let mut aliases: HashMap<String, String> = SKILL_ALIASES
            .iter()
            .map(|(key, canonical)| (key.to_string(), canonical.to_string()))
            .collect();

        let seeded_names = SKILL_ALIASES
            .iter()
            .map(|(_, canonical)| *canonical)
            .chain(
                CAREER_PATHS
                    .iter()
                    .flat_map(|c| c.required.iter().chain(c.preferred.iter()).copied()),
            )
            .chain(
                TECHNOLOGIES
                    .iter()
                    .flat_map(|t| std::iter::once(t.name).chain(t.prerequisites.iter().copied())),
            )
            .chain(LEARNING_RESOURCES.iter().flat_map(|r| r.skills.iter().copied()))
            .chain(PROJECT_TEMPLATES.iter().flat_map(|p| p.skills.iter().copied()));

        for name in seeded_names {
            aliases
                .entry(alias_key(name))
                .or_insert_with(|| name.to_string());
        }

        let mut kb = KnowledgeBase {
            aliases,
            careers: Vec::with_capacity(CAREER_PATHS.len()),
            technologies: Vec::with_capacity(TECHNOLOGIES.len()),
            resources: Vec::with_capacity(LEARNING_RESOURCES.len()),
            projects: Vec::with_capacity(PROJECT_TEMPLATES.len()),
        };

        kb.careers = CAREER_PATHS
            .iter()
            .map(|seed| CareerPathDef {
                title: seed.title.to_string(),
                required_skills: kb.normalize_all(seed.required.iter().copied()),
                preferred_skills: kb.normalize_all(seed.preferred.iter().copied()),
                description: seed.description.to_string(),
                salary_range: seed.salary_range.to_string(),
                demand: seed.demand.to_string(),
            })
            .collect();

        kb.technologies = TECHNOLOGIES
            .iter()
            .map(|seed| TechnologyDef {
                name: kb.normalize(seed.name),
                category: seed.category.to_string(),
                prerequisites: kb.normalize_all(seed.prerequisites.iter().copied()),
                difficulty: seed.difficulty.to_string(),
                learning_time: seed.learning_time.to_string(),
                job_relevance: seed.job_relevance.to_string(),
            })
            .collect();

        kb.resources = LEARNING_RESOURCES
            .iter()
            .map(|seed| LearningResource {
                title: seed.title.to_string(),
                provider: seed.provider.to_string(),
                skills: kb.normalize_all(seed.skills.iter().copied()),
                difficulty: seed.difficulty.to_string(),
                duration: seed.duration.to_string(),
                url: seed.url.to_string(),
                kind: seed.kind.to_string(),
            })
            .collect();

        kb.projects = PROJECT_TEMPLATES
            .iter()
            .map(|seed| ProjectTemplate {
                title: seed.title.to_string(),
                skills: kb.normalize_all(seed.skills.iter().copied()),
                difficulty: seed.difficulty.to_string(),
                description: seed.description.to_string(),
                estimated_time: seed.estimated_time.to_string(),
                learning_goals: seed.learning_goals.iter().map(|g| g.to_string()).collect(),
            })
            .collect();

        kb
    }

    /// Maps a raw language/topic string to its canonical skill name.
    ///
    /// Lower-cases the input and drops whitespace and hyphens to form the lookup
    /// key. Unknown tokens fall back to a title-cased echo of the trimmed input.
    pub fn normalize(&self, raw: &str) -> String {
        match self.aliases.get(&alias_key(raw)) {
            Some(canonical) => canonical.clone(),
            None => title_case(raw.trim()),
        }
    }

    pub fn normalize_all<'a, I>(&self, raw: I) -> SkillSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        raw.into_iter().map(|s| self.normalize(s)).collect()
    }

    /// Career paths in declaration order.
    pub fn careers(&self) -> &[CareerPathDef] {
        &self.careers
    }

    pub fn career(&self, title: &str) -> Option<&CareerPathDef> {
        self.careers.iter().find(|c| c.title == title)
    }

    pub fn technologies(&self) -> &[TechnologyDef] {
        &self.technologies
    }

    pub fn resources(&self) -> &[LearningResource] {
        &self.resources
    }

    pub fn projects(&self) -> &[ProjectTemplate] {
        &self.projects
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

fn alias_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;
    for c in raw.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}
