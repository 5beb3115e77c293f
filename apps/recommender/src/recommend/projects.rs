//! Project ideas: templates that reuse what the user knows and stretch into the gaps.
//!
//! A template is eligible when the user knows at least one of its skills, at most
//! two are unknown, and at least 30% are known. Ranking prefers projects that teach
//! missing required skills, then higher skill match.

use crate::knowledge::{KnowledgeBase, ProjectTemplate, SkillSet};
use crate::models::recommendation::{ProjectIdea, SkillGap};

const MAX_UNKNOWN_SKILLS: usize = 2;
const MIN_MATCH_RATIO: f64 = 0.3;
const PRACTICE_MATCH_RATIO: f64 = 0.8;
const PROJECT_LIMIT: usize = 4;

pub fn recommend_projects(
    kb: &KnowledgeBase,
    user_skills: &SkillSet,
    gaps: &[SkillGap],
) -> Vec<ProjectIdea> {
    let skills_to_learn: SkillSet = gaps
        .iter()
        .flat_map(|g| g.missing_skills.iter().cloned())
        .collect();

    let mut ideas: Vec<ProjectIdea> = kb
        .projects()
        .iter()
        .filter_map(|template| match_project(template, user_skills, &skills_to_learn))
        .collect();

    ideas.sort_by(|a, b| {
        (b.priority, b.match_percentage).cmp(&(a.priority, a.match_percentage))
    });
    ideas.truncate(PROJECT_LIMIT);
    ideas
}

fn match_project(
    template: &ProjectTemplate,
    user_skills: &SkillSet,
    skills_to_learn: &SkillSet,
) -> Option<ProjectIdea> {
    let known: Vec<String> = template.skills.intersection(user_skills).cloned().collect();
    let unknown: SkillSet = template.skills.difference(user_skills).cloned().collect();

    if known.is_empty() || unknown.len() > MAX_UNKNOWN_SKILLS {
        return None;
    }

    let match_ratio = known.len() as f64 / template.skills.len() as f64;
    if match_ratio < MIN_MATCH_RATIO {
        return None;
    }

    let teaches_needed: Vec<&String> = unknown.intersection(skills_to_learn).collect();
    let priority = teaches_needed.len();
    let reason = if !teaches_needed.is_empty() {
        let names: Vec<&str> = teaches_needed.iter().take(2).map(|s| s.as_str()).collect();
        format!("Learn {}", names.join(", "))
    } else if match_ratio > PRACTICE_MATCH_RATIO {
        "Practice existing skills".to_string()
    } else {
        "Learn new skills".to_string()
    };

    Some(ProjectIdea {
        template: template.clone(),
        skills_you_have: known,
        skills_to_learn: unknown.into_iter().collect(),
        match_percentage: (match_ratio * 100.0).round() as u32,
        reason,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::GapPriority;

    fn skills(names: &[&str]) -> SkillSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn gap(missing: &[&str]) -> SkillGap {
        SkillGap {
            career: "Test".to_string(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            nice_to_have: vec![],
            priority: GapPriority::High,
            completion_percentage: 50,
        }
    }

    #[test]
    fn test_full_match_is_practice() {
        let kb = KnowledgeBase::new();
        let ideas = recommend_projects(&kb, &skills(&["HTML", "CSS", "JavaScript"]), &[]);
        let portfolio = ideas
            .iter()
            .find(|p| p.template.title == "Personal Portfolio Website")
            .unwrap();
        assert_eq!(portfolio.match_percentage, 100);
        assert_eq!(portfolio.reason, "Practice existing skills");
        assert!(portfolio.skills_to_learn.is_empty());
    }

    #[test]
    fn test_too_many_unknown_skills_excluded() {
        let kb = KnowledgeBase::new();
        // REST API with Authentication: Node.js, Express, JWT, MongoDB → 3 unknown
        let ideas = recommend_projects(&kb, &skills(&["Node.js"]), &[]);
        assert!(ideas
            .iter()
            .all(|p| p.template.title != "REST API with Authentication"));
    }

    #[test]
    fn test_gap_skills_raise_priority_and_reason() {
        let kb = KnowledgeBase::new();
        let user = skills(&["Python", "NumPy"]);
        let ideas = recommend_projects(&kb, &user, &[gap(&["TensorFlow"])]);

        let classifier = &ideas[0];
        assert_eq!(classifier.template.title, "ML Image Classifier");
        assert_eq!(classifier.priority, 1);
        assert_eq!(classifier.reason, "Learn TensorFlow");
        assert_eq!(classifier.match_percentage, 50);
        assert_eq!(classifier.skills_to_learn, vec!["Keras", "TensorFlow"]);
    }

    #[test]
    fn test_partial_match_without_gap_is_learn_new_skills() {
        let kb = KnowledgeBase::new();
        let ideas = recommend_projects(&kb, &skills(&["Python", "Pandas"]), &[]);
        let dashboard = ideas
            .iter()
            .find(|p| p.template.title == "Data Dashboard")
            .unwrap();
        assert_eq!(dashboard.reason, "Learn new skills");
        assert_eq!(dashboard.skills_you_have, vec!["Pandas", "Python"]);
    }

    #[test]
    fn test_reason_lists_at_most_two_gap_skills() {
        let kb = KnowledgeBase::new();
        let user = skills(&["Python", "NumPy"]);
        let ideas = recommend_projects(&kb, &user, &[gap(&["Keras", "TensorFlow"])]);
        assert_eq!(ideas[0].reason, "Learn Keras, TensorFlow");
        assert_eq!(ideas[0].priority, 2);
    }

    #[test]
    fn test_no_known_skills_no_ideas() {
        let kb = KnowledgeBase::new();
        assert!(recommend_projects(&kb, &skills(&["Cobol"]), &[]).is_empty());
    }

    #[test]
    fn test_at_most_four_ideas() {
        let kb = KnowledgeBase::new();
        let user = skills(&[
            "HTML", "CSS", "JavaScript", "React", "Node.js", "MongoDB", "Python", "Pandas",
            "Docker", "Java",
        ]);
        let ideas = recommend_projects(&kb, &user, &[]);
        assert_eq!(ideas.len(), 4);
    }
}
