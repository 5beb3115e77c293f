use crate::knowledge::{KnowledgeBase, SkillSet};
use crate::models::recommendation::{CareerScore, GapPriority, SkillGap};

const GAP_CAREERS: usize = 2;
const MISSING_REQUIRED_LIMIT: usize = 4;
const MISSING_PREFERRED_LIMIT: usize = 3;

/// Missing required/preferred skills for the two best-matching careers.
///
/// Missing skills are listed in canonical name order. Careers the user already
/// fully covers produce no gap.
pub fn analyze_skill_gaps(
    kb: &KnowledgeBase,
    user_skills: &SkillSet,
    careers: &[CareerScore],
) -> Vec<SkillGap> {
    careers
        .iter()
        .take(GAP_CAREERS)
        .filter_map(|scored| {
            let career = kb.career(&scored.title)?;
            let missing_required: Vec<String> = career
                .required_skills
                .difference(user_skills)
                .cloned()
                .collect();
            let missing_preferred: Vec<String> = career
                .preferred_skills
                .difference(user_skills)
                .cloned()
                .collect();

            if missing_required.is_empty() && missing_preferred.is_empty() {
                return None;
            }

            let priority = if missing_required.is_empty() {
                GapPriority::Medium
            } else {
                GapPriority::High
            };

            Some(SkillGap {
                career: scored.title.clone(),
                missing_skills: missing_required
                    .into_iter()
                    .take(MISSING_REQUIRED_LIMIT)
                    .collect(),
                nice_to_have: missing_preferred
                    .into_iter()
                    .take(MISSING_PREFERRED_LIMIT)
                    .collect(),
                priority,
                completion_percentage: (scored.score * 100.0).round() as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::careers::score_career_paths;

    fn skills(names: &[&str]) -> SkillSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gaps_only_for_top_two() {
        let kb = KnowledgeBase::new();
        let user = skills(&["Python"]);
        let careers = score_career_paths(&kb, &user);
        let gaps = analyze_skill_gaps(&kb, &user, &careers);

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].career, careers[0].title);
        assert_eq!(gaps[1].career, careers[1].title);
    }

    #[test]
    fn test_missing_lists_are_truncated_and_ordered() {
        let kb = KnowledgeBase::new();
        let user = skills(&["Python"]);
        let careers = score_career_paths(&kb, &user);
        let gaps = analyze_skill_gaps(&kb, &user, &careers);

        // Backend Engineer: missing Git, Java, REST APIs, SQL
        let backend = &gaps[0];
        assert_eq!(backend.career, "Backend Engineer");
        assert_eq!(backend.missing_skills, vec!["Git", "Java", "REST APIs", "SQL"]);
        assert_eq!(backend.nice_to_have, vec!["Docker", "Kubernetes", "PostgreSQL"]);
        assert_eq!(backend.priority, GapPriority::High);
        assert_eq!(backend.completion_percentage, 14);
        for gap in &gaps {
            assert!(gap.missing_skills.len() <= 4);
            assert!(gap.nice_to_have.len() <= 3);
        }
    }

    #[test]
    fn test_only_preferred_missing_is_medium() {
        let kb = KnowledgeBase::new();
        let user = skills(&["Swift", "Kotlin", "Git", "REST APIs"]);
        let careers = score_career_paths(&kb, &user);
        let gaps = analyze_skill_gaps(&kb, &user, &careers);

        let mobile = gaps.iter().find(|g| g.career == "Mobile Developer").unwrap();
        assert!(mobile.missing_skills.is_empty());
        assert_eq!(mobile.priority, GapPriority::Medium);
        assert_eq!(mobile.completion_percentage, 70);
    }

    #[test]
    fn test_fully_covered_career_is_omitted() {
        let kb = KnowledgeBase::new();
        let mobile = kb.career("Mobile Developer").unwrap();
        let user: SkillSet = mobile
            .required_skills
            .union(&mobile.preferred_skills)
            .cloned()
            .collect();
        let careers = score_career_paths(&kb, &user);
        assert_eq!(careers[0].title, "Mobile Developer");

        let gaps = analyze_skill_gaps(&kb, &user, &careers);
        assert!(gaps.iter().all(|g| g.career != "Mobile Developer"));
    }

    #[test]
    fn test_no_careers_no_gaps() {
        let kb = KnowledgeBase::new();
        assert!(analyze_skill_gaps(&kb, &skills(&["Rust"]), &[]).is_empty());
    }
}
