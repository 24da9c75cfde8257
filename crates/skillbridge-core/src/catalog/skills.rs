//! Self-assessment checklist.

use std::sync::OnceLock;

use crate::skill::Skill;

/// Level assigned to skills picked from the checklist.
pub const CHECKLIST_LEVEL: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: Vec<Skill>,
}

const CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        "tech",
        "Technical Skills",
        &["Programming", "Web Development", "Data Analysis", "Mobile Development"],
    ),
    (
        "soft",
        "Soft Skills",
        &["Communication", "Leadership", "Problem Solving", "Time Management"],
    ),
    (
        "business",
        "Business Skills",
        &["Project Management", "Digital Marketing", "Business Analysis", "Sales"],
    ),
    (
        "data",
        "Data Skills",
        &["SQL", "Data Visualization", "Machine Learning", "Statistics"],
    ),
];

/// Lowercase alphanumeric words joined by `-`.
pub(crate) fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// All checklist categories, in display order.
pub fn skill_categories() -> &'static [SkillCategory] {
    static CATALOG: OnceLock<Vec<SkillCategory>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        CATEGORIES
            .iter()
            .map(|(id, name, skills)| SkillCategory {
                id: *id,
                name: *name,
                skills: skills
                    .iter()
                    .map(|skill| Skill::new(slugify(skill), *skill, *id, CHECKLIST_LEVEL))
                    .collect(),
            })
            .collect()
    })
}

pub fn find_skill(skill_id: &str) -> Option<&'static Skill> {
    skill_categories()
        .iter()
        .flat_map(|category| category.skills.iter())
        .find(|skill| skill.id == skill_id)
}
