//! Skill selection models.

use serde::{Deserialize, Serialize};

/// A skill a visitor can tick during self-assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Category id, e.g. `tech`
    pub category: String,
    pub level: u8,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        level: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            level,
        }
    }
}

/// Snapshot of the skill selection store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSelectionState {
    /// Selected skills in insertion order, unique by id.
    pub selected_skills: Vec<Skill>,
    pub assessment_completed: bool,
    pub current_path: Option<String>,
}

impl SkillSelectionState {
    pub fn contains(&self, skill_id: &str) -> bool {
        self.selected_skills.iter().any(|skill| skill.id == skill_id)
    }

    pub fn skill_ids(&self) -> Vec<&str> {
        self.selected_skills.iter().map(|skill| skill.id.as_str()).collect()
    }
}
