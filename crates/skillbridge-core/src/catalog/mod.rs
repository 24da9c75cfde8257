//! Static content shown by the dashboard: the self-assessment checklist and
//! the learning paths on offer.

pub mod paths;
pub mod skills;

pub use paths::{LearningPath, find_path, learning_paths};
pub use skills::{SkillCategory, find_skill, skill_categories};
