//! Skill self-assessment module.

pub mod model;
pub mod store;

pub use model::{Skill, SkillSelectionState};
pub use store::SkillSelectionStore;
