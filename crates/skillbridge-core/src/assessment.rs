//! Generate-learning-path flow.
//!
//! Ties the two stores together the way the assessment checklist does: only
//! signed-in visitors with at least one ticked skill get a path.

use crate::catalog::{LearningPath, learning_paths};
use crate::error::{Result, SkillBridgeError};
use crate::session::SessionView;
use crate::skill::SkillSelectionStore;

/// Completes the assessment and returns the paths to offer.
///
/// When `path_id` is given it becomes the selection store's current path
/// (unchecked against the catalog). Fails with `NoActiveSession` for anonymous
/// visitors and `EmptySelection` when nothing is ticked; neither store is
/// touched on failure.
pub fn generate_learning_path<V: SessionView + ?Sized>(
    session: &V,
    skills: &SkillSelectionStore,
    path_id: Option<&str>,
) -> Result<&'static [LearningPath]> {
    if !session.is_authenticated() {
        return Err(SkillBridgeError::NoActiveSession);
    }
    if skills.selected_skills().is_empty() {
        return Err(SkillBridgeError::EmptySelection);
    }

    skills.complete_assessment();
    if let Some(path_id) = path_id {
        skills.set_current_path(path_id);
    }

    Ok(learning_paths())
}
