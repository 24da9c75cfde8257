//! Skill selection store.
//!
//! Scratchpad for an in-progress self-assessment. Lives for the process and
//! is never persisted. All operations are total.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::{Skill, SkillSelectionState};
use crate::observer::{SubscriptionId, Subscribers};

#[derive(Default)]
pub struct SkillSelectionStore {
    state: RwLock<SkillSelectionState>,
    subscribers: Subscribers<SkillSelectionState>,
}

impl SkillSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SkillSelectionState {
        self.read().clone()
    }

    pub fn selected_skills(&self) -> Vec<Skill> {
        self.read().selected_skills.clone()
    }

    pub fn contains(&self, skill_id: &str) -> bool {
        self.read().contains(skill_id)
    }

    pub fn assessment_completed(&self) -> bool {
        self.read().assessment_completed
    }

    pub fn current_path(&self) -> Option<String> {
        self.read().current_path.clone()
    }

    /// Appends `skill` unless a skill with the same id is already selected.
    pub fn add_skill(&self, skill: Skill) {
        self.update(|state| {
            if !state.contains(&skill.id) {
                tracing::debug!(skill_id = %skill.id, "Skill selected");
                state.selected_skills.push(skill);
            }
        });
    }

    /// Removes the skill with `skill_id`, if selected.
    pub fn remove_skill(&self, skill_id: &str) {
        self.update(|state| {
            state.selected_skills.retain(|skill| skill.id != skill_id);
        });
    }

    /// Removes `skill` when selected, adds it otherwise. Returns whether the
    /// skill is selected afterwards.
    pub fn toggle_skill(&self, skill: Skill) -> bool {
        let mut selected = false;
        self.update(|state| {
            if state.contains(&skill.id) {
                state.selected_skills.retain(|existing| existing.id != skill.id);
            } else {
                state.selected_skills.push(skill);
                selected = true;
            }
        });
        selected
    }

    pub fn clear_skills(&self) {
        self.update(|state| state.selected_skills.clear());
    }

    /// Marks the assessment completed. There is no way back.
    pub fn complete_assessment(&self) {
        self.update(|state| {
            if !state.assessment_completed {
                tracing::debug!(skills = state.selected_skills.len(), "Assessment completed");
            }
            state.assessment_completed = true;
        });
    }

    /// Overwrites the chosen learning path. The id is not checked against
    /// the path catalog.
    pub fn set_current_path(&self, path_id: impl Into<String>) {
        let path_id = path_id.into();
        self.update(|state| state.current_path = Some(path_id));
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SkillSelectionState) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn subscribe_slice<S, Sel, F>(&self, selector: Sel, listener: F) -> SubscriptionId
    where
        S: PartialEq + Send + 'static,
        Sel: Fn(&SkillSelectionState) -> S + Send + Sync + 'static,
        F: Fn(&S) + Send + Sync + 'static,
    {
        let initial = selector(&self.read());
        self.subscribers.subscribe_slice(initial, selector, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn update(&self, f: impl FnOnce(&mut SkillSelectionState)) {
        let mut state = self.write();
        f(&mut state);
        let snapshot = state.clone();
        let turn = self.subscribers.turn();
        drop(state);
        turn.notify(&snapshot);
    }

    fn read(&self) -> RwLockReadGuard<'_, SkillSelectionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SkillSelectionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for SkillSelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillSelectionStore")
            .field("state", &*self.read())
            .finish()
    }
}
