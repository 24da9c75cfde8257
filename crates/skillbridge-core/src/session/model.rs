//! Session state model.

use serde::{Deserialize, Serialize};

use super::settings::UserSettings;
use super::user::User;

/// Snapshot of the session store.
///
/// Authentication is not stored separately: a session is authenticated
/// exactly when it carries a user, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub settings: UserSettings,
}

impl SessionState {
    /// Anonymous session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
