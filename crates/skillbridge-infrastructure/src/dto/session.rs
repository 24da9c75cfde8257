//! Session blob DTOs and migrations.
//!
//! The blob is a flat versioned JSON document: a `version` key next to
//! `user`, `settings` and `isAuthenticated` in camelCase.

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Migrator, Versioned};

use skillbridge_core::error::Result;
use skillbridge_core::session::{SessionState, User, UserSettings};

/// Entity name the session migration path is registered under.
pub const SESSION_ENTITY: &str = "session";

/// Session state as written to storage, V1.0.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct PersistedSessionV1_0 {
    #[serde(default)]
    pub user: Option<User>,
    /// Missing settings fall back to defaults.
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Type alias for the latest session version.
pub type PersistedSessionDTO = PersistedSessionV1_0;

// ============================================================================
// Domain model conversions
// ============================================================================

/// The stored flag is redundant with `user`; a disagreement is repaired in
/// favour of `user`.
impl IntoDomain<SessionState> for PersistedSessionV1_0 {
    fn into_domain(self) -> SessionState {
        if self.is_authenticated != self.user.is_some() {
            tracing::warn!(
                is_authenticated = self.is_authenticated,
                has_user = self.user.is_some(),
                "Persisted session flag disagrees with user; trusting user"
            );
        }
        SessionState {
            user: self.user,
            settings: self.settings,
        }
    }
}

impl FromDomain<SessionState> for PersistedSessionV1_0 {
    fn from_domain(state: SessionState) -> Self {
        let is_authenticated = state.is_authenticated();
        PersistedSessionV1_0 {
            user: state.user,
            settings: state.settings,
            is_authenticated,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for the session blob.
///
/// # Migration Path
///
/// - V1.0.0 → SessionState
pub fn create_session_migrator() -> Result<Migrator> {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(SESSION_ENTITY)
        .from::<PersistedSessionV1_0>()
        .into_with_save::<SessionState>();
    migrator.register(path)?;
    Ok(migrator)
}

// ============================================================================
// Codec
// ============================================================================

pub fn encode_session(state: &SessionState) -> Result<String> {
    let migrator = create_session_migrator()?;
    Ok(migrator.save_domain_flat(SESSION_ENTITY, state)?)
}

/// Parses a session blob, migrating older versions. A version without a
/// migration path is an error.
pub fn decode_session(blob: &str) -> Result<SessionState> {
    let value: serde_json::Value = serde_json::from_str(blob)?;
    let migrator = create_session_migrator()?;
    Ok(migrator.load_flat_from(SESSION_ENTITY, value)?)
}
