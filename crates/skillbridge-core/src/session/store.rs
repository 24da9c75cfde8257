//! Session store.
//!
//! Single authoritative record of who is using the application and how they
//! configured it. Every mutation notifies subscribers synchronously with the
//! new snapshot before returning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::credentials::CredentialVerifier;
use super::model::SessionState;
use super::settings::UserSettings;
use super::user::{User, UserUpdate};
use super::view::SessionView;
use crate::error::{Result, SkillBridgeError};
use crate::observer::{SubscriptionId, Subscribers};

/// Owns the session state and its subscribers.
///
/// Construct one per process at the composition root and share it by `Arc`.
pub struct SessionStore {
    state: RwLock<SessionState>,
    verifier: Arc<dyn CredentialVerifier>,
    /// Bumped by every login attempt, logout and cancellation. A login only
    /// applies its result if its ticket is still current.
    login_generation: AtomicU64,
    subscribers: Subscribers<SessionState>,
}

impl SessionStore {
    /// Creates a store in the anonymous default state.
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::with_state(verifier, SessionState::default())
    }

    /// Creates a store seeded with a previously persisted state.
    pub fn with_state(verifier: Arc<dyn CredentialVerifier>, state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
            verifier,
            login_generation: AtomicU64::new(0),
            subscribers: Subscribers::new(),
        }
    }

    // ============================================================================
    // Reads
    // ============================================================================

    pub fn state(&self) -> SessionState {
        self.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn settings(&self) -> UserSettings {
        self.read().settings.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Verifies the pair and, on success, installs the returned user.
    ///
    /// The user and the authenticated flag change in one step after
    /// verification completes. Fails with `InvalidCredentials` on mismatch and
    /// with `LoginSuperseded` if `logout`, `cancel_pending_login` or a newer
    /// `login` ran while this one was waiting; prior state is kept either way.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<()> {
        let ticket = self.login_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(identifier, ticket, "Login started");

        let user = match self.verifier.verify(identifier, secret).await {
            Ok(user) => user,
            Err(e) => {
                tracing::info!(identifier, "Login rejected: {}", e);
                return Err(e);
            }
        };

        self.try_update(|state| {
            if self.login_generation.load(Ordering::SeqCst) != ticket {
                return Err(SkillBridgeError::LoginSuperseded);
            }
            tracing::info!(user_id = %user.id, "User logged in");
            state.user = Some(user);
            Ok(())
        })
        .inspect_err(|_| tracing::info!(identifier, ticket, "Login superseded"))
    }

    /// Clears the user. Idempotent; also invalidates any pending login.
    pub fn logout(&self) {
        self.login_generation.fetch_add(1, Ordering::SeqCst);
        self.update(|state| {
            if let Some(user) = state.user.take() {
                tracing::info!(user_id = %user.id, "User logged out");
            }
        });
    }

    /// Invalidates a login that is still waiting on verification.
    pub fn cancel_pending_login(&self) {
        self.login_generation.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Pending login cancelled");
    }

    /// Shallow-merges `update` into the current user.
    pub fn update_user(&self, update: UserUpdate) -> Result<()> {
        self.try_update(|state| {
            let user = state.user.as_mut().ok_or(SkillBridgeError::NoActiveSession)?;
            user.apply(update);
            tracing::debug!(user_id = %user.id, "User updated");
            Ok(())
        })
    }

    /// Replaces the settings record wholesale.
    pub fn update_settings(&self, settings: UserSettings) {
        self.update(|state| {
            state.settings = settings;
            tracing::debug!("Settings replaced");
        });
    }

    /// Sets `progress[course_id]`, creating or overwriting the entry.
    ///
    /// `percentage` is stored as given; range checks belong to the caller.
    pub fn update_progress(&self, course_id: impl Into<String>, percentage: u32) -> Result<()> {
        let course_id = course_id.into();
        self.try_update(|state| {
            let user = state.user.as_mut().ok_or(SkillBridgeError::NoActiveSession)?;
            tracing::debug!(
                user_id = %user.id,
                course_id = %course_id,
                percentage,
                "Progress updated"
            );
            user.progress.insert(course_id, percentage);
            Ok(())
        })
    }

    // ============================================================================
    // Subscriptions
    // ============================================================================

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Subscribes to one slice of the state; the listener runs only when that
    /// slice changes.
    pub fn subscribe_slice<S, Sel, F>(&self, selector: Sel, listener: F) -> SubscriptionId
    where
        S: PartialEq + Send + 'static,
        Sel: Fn(&SessionState) -> S + Send + Sync + 'static,
        F: Fn(&S) + Send + Sync + 'static,
    {
        let initial = selector(&self.read());
        self.subscribers.subscribe_slice(initial, selector, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        let mut state = self.write();
        f(&mut state);
        let snapshot = state.clone();
        let turn = self.subscribers.turn();
        drop(state);
        turn.notify(&snapshot);
    }

    /// Applies `f`; on error nothing is notified. `f` must check before it
    /// mutates.
    fn try_update<R>(&self, f: impl FnOnce(&mut SessionState) -> Result<R>) -> Result<R> {
        let mut state = self.write();
        let result = f(&mut state)?;
        let snapshot = state.clone();
        let turn = self.subscribers.turn();
        drop(state);
        turn.notify(&snapshot);
        Ok(result)
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionView for SessionStore {
    fn state(&self) -> SessionState {
        SessionStore::state(self)
    }

    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.read())
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
