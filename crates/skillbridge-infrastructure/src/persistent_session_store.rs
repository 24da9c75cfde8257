//! Persistence decorator around [`SessionStore`].
//!
//! Rehydrates the store from a [`SessionRepository`] when opened and writes
//! the resulting state back after every mutation. Storage faults never reach
//! the caller: a corrupt or unreadable blob starts a fresh default session,
//! and a failed write is logged while the in-memory store stays
//! authoritative.
//!
//! Saves are serialized and each one reads the state while holding the
//! persist lock, so the last write always carries the latest snapshot no
//! matter how mutations on different threads interleave.

use std::sync::{Arc, Mutex, MutexGuard};

use skillbridge_core::SubscriptionId;
use skillbridge_core::error::Result;
use skillbridge_core::session::{
    CredentialVerifier, SessionRepository, SessionState, SessionStore, SessionView, User,
    UserSettings, UserUpdate,
};

/// A [`SessionStore`] whose every mutation is followed by a save.
///
/// The wrapped store is never handed out, so there is no way to change the
/// session without going through persistence.
#[derive(Clone)]
pub struct PersistentSessionStore {
    inner: Arc<SessionStore>,
    repository: Arc<dyn SessionRepository>,
    persist_lock: Arc<Mutex<()>>,
}

impl PersistentSessionStore {
    /// Loads the persisted state (or defaults) and wraps a new store around it.
    pub fn open(
        verifier: Arc<dyn CredentialVerifier>,
        repository: Arc<dyn SessionRepository>,
    ) -> Self {
        let state = match repository.load() {
            Ok(Some(state)) => {
                tracing::debug!(
                    authenticated = state.is_authenticated(),
                    "Session rehydrated"
                );
                state
            }
            Ok(None) => {
                tracing::debug!("No persisted session, starting fresh");
                SessionState::default()
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable persisted session: {}", e);
                SessionState::default()
            }
        };

        Self {
            inner: Arc::new(SessionStore::with_state(verifier, state)),
            repository,
            persist_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.user()
    }

    pub fn settings(&self) -> UserSettings {
        self.inner.settings()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.inner.subscribe(listener)
    }

    pub fn subscribe_slice<S, Sel, F>(&self, selector: Sel, listener: F) -> SubscriptionId
    where
        S: PartialEq + Send + 'static,
        Sel: Fn(&SessionState) -> S + Send + Sync + 'static,
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.inner.subscribe_slice(selector, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> Result<()> {
        let guard = self.persist_guard();
        self.inner
            .login(identifier, secret)
            .await
            .inspect_err(|_| guard.skip())
    }

    pub fn logout(&self) {
        let _guard = self.persist_guard();
        self.inner.logout();
    }

    /// Not a state change, so nothing is written.
    pub fn cancel_pending_login(&self) {
        self.inner.cancel_pending_login();
    }

    pub fn update_user(&self, update: UserUpdate) -> Result<()> {
        let guard = self.persist_guard();
        self.inner.update_user(update).inspect_err(|_| guard.skip())
    }

    pub fn update_settings(&self, settings: UserSettings) {
        let _guard = self.persist_guard();
        self.inner.update_settings(settings);
    }

    pub fn update_progress(&self, course_id: impl Into<String>, percentage: u32) -> Result<()> {
        let guard = self.persist_guard();
        self.inner
            .update_progress(course_id, percentage)
            .inspect_err(|_| guard.skip())
    }

    /// Signs out, restores default settings and deletes the stored blob.
    pub fn reset(&self) -> Result<()> {
        let _lock = self.lock_persist();
        self.inner.logout();
        self.inner.update_settings(UserSettings::default());
        self.repository.clear()?;
        tracing::info!("Persisted session cleared");
        Ok(())
    }

    /// Writes the current state now, surfacing any storage error.
    pub fn flush(&self) -> Result<()> {
        let _lock = self.lock_persist();
        self.repository.save(&self.inner.state())
    }

    fn persist_guard(&self) -> PersistGuard<'_> {
        PersistGuard {
            store: self,
            skipped: std::cell::Cell::new(false),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to persist session: {}", e);
        }
    }

    fn lock_persist(&self) -> MutexGuard<'_, ()> {
        self.persist_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionView for PersistentSessionStore {
    fn state(&self) -> SessionState {
        self.inner.state()
    }

    fn is_authenticated(&self) -> bool {
        self.inner.is_authenticated()
    }
}

impl std::fmt::Debug for PersistentSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentSessionStore")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Saves the store when dropped, so every exit path of a mutation
/// (including unwinding) persists what is in memory.
struct PersistGuard<'a> {
    store: &'a PersistentSessionStore,
    skipped: std::cell::Cell<bool>,
}

impl PersistGuard<'_> {
    /// The mutation failed without changing state; nothing to write.
    fn skip(&self) {
        self.skipped.set(true);
    }
}

impl Drop for PersistGuard<'_> {
    fn drop(&mut self) {
        if !self.skipped.get() {
            self.store.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob_session_repository::BlobSessionRepository;
    use crate::storage::{BlobStorage, MemoryBlobStorage};
    use skillbridge_core::SkillBridgeError;
    use skillbridge_core::session::DemoCredentialVerifier;
    use skillbridge_core::session::credentials::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
    use skillbridge_core::session::settings::Theme;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// Counts saves and optionally fails them.
    struct RecordingRepository {
        inner: BlobSessionRepository<MemoryBlobStorage>,
        saves: AtomicUsize,
        fail_saves: bool,
    }

    impl Default for RecordingRepository {
        fn default() -> Self {
            Self {
                inner: BlobSessionRepository::new(MemoryBlobStorage::new()),
                saves: AtomicUsize::new(0),
                fail_saves: false,
            }
        }
    }

    impl SessionRepository for RecordingRepository {
        fn load(&self) -> Result<Option<SessionState>> {
            self.inner.load()
        }

        fn save(&self, state: &SessionState) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves {
                return Err(SkillBridgeError::io("disk full"));
            }
            self.inner.save(state)
        }

        fn clear(&self) -> Result<()> {
            self.inner.clear()
        }
    }

    /// Parks the first save until the test releases it.
    struct GatedRepository {
        inner: BlobSessionRepository<MemoryBlobStorage>,
        entered: Mutex<Option<mpsc::Sender<()>>>,
        release: Mutex<Option<mpsc::Receiver<()>>>,
    }

    impl SessionRepository for GatedRepository {
        fn load(&self) -> Result<Option<SessionState>> {
            self.inner.load()
        }

        fn save(&self, state: &SessionState) -> Result<()> {
            let release = self.release.lock().unwrap().take();
            if let Some(release) = release {
                if let Some(entered) = self.entered.lock().unwrap().take() {
                    entered.send(()).unwrap();
                }
                release.recv().unwrap();
            }
            self.inner.save(state)
        }

        fn clear(&self) -> Result<()> {
            self.inner.clear()
        }
    }

    fn with_theme(theme: Theme) -> UserSettings {
        let mut settings = UserSettings::default();
        settings.appearance.theme = theme;
        settings
    }

    fn verifier() -> Arc<dyn CredentialVerifier> {
        Arc::new(DemoCredentialVerifier::new())
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let repo = Arc::new(RecordingRepository::default());
        let store = PersistentSessionStore::open(verifier(), repo.clone());

        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.update_progress("course-1", 50).unwrap();
        store.update_progress("course-1", 75).unwrap();

        assert_eq!(repo.saves.load(Ordering::SeqCst), 3);
        let persisted = repo.load().unwrap().unwrap();
        assert_eq!(persisted, store.state());
        assert_eq!(persisted.user.unwrap().progress_for("course-1"), Some(75));
    }

    #[tokio::test]
    async fn test_failed_operations_do_not_write() {
        let repo = Arc::new(RecordingRepository::default());
        let store = PersistentSessionStore::open(verifier(), repo.clone());

        assert!(store.login("wrong@x.com", "bad").await.is_err());
        assert!(store.update_progress("course-1", 10).is_err());
        assert!(store.update_user(UserUpdate::new().name("x")).is_err());
        store.cancel_pending_login();

        assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
        assert!(repo.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rehydrate_restores_state() {
        let repo = Arc::new(RecordingRepository::default());
        {
            let store = PersistentSessionStore::open(verifier(), repo.clone());
            store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
            let mut settings = UserSettings::default();
            settings.appearance.theme = Theme::Light;
            store.update_settings(settings);
        }

        let reopened = PersistentSessionStore::open(verifier(), repo);
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.user().unwrap().id, DEMO_USER_ID);
        assert_eq!(reopened.settings().appearance.theme, Theme::Light);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_default() {
        let repo = Arc::new(RecordingRepository::default());
        repo.inner
            .storage()
            .set_item("user-storage", r#"{"version":"1.0.0","user":{"id":"#)
            .unwrap();

        let store = PersistentSessionStore::open(verifier(), repo);
        assert_eq!(store.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let repo = Arc::new(RecordingRepository {
            fail_saves: true,
            ..RecordingRepository::default()
        });
        let store = PersistentSessionStore::open(verifier(), repo.clone());

        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.logout();

        assert_eq!(repo.saves.load(Ordering::SeqCst), 2);
        assert!(!store.is_authenticated());
        assert!(store.flush().is_err());
    }

    #[tokio::test]
    async fn test_logout_persists_anonymous_state() {
        let repo = Arc::new(RecordingRepository::default());
        let store = PersistentSessionStore::open(verifier(), repo.clone());
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.logout();

        let persisted = repo.load().unwrap().unwrap();
        assert!(!persisted.is_authenticated());
        assert!(persisted.user.is_none());
    }

    #[test]
    fn test_overlapping_saves_keep_latest_state() {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let repo = Arc::new(GatedRepository {
            inner: BlobSessionRepository::new(MemoryBlobStorage::new()),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
        });
        let store = PersistentSessionStore::open(verifier(), repo.clone());

        let first = {
            let store = store.clone();
            thread::spawn(move || store.update_settings(with_theme(Theme::Dark)))
        };
        entered_rx.recv().unwrap();

        let second = {
            let store = store.clone();
            thread::spawn(move || store.update_settings(with_theme(Theme::Light)))
        };
        thread::sleep(Duration::from_millis(50));
        release_tx.send(()).unwrap();
        first.join().unwrap();
        second.join().unwrap();

        assert_eq!(store.settings().appearance.theme, Theme::Light);
        assert_eq!(repo.load().unwrap().unwrap(), store.state());
    }

    #[tokio::test]
    async fn test_reset_clears_memory_and_storage() {
        let repo = Arc::new(RecordingRepository::default());
        let store = PersistentSessionStore::open(verifier(), repo.clone());
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.update_settings(with_theme(Theme::Dark));

        store.reset().unwrap();

        assert_eq!(store.state(), SessionState::default());
        assert!(repo.load().unwrap().is_none());
        let reopened = PersistentSessionStore::open(verifier(), repo);
        assert_eq!(reopened.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_usable_as_read_only_view() {
        fn signed_in(view: &dyn SessionView) -> bool {
            view.is_authenticated()
        }

        let repo = Arc::new(RecordingRepository::default());
        let store = PersistentSessionStore::open(verifier(), repo);
        assert!(!signed_in(&store));
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        assert!(signed_in(&store));
    }
}
