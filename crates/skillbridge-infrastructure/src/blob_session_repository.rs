//! Session repository backed by a [`BlobStorage`].

use skillbridge_core::config::DEFAULT_SESSION_KEY;
use skillbridge_core::error::Result;
use skillbridge_core::session::{SessionRepository, SessionState};

use crate::dto::{decode_session, encode_session};
use crate::storage::BlobStorage;

/// Stores the session as one JSON blob under a fixed key.
#[derive(Debug)]
pub struct BlobSessionRepository<S> {
    storage: S,
    key: String,
}

impl<S: BlobStorage> BlobSessionRepository<S> {
    /// Uses the default `user-storage` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: BlobStorage> SessionRepository for BlobSessionRepository<S> {
    fn load(&self) -> Result<Option<SessionState>> {
        match self.storage.get_item(&self.key)? {
            Some(blob) => decode_session(&blob).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        let blob = encode_session(state)?;
        self.storage.set_item(&self.key, &blob)
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}
