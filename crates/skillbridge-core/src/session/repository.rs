//! Session repository trait.

use crate::error::Result;
use crate::session::model::SessionState;

/// Durable home of the session snapshot.
///
/// Read once at startup, rewritten after every session mutation.
pub trait SessionRepository: Send + Sync {
    /// Loads the stored snapshot. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<SessionState>>;

    /// Replaces the stored snapshot.
    fn save(&self, state: &SessionState) -> Result<()>;

    /// Removes the stored snapshot.
    fn clear(&self) -> Result<()>;
}
