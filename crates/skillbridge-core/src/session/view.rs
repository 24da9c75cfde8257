//! Read-only access to the session.

use super::model::SessionState;

/// What a consumer may see of the session without being able to change it.
///
/// Implemented by the session store and by every wrapper around it, so flows
/// that only need to know who is signed in never get a mutable handle.
pub trait SessionView: Send + Sync {
    fn state(&self) -> SessionState;

    fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }
}
