//! Persisted (on-disk) representations of domain state.

pub mod session;

pub use session::{
    PersistedSessionDTO, PersistedSessionV1_0, SESSION_ENTITY, create_session_migrator,
    decode_session, encode_session,
};
