pub mod blob_session_repository;
pub mod config_service;
pub mod dto;
pub mod paths;
pub mod persistent_session_store;
pub mod storage;

pub use crate::blob_session_repository::BlobSessionRepository;
pub use crate::config_service::{ConfigService, ConfigSource};
pub use crate::paths::SkillBridgePaths;
pub use crate::persistent_session_store::PersistentSessionStore;
pub use crate::storage::{BlobStorage, FileBlobStorage, MemoryBlobStorage};
