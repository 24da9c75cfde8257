//! Composition root: builds each store exactly once per process.

use std::sync::Arc;

use anyhow::{Context, Result};
use skillbridge_core::SkillSelectionStore;
use skillbridge_core::config::AppConfig;
use skillbridge_core::session::{CredentialVerifier, DemoCredentialVerifier};
use skillbridge_infrastructure::{
    BlobSessionRepository, FileBlobStorage, PersistentSessionStore, SkillBridgePaths,
};

pub struct App {
    pub config: AppConfig,
    pub paths: SkillBridgePaths,
    pub session: PersistentSessionStore,
    pub skills: SkillSelectionStore,
}

impl App {
    /// Opens the persisted session in the data directory `paths` resolves to.
    pub fn bootstrap(config: AppConfig, paths: SkillBridgePaths) -> Result<Self> {
        let data_dir = paths
            .data_dir()
            .context("Failed to resolve the data directory")?;

        let verifier: Arc<dyn CredentialVerifier> = Arc::new(DemoCredentialVerifier::with_latency(
            config.auth.simulated_latency(),
        ));
        let repository = Arc::new(BlobSessionRepository::with_key(
            FileBlobStorage::new(&data_dir),
            config.storage.session_key.clone(),
        ));
        let session = PersistentSessionStore::open(verifier, repository);

        tracing::debug!(data_dir = %data_dir.display(), "Application bootstrapped");

        Ok(Self {
            config,
            paths,
            session,
            skills: SkillSelectionStore::new(),
        })
    }
}
