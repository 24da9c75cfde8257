//! Persist -> discard -> rehydrate through real files.

use std::sync::Arc;

use skillbridge_core::session::credentials::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
use skillbridge_core::session::{
    CredentialVerifier, DemoCredentialVerifier, FontSize, ProfileVisibility, UserSettings,
    UserUpdate,
};
use skillbridge_infrastructure::{BlobSessionRepository, FileBlobStorage, PersistentSessionStore};
use tempfile::TempDir;

fn open(dir: &std::path::Path) -> PersistentSessionStore {
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(DemoCredentialVerifier::new());
    let repository = Arc::new(BlobSessionRepository::new(FileBlobStorage::new(dir)));
    PersistentSessionStore::open(verifier, repository)
}

#[tokio::test]
async fn test_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let original = {
        let store = open(temp_dir.path());
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store
            .update_user(UserUpdate::new().bio(None).name("Demo Learner"))
            .unwrap();
        store.update_progress("course-1", 50).unwrap();
        store.update_progress("course-1", 75).unwrap();
        store.update_progress("course-2", 10).unwrap();

        let mut settings = UserSettings::default();
        settings.privacy.profile_visibility = ProfileVisibility::Friends;
        settings.appearance.font_size = FontSize::Large;
        settings.language = "de".to_string();
        store.update_settings(settings);

        store.state()
    };

    assert!(temp_dir.path().join("user-storage.json").exists());

    let restored = open(temp_dir.path());
    assert_eq!(restored.state(), original);

    let user = restored.user().unwrap();
    assert_eq!(user.id, DEMO_USER_ID);
    assert!(user.bio.is_none());
    assert_eq!(user.progress_for("course-1"), Some(75));
}

#[tokio::test]
async fn test_logout_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = open(temp_dir.path());
        store.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();
        store.logout();
        store.logout();
    }

    let restored = open(temp_dir.path());
    assert!(!restored.is_authenticated());
    assert!(restored.user().is_none());
}

#[test]
fn test_truncated_file_rehydrates_to_default() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("user-storage.json"),
        r#"{"version":"1.0.0","user":{"id":"demo-user","email":"demo@skill"#,
    )
    .unwrap();

    let store = open(temp_dir.path());
    assert!(!store.is_authenticated());
    assert_eq!(store.settings(), UserSettings::default());
}
