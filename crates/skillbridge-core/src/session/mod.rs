//! Session domain module.
//!
//! # Module Structure
//!
//! - `user`: learner profile and partial updates
//! - `settings`: notification, privacy and appearance settings
//! - `model`: the session snapshot
//! - `credentials`: credential verification seam and the demo verifier
//! - `store`: the session store
//! - `repository`: persistence trait implemented by the infrastructure layer
//! - `view`: read-only access for flows that must not mutate the session

pub mod credentials;
pub mod model;
pub mod repository;
pub mod settings;
pub mod store;
pub mod user;
pub mod view;

pub use credentials::{CredentialVerifier, DemoCredentialVerifier};
pub use model::SessionState;
pub use repository::SessionRepository;
pub use settings::{
    AppearanceSettings, FontSize, NotificationSettings, PrivacySettings, ProfileVisibility, Theme,
    UserSettings,
};
pub use store::SessionStore;
pub use user::{User, UserUpdate};
pub use view::SessionView;
