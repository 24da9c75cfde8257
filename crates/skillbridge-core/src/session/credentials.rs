//! Credential verification.
//!
//! `SessionStore::login` delegates the identifier/secret check to a
//! [`CredentialVerifier`]. The only shipped implementation accepts a single
//! demo account; a real backend would provide another implementation with the
//! same error contract.

use std::time::Duration;

use async_trait::async_trait;

use super::user::User;
use crate::error::{Result, SkillBridgeError};

pub const DEMO_EMAIL: &str = "demo@skillbridge.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_USER_ID: &str = "demo-user";

/// Service that turns an identifier/secret pair into a user profile.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the profile for a matching pair, or
    /// [`SkillBridgeError::InvalidCredentials`].
    async fn verify(&self, identifier: &str, secret: &str) -> Result<User>;
}

/// Accepts exactly `demo@skillbridge.com` / `demo123`.
#[derive(Debug, Clone, Default)]
pub struct DemoCredentialVerifier {
    latency: Duration,
}

impl DemoCredentialVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every verification, simulating a round trip.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// The profile handed out on a successful demo login.
    pub fn demo_user() -> User {
        let mut user = User::new(DEMO_USER_ID, DEMO_EMAIL, "Demo User");
        user.avatar = Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80"
                .to_string(),
        );
        user.bio = Some("Passionate about learning and technology".to_string());
        user.location = Some("San Francisco, CA".to_string());
        user.company = Some("Tech Corp".to_string());
        user.website = Some("https://demo.skillbridge.com".to_string());
        user
    }
}

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<User> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if identifier == DEMO_EMAIL && secret == DEMO_PASSWORD {
            Ok(Self::demo_user())
        } else {
            Err(SkillBridgeError::InvalidCredentials)
        }
    }
}
