//! Error types for the SkillBridge application.

use thiserror::Error;

/// A shared error type for the entire SkillBridge application.
///
/// Store-level failures (`InvalidCredentials`, `NoActiveSession`, ...) are
/// recoverable and meant to reach the caller; storage variants are produced by
/// the infrastructure layer and converted via the `From` impls below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillBridgeError {
    /// The supplied identifier/secret pair did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A user-scoped mutation was attempted while nobody is logged in.
    #[error("No active session: log in first")]
    NoActiveSession,

    /// A pending login was overtaken by logout, cancellation or a newer login.
    #[error("Login superseded before verification completed")]
    LoginSuperseded,

    /// The assessment flow was asked to continue without any selected skill.
    #[error("No skills selected")]
    EmptySelection,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stored document has no migration path to the current model
    #[error("Migration error: {0}")]
    Migration(String),
}

impl SkillBridgeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Serialization error for the given format
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    pub fn is_no_active_session(&self) -> bool {
        matches!(self, Self::NoActiveSession)
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns true for errors the UI should answer by sending the visitor to
    /// the login form.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::NoActiveSession | Self::LoginSuperseded
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SkillBridgeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SkillBridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for SkillBridgeError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<toml::ser::Error> for SkillBridgeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<version_migrate::MigrationError> for SkillBridgeError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::IoError { .. } => Self::Io {
                message: err.to_string(),
            },
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, SkillBridgeError>`.
pub type Result<T> = std::result::Result<T, SkillBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: SkillBridgeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            SkillBridgeError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SkillBridgeError = parse_err.into();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_requires_login() {
        assert!(SkillBridgeError::InvalidCredentials.requires_login());
        assert!(SkillBridgeError::NoActiveSession.requires_login());
        assert!(!SkillBridgeError::EmptySelection.requires_login());
        assert!(!SkillBridgeError::config("bad level").requires_login());
    }
}
