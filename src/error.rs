//! Error types for ojt-access
//!
//! This module defines the error hierarchy used throughout the crate.
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//!
//! Missing optional data (no project scope, no `project` on a record) is
//! never an error. It resolves to an empty scope and a deny decision.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Access denied: {0}")]
    AccessDenied(#[from] AccessDeniedError),

    #[error("Role error: {0}")]
    Role(#[from] RoleError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Failed to render output: {0}")]
    Render(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Role parsing errors
///
/// Roles form a closed set. A string outside that set coming from the
/// session provider is a contract violation and is rejected outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role '{0}' (expected superadmin, project_admin or student)")]
    Unknown(String),
}

/// Errors reading user or record input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Access control errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Access denied for '{subject}': {reason}")]
pub struct AccessDeniedError {
    pub subject: String,
    pub reason: String,
}

impl AccessDeniedError {
    pub fn missing_capability(subject: impl Into<String>, capability: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: format!("role lacks capability '{}'", capability.into()),
        }
    }

    pub fn project_out_of_scope(subject: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: format!("project '{}' is outside the user's scope", project.into()),
        }
    }

    pub fn admin_only(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: "admin area requires superadmin or project_admin".into(),
        }
    }

    /// Students may view their own project but never manage one
    pub fn read_only_role(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: "students cannot manage project data".into(),
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_constructors() {
        let err = AccessDeniedError::missing_capability("u1", "canManageUsers");
        assert!(err.reason.contains("canManageUsers"));

        let err = AccessDeniedError::project_out_of_scope("u1", "HAPTICS");
        assert!(err.reason.contains("HAPTICS"));

        let err = AccessDeniedError::admin_only("u1");
        assert!(err.reason.contains("superadmin"));

        let err = AccessDeniedError::read_only_role("u1");
        assert!(err.to_string().contains("u1"));
    }

    #[test]
    fn test_role_error_display() {
        let err = RoleError::Unknown("owner".into());
        assert!(err.to_string().contains("'owner'"));
    }

    #[test]
    fn test_app_error_from_role_error() {
        let err: AppError = RoleError::Unknown("x".into()).into();
        assert!(matches!(err, AppError::Role(_)));
    }
}
