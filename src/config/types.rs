//! Configuration types for ojt-access
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project catalog for this deployment
    pub projects: ProjectsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Project catalog configuration
///
/// The project names are deployment data. Records and user scopes must use
/// the same strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// All project names, in display order
    pub available: Vec<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            available: vec![
                "TRIOE".to_string(),
                "MR. MED".to_string(),
                "HAPTICS".to_string(),
            ],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
