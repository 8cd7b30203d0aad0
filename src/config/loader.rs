//! Configuration loader
//!
//! Later sources win: serde defaults, then one TOML file, then
//! `OJT_ACCESS_*` environment variables (`__` separates nested keys).

use crate::access_control::ProjectCatalog;
use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Searched in order when no path is given; `~` is expanded
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "ojt-access.toml",
    ".ojt-access.toml",
    "~/.config/ojt-access/config.toml",
    "/etc/ojt-access/config.toml",
];

const ENV_PREFIX: &str = "OJT_ACCESS";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Parse and validate a TOML document, without files or environment
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    finish(Config::builder().add_source(File::from_str(toml_str, FileFormat::Toml)))
}

/// Load configuration from a TOML file and `OJT_ACCESS_*` variables
///
/// An explicit `config_path` must exist. Without one, the first default
/// path that exists is used, and running with no file at all is allowed.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(file) = resolve_config_file(config_path)? {
        builder = builder.add_source(File::from(file).format(FileFormat::Toml));
    }

    // OJT_ACCESS_LOGGING__LEVEL=debug, OJT_ACCESS_PROJECTS__AVAILABLE="TRIOE,HAPTICS"
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("projects.available")
            .try_parsing(true),
    );

    finish(builder)
}

fn resolve_config_file(config_path: Option<&str>) -> Result<Option<PathBuf>, ConfigError> {
    match config_path {
        Some(path) if Path::new(path).exists() => Ok(Some(PathBuf::from(path))),
        Some(path) => Err(ConfigError::Load(format!(
            "Configuration file not found: {}",
            path
        ))),
        None => Ok(DEFAULT_CONFIG_PATHS
            .iter()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
            .find(|p| p.exists())),
    }
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let app_config: AppConfig = builder
        .build()
        .and_then(Config::try_deserialize)
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;
    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    ProjectCatalog::from_config(&config.projects)?;

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::Invalid {
            message: format!(
                "logging.level must be one of {}, got: {}",
                LOG_LEVELS.join(", "),
                config.logging.level
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[projects]
available = ["ALPHA", "BETA"]

[logging]
level = "debug"
format = "json"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.projects.available, vec!["ALPHA", "BETA"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.projects.available, vec!["TRIOE", "MR. MED", "HAPTICS"]);
    }

    #[test]
    fn test_duplicate_project_error() {
        let toml = r#"
[projects]
available = ["TRIOE", "TRIOE"]
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_empty_catalog_error() {
        let toml = r#"
[projects]
available = []
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            logging: crate::config::LoggingConfig {
                level: "verbose".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = validate_config(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_config(Some("/nonexistent/ojt-access.toml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_resolve_config_file_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ojt-access.toml");
        std::fs::write(&path, "").unwrap();

        let found = resolve_config_file(path.to_str()).unwrap();
        assert_eq!(found, Some(path));
    }
}
