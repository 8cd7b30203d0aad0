//! Configuration loading tests

use ojt_access::access_control::{ProjectCatalog, ProjectEnumerator, User};
use ojt_access::config::{LogFormat, load_config, load_config_from_str};

const FULL_CONFIG: &str = r#"
[projects]
available = ["TRIOE", "MR. MED", "HAPTICS", "ROBOTICS"]

[logging]
level = "warn"
format = "json"
"#;

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.projects.available.len(), 4);
    assert_eq!(config.projects.available[3], "ROBOTICS");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_drives_superadmin_projects() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();
    let enumerator = ProjectEnumerator::new(ProjectCatalog::from_config(&config.projects).unwrap());

    let projects = enumerator.available_projects(&User::superadmin("root"));
    assert_eq!(projects, vec!["TRIOE", "MR. MED", "HAPTICS", "ROBOTICS"]);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = load_config_from_str(
        r#"
[logging]
level = "debug"
"#,
    )
    .unwrap();

    assert_eq!(config.projects.available, vec!["TRIOE", "MR. MED", "HAPTICS"]);
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_invalid_toml() {
    let result = load_config_from_str("[projects\navailable = [");
    assert!(result.is_err());
}

#[test]
fn test_blank_project_name_rejected() {
    let result = load_config_from_str(
        r#"
[projects]
available = ["TRIOE", ""]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_log_format_rejected() {
    let result = load_config_from_str(
        r#"
[logging]
format = "xml"
"#,
    );
    assert!(result.is_err());
}

#[test]
#[serial_test::serial]
fn test_load_config_from_file() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("ojt-access.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.projects.available.len(), 4);
    assert_eq!(config.logging.level, "warn");
}

#[test]
#[serial_test::serial]
fn test_env_var_overrides_file() {
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("ojt-access.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("OJT_ACCESS_LOGGING__LEVEL", "error");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.logging.level, "error");
    // Untouched keys still come from the file
    assert_eq!(config.logging.format, LogFormat::Json);

    unsafe {
        env::remove_var("OJT_ACCESS_LOGGING__LEVEL");
    }
}

#[test]
#[serial_test::serial]
fn test_env_var_project_list() {
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("ojt-access.toml");
    fs::write(&config_path, "").unwrap();

    unsafe {
        env::set_var("OJT_ACCESS_PROJECTS__AVAILABLE", "ALPHA,BETA");
    }

    let config = load_config(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.projects.available, vec!["ALPHA", "BETA"]);

    unsafe {
        env::remove_var("OJT_ACCESS_PROJECTS__AVAILABLE");
    }
}
