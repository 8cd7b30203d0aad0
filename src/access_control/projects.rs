//! Project enumerator
//!
//! Answers which projects a user can act within, against the configured
//! project catalog.

use crate::access_control::types::{User, UserAccess};
use crate::config::ProjectsConfig;
use crate::error::ConfigError;
use std::collections::HashSet;

/// Closed set of project names for a deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    names: Vec<String>,
}

impl ProjectCatalog {
    /// Build a catalog
    ///
    /// A deployment needs at least one project, and names must be non-blank
    /// and unique.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::Missing {
                field: "projects.available".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(names.len());

        for name in &names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    message: "projects.available must not contain empty names".to_string(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Invalid {
                    message: format!("projects.available contains '{}' twice", name),
                });
            }
        }

        Ok(Self { names })
    }

    pub fn from_config(config: &ProjectsConfig) -> Result<Self, ConfigError> {
        Self::new(config.available.iter().cloned())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            names: ProjectsConfig::default().available,
        }
    }
}

/// Lists the projects a user may view or create records in
#[derive(Debug, Clone, Default)]
pub struct ProjectEnumerator {
    catalog: ProjectCatalog,
}

impl ProjectEnumerator {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self { catalog }
    }

    /// Projects the user can act within
    ///
    /// Superadmins get the whole catalog and project admins their
    /// `projectAccess`. A student's only project is the one they are assigned
    /// to, so an unassigned student gets nothing.
    pub fn available_projects(&self, user: &User) -> Vec<String> {
        match &user.access {
            UserAccess::Superadmin => self.catalog.names.clone(),
            UserAccess::ProjectAdmin { project_access } => project_access.clone(),
            UserAccess::Student { project } => project.iter().cloned().collect(),
        }
    }

    /// Projects the user can originate records in
    pub fn projects_for_creation(&self, user: &User) -> Vec<String> {
        match &user.access {
            UserAccess::Student { .. } => Vec::new(),
            _ => self.available_projects(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.names(), ["TRIOE", "MR. MED", "HAPTICS"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_blanks() {
        assert!(matches!(
            ProjectCatalog::new(["A", "A"]),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(ProjectCatalog::new(["A", "  "]).is_err());
    }

    #[test]
    fn test_catalog_rejects_empty_list() {
        assert!(matches!(
            ProjectCatalog::new(Vec::<String>::new()),
            Err(ConfigError::Missing { .. })
        ));
        let config = ProjectsConfig { available: vec![] };
        assert!(ProjectCatalog::from_config(&config).is_err());
    }

    #[test]
    fn test_superadmin_gets_catalog() {
        let enumerator = ProjectEnumerator::new(ProjectCatalog::new(["X", "Y"]).unwrap());
        let root = User::superadmin("r");
        assert_eq!(enumerator.available_projects(&root), ["X", "Y"]);
        assert_eq!(enumerator.projects_for_creation(&root), ["X", "Y"]);
    }

    #[test]
    fn test_student_projects() {
        let enumerator = ProjectEnumerator::default();
        let student = User::student("s", Some("HAPTICS"));
        assert_eq!(enumerator.available_projects(&student), ["HAPTICS"]);
        assert!(enumerator.projects_for_creation(&student).is_empty());
        assert!(
            enumerator
                .available_projects(&User::student("s", None))
                .is_empty()
        );
    }
}
