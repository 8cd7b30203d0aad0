//! Access control types
//!
//! Core types used by the access control system.

use crate::error::RoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's fixed access tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    ProjectAdmin,
    Student,
}

impl Role {
    /// Get the role name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::ProjectAdmin => "project_admin",
            Role::Student => "student",
        }
    }

    /// Check if this role may enter the admin area
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Superadmin | Role::ProjectAdmin)
    }

    /// Get all roles
    pub fn all() -> &'static [Role] {
        &[Role::Superadmin, Role::ProjectAdmin, Role::Student]
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::Superadmin),
            "project_admin" => Ok(Role::ProjectAdmin),
            "student" => Ok(Role::Student),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named boolean permission attached to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CanManageJobs,
    CanManageApplications,
    CanManageInterns,
    CanManageAttendance,
    CanViewReports,
    CanManageUsers,
    CanManageProjects,
    CanManageAllProjects,
}

impl Capability {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Capability::CanManageJobs => "canManageJobs",
            Capability::CanManageApplications => "canManageApplications",
            Capability::CanManageInterns => "canManageInterns",
            Capability::CanManageAttendance => "canManageAttendance",
            Capability::CanViewReports => "canViewReports",
            Capability::CanManageUsers => "canManageUsers",
            Capability::CanManageProjects => "canManageProjects",
            Capability::CanManageAllProjects => "canManageAllProjects",
        }
    }

    /// Get all capabilities, in declaration order
    pub fn all() -> &'static [Capability] {
        &[
            Capability::CanManageJobs,
            Capability::CanManageApplications,
            Capability::CanManageInterns,
            Capability::CanManageAttendance,
            Capability::CanViewReports,
            Capability::CanManageUsers,
            Capability::CanManageProjects,
            Capability::CanManageAllProjects,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete capability record for a role
///
/// One field per [`Capability`]; there is no way to build a partial set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub can_manage_jobs: bool,
    pub can_manage_applications: bool,
    pub can_manage_interns: bool,
    pub can_manage_attendance: bool,
    pub can_view_reports: bool,
    pub can_manage_users: bool,
    pub can_manage_projects: bool,
    pub can_manage_all_projects: bool,
}

impl CapabilitySet {
    /// Check a single capability
    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::CanManageJobs => self.can_manage_jobs,
            Capability::CanManageApplications => self.can_manage_applications,
            Capability::CanManageInterns => self.can_manage_interns,
            Capability::CanManageAttendance => self.can_manage_attendance,
            Capability::CanViewReports => self.can_view_reports,
            Capability::CanManageUsers => self.can_manage_users,
            Capability::CanManageProjects => self.can_manage_projects,
            Capability::CanManageAllProjects => self.can_manage_all_projects,
        }
    }

    /// Capabilities that are granted, in declaration order
    pub fn granted(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|c| self.allows(*c))
            .collect()
    }
}

/// Role plus the project scope that goes with it
///
/// Scope only exists where the role uses it, so a student can never carry an
/// admin scope and a superadmin never needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAccess {
    Superadmin,
    ProjectAdmin { project_access: Vec<String> },
    Student { project: Option<String> },
}

/// Authenticated portal user
///
/// Deserializes from the session provider's shape
/// (`uid`, `role`, optional `projectAccess`, optional `project`) and rejects
/// unknown roles there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SessionUser")]
pub struct User {
    pub id: String,
    pub access: UserAccess,
}

impl User {
    pub fn superadmin(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            access: UserAccess::Superadmin,
        }
    }

    pub fn project_admin<I, S>(id: impl Into<String>, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            access: UserAccess::ProjectAdmin {
                project_access: projects.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn student(id: impl Into<String>, project: Option<&str>) -> Self {
        Self {
            id: id.into(),
            access: UserAccess::Student {
                project: project.map(str::to_string),
            },
        }
    }

    pub const fn role(&self) -> Role {
        match self.access {
            UserAccess::Superadmin => Role::Superadmin,
            UserAccess::ProjectAdmin { .. } => Role::ProjectAdmin,
            UserAccess::Student { .. } => Role::Student,
        }
    }

    /// Stored admin scope; empty for anyone who is not a project admin
    pub fn project_access(&self) -> &[String] {
        match &self.access {
            UserAccess::ProjectAdmin { project_access } => project_access,
            _ => &[],
        }
    }

    /// Assigned project; only students have one
    pub fn project(&self) -> Option<&str> {
        match &self.access {
            UserAccess::Student { project } => project.as_deref(),
            _ => None,
        }
    }
}

/// Raw user record as handed over by the session provider
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionUser {
    uid: String,
    role: String,
    #[serde(default)]
    project_access: Option<Vec<String>>,
    #[serde(default)]
    project: Option<String>,
}

impl TryFrom<SessionUser> for User {
    type Error = RoleError;

    fn try_from(raw: SessionUser) -> Result<Self, Self::Error> {
        let access = match raw.role.parse::<Role>()? {
            Role::Superadmin => UserAccess::Superadmin,
            Role::ProjectAdmin => UserAccess::ProjectAdmin {
                project_access: raw.project_access.unwrap_or_default(),
            },
            Role::Student => UserAccess::Student {
                project: raw.project.filter(|p| !p.is_empty()),
            },
        };
        Ok(User { id: raw.uid, access })
    }
}

/// Trait for records tagged with a project
pub trait ProjectScoped {
    /// Project this record belongs to, if any
    fn project(&self) -> Option<&str>;
}

impl<T: ProjectScoped + ?Sized> ProjectScoped for &T {
    fn project(&self) -> Option<&str> {
        (**self).project()
    }
}

/// Loosely typed records straight from the document store
impl ProjectScoped for serde_json::Value {
    fn project(&self) -> Option<&str> {
        self.get("project").and_then(serde_json::Value::as_str)
    }
}
