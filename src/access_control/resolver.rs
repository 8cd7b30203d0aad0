//! Permission resolver
//!
//! Combines a user's role capabilities with their project scope. Every check
//! recomputes from the user value it is given; nothing is cached, so a role
//! or scope change takes effect on the next call.
//!
//! Superadmin bypass lives here and only here. Callers never compare roles
//! themselves.

use crate::access_control::catalog::capabilities;
use crate::access_control::types::{Capability, CapabilitySet, Role, User, UserAccess};
use crate::error::AccessDeniedError;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Resolved role capabilities plus project scope for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePermissions {
    pub role: Role,
    #[serde(flatten)]
    pub capabilities: CapabilitySet,
    pub project_access: Vec<String>,
}

impl EffectivePermissions {
    pub const fn allows(&self, capability: Capability) -> bool {
        self.capabilities.allows(capability)
    }
}

/// What the caller wants to do within a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectAction {
    /// Read project data
    View,
    /// Create or change project data
    Manage,
}

impl ProjectAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProjectAction::View => "view",
            ProjectAction::Manage => "manage",
        }
    }
}

impl fmt::Display for ProjectAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access is allowed
    Allowed,
    /// Access is denied with a reason
    Denied(String),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Denied(_))
    }

    fn from_bool(allowed: bool, reason: impl FnOnce() -> String) -> Self {
        if allowed {
            AccessDecision::Allowed
        } else {
            AccessDecision::Denied(reason())
        }
    }
}

/// Compute the effective permissions for a user
pub fn resolve(user: &User) -> EffectivePermissions {
    EffectivePermissions {
        role: user.role(),
        capabilities: capabilities(user.role()),
        project_access: user.project_access().to_vec(),
    }
}

/// Check a role capability for a user
pub fn has_capability(user: &User, capability: Capability) -> bool {
    capabilities(user.role()).allows(capability)
}

/// Whether the user may create or change data in a project
///
/// Students manage nothing, whatever their assignment.
pub fn can_manage_project(user: &User, project: &str) -> bool {
    match &user.access {
        UserAccess::Superadmin => true,
        UserAccess::ProjectAdmin { project_access } => project_access.iter().any(|p| p == project),
        UserAccess::Student { .. } => false,
    }
}

/// Whether the user may read data belonging to a project
pub fn can_access_project_data(user: &User, project: &str) -> bool {
    match &user.access {
        UserAccess::Superadmin => true,
        UserAccess::ProjectAdmin { project_access } => project_access.iter().any(|p| p == project),
        UserAccess::Student { project: assigned } => assigned.as_deref() == Some(project),
    }
}

/// Whether the user may enter the admin area at all
pub fn can_access_admin(user: &User) -> bool {
    user.role().is_admin()
}

/// Check a project action, with a reason on denial
pub fn check(user: &User, action: ProjectAction, project: &str) -> AccessDecision {
    debug!(
        user = %user.id,
        role = %user.role(),
        action = %action,
        project,
        "Checking project access"
    );

    let decision = match action {
        ProjectAction::View => AccessDecision::from_bool(
            can_access_project_data(user, project),
            || format!("project '{}' is outside the user's scope", project),
        ),
        ProjectAction::Manage => match user.role() {
            Role::Student => {
                AccessDecision::Denied("students cannot manage project data".to_string())
            }
            _ => AccessDecision::from_bool(can_manage_project(user, project), || {
                format!("project '{}' is outside the user's scope", project)
            }),
        },
    };

    trace!(?decision, "Project access resolved");
    decision
}

/// Check a project action, returning an error if denied
pub fn require(user: &User, action: ProjectAction, project: &str) -> Result<(), AccessDeniedError> {
    match (check(user, action, project), user.role()) {
        (AccessDecision::Allowed, _) => Ok(()),
        (AccessDecision::Denied(_), Role::Student) if action == ProjectAction::Manage => {
            Err(AccessDeniedError::read_only_role(&user.id))
        }
        (AccessDecision::Denied(_), _) => {
            Err(AccessDeniedError::project_out_of_scope(&user.id, project))
        }
    }
}

/// Require a role capability
pub fn require_capability(user: &User, capability: Capability) -> Result<(), AccessDeniedError> {
    if has_capability(user, capability) {
        Ok(())
    } else {
        debug!(user = %user.id, capability = %capability, "Capability missing");
        Err(AccessDeniedError::missing_capability(
            &user.id,
            capability.as_str(),
        ))
    }
}

/// Require admin area access
pub fn require_admin(user: &User) -> Result<(), AccessDeniedError> {
    if can_access_admin(user) {
        Ok(())
    } else {
        Err(AccessDeniedError::admin_only(&user.id))
    }
}
