//! Role catalog
//!
//! Static mapping from role to its capability set.

use crate::access_control::types::{CapabilitySet, Role};

const SUPERADMIN: CapabilitySet = CapabilitySet {
    can_manage_jobs: true,
    can_manage_applications: true,
    can_manage_interns: true,
    can_manage_attendance: true,
    can_view_reports: true,
    can_manage_users: true,
    can_manage_projects: true,
    can_manage_all_projects: true,
};

const PROJECT_ADMIN: CapabilitySet = CapabilitySet {
    can_manage_jobs: true,
    can_manage_applications: true,
    can_manage_interns: true,
    can_manage_attendance: true,
    can_view_reports: true,
    can_manage_users: false,
    can_manage_projects: false,
    can_manage_all_projects: false,
};

const STUDENT: CapabilitySet = CapabilitySet {
    can_manage_jobs: false,
    can_manage_applications: false,
    can_manage_interns: false,
    can_manage_attendance: false,
    can_view_reports: false,
    can_manage_users: false,
    can_manage_projects: false,
    can_manage_all_projects: false,
};

/// Get the fixed capability set for a role
pub const fn capabilities(role: Role) -> CapabilitySet {
    match role {
        Role::Superadmin => SUPERADMIN,
        Role::ProjectAdmin => PROJECT_ADMIN,
        Role::Student => STUDENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access_control::types::Capability;

    #[test]
    fn test_every_role_covers_every_capability() {
        for role in Role::all() {
            let json = serde_json::to_value(capabilities(*role)).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), Capability::all().len());
            for cap in Capability::all() {
                assert!(obj[cap.as_str()].is_boolean(), "{role} missing {cap}");
            }
        }
    }

    #[test]
    fn test_superadmin_has_everything() {
        assert_eq!(
            capabilities(Role::Superadmin).granted(),
            Capability::all().to_vec()
        );
    }

    #[test]
    fn test_project_admin_cannot_manage_users_or_projects() {
        let caps = capabilities(Role::ProjectAdmin);
        assert!(caps.allows(Capability::CanManageJobs));
        assert!(caps.allows(Capability::CanViewReports));
        assert!(!caps.allows(Capability::CanManageUsers));
        assert!(!caps.allows(Capability::CanManageProjects));
        assert!(!caps.allows(Capability::CanManageAllProjects));
    }

    #[test]
    fn test_student_has_nothing() {
        assert!(capabilities(Role::Student).granted().is_empty());
    }
}
