//! Project access filter
//!
//! Narrows a collection of project-scoped records to what a user may see.
//! Filtering is stable and never touches the input.

use crate::access_control::types::{ProjectScoped, User, UserAccess};
use tracing::debug;

/// Whether a single record is visible to the user
///
/// Records without a project are visible to superadmins only.
pub fn is_visible<T: ProjectScoped + ?Sized>(user: &User, item: &T) -> bool {
    match &user.access {
        UserAccess::Superadmin => true,
        UserAccess::ProjectAdmin { project_access } => item
            .project()
            .is_some_and(|p| project_access.iter().any(|a| a == p)),
        UserAccess::Student { project } => match (project.as_deref(), item.project()) {
            (Some(assigned), Some(p)) => assigned == p,
            _ => false,
        },
    }
}

/// Borrowing filter, order preserving
pub fn filter_by_project_access<'a, T: ProjectScoped>(user: &User, items: &'a [T]) -> Vec<&'a T> {
    let visible: Vec<&T> = items.iter().filter(|item| is_visible(user, *item)).collect();
    debug!(
        user = %user.id,
        role = %user.role(),
        total = items.len(),
        visible = visible.len(),
        "Filtered records by project access"
    );
    visible
}

/// Owning filter with the same policy as [`filter_by_project_access`]
pub fn filter_owned<T: ProjectScoped>(user: &User, items: Vec<T>) -> Vec<T> {
    items.into_iter().filter(|item| is_visible(user, item)).collect()
}
