//! Access control module
//!
//! Role and project based access control for the OJT portal.
//!
//! ## Access Control Model
//!
//! ```text
//! role → capability set
//!      + project scope  → effective permissions → record filter
//! ```
//!
//! - **superadmin**: every capability, every project, every record
//! - **project_admin**: management capabilities within `projectAccess`
//! - **student**: no capabilities, read access to their own `project`
//!
//! Records without a `project` are visible to superadmins only.
//!
//! ## Example
//!
//! ```
//! use ojt_access::access_control::{User, can_manage_project, filter_by_project_access};
//!
//! let admin = User::project_admin("a1", ["TRIOE"]);
//! assert!(can_manage_project(&admin, "TRIOE"));
//! assert!(!can_manage_project(&admin, "HAPTICS"));
//!
//! let records = vec![
//!     serde_json::json!({"id": 1, "project": "TRIOE"}),
//!     serde_json::json!({"id": 2, "project": "HAPTICS"}),
//! ];
//! assert_eq!(filter_by_project_access(&admin, &records).len(), 1);
//! ```

pub mod catalog;
pub mod filter;
pub mod projects;
pub mod resolver;
pub mod types;

pub use catalog::capabilities;
pub use filter::{filter_by_project_access, filter_owned, is_visible};
pub use projects::{ProjectCatalog, ProjectEnumerator};
pub use resolver::{
    AccessDecision, EffectivePermissions, ProjectAction, can_access_admin,
    can_access_project_data, can_manage_project, check, has_capability, require,
    require_admin, require_capability, resolve,
};
pub use types::{Capability, CapabilitySet, ProjectScoped, Role, User, UserAccess};
