//! OJT Access
//!
//! Role and project based access control for an On-the-Job-Training portal.
//!
//! ## Features
//!
//! - **Role catalog** mapping superadmin, project_admin and student to fixed capability sets
//! - **Permission resolver** combining capabilities with a user's project scope
//! - **Access filter** narrowing job postings, applications, interns and attendance to what a user may see
//! - **Project enumerator** listing the projects a user can view or create records in
//! - **Dashboard summaries** computed over filtered records only
//!
//! ## Access Model
//!
//! ```text
//! superadmin     → every capability, every project
//! project_admin  → management capabilities, projects in `projectAccess`
//! student        → no capabilities, read access to their own `project`
//! ```
//!
//! All checks take the user explicitly and recompute from it. Nothing is
//! cached, so callers re-run filters whenever the user or the records change.
//!
//! ## Example Configuration
//!
//! ```toml
//! [projects]
//! available = ["TRIOE", "MR. MED", "HAPTICS"]
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

pub mod access_control;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod records;

// Re-export main types
pub use access_control::{EffectivePermissions, ProjectEnumerator, Role, User};
pub use config::{AppConfig, load_config};
pub use dashboard::DashboardSummary;
pub use error::{AppError, Result};
