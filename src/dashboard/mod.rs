//! Role-aware dashboard summaries
//!
//! Aggregates portal records for the admin and student dashboards. Every
//! count is taken after project access filtering, so a summary never leaks
//! the size of a project the user cannot see.

mod summary;

pub use summary::{ApplicationCounts, DashboardSummary, ProjectTotals};
