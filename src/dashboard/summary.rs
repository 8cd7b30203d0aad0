use crate::access_control::{ProjectScoped, User, filter_by_project_access, resolve};
use crate::records::{ApplicationStatus, JobStatus, PortalData};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Application counts by review state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCounts {
    pub total: usize,
    pub pending: usize,
    pub reviewing: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Pending or under review
    pub in_progress: usize,
    /// Accepted or rejected
    pub decided: usize,
}

impl ApplicationCounts {
    fn record(&mut self, status: ApplicationStatus) {
        self.total += 1;
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Reviewing => self.reviewing += 1,
            ApplicationStatus::Accepted => self.accepted += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
        }
        if status.is_final() {
            self.decided += 1;
        } else {
            self.in_progress += 1;
        }
    }
}

/// Per-project record counts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTotals {
    pub jobs: usize,
    pub applications: usize,
    pub interns: usize,
    pub attendance_entries: usize,
    pub hours: f64,
}

/// Dashboard numbers for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user_id: String,
    pub is_admin: bool,
    pub can_view_reports: bool,
    pub jobs: usize,
    pub open_jobs: usize,
    pub applications: ApplicationCounts,
    pub interns: usize,
    pub attendance_entries: usize,
    /// Completed attendance hours; open check-ins are not counted
    pub attendance_hours: f64,
    /// Only records that name a project are bucketed
    pub by_project: BTreeMap<String, ProjectTotals>,
}

fn bucket<'m>(
    by_project: &'m mut BTreeMap<String, ProjectTotals>,
    record: &dyn ProjectScoped,
) -> Option<&'m mut ProjectTotals> {
    record
        .project()
        .map(|p| by_project.entry(p.to_string()).or_default())
}

impl DashboardSummary {
    pub fn build(user: &User, data: &PortalData) -> Self {
        let permissions = resolve(user);

        let jobs = filter_by_project_access(user, &data.jobs);
        let applications = filter_by_project_access(user, &data.applications);
        let interns = filter_by_project_access(user, &data.interns);
        let attendance = filter_by_project_access(user, &data.attendance);

        let mut by_project: BTreeMap<String, ProjectTotals> = BTreeMap::new();
        for job in &jobs {
            if let Some(totals) = bucket(&mut by_project, *job) {
                totals.jobs += 1;
            }
        }

        let mut application_counts = ApplicationCounts::default();
        for application in &applications {
            application_counts.record(application.status);
            if let Some(totals) = bucket(&mut by_project, *application) {
                totals.applications += 1;
            }
        }

        for intern in &interns {
            if let Some(totals) = bucket(&mut by_project, *intern) {
                totals.interns += 1;
            }
        }

        let mut attendance_hours = 0.0;
        for entry in &attendance {
            let hours = entry.hours_worked().unwrap_or(0.0);
            attendance_hours += hours;
            if let Some(totals) = bucket(&mut by_project, *entry) {
                totals.attendance_entries += 1;
                totals.hours += hours;
            }
        }

        debug!(
            user = %user.id,
            jobs = jobs.len(),
            applications = applications.len(),
            interns = interns.len(),
            attendance = attendance.len(),
            "Built dashboard summary"
        );

        Self {
            user_id: user.id.clone(),
            is_admin: permissions.role.is_admin(),
            can_view_reports: permissions.capabilities.can_view_reports,
            jobs: jobs.len(),
            open_jobs: jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
            applications: application_counts,
            interns: interns.len(),
            attendance_entries: attendance.len(),
            attendance_hours,
            by_project,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Application;

    fn application(id: &str, project: Option<&str>, status: ApplicationStatus) -> Application {
        Application {
            id: id.into(),
            job_id: "j1".into(),
            student_id: "s1".into(),
            project: project.map(str::to_string),
            status,
        }
    }

    #[test]
    fn test_application_counts() {
        let data = PortalData {
            applications: vec![
                application("1", Some("TRIOE"), ApplicationStatus::Pending),
                application("2", Some("TRIOE"), ApplicationStatus::Accepted),
                application("3", Some("HAPTICS"), ApplicationStatus::Rejected),
                application("4", None, ApplicationStatus::Reviewing),
            ],
            ..Default::default()
        };

        let summary = DashboardSummary::build(&User::project_admin("a", ["TRIOE"]), &data);
        assert_eq!(summary.applications.total, 2);
        assert_eq!(summary.applications.pending, 1);
        assert_eq!(summary.applications.accepted, 1);
        assert_eq!(summary.applications.rejected, 0);
        assert_eq!(summary.applications.decided, 1);
        assert_eq!(summary.applications.in_progress, 1);
        assert_eq!(summary.by_project.len(), 1);
        assert_eq!(summary.by_project["TRIOE"].applications, 2);

        let summary = DashboardSummary::build(&User::superadmin("r"), &data);
        assert_eq!(summary.applications.total, 4);
        assert_eq!(summary.applications.reviewing, 1);
        // The unscoped application is counted but not bucketed.
        assert_eq!(summary.by_project.len(), 2);
    }

    #[test]
    fn test_empty_data() {
        let student = User::student("s", Some("TRIOE"));
        let summary = DashboardSummary::build(&student, &PortalData::default());
        assert_eq!(summary.jobs, 0);
        assert_eq!(summary.attendance_hours, 0.0);
        assert!(summary.by_project.is_empty());
        assert!(!summary.is_admin);
        assert!(!summary.can_view_reports);
    }
}
