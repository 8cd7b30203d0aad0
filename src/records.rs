//! Project-scoped portal records
//!
//! Job postings, applications, interns and attendance entries as they come
//! out of the document store. Every one carries an optional `project` and
//! goes through the access filter before it is shown.

use crate::access_control::ProjectScoped;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
}

/// Application review state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn is_final(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub student_id: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

/// One day of QR-code attendance for an intern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: String,
    pub intern_id: String,
    #[serde(default)]
    pub project: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
}

impl AttendanceEntry {
    /// Hours between scan-in and scan-out
    ///
    /// `None` while the intern is still checked in, or if the scans are out
    /// of order.
    pub fn hours_worked(&self) -> Option<f64> {
        let (time_in, time_out) = (self.time_in?, self.time_out?);
        let elapsed = time_out.signed_duration_since(time_in);
        if elapsed < chrono::Duration::zero() {
            return None;
        }
        Some(elapsed.num_seconds() as f64 / 3600.0)
    }
}

macro_rules! impl_project_scoped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ProjectScoped for $ty {
                fn project(&self) -> Option<&str> {
                    self.project.as_deref()
                }
            }
        )+
    };
}

impl_project_scoped!(JobPosting, Application, Intern, AttendanceEntry);

/// Everything the dashboard needs, as fetched by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalData {
    pub jobs: Vec<JobPosting>,
    pub applications: Vec<Application>,
    pub interns: Vec<Intern>,
    pub attendance: Vec<AttendanceEntry>,
}
