//! Command dispatch for the `ojt-access` binary
//!
//! Reads session users and record exports as JSON files and renders the
//! result of each subcommand as text. Kept in the library so the commands
//! can be driven from tests without spawning the binary.

use crate::access_control::{
    ProjectCatalog, ProjectEnumerator, User, filter_by_project_access, resolve,
};
use crate::config::AppConfig;
use crate::dashboard::DashboardSummary;
use crate::error::{AppError, InputError, Result};
use crate::records::PortalData;
use clap::Subcommand;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the effective permissions of a user
    Permissions {
        /// Session user JSON file
        #[arg(short, long)]
        user: String,
    },
    /// List the projects a user can view and create records in
    Projects {
        #[arg(short, long)]
        user: String,
    },
    /// Print the records visible to a user
    Filter {
        #[arg(short, long)]
        user: String,
        /// JSON array of records with an optional "project" field
        #[arg(short, long)]
        records: String,
    },
    /// Print the dashboard summary for a user
    Summary {
        #[arg(short, long)]
        user: String,
        /// JSON object with jobs, applications, interns and attendance arrays
        #[arg(short, long)]
        data: String,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectListing {
    available: Vec<String>,
    for_creation: Vec<String>,
}

/// Read and parse a JSON input file
pub fn read_json<T: DeserializeOwned>(path: &str) -> std::result::Result<T, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Json {
        path: path.to_string(),
        source,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Render(e.to_string()))
}

/// Run a subcommand and return what it prints
pub fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    let enumerator = ProjectEnumerator::new(ProjectCatalog::from_config(&config.projects)?);
    debug!(?command, "Executing command");

    match command {
        Command::Permissions { user } => {
            let user: User = read_json(user)?;
            to_json(&resolve(&user))
        }
        Command::Projects { user } => {
            let user: User = read_json(user)?;
            to_json(&ProjectListing {
                available: enumerator.available_projects(&user),
                for_creation: enumerator.projects_for_creation(&user),
            })
        }
        Command::Filter { user, records } => {
            let user: User = read_json(user)?;
            let records: Vec<serde_json::Value> = read_json(records)?;
            to_json(&filter_by_project_access(&user, &records))
        }
        Command::Summary { user, data } => {
            let user: User = read_json(user)?;
            let data: PortalData = read_json(data)?;
            to_json(&DashboardSummary::build(&user, &data))
        }
        Command::ShowConfig => {
            toml::to_string_pretty(config).map_err(|e| AppError::Render(e.to_string()))
        }
    }
}
