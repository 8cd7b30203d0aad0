//! OJT Access CLI
//!
//! Evaluates portal access rules against JSON exports of users and records.

use anyhow::Context;
use clap::Parser;
use ojt_access::{
    cli::{Command, execute},
    config::{AppConfig, LogFormat, load_config},
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// OJT Access - role and project based access control for the OJT portal
#[derive(Parser, Debug)]
#[command(name = "ojt-access")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "OJT_ACCESS_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "OJT_ACCESS_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn init_logging(config: &AppConfig, override_level: Option<&str>) {
    let level = override_level.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    init_logging(&config, args.log_level.as_deref());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        projects = config.projects.available.len(),
        "Starting ojt-access"
    );

    let output = execute(&args.command, &config)
        .inspect_err(|e| error!(error = %e, "Command failed"))?;
    println!("{}", output.trim_end());
    Ok(())
}
