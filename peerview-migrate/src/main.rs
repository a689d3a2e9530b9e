//! peerview-migrate - legacy PeerView export migration
//!
//! Reads one JSON snapshot per legacy table and writes one CSV artifact per
//! target entity. Exit status: 0 when every entity succeeded, 1 when any
//! entity failed, 2 when the run could not start.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use peerview_common::config::{load_toml_config, resolve_config_source, ConfigSource, LoggingConfig};
use peerview_migrate::config::CONFIG_FILE_NAME;
use peerview_migrate::{run_migration, write_report, EntityOutcome, MigrationConfig, TargetEntity};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for peerview-migrate
#[derive(Parser, Debug)]
#[command(name = "peerview-migrate")]
#[command(about = "Migrate the legacy PeerView export into the normalized schema")]
#[command(version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "PEERVIEW_MIGRATE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the legacy JSON snapshots
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving the CSV artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Migrate only this entity (repeatable)
    #[arg(long = "only", value_enum)]
    only: Vec<TargetEntity>,

    /// Do not write migration_report.json
    #[arg(long)]
    no_report: bool,
}

const EXIT_ENTITY_FAILED: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn load_config(args: &Args, source: &ConfigSource) -> Result<MigrationConfig> {
    let mut config: MigrationConfig = load_toml_config(source)
        .with_context(|| format!("Failed to load configuration from {}", source))?;

    if let Some(dir) = &args.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if !args.only.is_empty() {
        config.entities = args.only.clone();
    }
    if args.no_report {
        config.write_report = false;
    }
    Ok(config)
}

fn init_tracing(level: &str) {
    let fallback = format!("peerview_migrate={level},peerview_common={level}");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Tracing needs the configured level, so the config is loaded first and
    // its source is logged once the subscriber exists
    let source = resolve_config_source(args.config.as_deref(), CONFIG_FILE_NAME);
    let config = load_config(&args, &source);
    let level = match &config {
        Ok(config) => config.logging.level.clone(),
        Err(_) => LoggingConfig::default().level,
    };
    init_tracing(&level);

    info!("Configuration: {}", source);
    let config = match config {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    info!(
        "Starting peerview-migrate {} ({}, {} build)",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_PROFILE")
    );
    info!(zone = %config.timezone.name, "Timestamps rendered in configured zone");

    let report = match run_migration(Arc::clone(&config))
        .await
        .context("Migration could not start")
    {
        Ok(report) => report,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let mut report_failed = false;
    if config.write_report {
        match write_report(&config, &report).await {
            Ok(path) => info!("Report written to {}", path.display()),
            Err(e) => {
                error!("Failed to write report: {}", e);
                report_failed = true;
            }
        }
    }

    for failure in report.failures() {
        if let EntityOutcome::Failed { reason } = &failure.outcome {
            warn!(entity = failure.entity.name(), "Failed: {}", reason);
        }
    }

    if report.is_success() && !report_failed {
        info!("Migration complete: {} entities succeeded", report.entities.len());
        ExitCode::SUCCESS
    } else {
        error!(
            failed = report.failures().count(),
            total = report.entities.len(),
            "Migration incomplete"
        );
        ExitCode::from(EXIT_ENTITY_FAILED)
    }
}
