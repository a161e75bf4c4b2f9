use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use spm_pin_sync::config::{Comparison, SyncConfig, TagOrder};
use spm_pin_sync::logging::{LogOptions, init_logging};
use spm_pin_sync::sync::{SyncOptions, SyncOutcome, run_sync};
use spm_pin_sync::version::registries::GitHubRegistry;

#[derive(Parser, Debug)]
#[command(name = "spm-pin-sync")]
#[command(
    version,
    about = "Bump Package.resolved and project.pbxproj to the newest upstream tag"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Upstream repository (owner/name)
    #[arg(long)]
    repository: Option<String>,

    /// Package identity in Package.resolved
    #[arg(long)]
    package_identity: Option<String>,

    /// Path to Package.resolved
    #[arg(long, value_name = "FILE")]
    lock_file: Option<PathBuf>,

    /// Path to project.pbxproj
    #[arg(long, value_name = "FILE")]
    project_file: Option<PathBuf>,

    /// Object id of the XCRemoteSwiftPackageReference in project.pbxproj
    #[arg(long)]
    package_reference_id: Option<String>,

    /// File receiving the applied tag
    #[arg(long, value_name = "FILE")]
    marker_file: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    #[arg(long, value_enum)]
    tag_order: Option<TagOrder>,

    #[arg(long, value_enum)]
    comparison: Option<Comparison>,

    /// Compare only, do not modify any file
    #[arg(long)]
    dry_run: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// Resolve defaults, then the config file, then command line flags
    fn sync_config(&self) -> anyhow::Result<SyncConfig> {
        let mut config = match &self.config {
            Some(path) => SyncConfig::from_file(path)?,
            None => SyncConfig::default(),
        };

        if let Some(repository) = &self.repository {
            config.repository = repository.clone();
        }
        if let Some(identity) = &self.package_identity {
            config.package_identity = identity.clone();
        }
        if let Some(path) = &self.lock_file {
            config.lock_file = path.clone();
        }
        if let Some(path) = &self.project_file {
            config.project_file = path.clone();
        }
        if let Some(id) = &self.package_reference_id {
            config.package_reference_id = id.clone();
        }
        if let Some(path) = &self.marker_file {
            config.marker_file = path.clone();
        }
        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        if let Some(order) = self.tag_order {
            config.tag_order = order;
        }
        if let Some(comparison) = self.comparison {
            config.comparison = comparison;
        }

        Ok(config)
    }
}

async fn run(config: SyncConfig, options: SyncOptions) -> anyhow::Result<()> {
    let registry = GitHubRegistry::new(&config.api_base_url, config.request_timeout())
        .context("Failed to create HTTP client")?
        .with_per_page(config.tags_per_page)
        .with_token(std::env::var("GITHUB_TOKEN").ok());

    match run_sync(&registry, &config, options).await? {
        SyncOutcome::Updated { from, to } => info!("Applied {} (was {})", to.name, from),
        SyncOutcome::WouldUpdate { from, to } => info!("Would apply {} (is {})", to.name, from),
        SyncOutcome::UpToDate { current, .. } => info!("No update needed, pinned at {}", current),
        SyncOutcome::Skipped(reason) => info!("No update attempted: {}", reason),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_logging(&LogOptions {
        file: cli.log_file.clone(),
        json: cli.log_json,
    })?;

    let config = cli.sync_config()?;
    let options = SyncOptions {
        dry_run: cli.dry_run,
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config, options))
}
