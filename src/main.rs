// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use github_janitor::utils::logging::{format_error, format_success, format_warning, init_logger};
use github_janitor::{Config, Session, prompt};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{error, info};

const ARCHIVE_WARNING: &str =
    "Are you sure you want to archive all empty repositories? This action cannot be undone.";

#[derive(Parser)]
#[command(name = "github-janitor")]
#[command(version)]
#[command(about = "A tool for housekeeping activities on GitHub repositories")]
#[command(
    long_about = "github-janitor is a CLI tool to perform housekeeping tasks on GitHub repositories, such as identifying empty repositories."
)]
struct Cli {
    /// Config file (default is $HOME/.github-janitor.yaml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// GitHub access token
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// GitHub organization name
    #[arg(short, long, global = true)]
    organization: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set, global = true)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scans for empty repositories in the organization
    Scan,

    /// Archive repositories that are considered empty
    ///
    /// Scans all repositories in the organization, identifies the empty ones (containing
    /// only a README.md, LICENSE, or .gitignore file, and not updated in the last month),
    /// and archives them.
    Archive {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    if let Err(e) = run(cli).await {
        error!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        info!("Using config file: {}", path.display());
    }

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.token, cli.organization);

    match cli.command {
        Commands::Scan => cmd_scan(config).await,
        Commands::Archive { yes } => cmd_archive(config, yes).await,
    }
}

async fn cmd_scan(config: Config) -> Result<()> {
    let session = Session::connect(config)
        .await
        .context("Failed to initialize GitHub session")?;

    let summary = session
        .scan(io::stdout())
        .await
        .context("Error processing repositories")?;

    info!(
        "{}",
        format_success(&format!(
            "{} of {} repositories are empty",
            summary.matched, summary.visited
        ))
    );
    Ok(())
}

async fn cmd_archive(config: Config, skip_confirmation: bool) -> Result<()> {
    let session = Session::connect(config)
        .await
        .context("Failed to initialize GitHub session")?;

    if !skip_confirmation {
        let confirmed = tokio::task::spawn_blocking(|| {
            prompt::confirm(ARCHIVE_WARNING, BufReader::new(io::stdin()), io::stdout())
        })
        .await
        .context("Confirmation prompt failed")??;

        if !confirmed {
            info!("{}", format_warning("Aborted, no repositories were archived"));
            return Ok(());
        }
    }

    let summary = session
        .archive(io::stdout())
        .await
        .context("Error processing repositories")?;

    info!(
        "{}",
        format_success(&format!(
            "Processed {} repositories, {} matched",
            summary.visited, summary.matched
        ))
    );
    Ok(())
}
