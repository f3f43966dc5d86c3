use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use github_pr_bar::formatter::render_lines;
use github_pr_bar::services::{Settings, default_config_path, report_lines};

#[derive(Parser)]
#[command(name = "github-pr-bar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Status-bar plugin listing the open GitHub pull requests you authored, reviewed or were asked to review"
)]
#[command(
    long_about = "Queries GitHub for open pull requests that request your review, that you opened, and that you already reviewed, and prints them in the xbar/SwiftBar line format. Settings are read from the config file, then environment variables (GITHUB_PR_BAR_ACCESS_TOKEN or GITHUB_TOKEN, GITHUB_PR_BAR_LOGIN, GITHUB_PR_BAR_WIP_LABEL, GITHUB_PR_BAR_FILTERS), then these flags."
)]
struct Cli {
    /// GitHub personal access token used as the bearer token for the GraphQL API
    #[arg(long)]
    github_token: Option<String>,
    /// GitHub login of the viewer
    #[arg(long)]
    github_login: Option<String>,
    /// Pull requests carrying this label are grayed out (e.g. "WIP", "in progress")
    #[arg(long)]
    wip_label: Option<String>,
    /// Extra search qualifiers appended to every query (e.g. "org:YourOrg -label:dropped")
    #[arg(long)]
    filters: Option<String>,
    /// Request timeout in seconds for each GitHub API call (default: 10 seconds)
    #[arg(long)]
    request_timeout: Option<u64>,
    /// GitHub API base URI, for GitHub Enterprise (default: https://api.github.com)
    #[arg(long)]
    api_base_uri: Option<String>,
    /// Path to the TOML config file (default: <config dir>/github-pr-bar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            access_token: self.github_token.clone(),
            github_login: self.github_login.clone(),
            wip_label: self.wip_label.clone(),
            filters: self.filters.clone(),
            request_timeout_secs: self.request_timeout,
            api_base_uri: self.api_base_uri.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider early to prevent "no process-level CryptoProvider available" panics
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the status-bar host
    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("github_pr_bar={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => default_config_path()
            .map_err(|e| tracing::warn!("{}", e))
            .ok(),
    };

    let file_settings = match &config_path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let settings = file_settings
        .merge(Settings::from_env())
        .merge(cli.settings());

    let lines = report_lines(settings, config_path.as_deref()).await?;
    write_stdout(&render_lines(&lines))
}

/// Writes the whole report in one go so the host never sees a partial listing
fn write_stdout(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")
}
