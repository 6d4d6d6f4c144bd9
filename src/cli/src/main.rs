//! CLI for the repository monitor.
//!
//! Collects repository metadata for every configured team and writes the
//! monitoring report consumed by the dashboard.

use clap::Parser;
use repo_monitor::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Monitor - Record creation time, fork status and latest commit for each team.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the team list (JSON array of {team_name, repo_url}).
    #[arg(long, default_value = repo_monitor::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory the CSV and JSON reports are written to.
    #[arg(long, default_value = repo_monitor::report::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = repo_monitor::TOKEN_ENV_VAR, hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::from_token(args.token)?
        .with_config_path(args.config)
        .with_output_dir(args.output_dir);

    // Install the crypto provider before any TLS client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Teams processed: {}", summary.teams_processed);
    println!("  Successful: {}", summary.succeeded);
    println!("  Errors fetching repo: {}", summary.fetch_errors);
    println!("  Invalid URLs: {}", summary.invalid_urls);
    println!("  Without commits: {}", summary.without_commits);
    println!("  Forks: {}", summary.forks);

    if let Some(paths) = &summary.output {
        println!(
            "  Results saved to {} and {}",
            paths.csv.display(),
            paths.json.display()
        );
    }
}
