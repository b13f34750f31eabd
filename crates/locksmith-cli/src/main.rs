//! Locksmith - audit a Bitwarden vault for password security gaps.
//!
//! Thin command-line shell over the audit pipeline: argument parsing,
//! logger setup, report dispatch. Core logic lives in the `crates/`
//! siblings.

mod progress;
mod report;

use clap::{Parser, Subcommand};
use console::style;
use locksmith_audit::AuditPipeline;
use locksmith_breach::BreachChecker;
use locksmith_core::{AuditConfig, Credential, HttpsUsage, LocksmithError};
use locksmith_vault::BitwardenCli;
use progress::ProgressBar;
use report::ReporterKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "locksmith",
    version,
    about = "CLI utility to check Bitwarden passwords for security gaps."
)]
struct Cli {
    /// Bitwarden session token (from `bw unlock`)
    #[arg(short, long, env = "BW_SESSION")]
    session: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "console")]
    reporter: ReporterKind,

    /// Output file for file-based reports
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Narrow records with the vault tool's search
    #[arg(short, long)]
    query: Option<String>,

    /// Only audit records with a login URI on this exact hostname
    #[arg(long)]
    site: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check all passwords against the breach corpus
    PwnedPasswords,
    /// Check records holding a single given password
    OnePwnedPassword {
        /// Password to look for
        #[arg(short, long)]
        password: String,
    },
    /// List passwords shared by more than one record
    ReusedPasswords,
    /// List records whose login URIs are not fully HTTPS
    UnsecureUrls,
}

/// Initialize tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", style("\u{2717}").red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), LocksmithError> {
    let config = AuditConfig::load_with_env()?;

    let vault = Arc::new(BitwardenCli::new(
        config.vault_program.as_str(),
        cli.session.as_str(),
    ));
    let checker = Arc::new(BreachChecker::with_url(
        config.breach_api_url.as_str(),
        Duration::from_secs(config.timeout_secs),
    )?);

    let bar = Arc::new(ProgressBar::new());
    let bar_hook = Arc::clone(&bar);

    let pipeline = AuditPipeline::new(vault, checker)
        .with_max_in_flight(config.max_concurrent_checks)
        .with_progress(Arc::new(move |completed, total| {
            bar_hook.draw(completed, total);
        }));

    let credentials = pipeline
        .credentials(cli.query.as_deref(), cli.site.as_deref())
        .await?;
    bar.finish();

    let selected = select(&cli.command, credentials);

    if selected.is_empty() {
        println!("{} No records found", style("\u{2139}").blue().bold());
        return Ok(());
    }

    let writer = report::create(cli.reporter, cli.output);
    writer.write(&selected)
}

/// Narrow the enriched list to the records the subcommand reports on.
fn select(command: &Commands, credentials: Vec<Credential>) -> Vec<Credential> {
    match command {
        Commands::PwnedPasswords => credentials.into_iter().filter(|c| c.is_pwned).collect(),
        Commands::OnePwnedPassword { password } => credentials
            .into_iter()
            .filter(|c| &c.password == password)
            .collect(),
        Commands::ReusedPasswords => {
            let mut reused: Vec<Credential> = credentials
                .into_iter()
                .filter(|c| c.reuse_count > 1)
                .collect();
            reused.sort_by(|a, b| b.reuse_count.cmp(&a.reuse_count));
            reused
        }
        Commands::UnsecureUrls => credentials
            .into_iter()
            .filter(|c| c.https_usage != HttpsUsage::Full)
            .collect(),
    }
}
