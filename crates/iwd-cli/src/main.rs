//! # iwd CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and runs the release
//! checks against the current directory.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use iwd_cli::{write_report, Runner};
use iwd_core::RepoLayout;

/// Integration Watchdog release validator.
///
/// Checks the repository layout, hacs.json, and the blueprint YAML in the
/// current directory. Exits 0 when the repository is ready for release.
#[derive(Parser, Debug)]
#[command(name = "iwd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<u8> {
    let root = std::env::current_dir().context("failed to resolve the working directory")?;
    tracing::debug!(root = %root.display(), "validating repository");

    let report = Runner::new(RepoLayout::default()).run(&root);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&report, &mut out).context("failed to write report")?;

    Ok(report.exit_code())
}
