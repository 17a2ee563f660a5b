//! casesync — copies conflicted headers to every observed case spelling.
//!
//! Thin surface over `casesync-core`: argument parsing, log subscriber,
//! exit status. Orchestration (SDK download, extraction, container runs)
//! lives with the callers that invoke this binary as a packaging step.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use casesync_core::{run, DecodePolicy, ReconcileConfig};

#[derive(Parser)]
#[command(name = "casesync")]
#[command(version)]
#[command(about = "Reconcile header filename casing for case-sensitive builds")]
struct Cli {
    /// Root of the tree to reconcile.
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Fail on headers that are not valid UTF-8 instead of decoding lossily.
    #[arg(long)]
    strict_decode: bool,

    /// Threads for the extraction phase (0 = one per core).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Report planned copies without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = ReconcileConfig {
        root: cli.root,
        decode_policy: if cli.strict_decode {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lossy
        },
        threads: cli.threads,
        dry_run: cli.dry_run,
    };

    let report = run(&config)
        .with_context(|| format!("reconciliation failed under {}", config.root.display()))?;

    tracing::info!(
        headers = report.scan.headers,
        conflicts = report.conflicts,
        copied = report.reconcile.stats.copied,
        kept = report.reconcile.stats.kept,
        "reconciliation complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
